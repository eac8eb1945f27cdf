use super::transport::EndpointTransport;
use super::types::{InvokeEndpointRequest, InvokeEndpointResponse};
use crate::{Error, Result, config::EndpointConfig};
use async_trait::async_trait;
use aws_config::{
    BehaviorVersion, ConfigLoader, Region, retry::RetryConfig, timeout::TimeoutConfig,
};
use aws_sdk_sagemakerruntime::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    primitives::Blob,
};
use bytes::Bytes;
use std::time::Duration;
use tracing::{debug, warn};

/// `InvokeEndpoint` against the SageMaker runtime API.
pub struct SageMakerTransport {
    client: Client,
    region: String,
}

impl SageMakerTransport {
    pub async fn new(config: &EndpointConfig) -> Result<Self> {
        Self::with_loader(config, aws_config::defaults(BehaviorVersion::latest())).await
    }

    /// Applies region, endpoint override, timeout and retry settings from
    /// `config` on top of `loader`, which supplies credentials and anything
    /// else the caller wants preset.
    pub async fn with_loader(config: &EndpointConfig, loader: ConfigLoader) -> Result<Self> {
        if config.region.trim().is_empty() {
            return Err(Error::config("SageMaker endpoints require a region"));
        }

        let timeouts = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(config.timeout_secs))
            .build();

        let mut loader = loader
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled())
            .timeout_config(timeouts);

        if let Some(ref url) = config.url {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;

        debug!(
            "Created SageMaker runtime client for endpoint {} in {}",
            config.name, config.region
        );

        Ok(Self::from_client(Client::new(&sdk_config), &config.region))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl EndpointTransport for SageMakerTransport {
    async fn send(&self, request: InvokeEndpointRequest) -> Result<InvokeEndpointResponse> {
        debug!(
            "Invoking SageMaker endpoint {} in {} ({} bytes, invocation {})",
            request.endpoint_name,
            self.region,
            request.body.len(),
            request.invocation_id
        );

        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(&request.endpoint_name)
            .content_type(&request.content_type)
            .accept(&request.accept)
            .inference_id(&request.invocation_id)
            .body(Blob::new(request.body.to_vec()))
            .send()
            .await
            .map_err(|err| match &err {
                SdkError::ServiceError(context) => {
                    let status = context.raw().status().as_u16();
                    let service_err = context.err();
                    let code = service_err.code().unwrap_or("Unknown").to_string();
                    let message = service_err
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
                    warn!(
                        "SageMaker endpoint {} rejected invocation: {} {}",
                        request.endpoint_name, code, message
                    );
                    Error::service(code, message, status)
                }
                _ => Error::transport(format!(
                    "SageMaker invocation of {} failed: {}",
                    request.endpoint_name,
                    DisplayErrorContext(&err)
                )),
            })?;

        let body = output
            .body()
            .map(|blob| Bytes::copy_from_slice(blob.as_ref()))
            .unwrap_or_default();

        debug!(
            "SageMaker endpoint {} returned {} bytes",
            request.endpoint_name,
            body.len()
        );

        Ok(InvokeEndpointResponse {
            status_code: 200,
            content_type: output.content_type().map(str::to_string),
            body,
        })
    }
}
