use super::transport::EndpointTransport;
use super::types::{InvokeEndpointRequest, InvokeEndpointResponse};
use crate::{Error, Result, config::EndpointConfig};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEPLOYMENT_HEADER: &str = "azureml-model-deployment";
const REQUEST_ID_HEADER: &str = "x-ms-client-request-id";

/// Azure ML managed online endpoint, addressed by its scoring URI.
pub struct AzureMlTransport {
    scoring_uri: String,
    api_key: Option<String>,
    deployment: Option<String>,
    client: reqwest::Client,
}

impl AzureMlTransport {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let scoring_uri = config
            .url
            .clone()
            .ok_or_else(|| Error::config("Azure ML endpoints require a scoring URI in url"))?;

        debug!("Creating Azure ML transport for: {}", config.name);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            scoring_uri,
            api_key: config.api_key.clone(),
            deployment: config.deployment.clone(),
            client,
        })
    }
}

#[async_trait]
impl EndpointTransport for AzureMlTransport {
    async fn send(&self, request: InvokeEndpointRequest) -> Result<InvokeEndpointResponse> {
        debug!(
            "Invoking Azure ML endpoint {} ({} bytes, invocation {})",
            request.endpoint_name,
            request.body.len(),
            request.invocation_id
        );

        let mut req_builder = self
            .client
            .post(&self.scoring_uri)
            .header(CONTENT_TYPE, &request.content_type)
            .header(ACCEPT, &request.accept)
            .header(REQUEST_ID_HEADER, &request.invocation_id)
            .body(request.body.clone());

        if let Some(ref key) = self.api_key {
            req_builder = req_builder.header(AUTHORIZATION, format!("Bearer {}", key));
        }
        if let Some(ref deployment) = self.deployment {
            req_builder = req_builder.header(DEPLOYMENT_HEADER, deployment);
        }

        let response = req_builder.send().await.map_err(|e| {
            Error::transport(format!(
                "Failed to reach Azure ML endpoint {}: {}",
                request.endpoint_name, e
            ))
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| {
            Error::transport(format!(
                "Failed to read response from Azure ML endpoint {}: {}",
                request.endpoint_name, e
            ))
        })?;

        if !status.is_success() {
            let (code, message) = service_error_details(status.as_u16(), &body);
            warn!(
                "Azure ML endpoint {} rejected invocation: {} {}",
                request.endpoint_name, code, message
            );
            return Err(Error::service(code, message, status.as_u16()));
        }

        Ok(InvokeEndpointResponse {
            status_code: status.as_u16(),
            content_type,
            body,
        })
    }
}

/// Pulls `error.code`/`error.message` (or a top-level `message`) out of an
/// error body, falling back to the raw text.
fn service_error_details(status: u16, body: &[u8]) -> (String, String) {
    let fallback_code = format!("Http{}", status);
    let text = String::from_utf8_lossy(body).trim().to_string();

    let Ok(json) = serde_json::from_slice::<Value>(body) else {
        return (fallback_code, text);
    };

    let error = json.get("error").unwrap_or(&json);
    let code = error
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(fallback_code);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(text);

    (code, message)
}
