use super::transport::{EndpointTransport, create_transport};
use super::types::{InvokeEndpointRequest, InvokeEndpointResponse, Prediction};
use crate::{Error, Result, config::EndpointConfig};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info};

/// Serializes payloads, sends them to one named endpoint and decodes the
/// answer. Holds no per-call state, so a single value can serve any number
/// of invocations.
pub struct Invoker<T = Box<dyn EndpointTransport>> {
    transport: T,
    endpoint_name: String,
}

impl Invoker {
    /// Builds the transport selected by `config.provider`.
    pub async fn from_config(config: &EndpointConfig) -> Result<Self> {
        let transport = create_transport(config).await?;
        Ok(Self::new(transport, config.name.clone()))
    }
}

impl<T: EndpointTransport> Invoker<T> {
    pub fn new(transport: T, endpoint_name: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint_name: endpoint_name.into(),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `payload` and returns the decoded response body.
    pub async fn invoke<P>(&self, payload: &P) -> Result<Prediction>
    where
        P: Serialize + ?Sized,
    {
        let response = self.invoke_raw(payload).await?;
        decode_prediction(&response.body)
    }

    /// Sends `payload` and decodes the body into `R`.
    pub async fn invoke_as<P, R>(&self, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.invoke_raw(payload).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Sends `payload` and returns the response envelope untouched.
    pub async fn invoke_raw<P>(&self, payload: &P) -> Result<InvokeEndpointResponse>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;
        let request = InvokeEndpointRequest::json(&self.endpoint_name, body);
        let invocation_id = request.invocation_id.clone();

        debug!(
            "Sending invocation {} to endpoint {}",
            invocation_id, self.endpoint_name
        );

        let response = self.transport.send(request).await?;

        // Transports already map rejections; this guards custom ones.
        if !response.is_success() {
            return Err(Error::service(
                format!("Http{}", response.status_code),
                String::from_utf8_lossy(&response.body).into_owned(),
                response.status_code,
            ));
        }

        info!(
            "Invocation {} of endpoint {} completed with status {}",
            invocation_id, self.endpoint_name, response.status_code
        );

        Ok(response)
    }
}

/// Invokes the configured endpoint once with a freshly built transport.
pub async fn invoke_endpoint<P>(config: &EndpointConfig, payload: &P) -> Result<Prediction>
where
    P: Serialize + ?Sized,
{
    Invoker::from_config(config).await?.invoke(payload).await
}

fn decode_prediction(body: &[u8]) -> Result<Prediction> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Ok(Prediction::new(fields)),
        other => Err(Error::decode(format!(
            "expected a JSON object response body, got: {}",
            other
        ))),
    }
}
