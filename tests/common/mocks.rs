use async_trait::async_trait;
use endpoint_invoker::{
    Error, Result,
    endpoint::{EndpointTransport, InvokeEndpointRequest, InvokeEndpointResponse},
};
use std::sync::{Arc, Mutex};

/// Recording transport for testing. Clones share the same request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    pub responses: Arc<Mutex<Vec<InvokeEndpointResponse>>>,
    pub requests: Arc<Mutex<Vec<InvokeEndpointRequest>>>,
    pub missing_endpoints: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<InvokeEndpointResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_json_response(self, body: &str) -> Self {
        self.add_response(InvokeEndpointResponse::ok_json(body.to_string()));
        self
    }

    /// Invocations of `endpoint_name` fail the way a deleted endpoint does.
    pub fn with_missing_endpoint(self, endpoint_name: &str) -> Self {
        self.missing_endpoints
            .lock()
            .unwrap()
            .push(endpoint_name.to_string());
        self
    }

    pub fn add_response(&self, response: InvokeEndpointResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<InvokeEndpointRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl EndpointTransport for MockTransport {
    async fn send(&self, request: InvokeEndpointRequest) -> Result<InvokeEndpointResponse> {
        let endpoint_name = request.endpoint_name.clone();
        self.requests.lock().unwrap().push(request);

        if self.missing_endpoints.lock().unwrap().contains(&endpoint_name) {
            return Err(Error::service(
                "ValidationError",
                format!("Endpoint {} of account 123456789012 not found.", endpoint_name),
                400,
            ));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::transport("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}
