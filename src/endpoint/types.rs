use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One invocation of a named endpoint, independent of the hosting service.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeEndpointRequest {
    pub endpoint_name: String,
    pub content_type: String,
    pub accept: String,
    pub body: Bytes,
    pub invocation_id: String,
}

/// Response envelope: HTTP status metadata plus the raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeEndpointResponse {
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl InvokeEndpointRequest {
    pub fn json(endpoint_name: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            body: body.into(),
            invocation_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

impl InvokeEndpointResponse {
    pub fn ok_json(body: impl Into<Bytes>) -> Self {
        Self {
            status_code: 200,
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Decoded endpoint response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction(Map<String, Value>);

impl Prediction {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn prediction(&self) -> Option<&Value> {
        self.0.get("prediction")
    }

    pub fn output(&self) -> Option<&Value> {
        self.0.get("output")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Prediction> for Value {
    fn from(prediction: Prediction) -> Self {
        Value::Object(prediction.0)
    }
}
