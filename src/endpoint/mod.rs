mod azure;
mod invoker;
mod sagemaker;
mod transport;
mod types;

pub use azure::AzureMlTransport;
pub use invoker::{Invoker, invoke_endpoint};
pub use sagemaker::SageMakerTransport;
pub use transport::{EndpointTransport, create_transport};
pub use types::{InvokeEndpointRequest, InvokeEndpointResponse, JSON_CONTENT_TYPE, Prediction};
