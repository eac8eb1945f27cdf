use super::types::{InvokeEndpointRequest, InvokeEndpointResponse};
use super::{azure::AzureMlTransport, sagemaker::SageMakerTransport};
use crate::{
    Result,
    config::{EndpointConfig, EndpointProvider},
};
use async_trait::async_trait;
use tracing::debug;

/// Carries a single request to the hosting service.
///
/// Implementations report non-2xx answers from the service as
/// [`crate::Error::Service`] and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointTransport: Send + Sync {
    async fn send(&self, request: InvokeEndpointRequest) -> Result<InvokeEndpointResponse>;
}

#[async_trait]
impl<T: EndpointTransport + ?Sized> EndpointTransport for Box<T> {
    async fn send(&self, request: InvokeEndpointRequest) -> Result<InvokeEndpointResponse> {
        (**self).send(request).await
    }
}

pub async fn create_transport(config: &EndpointConfig) -> Result<Box<dyn EndpointTransport>> {
    debug!(
        "Creating {:?} transport for endpoint: {}",
        config.provider, config.name
    );

    match config.provider {
        EndpointProvider::Sagemaker => Ok(Box::new(SageMakerTransport::new(config).await?)),
        EndpointProvider::AzureMl => Ok(Box::new(AzureMlTransport::new(config)?)),
    }
}
