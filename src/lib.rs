pub mod config;
pub mod endpoint;
pub mod error;

pub use endpoint::{Invoker, Prediction, invoke_endpoint};
pub use error::{Error, Result};
