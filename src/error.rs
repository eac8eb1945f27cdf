use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote service answered but rejected the invocation, e.g. the
    /// endpoint does not exist.
    #[error("Service error ({code}, status {status}): {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn service(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }
}
