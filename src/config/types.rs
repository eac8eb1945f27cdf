use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub provider: EndpointProvider,
    pub name: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// SageMaker: endpoint URL override. Azure ML: scoring URI.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub deployment: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointProvider {
    #[default]
    Sagemaker,
    AzureMl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl EndpointConfig {
    /// SageMaker endpoint in the default region.
    pub fn sagemaker(name: impl Into<String>) -> Self {
        Self {
            provider: EndpointProvider::Sagemaker,
            name: name.into(),
            region: default_region(),
            url: None,
            api_key: None,
            deployment: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Azure ML online endpoint reached at `scoring_uri`.
    pub fn azure_ml(name: impl Into<String>, scoring_uri: impl Into<String>) -> Self {
        Self {
            provider: EndpointProvider::AzureMl,
            url: Some(scoring_uri.into()),
            ..Self::sagemaker(name)
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}
