use endpoint_invoker::{
    Result,
    config::EndpointConfig,
};
use tempfile::TempDir;
use tokio::fs;

pub const TEST_ENDPOINT: &str = "abc";
pub const TEST_REGION: &str = "us-east-1";
pub const TEST_API_KEY: &str = "test-api-key";

/// SageMaker endpoint config with the literals the invocation tests use
pub fn create_test_endpoint_config() -> EndpointConfig {
    EndpointConfig::sagemaker(TEST_ENDPOINT).with_region(TEST_REGION)
}

/// Azure ML endpoint config pointed at `url`
pub fn create_azure_endpoint_config(url: &str) -> EndpointConfig {
    let mut config = EndpointConfig::azure_ml(TEST_ENDPOINT, url);
    config.api_key = Some(TEST_API_KEY.to_string());
    config.timeout_secs = 5;
    config
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample SageMaker configuration
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  provider: "sagemaker"
  name: "abc"
  region: "us-east-1"
  timeout_secs: 30

logs:
  level: "debug"
"#;

/// Sample Azure ML configuration
pub const SAMPLE_AZURE_CONFIG_YAML: &str = r#"
endpoint:
  provider: "azure_ml"
  name: "abc-heka"
  url: "https://abc-heka.eastus.inference.ml.azure.com/score"
  api_key: "test-api-key"
  deployment: "blue"

logs:
  level: "warn"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
endpoint:
  provider: "vertex"
  timeout_secs: "soon"
"#;
