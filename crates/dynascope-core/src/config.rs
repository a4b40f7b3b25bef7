//! Store connection configuration.
//!
//! All configuration is environment-driven; the binaries take no arguments.

/// Connection settings for the store client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Region the store lives in.
    pub region: String,
    /// Optional endpoint override, for local emulators.
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Region the tools were originally deployed against.
    pub const DEFAULT_REGION: &str = "eu-north-1";

    /// Load configuration from environment variables.
    ///
    /// `DYNAMODB_REGION` takes precedence over `AWS_REGION`;
    /// `DYNAMODB_ENDPOINT_URL` points the client at a local emulator.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DYNAMODB_REGION") {
            config.region = v;
        } else if let Ok(v) = std::env::var("AWS_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("DYNAMODB_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }

        config
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: Self::DEFAULT_REGION.to_owned(),
            endpoint_url: None,
        }
    }
}
