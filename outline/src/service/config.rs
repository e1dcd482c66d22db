//! Environment-driven configuration.

use super::error::ConfigError;

/// Environment variable holding the deployment region.
pub const REGION_VAR: &str = "REGION";

/// Service configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    region: String,
}

impl Config {
    pub fn new<R: Into<String>>(region: R) -> Self {
        Self {
            region: region.into(),
        }
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup(REGION_VAR).ok_or(ConfigError::MissingVar(REGION_VAR))?;
        let region = region.trim();
        if region.is_empty() {
            return Err(ConfigError::EmptyVar(REGION_VAR));
        }
        Ok(Self::new(region))
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Public invoke URL of an HTTP API deployed in this region.
    pub fn api_endpoint(&self, api_id: &str) -> String {
        format!(
            "https://{api_id}.execute-api.{}.amazonaws.com/",
            self.region
        )
    }
}
