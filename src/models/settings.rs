//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis service
    pub api_base_url: String,
    /// Bounded wait for any single request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(api_base_url) = update.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
    }

    /// Validate the configuration, returning a message on the first problem
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.api_base_url)
            .map_err(|e| format!("invalid api_base_url '{}': {}", self.api_base_url, e))?;
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}
