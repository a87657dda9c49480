//! Connector configuration
//!
//! Settings are loaded from a JSON file (or inline JSON string) and validated
//! before any request is issued.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Date format used for config values and request parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// API token used to authenticate against the reporting API (secret)
    pub auth_token: String,

    /// API version, selects the URL path segment (e.g. "20120402")
    pub api_version: String,

    /// Earliest record date to sync (YYYY-MM-DD)
    #[serde(default = "default_start_date")]
    pub start_date: String,

    /// Base URL for the API service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Optional User-Agent header for all requests
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_start_date() -> String {
    "2010-01-01".to_string()
}

fn default_api_url() -> String {
    "https://api.pepperjamnetwork.com".to_string()
}

impl ConnectorConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from an inline JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields and value formats
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            return Err(Error::missing_field("auth_token"));
        }
        if self.api_version.is_empty() {
            return Err(Error::missing_field("api_version"));
        }
        self.parsed_start_date()?;
        url::Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;
        Ok(())
    }

    /// The configured start date as a calendar date
    pub fn parsed_start_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT).map_err(|_| {
            Error::invalid_value(
                "start_date",
                format!("expected YYYY-MM-DD, got '{}'", self.start_date),
            )
        })
    }

    /// Root URL for report endpoints: `{api_url}/{api_version}/publisher/report`
    pub fn report_base(&self) -> String {
        format!(
            "{}/{}/publisher/report",
            self.api_url.trim_end_matches('/'),
            self.api_version
        )
    }
}
