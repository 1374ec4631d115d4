//! Application configuration. Shape policy, file-type filter, log filter.

use crate::adapters::ui::DEFAULT_ACCEPT;
use crate::domain::{DomainError, ShapePolicy};
use serde::Deserialize;

/// Default tracing filter when neither RUST_LOG nor CHAT_IMPORT_LOG_FILTER is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// "strict" or "lenient". Read from CHAT_IMPORT_SHAPE_POLICY.
    #[serde(default)]
    pub shape_policy: Option<String>,

    /// Comma-separated file-type filter for the picker (".json"). Read from CHAT_IMPORT_ACCEPT.
    #[serde(default)]
    pub accept: Option<String>,

    /// tracing EnvFilter directive. Read from CHAT_IMPORT_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Environment (CHAT_IMPORT_*, .env included) plus an optional file named by CHAT_IMPORT_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("CHAT_IMPORT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("CHAT_IMPORT"));
        c.build()?.try_deserialize()
    }

    /// Parsed shape policy. Lenient (warn and import anyway) when unset; unknown values are an error.
    pub fn shape_policy_or_default(&self) -> Result<ShapePolicy, DomainError> {
        match self.shape_policy.as_deref() {
            None => Ok(ShapePolicy::default()),
            Some(s) => s.parse().map_err(DomainError::Config),
        }
    }

    pub fn accept_or_default(&self) -> &str {
        self.accept.as_deref().unwrap_or(DEFAULT_ACCEPT)
    }

    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
