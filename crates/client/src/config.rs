use std::env;

/// Widget configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Base URL of the hosting CMS article API.
    pub api_base_url: String,
    /// Process-wide fallback language code.
    pub default_language: String,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl WidgetConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            api_base_url: env::var("API_BASE_URL")?,
            default_language: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en_US".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
