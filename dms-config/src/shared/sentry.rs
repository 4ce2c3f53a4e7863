use serde::{Deserialize, Serialize};

/// Sentry error reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Sentry DSN (Data Source Name) errors are reported to.
    pub dsn: String,
}
