use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Settings for the HTTP endpoint validation events are posted to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// URL receiving `POST {"name": ..., "status": ...}` requests.
    pub url: String,
    /// Request timeout in milliseconds. The HTTP client default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl NotifierConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidNotifierUrl(self.url.clone()));
        }

        if self.timeout_ms == Some(0) {
            return Err(ValidationError::NotifierTimeoutZero);
        }

        Ok(())
    }
}
