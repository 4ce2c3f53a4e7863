use dms_config::shared::NotifierConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::error::NotifyError;
use crate::notifier::base::Notifier;
use crate::types::NotificationEvent;

/// [`Notifier`] posting events as JSON to an HTTP endpoint.
///
/// Only a `200 OK` response counts as delivered.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
    url: String,
}

impl HttpNotifier {
    pub fn new(config: &NotifierConfig) -> Result<HttpNotifier, NotifyError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(HttpNotifier {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }
}

impl Notifier for HttpNotifier {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        debug!(url = %self.url, event = %event.name, "posting notification");

        let response = self.client.post(&self.url).json(event).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
