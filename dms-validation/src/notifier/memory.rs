use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::NotifyError;
use crate::notifier::base::Notifier;
use crate::types::NotificationEvent;

#[derive(Debug, Default)]
struct Inner {
    events: Vec<NotificationEvent>,
    rejections: HashMap<String, u16>,
}

/// In-memory [`Notifier`] recording every event it receives.
///
/// Events can be scripted to be rejected with a given HTTP status. Rejected events are
/// recorded too, mirroring an endpoint that received the request but refused it.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the event named `event_name` with `status`.
    pub async fn reject(&self, event_name: impl Into<String>, status: u16) {
        let mut inner = self.inner.lock().await;
        inner.rejections.insert(event_name.into(), status);
    }

    pub async fn events(&self) -> Vec<NotificationEvent> {
        let inner = self.inner.lock().await;
        inner.events.clone()
    }
}

impl Notifier for MemoryNotifier {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let mut inner = self.inner.lock().await;
        inner.events.push(event.clone());

        match inner.rejections.get(&event.name) {
            Some(status) => Err(NotifyError::UnexpectedStatus { status: *status }),
            None => Ok(()),
        }
    }
}
