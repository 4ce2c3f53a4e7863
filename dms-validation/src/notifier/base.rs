use std::future::Future;

use crate::error::NotifyError;
use crate::types::NotificationEvent;

pub trait Notifier {
    /// Delivers a single event. Implementations do not retry.
    fn notify(
        &self,
        event: &NotificationEvent,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
