use serde::{Deserialize, Serialize};

/// A DMS replication task to validate.
///
/// The `name` is used as the prefix of the notification event name, the `arn`
/// identifies the task against the DMS API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Logical name of the task.
    pub name: String,
    /// ARN of the DMS replication task.
    pub arn: String,
}
