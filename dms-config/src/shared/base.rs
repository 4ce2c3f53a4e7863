use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No replication task is configured.
    #[error("at least one replication task must be configured")]
    NoTasks,
    /// A task has an empty name.
    #[error("replication task at position {0} has an empty `name`")]
    EmptyTaskName(usize),
    /// A task has an empty ARN.
    #[error("replication task `{0}` has an empty `arn`")]
    EmptyTaskArn(String),
    /// Two tasks share the same name, which would make their events indistinguishable.
    #[error("replication task `{0}` is configured more than once")]
    DuplicateTaskName(String),
    /// The AWS region is empty.
    #[error("`aws.region` cannot be empty")]
    EmptyRegion,
    /// The notifier URL is not an http(s) URL.
    #[error("`notifier.url` must start with http:// or https://, got `{0}`")]
    InvalidNotifierUrl(String),
    /// The notifier timeout is zero.
    #[error("`notifier.timeout_ms` cannot be zero")]
    NotifierTimeoutZero,
}
