use thiserror::Error;

/// Result type for operations against the DMS API.
pub type DmsResult<T> = Result<T, DmsError>;

/// Errors returned by a [`crate::dms::DmsClient`].
///
/// Only [`DmsError::ReplicationTaskNotFound`] is recoverable during a run, every other
/// variant aborts it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DmsError {
    #[error("replication task `{0}` was not found")]
    ReplicationTaskNotFound(String),

    #[error("failed to describe replication task `{arn}`: {message}")]
    DescribeReplicationTasks { arn: String, message: String },

    #[error("failed to describe table statistics of `{arn}`: {message}")]
    DescribeTableStatistics { arn: String, message: String },

    #[error("invalid dms request: {0}")]
    InvalidRequest(String),
}

/// Errors returned by a [`crate::notifier::Notifier`].
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("notifier responded with status {status}")]
    UnexpectedStatus { status: u16 },
}
