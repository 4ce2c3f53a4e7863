use dms_config::shared::TaskConfig;
use serde::Serialize;
use std::fmt;

/// A replication task to validate, identified by a logical name and its ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationTask {
    pub name: String,
    pub arn: String,
}

impl ReplicationTask {
    pub fn new(name: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arn: arn.into(),
        }
    }
}

impl From<TaskConfig> for ReplicationTask {
    fn from(value: TaskConfig) -> Self {
        Self {
            name: value.name,
            arn: value.arn,
        }
    }
}

/// What DMS reports about a replication task that exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationTaskDescription {
    pub identifier: Option<String>,
    pub status: Option<String>,
}

/// Per-table validation state as reported by DMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    NotEnabled,
    PendingRecords,
    MismatchedRecords,
    SuspendedRecords,
    NoPrimaryKey,
    TableError,
    PendingValidation,
    PendingRevalidation,
    Validated,
    Error,
    /// A state this crate does not know about.
    Other(String),
}

impl ValidationState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotEnabled => "Not enabled",
            Self::PendingRecords => "Pending records",
            Self::MismatchedRecords => "Mismatched records",
            Self::SuspendedRecords => "Suspended records",
            Self::NoPrimaryKey => "No primary key",
            Self::TableError => "Table error",
            Self::PendingValidation => "Pending validation",
            Self::PendingRevalidation => "Pending revalidation",
            Self::Validated => "Validated",
            Self::Error => "Error",
            Self::Other(state) => state,
        }
    }
}

impl From<&str> for ValidationState {
    fn from(value: &str) -> Self {
        match value {
            "Not enabled" => Self::NotEnabled,
            "Pending records" => Self::PendingRecords,
            "Mismatched records" => Self::MismatchedRecords,
            "Suspended records" => Self::SuspendedRecords,
            "No primary key" => Self::NoPrimaryKey,
            "Table error" => Self::TableError,
            "Pending validation" => Self::PendingValidation,
            "Pending revalidation" => Self::PendingRevalidation,
            "Validated" => Self::Validated,
            "Error" => Self::Error,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation counts DMS tracked for a single table of a replication task.
///
/// `inserts`, `updates` and `deletes` are observed at the source, the `applied_*`
/// counterparts were written to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStatistic {
    pub schema_name: String,
    pub table_name: String,
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,
    pub applied_inserts: u64,
    pub applied_updates: u64,
    pub applied_deletes: u64,
    pub validation_state: ValidationState,
}

impl TableStatistic {
    /// Returns `schema.table`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema_name, self.table_name)
    }

    pub fn is_validated(&self) -> bool {
        self.validation_state == ValidationState::Validated
    }
}

/// Event posted to the notification endpoint, one per validated task.
///
/// Serializes to `{"name": "...", "status": 0|1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEvent {
    pub name: String,
    /// `0` when missing or duplicate data was detected, `1` otherwise.
    pub status: u8,
}
