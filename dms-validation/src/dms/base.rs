use std::future::Future;

use crate::error::DmsResult;
use crate::types::{ReplicationTaskDescription, TableStatistic};

pub trait DmsClient {
    /// Looks up a replication task by ARN.
    ///
    /// Returns [`crate::error::DmsError::ReplicationTaskNotFound`] when no task has this ARN.
    fn describe_replication_task(
        &self,
        task_arn: &str,
    ) -> impl Future<Output = DmsResult<ReplicationTaskDescription>> + Send;

    /// Returns the statistics of every table replicated by the task.
    fn describe_table_statistics(
        &self,
        task_arn: &str,
    ) -> impl Future<Output = DmsResult<Vec<TableStatistic>>> + Send;
}
