use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::dms::base::DmsClient;
use crate::error::{DmsError, DmsResult};
use crate::types::{ReplicationTaskDescription, TableStatistic};

#[derive(Debug, Default)]
struct Inner {
    tasks: HashMap<String, Vec<TableStatistic>>,
    failures: HashMap<String, String>,
    requested_arns: Vec<String>,
}

/// In-memory [`DmsClient`] serving table statistics registered up front.
///
/// Unknown ARNs are reported as not found. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDmsClient {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDmsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task and the statistics returned for it.
    pub async fn insert_task(&self, task_arn: impl Into<String>, tables: Vec<TableStatistic>) {
        let mut inner = self.inner.lock().await;
        inner.tasks.insert(task_arn.into(), tables);
    }

    /// Makes every describe call for `task_arn` fail with an API error.
    pub async fn fail_task(&self, task_arn: impl Into<String>, message: impl Into<String>) {
        let mut inner = self.inner.lock().await;
        inner.failures.insert(task_arn.into(), message.into());
    }

    /// ARNs passed to [`DmsClient::describe_replication_task`], in call order.
    pub async fn requested_arns(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.requested_arns.clone()
    }
}

impl DmsClient for MemoryDmsClient {
    async fn describe_replication_task(
        &self,
        task_arn: &str,
    ) -> DmsResult<ReplicationTaskDescription> {
        let mut inner = self.inner.lock().await;
        inner.requested_arns.push(task_arn.to_owned());

        if let Some(message) = inner.failures.get(task_arn) {
            return Err(DmsError::DescribeReplicationTasks {
                arn: task_arn.to_owned(),
                message: message.clone(),
            });
        }

        if !inner.tasks.contains_key(task_arn) {
            return Err(DmsError::ReplicationTaskNotFound(task_arn.to_owned()));
        }

        Ok(ReplicationTaskDescription {
            identifier: task_arn.rsplit(':').next().map(ToOwned::to_owned),
            status: Some("running".to_owned()),
        })
    }

    async fn describe_table_statistics(&self, task_arn: &str) -> DmsResult<Vec<TableStatistic>> {
        let inner = self.inner.lock().await;

        if let Some(message) = inner.failures.get(task_arn) {
            return Err(DmsError::DescribeTableStatistics {
                arn: task_arn.to_owned(),
                message: message.clone(),
            });
        }

        let tables = inner
            .tasks
            .get(task_arn)
            .cloned()
            .ok_or_else(|| DmsError::ReplicationTaskNotFound(task_arn.to_owned()))?;
        info!("serving {} table statistics for {task_arn}", tables.len());

        Ok(tables)
    }
}
