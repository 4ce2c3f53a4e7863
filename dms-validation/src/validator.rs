use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::dms::DmsClient;
use crate::error::{DmsError, DmsResult};
use crate::evaluation::{TaskFindings, TaskOutcome};
use crate::notifier::Notifier;
use crate::types::{NotificationEvent, ReplicationTask};

/// Whether a task's event reached the notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed(String),
}

/// What happened to a single task during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// DMS does not know the task, nothing was sent.
    NotFound,
    /// The task was evaluated and its event was posted.
    Evaluated {
        outcome: TaskOutcome,
        event: NotificationEvent,
        delivery: Delivery,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub task_name: String,
    pub status: TaskStatus,
}

/// Summary of one [`Validator::run`], with one entry per configured task in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub tasks: Vec<TaskReport>,
}

impl ValidationReport {
    /// Events that were posted, whether or not the endpoint accepted them.
    pub fn events(&self) -> Vec<&NotificationEvent> {
        self.tasks
            .iter()
            .filter_map(|task| match &task.status {
                TaskStatus::Evaluated { event, .. } => Some(event),
                TaskStatus::NotFound => None,
            })
            .collect()
    }

    pub fn not_found_tasks(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::NotFound)
            .map(|task| task.task_name.as_str())
            .collect()
    }

    pub fn failed_deliveries(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|task| {
                matches!(
                    task.status,
                    TaskStatus::Evaluated {
                        delivery: Delivery::Failed(_),
                        ..
                    }
                )
            })
            .map(|task| task.task_name.as_str())
            .collect()
    }

    pub fn issues_detected(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| {
                matches!(
                    task.status,
                    TaskStatus::Evaluated { outcome, .. } if outcome != TaskOutcome::NoIssues
                )
            })
            .count()
    }
}

/// Checks replication tasks for missing or duplicated data and reports the outcome
/// of each one to a [`Notifier`].
///
/// Tasks are processed one after another in the order they were given.
#[derive(Debug)]
pub struct Validator<C, N> {
    tasks: Vec<ReplicationTask>,
    client: C,
    notifier: N,
}

impl<C, N> Validator<C, N>
where
    C: DmsClient,
    N: Notifier,
{
    pub fn new(tasks: Vec<ReplicationTask>, client: C, notifier: N) -> Self {
        Self {
            tasks,
            client,
            notifier,
        }
    }

    /// Validates every task once.
    ///
    /// Tasks unknown to DMS are skipped and failed notifications are only logged. Any
    /// other DMS error stops the run and is returned.
    pub async fn run(&self) -> DmsResult<ValidationReport> {
        info!(tasks = self.tasks.len(), "starting validation run");

        let mut report = ValidationReport::default();
        for task in &self.tasks {
            let span = info_span!("validate_task", task = %task.name, arn = %task.arn);
            let status = self.validate_task(task).instrument(span).await?;

            report.tasks.push(TaskReport {
                task_name: task.name.clone(),
                status,
            });
        }

        info!(
            tasks = report.tasks.len(),
            issues = report.issues_detected(),
            not_found = report.not_found_tasks().len(),
            failed_deliveries = report.failed_deliveries().len(),
            "validation run completed"
        );

        Ok(report)
    }

    async fn validate_task(&self, task: &ReplicationTask) -> DmsResult<TaskStatus> {
        match self.client.describe_replication_task(&task.arn).await {
            Ok(description) => {
                debug!(
                    identifier = ?description.identifier,
                    status = ?description.status,
                    "replication task found"
                );
            }
            Err(DmsError::ReplicationTaskNotFound(_)) => {
                warn!("{}: replication task not found", task.name);
                return Ok(TaskStatus::NotFound);
            }
            Err(err) => return Err(err),
        }

        let table_statistics = self.client.describe_table_statistics(&task.arn).await?;

        let findings = TaskFindings::evaluate(&table_statistics);
        debug!(
            tables = table_statistics.len(),
            validated_tables = findings.validated_tables,
            "evaluated table statistics"
        );

        let outcome = findings.outcome();
        if outcome == TaskOutcome::NoIssues {
            info!("{}: no missing or duplicate data detected", task.name);
        }

        let event = outcome.event_for(&task.name);
        let delivery = match self.notifier.notify(&event).await {
            Ok(()) => {
                info!(
                    event = %event.name,
                    status = event.status,
                    "notification sent"
                );
                Delivery::Sent
            }
            Err(err) => {
                error!(
                    event = %event.name,
                    error = %err,
                    "failed to send notification"
                );
                Delivery::Failed(err.to_string())
            }
        };

        Ok(TaskStatus::Evaluated {
            outcome,
            event,
            delivery,
        })
    }
}
