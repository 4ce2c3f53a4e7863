//! Missing and duplicate data heuristics.
//!
//! Only tables whose DMS validation state is `Validated` take part. For those, two
//! independent signals are computed:
//!
//! - missing data: `inserts > applied_inserts || updates > applied_updates || deletes < applied_deletes`
//! - duplicate data: `applied_inserts > inserts || applied_updates > updates || applied_deletes < deletes`
//!
//! Signals are accumulated per task and never reset. Missing data takes precedence over
//! duplicate data when resolving the [`TaskOutcome`].

use tracing::info;

use crate::types::{NotificationEvent, TableStatistic};

/// Status sent when a task shows missing or duplicate data.
pub const STATUS_ISSUES_DETECTED: u8 = 0;

/// Status sent when no issue was detected.
pub const STATUS_NO_ISSUES: u8 = 1;

/// Returns whether the target appears to be missing operations from the source.
pub fn has_missing_data(table: &TableStatistic) -> bool {
    table.inserts > table.applied_inserts
        || table.updates > table.applied_updates
        || table.deletes < table.applied_deletes
}

/// Returns whether the target appears to have applied operations more than once.
pub fn has_duplicate_data(table: &TableStatistic) -> bool {
    table.applied_inserts > table.inserts
        || table.applied_updates > table.updates
        || table.applied_deletes < table.deletes
}

fn diff(lhs: u64, rhs: u64) -> i128 {
    i128::from(lhs) - i128::from(rhs)
}

/// Resolved result of validating one replication task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Missing,
    Duplicates,
    NoIssues,
}

impl TaskOutcome {
    pub fn event_suffix(&self) -> &'static str {
        match self {
            Self::Missing => "dms_missing",
            Self::Duplicates => "dms_duplicates",
            Self::NoIssues => "dms_no_issues",
        }
    }

    pub fn status(&self) -> u8 {
        match self {
            Self::Missing | Self::Duplicates => STATUS_ISSUES_DETECTED,
            Self::NoIssues => STATUS_NO_ISSUES,
        }
    }

    /// Builds the `{task_name}_{suffix}` event for this outcome.
    pub fn event_for(&self, task_name: &str) -> NotificationEvent {
        NotificationEvent {
            name: format!("{task_name}_{}", self.event_suffix()),
            status: self.status(),
        }
    }
}

/// Signals accumulated over all tables of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFindings {
    pub has_missing_data: bool,
    pub has_duplicate_data: bool,
    /// Number of tables in `Validated` state that were checked.
    pub validated_tables: usize,
}

impl TaskFindings {
    /// Evaluates all tables of a task.
    pub fn evaluate<'a>(tables: impl IntoIterator<Item = &'a TableStatistic>) -> Self {
        let mut findings = Self::default();
        for table in tables {
            findings.record(table);
        }

        findings
    }

    /// Applies both checks to `table` if it is validated, logging every signal that fires.
    pub fn record(&mut self, table: &TableStatistic) {
        if !table.is_validated() {
            return;
        }

        self.validated_tables += 1;

        if has_missing_data(table) {
            info!(
                table = %table.qualified_name(),
                inserts_minus_applied = %diff(table.inserts, table.applied_inserts),
                updates_minus_applied = %diff(table.updates, table.applied_updates),
                deletes_minus_applied = %diff(table.deletes, table.applied_deletes),
                "potential missing data"
            );
            self.has_missing_data = true;
        }

        if has_duplicate_data(table) {
            info!(
                table = %table.qualified_name(),
                applied_minus_inserts = %diff(table.applied_inserts, table.inserts),
                applied_minus_updates = %diff(table.applied_updates, table.updates),
                applied_minus_deletes = %diff(table.applied_deletes, table.deletes),
                "potential duplicate data"
            );
            self.has_duplicate_data = true;
        }
    }

    pub fn outcome(&self) -> TaskOutcome {
        if self.has_missing_data {
            TaskOutcome::Missing
        } else if self.has_duplicate_data {
            TaskOutcome::Duplicates
        } else {
            TaskOutcome::NoIssues
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationState;

    fn table(counts: [u64; 6], validation_state: ValidationState) -> TableStatistic {
        let [inserts, applied_inserts, updates, applied_updates, deletes, applied_deletes] = counts;
        TableStatistic {
            schema_name: "public".to_owned(),
            table_name: "orders".to_owned(),
            inserts,
            updates,
            deletes,
            applied_inserts,
            applied_updates,
            applied_deletes,
            validation_state,
        }
    }

    fn validated(counts: [u64; 6]) -> TableStatistic {
        table(counts, ValidationState::Validated)
    }

    #[test]
    fn fewer_applied_inserts_signal_missing_data() {
        let table = validated([10, 8, 5, 5, 3, 3]);

        assert!(has_missing_data(&table));
        assert!(!has_duplicate_data(&table));
    }

    #[test]
    fn more_applied_inserts_signal_duplicate_data() {
        let table = validated([5, 7, 5, 5, 3, 3]);

        assert!(has_duplicate_data(&table));
        assert!(!has_missing_data(&table));
    }

    #[test]
    fn equal_counts_signal_nothing() {
        let table = validated([5, 5, 4, 4, 3, 3]);

        assert!(!has_missing_data(&table));
        assert!(!has_duplicate_data(&table));
        assert_eq!(
            TaskFindings::evaluate([&table]).outcome(),
            TaskOutcome::NoIssues
        );
    }

    #[test]
    fn delete_comparisons_follow_their_own_direction() {
        // More deletes applied than observed counts as missing data.
        let more_applied = validated([0, 0, 0, 0, 2, 5]);
        assert!(has_missing_data(&more_applied));
        assert!(!has_duplicate_data(&more_applied));

        // Fewer deletes applied than observed counts as duplicate data.
        let fewer_applied = validated([0, 0, 0, 0, 5, 2]);
        assert!(has_duplicate_data(&fewer_applied));
        assert!(!has_missing_data(&fewer_applied));
    }

    #[test]
    fn update_mismatches_are_detected() {
        assert!(has_missing_data(&validated([1, 1, 9, 4, 0, 0])));
        assert!(has_duplicate_data(&validated([1, 1, 4, 9, 0, 0])));
    }

    #[test]
    fn both_signals_can_fire_for_one_table() {
        let table = validated([10, 8, 5, 7, 3, 3]);
        let findings = TaskFindings::evaluate([&table]);

        assert!(findings.has_missing_data);
        assert!(findings.has_duplicate_data);
        assert_eq!(findings.outcome(), TaskOutcome::Missing);
    }

    #[test]
    fn missing_data_takes_precedence_across_tables() {
        let duplicate = validated([5, 7, 5, 5, 3, 3]);
        let missing = validated([10, 8, 5, 5, 3, 3]);
        let findings = TaskFindings::evaluate([&duplicate, &missing]);

        assert!(findings.has_duplicate_data);
        assert!(findings.has_missing_data);
        assert_eq!(findings.outcome(), TaskOutcome::Missing);
    }

    #[test]
    fn signals_stay_set_once_raised() {
        let mut findings = TaskFindings::default();
        findings.record(&validated([5, 7, 5, 5, 3, 3]));
        findings.record(&validated([1, 1, 1, 1, 1, 1]));

        assert_eq!(findings.outcome(), TaskOutcome::Duplicates);
        assert_eq!(findings.validated_tables, 2);
    }

    #[test]
    fn tables_not_validated_are_ignored() {
        let pending = table([10, 0, 0, 0, 0, 0], ValidationState::PendingRecords);
        let mismatched = table([0, 10, 0, 0, 0, 0], ValidationState::MismatchedRecords);
        let findings = TaskFindings::evaluate([&pending, &mismatched]);

        assert_eq!(findings, TaskFindings::default());
        assert_eq!(findings.outcome(), TaskOutcome::NoIssues);
    }

    #[test]
    fn outcomes_build_named_events() {
        assert_eq!(
            TaskOutcome::Missing.event_for("task1"),
            NotificationEvent {
                name: "task1_dms_missing".to_owned(),
                status: 0
            }
        );
        assert_eq!(
            TaskOutcome::Duplicates.event_for("task1"),
            NotificationEvent {
                name: "task1_dms_duplicates".to_owned(),
                status: 0
            }
        );
        assert_eq!(
            TaskOutcome::NoIssues.event_for("task1"),
            NotificationEvent {
                name: "task1_dms_no_issues".to_owned(),
                status: 1
            }
        );
    }

    #[test]
    fn task_without_tables_has_no_issues() {
        let findings = TaskFindings::evaluate(std::iter::empty::<&TableStatistic>());

        assert_eq!(findings.outcome(), TaskOutcome::NoIssues);
        assert_eq!(findings.validated_tables, 0);
    }
}
