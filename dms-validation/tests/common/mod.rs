#![allow(dead_code)]

use dms_validation::types::{ReplicationTask, TableStatistic, ValidationState};

pub fn task(name: &str) -> ReplicationTask {
    ReplicationTask::new(name, format!("arn:aws:dms:us-east-1:123456789012:task:{name}"))
}

/// Builds a table whose source and applied counters are all equal.
pub fn consistent_table(table_name: &str) -> TableStatistic {
    TableStatistic {
        schema_name: "public".to_owned(),
        table_name: table_name.to_owned(),
        inserts: 5,
        updates: 5,
        deletes: 3,
        applied_inserts: 5,
        applied_updates: 5,
        applied_deletes: 3,
        validation_state: ValidationState::Validated,
    }
}

pub fn table_missing_inserts(table_name: &str) -> TableStatistic {
    TableStatistic {
        inserts: 10,
        applied_inserts: 8,
        ..consistent_table(table_name)
    }
}

pub fn table_with_duplicate_inserts(table_name: &str) -> TableStatistic {
    TableStatistic {
        inserts: 5,
        applied_inserts: 7,
        ..consistent_table(table_name)
    }
}

pub fn with_state(table: TableStatistic, validation_state: ValidationState) -> TableStatistic {
    TableStatistic {
        validation_state,
        ..table
    }
}
