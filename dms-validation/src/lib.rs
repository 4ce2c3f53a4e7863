//! Replication consistency checks for AWS DMS tasks.
//!
//! For each configured replication task the [`validator::Validator`] reads the per-table
//! statistics from DMS, compares source operation counts with the counts applied to the
//! target, and posts one [`types::NotificationEvent`] describing the outcome.
//!
//! The DMS API and the notification endpoint sit behind the [`dms::DmsClient`] and
//! [`notifier::Notifier`] traits, with in-memory implementations for tests.

pub mod dms;
pub mod error;
pub mod evaluation;
pub mod notifier;
pub mod types;
pub mod validator;
