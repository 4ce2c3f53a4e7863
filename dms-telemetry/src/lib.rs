//! Logging setup for the DMS validator.
//!
//! Production runs write JSON lines to rotating files, development runs log to the
//! console.

pub mod tracing;

pub use crate::tracing::{
    LogFlusher, TracingError, init_test_tracing, init_tracing, init_tracing_with_run_id,
};
