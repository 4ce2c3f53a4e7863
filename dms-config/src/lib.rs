//! Configuration management for the DMS validator.
//!
//! Provides environment detection, layered configuration loading from YAML files
//! and environment variables, secret handling, and the shared configuration types
//! consumed by the validator binary.

mod environment;
mod load;
mod secret;
pub mod shared;

pub use environment::*;
pub use load::*;
pub use secret::*;
