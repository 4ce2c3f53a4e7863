//! Delivery of validation events.

mod base;
pub mod http;
pub mod memory;

pub use base::Notifier;
