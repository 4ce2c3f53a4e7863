//! Access to the AWS DMS API.
//!
//! The [`DmsClient`] trait exposes the two describe operations the validator needs.
//! [`aws::AwsDmsClient`] talks to AWS, [`memory::MemoryDmsClient`] serves canned
//! responses.

pub mod aws;
mod base;
pub mod memory;

pub use base::DmsClient;
