mod aws;
mod base;
mod notifier;
mod sentry;
mod task;
mod validator;

pub use aws::*;
pub use base::*;
pub use notifier::*;
pub use sentry::*;
pub use task::*;
pub use validator::*;
