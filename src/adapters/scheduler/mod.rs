//! Task scheduler adapters.

mod manual;
mod tokio_scheduler;

pub use manual::ManualTaskScheduler;
pub use tokio_scheduler::TokioTaskScheduler;
