pub mod assignment_service;
pub mod optimization_runner;

pub use assignment_service::AssignmentService;
pub use optimization_runner::{OptimizationRunner, ProgressUpdate, PublishedState, RunStatus, SharedState};
