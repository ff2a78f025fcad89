//! Assigns volunteers to a fixed catalog of capacity-limited services with a
//! genetic algorithm that minimizes summed preference dissatisfaction.

pub mod config;
pub mod engines;
pub mod error;
pub mod roster;
pub mod service;
pub mod types;
pub mod ui;

pub use engines::{optimize, Optimization};
pub use error::{AssignmentError, Result};
pub use types::{Assignment, AssignmentResult, Roster, ServiceAssignment, ServiceCatalog, Volunteer};
