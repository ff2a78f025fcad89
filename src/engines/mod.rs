pub mod evaluation;
pub mod generation;
pub mod optimizer;
pub mod projection;

pub use optimizer::{optimize, optimize_with, validate_inputs, Optimization};
pub use projection::project;
