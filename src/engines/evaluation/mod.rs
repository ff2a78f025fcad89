pub mod capacity;
pub mod fitness;

pub use capacity::{repair_capacity, Occupancy};
pub use fitness::{dissatisfaction, evaluate, UNRANKED_PENALTY};
