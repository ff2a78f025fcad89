pub mod traits;
pub mod evolution;
pub mod catalog;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use catalog::CatalogConfig;
pub use traits::ConfigSection;
