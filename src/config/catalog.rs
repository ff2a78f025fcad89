use super::traits::ConfigSection;
use crate::error::AssignmentError;
use crate::types::ServiceCatalog;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICES: [&str; 10] = [
    "Reception",
    "Security",
    "Food",
    "Transport",
    "Cleaning",
    "Logistics",
    "Guiding",
    "Medical",
    "Registration",
    "HelpDesk",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub services: Vec<String>,
    pub capacity: usize,
    pub max_preferences: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
            capacity: 3,
            max_preferences: 5,
        }
    }
}

impl CatalogConfig {
    pub fn to_catalog(&self) -> ServiceCatalog {
        ServiceCatalog::new(self.services.clone(), self.capacity)
    }
}

impl ConfigSection for CatalogConfig {
    fn section_name() -> &'static str {
        "catalog"
    }

    fn validate(&self) -> Result<(), AssignmentError> {
        self.to_catalog().validate()?;
        if self.max_preferences == 0 {
            return Err(AssignmentError::Configuration(
                "Volunteers must be allowed at least one preference".to_string()
            ));
        }
        Ok(())
    }
}
