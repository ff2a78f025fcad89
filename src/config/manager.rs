use super::{
    catalog::CatalogConfig,
    evolution::EvolutionConfig,
    traits::ConfigSection,
};
use crate::error::AssignmentError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `VOLUNTEER_ASSIGN__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "VOLUNTEER_ASSIGN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AssignmentError> {
        self.evolution.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AssignmentError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    /// Optional TOML file, then environment variables on top
    pub fn load_layered<P: AsRef<Path>>(&self, path: P) -> Result<(), AssignmentError> {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::info!(
            "Configuration loaded: {} services, capacity {}, population {}, generations {}",
            config.catalog.services.len(),
            config.catalog.capacity,
            config.evolution.population_size,
            config.evolution.num_generations
        );

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AssignmentError> {
        let toml_str = {
            let config = self.config.read().unwrap_or_else(PoisonError::into_inner);
            toml::to_string_pretty(&*config)?
        };

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Applies `f` to a copy and keeps it only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), AssignmentError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
