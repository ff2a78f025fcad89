use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Capacity infeasible: {volunteers} volunteers exceed total capacity of {capacity}")]
    CapacityInfeasible { volunteers: usize, capacity: usize },

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid volunteer: {0}")]
    InvalidVolunteer(String),

    #[error("An optimization run is already in progress")]
    RunInProgress,

    #[error("Population is empty, no best candidate exists")]
    EmptyPopulation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AssignmentError>;
