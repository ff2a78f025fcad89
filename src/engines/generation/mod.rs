pub mod chromosome;
pub mod initializer;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use chromosome::Candidate;
pub use initializer::{initialize_population, random_assignment};
pub use operators::{crossover, mutate, mutate_genes, tournament_selection, uniform_crossover};
pub use evolution_engine::{EngineState, EvolutionEngine, GenerationStats, ProgressCallback};
pub use progress::{LogProgressCallback, SilentProgress};
