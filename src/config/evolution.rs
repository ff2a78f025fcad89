use super::traits::ConfigSection;
use crate::error::AssignmentError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub elitism_count: usize,
    pub tournament_size: usize,
    /// Per-gene probability that a child inherits from the first parent
    pub parent1_gene_probability: f64,
    /// Per-gene probability of reassignment to a random service
    pub mutation_rate: f64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_generations: 100,
            elitism_count: 2,
            tournament_size: 2,
            parent1_gene_probability: 0.5,
            mutation_rate: 0.05,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), AssignmentError> {
        if self.population_size < 2 {
            return Err(AssignmentError::Configuration(
                "Population size must be at least 2".to_string()
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(AssignmentError::Configuration(
                "Elitism count must be smaller than the population size".to_string()
            ));
        }
        if self.tournament_size == 0 {
            return Err(AssignmentError::Configuration(
                "Tournament size must be at least 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(AssignmentError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.parent1_gene_probability) {
            return Err(AssignmentError::Configuration(
                "Parent 1 gene probability must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }
}
