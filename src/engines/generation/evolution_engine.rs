use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::repair_capacity;
use crate::engines::generation::{
    chromosome::Candidate,
    initializer::initialize_population,
    operators::{mutate_genes, tournament_selection, uniform_crossover},
};
use crate::engines::optimizer::validate_inputs;
use crate::error::{AssignmentError, Result};
use crate::types::{Roster, ServiceCatalog};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initialized,
    Evolving { generation: usize },
    Done,
}

/// Population summary after a generation has been replaced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub total_generations: usize,
    pub best_fitness: u32,
    pub mean_fitness: f64,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
}

/// Generational GA with elitism.
///
/// All randomness comes from the engine's own generator, so a seeded engine
/// replays the same run for the same roster and catalog.
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    rng: R,
    state: EngineState,
    best_history: Vec<u32>,
}

impl EvolutionEngine<StdRng> {
    /// Seeds from `config.seed`, or from entropy when unset
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            state: EngineState::Initialized,
            best_history: Vec::new(),
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Best fitness of the initial population followed by one entry per generation
    pub fn best_history(&self) -> &[u32] {
        &self.best_history
    }

    /// Run the evolution process and return the fittest candidate of the last generation.
    ///
    /// The config and inputs are checked first; nothing is evolved for an empty
    /// roster, a malformed catalog or a roster larger than the catalog's seats.
    pub fn run<C: ProgressCallback>(
        &mut self,
        roster: &Roster,
        catalog: &ServiceCatalog,
        mut callback: C,
    ) -> Result<Candidate> {
        self.config.validate()?;
        validate_inputs(roster, catalog)?;
        self.state = EngineState::Initialized;
        self.best_history.clear();

        let mut population =
            initialize_population(roster, catalog, self.config.population_size, &mut self.rng)?;
        self.best_history.push(best_fitness(&population)?);

        for generation in 0..self.config.num_generations {
            self.state = EngineState::Evolving { generation };
            callback.on_generation_start(generation);

            // Stable sort: equal fitness keeps insertion order
            population.sort_by_key(Candidate::fitness);
            population = self.create_next_generation(&population, roster, catalog)?;

            let stats = GenerationStats {
                generation,
                total_generations: self.config.num_generations,
                best_fitness: best_fitness(&population)?,
                mean_fitness: mean_fitness(&population),
            };
            self.best_history.push(stats.best_fitness);
            log::debug!(
                "Generation {}/{}: best {}, mean {:.2}",
                generation + 1,
                stats.total_generations,
                stats.best_fitness,
                stats.mean_fitness
            );
            callback.on_generation_complete(&stats);
        }

        self.state = EngineState::Done;
        population
            .into_iter()
            .min_by_key(Candidate::fitness)
            .ok_or(AssignmentError::EmptyPopulation)
    }

    /// `sorted` must be ordered by ascending fitness
    fn create_next_generation(
        &mut self,
        sorted: &[Candidate],
        roster: &Roster,
        catalog: &ServiceCatalog,
    ) -> Result<Vec<Candidate>> {
        let target = self.config.population_size;
        let mut next_generation: Vec<Candidate> = sorted
            .iter()
            .take(self.config.elitism_count)
            .cloned()
            .collect();

        let mut offspring = Vec::with_capacity(target.saturating_sub(next_generation.len()));
        while next_generation.len() + offspring.len() < target {
            let parent1 = tournament_selection(sorted, self.config.tournament_size, &mut self.rng)
                .ok_or(AssignmentError::EmptyPopulation)?;
            let parent2 = tournament_selection(sorted, self.config.tournament_size, &mut self.rng)
                .ok_or(AssignmentError::EmptyPopulation)?;

            let child = uniform_crossover(
                parent1.assignment(),
                parent2.assignment(),
                self.config.parent1_gene_probability,
                &mut self.rng,
            );
            let child = mutate_genes(child, self.config.mutation_rate, catalog, &mut self.rng);
            offspring.push(repair_capacity(child, roster, catalog)?);
        }

        let children = offspring
            .into_par_iter()
            .map(|genes| Candidate::new(genes, roster))
            .collect::<Result<Vec<_>>>()?;

        next_generation.extend(children);
        Ok(next_generation)
    }
}

fn best_fitness(population: &[Candidate]) -> Result<u32> {
    population
        .iter()
        .map(Candidate::fitness)
        .min()
        .ok_or(AssignmentError::EmptyPopulation)
}

fn mean_fitness(population: &[Candidate]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let total: u64 = population.iter().map(|c| c.fitness() as u64).sum();
    total as f64 / population.len() as f64
}
