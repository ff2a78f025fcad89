use crate::config::EvolutionConfig;
use crate::engines::generation::{EvolutionEngine, GenerationStats, ProgressCallback};
use crate::engines::optimize_with;
use crate::error::Result;
use crate::types::{AssignmentResult, Roster, ServiceCatalog};
use chrono::{DateTime, Utc};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Observable state of the latest run
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RunStatus {
    #[default]
    Idle,
    Pending,
    Running {
        generation: usize,
        total_generations: usize,
    },
    Done {
        best_fitness: u32,
        finished_at: DateTime<Utc>,
    },
    Failed(String),
}

impl RunStatus {
    /// A run has been accepted and has not finished yet
    pub fn is_active(&self) -> bool {
        matches!(self, RunStatus::Pending | RunStatus::Running { .. })
    }
}

/// What readers may see. The population of a run in flight never lands here.
#[derive(Debug, Clone, Default)]
pub struct PublishedState {
    pub status: RunStatus,
    pub result: Option<AssignmentResult>,
}

pub type SharedState = Arc<Mutex<PublishedState>>;

/// Progress update from the optimizer thread
#[derive(Clone, Debug)]
pub struct ProgressUpdate {
    pub generation: usize,
    pub total_generations: usize,
    pub best_fitness: u32,
    pub status: String,
}

/// Forwards generation stats to the channel and the shared status
struct RunnerProgressCallback {
    progress_tx: Sender<ProgressUpdate>,
    shared: SharedState,
}

impl ProgressCallback for RunnerProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let done = stats.generation + 1;
        lock(&self.shared).status = RunStatus::Running {
            generation: done,
            total_generations: stats.total_generations,
        };
        let _ = self.progress_tx.send(ProgressUpdate {
            generation: done,
            total_generations: stats.total_generations,
            best_fitness: stats.best_fitness,
            status: format!(
                "Generation {}/{} - Best: {}",
                done, stats.total_generations, stats.best_fitness
            ),
        });
    }
}

/// One optimization run on a dedicated worker thread
pub struct OptimizationRunner {
    handle: Option<JoinHandle<()>>,
    progress_rx: Receiver<ProgressUpdate>,
    shared: SharedState,
}

impl OptimizationRunner {
    /// Start the run in a background thread. `roster` is the snapshot it works on.
    pub fn start(
        roster: Roster,
        catalog: ServiceCatalog,
        config: EvolutionConfig,
        shared: SharedState,
    ) -> Result<Self> {
        let (progress_tx, progress_rx) = channel();
        let thread_shared = Arc::clone(&shared);

        let handle = thread::Builder::new()
            .name("optimizer".to_string())
            .spawn(move || Self::run_optimization(roster, catalog, config, progress_tx, thread_shared))?;

        Ok(Self {
            handle: Some(handle),
            progress_rx,
            shared,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&self) -> Option<ProgressUpdate> {
        self.progress_rx.try_recv().ok()
    }

    /// Block until the worker exits and return the final status
    pub fn wait(&mut self) -> RunStatus {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Optimization thread panicked");
                lock(&self.shared).status = RunStatus::Failed("Optimization thread panicked".to_string());
            }
        }
        lock(&self.shared).status.clone()
    }

    /// Runs on the worker thread
    fn run_optimization(
        roster: Roster,
        catalog: ServiceCatalog,
        config: EvolutionConfig,
        progress_tx: Sender<ProgressUpdate>,
        shared: SharedState,
    ) {
        let total_generations = config.num_generations;
        log::info!(
            "Optimization thread started: {} volunteers, population {}, generations {}",
            roster.len(),
            config.population_size,
            total_generations
        );
        lock(&shared).status = RunStatus::Running {
            generation: 0,
            total_generations,
        };

        let mut engine = EvolutionEngine::new(config);
        let callback = RunnerProgressCallback {
            progress_tx: progress_tx.clone(),
            shared: Arc::clone(&shared),
        };

        match optimize_with(&mut engine, &roster, &catalog, callback) {
            Ok(optimization) => {
                let best_fitness = optimization.best.fitness();
                let _ = progress_tx.send(ProgressUpdate {
                    generation: total_generations,
                    total_generations,
                    best_fitness,
                    status: format!("Complete! Best fitness {}", best_fitness),
                });
                let mut state = lock(&shared);
                state.status = RunStatus::Done {
                    best_fitness,
                    finished_at: optimization.result.generated_at,
                };
                state.result = Some(optimization.result);
            }
            Err(e) => {
                log::warn!("Optimization failed: {}", e);
                let _ = progress_tx.send(ProgressUpdate {
                    generation: 0,
                    total_generations,
                    best_fitness: 0,
                    status: format!("Error: {}", e),
                });
                lock(&shared).status = RunStatus::Failed(e.to_string());
            }
        }
    }
}

pub(crate) fn lock(shared: &SharedState) -> std::sync::MutexGuard<'_, PublishedState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
