use super::evolution_engine::{GenerationStats, ProgressCallback};

/// Reports progress through the `log` facade
pub struct LogProgressCallback {
    every: usize,
}

impl LogProgressCallback {
    /// Logs every `every`-th generation at info level (and always the last one)
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl Default for LogProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let done = stats.generation + 1;
        if done % self.every == 0 || done == stats.total_generations {
            log::info!(
                "Generation {}/{} complete. Best fitness: {}, mean: {:.2}",
                done,
                stats.total_generations,
                stats.best_fitness,
                stats.mean_fitness
            );
        }
    }
}

/// Discards all progress
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
}
