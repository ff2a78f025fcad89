use super::optimization_runner::{
    lock, OptimizationRunner, ProgressUpdate, PublishedState, RunStatus, SharedState,
};
use crate::config::{AppConfig, ConfigSection, EvolutionConfig};
use crate::engines::validate_inputs;
use crate::error::{AssignmentError, Result};
use crate::roster::{RosterSource, RosterStore};
use crate::types::{AssignmentResult, ServiceCatalog, Volunteer};
use std::sync::{Arc, Mutex, PoisonError};

/// Roster, optimizer runs and the last published result behind one handle.
///
/// At most one run is in flight; a second `start_optimization` while one is
/// pending or running is rejected with `RunInProgress`.
pub struct AssignmentService {
    roster: RosterStore,
    config: EvolutionConfig,
    shared: SharedState,
    runner: Mutex<Option<OptimizationRunner>>,
}

impl AssignmentService {
    /// Fails with `Configuration` if `app_config` does not validate
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        app_config.validate()?;
        let roster = RosterStore::new(
            app_config.catalog.to_catalog(),
            app_config.catalog.max_preferences,
        );
        Self::with_roster(roster, app_config.evolution.clone())
    }

    pub fn with_roster(roster: RosterStore, config: EvolutionConfig) -> Result<Self> {
        config.validate()?;
        roster.catalog().validate()?;
        Ok(Self {
            roster,
            config,
            shared: Arc::new(Mutex::new(PublishedState::default())),
            runner: Mutex::new(None),
        })
    }

    pub fn save_preferences(&self, volunteer: Volunteer) -> Result<()> {
        self.roster.save_preferences(volunteer).map_err(|e| {
            log::warn!("Rejected submission: {}", e);
            e
        })
    }

    pub fn import_roster_json(&self, json: &str) -> Result<usize> {
        self.roster.import_json(json)
    }

    pub fn volunteers(&self) -> Vec<Volunteer> {
        self.roster.volunteers()
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        self.roster.catalog()
    }

    /// Snapshot the roster and optimize it in the background.
    ///
    /// Input problems (empty roster, too many volunteers) are returned here and
    /// no run is started. The evolution config was already checked in `new`.
    pub fn start_optimization(&self) -> Result<()> {
        let mut runner = self.runner.lock().unwrap_or_else(PoisonError::into_inner);
        let roster = self.roster.snapshot();
        {
            let mut state = lock(&self.shared);
            if state.status.is_active() {
                return Err(AssignmentError::RunInProgress);
            }
            validate_inputs(&roster, self.catalog())?;
            state.status = RunStatus::Pending;
        }

        match OptimizationRunner::start(
            roster,
            self.catalog().clone(),
            self.config.clone(),
            Arc::clone(&self.shared),
        ) {
            Ok(started) => {
                *runner = Some(started);
                Ok(())
            }
            Err(e) => {
                lock(&self.shared).status = RunStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn status(&self) -> RunStatus {
        lock(&self.shared).status.clone()
    }

    /// Result of the last successful run
    pub fn assignments(&self) -> Option<AssignmentResult> {
        lock(&self.shared).result.clone()
    }

    pub fn poll_progress(&self) -> Option<ProgressUpdate> {
        self.runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(OptimizationRunner::poll_progress)
    }

    /// Block until the current run (if any) ends
    pub fn wait_for_completion(&self) -> RunStatus {
        let runner = self.runner.lock().unwrap_or_else(PoisonError::into_inner).take();
        match runner {
            Some(mut runner) => runner.wait(),
            None => self.status(),
        }
    }
}
