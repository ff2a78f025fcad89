use crate::service::{AssignmentService, ProgressUpdate, RunStatus};
use crate::types::{AssignmentResult, ServiceCatalog, Volunteer};
use std::path::PathBuf;

/// Requests raised by panels, carried out by the app against the service
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SubmitPreferences,
    StartOptimization,
    ImportRoster(PathBuf),
}

/// Central application state for the UI
pub struct AppState {
    // Catalog
    pub services: Vec<String>,
    pub capacity: usize,

    // Preference form
    pub name_input: String,
    pub preference_inputs: Vec<Option<String>>,

    // Roster
    pub volunteers: Vec<Volunteer>,
    pub roster_file_path: Option<PathBuf>,

    // Execution State
    pub run_status: RunStatus,
    pub progress_percentage: f32,
    pub status_message: String,

    // Results
    pub assignments: Option<AssignmentResult>,

    pub pending_action: Option<UiAction>,
}

impl AppState {
    pub fn new(catalog: &ServiceCatalog, max_preferences: usize) -> Self {
        Self {
            services: catalog.services().to_vec(),
            capacity: catalog.capacity(),
            name_input: String::new(),
            preference_inputs: vec![None; max_preferences],
            volunteers: Vec::new(),
            roster_file_path: None,
            run_status: RunStatus::Idle,
            progress_percentage: 0.0,
            status_message: "Ready".to_string(),
            assignments: None,
            pending_action: None,
        }
    }

    /// Volunteer described by the form: trimmed name, filled slots in order
    pub fn pending_volunteer(&self) -> Volunteer {
        Volunteer::new(
            self.name_input.trim(),
            self.preference_inputs.iter().flatten().cloned().collect(),
        )
    }

    pub fn clear_form(&mut self) {
        self.name_input.clear();
        self.preference_inputs.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn is_running(&self) -> bool {
        self.run_status.is_active()
    }

    pub fn apply_progress(&mut self, update: &ProgressUpdate) {
        if update.total_generations > 0 {
            self.progress_percentage =
                (update.generation as f32 / update.total_generations as f32).clamp(0.0, 1.0);
        }
        self.status_message = update.status.clone();
    }

    /// Pull roster, status and the published result from the service
    pub fn refresh(&mut self, service: &AssignmentService) {
        self.volunteers = service.volunteers();
        self.run_status = service.status();
        if let Some(result) = service.assignments() {
            self.assignments = Some(result);
        }
    }
}
