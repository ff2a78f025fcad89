use crate::ui::state::{AppState, UiAction};
use crate::ui::widgets::{PreferenceSelector, RosterImporter};

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Volunteer Preferences");
        ui.separator();

        PreferenceSelector::show(ui, state);

        ui.vertical_centered(|ui| {
            let validation_error = Self::validate_form(state).err();
            let submit = ui.add_enabled(validation_error.is_none(), egui::Button::new("Submit Preferences"));
            if submit.clicked() {
                state.pending_action = Some(UiAction::SubmitPreferences);
            }
            if let Some(error) = validation_error {
                ui.colored_label(egui::Color32::GRAY, error);
            }
        });

        ui.separator();

        ui.collapsing("Roster Import", |ui| {
            RosterImporter::show(ui, state);
        });

        ui.separator();

        Self::show_control_buttons(ui, state);
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            let can_run = !state.volunteers.is_empty() && !state.is_running();
            let run_button = ui.add_enabled(can_run, egui::Button::new("Optimize Assignment"));
            if run_button.clicked() {
                state.status_message = "Starting optimization...".to_string();
                state.pending_action = Some(UiAction::StartOptimization);
            }

            let seats = state.services.len() * state.capacity;
            if state.volunteers.len() > seats {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{} volunteers for {} seats", state.volunteers.len(), seats),
                );
            }
        });
    }

    fn validate_form(state: &AppState) -> Result<(), String> {
        let volunteer = state.pending_volunteer();
        if volunteer.name.is_empty() {
            return Err("Enter a name".to_string());
        }
        if volunteer.preferences.is_empty() {
            return Err("Pick at least one preference".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        if !volunteer.preferences.iter().all(|p| seen.insert(p)) {
            return Err("Preferences must be unique".to_string());
        }
        Ok(())
    }
}
