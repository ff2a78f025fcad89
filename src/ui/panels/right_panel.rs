use crate::ui::state::AppState;

pub struct RightPanel;

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading(format!("Roster ({})", state.volunteers.len()));

        ui.separator();

        if state.volunteers.is_empty() {
            ui.label("No volunteers yet.");
            return;
        }

        egui::Grid::new("roster_grid")
            .striped(true)
            .show(ui, |ui| {
                for volunteer in &state.volunteers {
                    ui.strong(&volunteer.name);
                    ui.label(volunteer.preferences.join(" > "));
                    ui.end_row();
                }
            });
    }
}
