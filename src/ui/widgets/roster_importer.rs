use crate::ui::state::{AppState, UiAction};

pub struct RosterImporter;

impl RosterImporter {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            let enabled = !state.is_running();
            if ui.add_enabled(enabled, egui::Button::new("Import Roster JSON...")).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON Files", &["json"])
                    .pick_file()
                {
                    state.pending_action = Some(UiAction::ImportRoster(path));
                }
            }
        });

        if let Some(path) = &state.roster_file_path {
            ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));
        }
    }
}
