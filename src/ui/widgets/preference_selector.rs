use crate::ui::state::AppState;

pub struct PreferenceSelector;

impl PreferenceSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut state.name_input);
        });

        let services = &state.services;
        for (idx, slot) in state.preference_inputs.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("Preference {}:", idx + 1));
                egui::ComboBox::from_id_salt(("preference", idx))
                    .selected_text(slot.as_deref().unwrap_or("(none)"))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(slot, None, "(none)");
                        for service in services {
                            ui.selectable_value(slot, Some(service.clone()), service);
                        }
                    });
            });
        }
    }
}
