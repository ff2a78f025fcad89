use crate::service::RunStatus;
use crate::ui::state::AppState;
use crate::ui::widgets::AssignmentTable;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Volunteer Assignments");

        ui.separator();

        match &state.run_status {
            RunStatus::Pending => {
                ui.label("Waiting for optimizer...");
            }
            RunStatus::Running { generation, total_generations } => {
                ui.label(format!("Generation {}/{}", generation, total_generations));
                ui.add(egui::ProgressBar::new(state.progress_percentage).show_percentage());
            }
            RunStatus::Done { best_fitness, finished_at } => {
                ui.label(format!(
                    "Finished {} with dissatisfaction {}",
                    finished_at.format("%H:%M:%S"),
                    best_fitness
                ));
            }
            RunStatus::Failed(error) => {
                ui.colored_label(egui::Color32::RED, error);
            }
            RunStatus::Idle => {}
        }

        ui.label(&state.status_message);

        ui.separator();

        match &state.assignments {
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No assignments yet. Submit preferences and click 'Optimize Assignment'.");
                });
            }
            Some(result) => {
                ui.label(format!(
                    "{} volunteers assigned, total dissatisfaction {}",
                    result.total_assigned(),
                    result.best_fitness
                ));
                AssignmentTable::show(ui, result, state.capacity);
            }
        }
    }
}
