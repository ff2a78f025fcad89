use crate::types::AssignmentResult;

pub struct AssignmentTable;

impl AssignmentTable {
    pub fn show(ui: &mut egui::Ui, result: &AssignmentResult, capacity: usize) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("assignment_table")
                .striped(true)
                .num_columns(3)
                .show(ui, |ui| {
                    ui.strong("Service");
                    ui.strong("Seats");
                    ui.strong("Volunteers");
                    ui.end_row();

                    for assignment in &result.assignments {
                        ui.label(&assignment.service_name);
                        ui.label(format!("{}/{}", assignment.assigned_volunteers.len(), capacity));
                        if assignment.assigned_volunteers.is_empty() {
                            ui.weak("(No volunteers assigned)");
                        } else {
                            ui.label(assignment.assigned_volunteers.join(", "));
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
