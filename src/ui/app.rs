use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::state::{AppState, UiAction};
use crate::error::AssignmentError;
use crate::service::AssignmentService;
use std::sync::Arc;
use std::time::Duration;

pub struct VolunteerAssignApp {
    service: Arc<AssignmentService>,
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl VolunteerAssignApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, service: Arc<AssignmentService>) -> Self {
        let mut state = AppState::new(service.catalog(), service.roster().max_preferences());
        state.refresh(&service);
        Self {
            service,
            state,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::SubmitPreferences => {
                let volunteer = self.state.pending_volunteer();
                let name = volunteer.name.clone();
                match self.service.save_preferences(volunteer) {
                    Ok(()) => {
                        self.state.status_message = format!("Preferences submitted for {}", name);
                        self.state.clear_form();
                    }
                    Err(e) => self.state.status_message = e.to_string(),
                }
            }
            UiAction::StartOptimization => match self.service.start_optimization() {
                Ok(()) => {
                    self.state.progress_percentage = 0.0;
                    self.state.status_message = "Optimization started in background".to_string();
                }
                Err(e) => self.state.status_message = e.to_string(),
            },
            UiAction::ImportRoster(path) => {
                let imported = std::fs::read_to_string(&path)
                    .map_err(AssignmentError::from)
                    .and_then(|json| self.service.import_roster_json(&json));
                match imported {
                    Ok(count) => {
                        self.state.status_message = format!("Imported {} volunteers", count);
                        self.state.roster_file_path = Some(path);
                    }
                    Err(e) => self.state.status_message = format!("Error importing roster: {}", e),
                }
            }
        }
        self.state.refresh(&self.service);
    }
}

impl eframe::App for VolunteerAssignApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(update) = self.service.poll_progress() {
            self.state.apply_progress(&update);
        }
        self.state.refresh(&self.service);

        if self.state.is_running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Volunteer Assignment System");
        });

        // Left Panel - Preference form
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Right Panel - Roster
        egui::SidePanel::right("right_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Assignments
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &mut self.state);
        });

        if let Some(action) = self.state.pending_action.take() {
            self.handle_action(action);
            ctx.request_repaint();
        }
    }
}
