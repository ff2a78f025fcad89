use eframe::NativeOptions;
use std::sync::Arc;
use volunteer_assign::config::ConfigManager;
use volunteer_assign::service::AssignmentService;
use volunteer_assign::ui::VolunteerAssignApp;

const DEFAULT_CONFIG_PATH: &str = "volunteer-assign.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let manager = ConfigManager::new();
    manager.load_layered(&config_path)?;

    let service = Arc::new(AssignmentService::new(&manager.get())?);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 650.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Volunteer Assignment System"),
        ..Default::default()
    };

    eframe::run_native(
        "Volunteer Assignment System",
        native_options,
        Box::new(move |cc| Ok(Box::new(VolunteerAssignApp::new(cc, service)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
