mod app;
mod panels;
mod state;
mod widgets;

pub use app::VolunteerAssignApp;
pub use state::{AppState, UiAction};
