pub mod assignment_table;
pub mod preference_selector;
pub mod roster_importer;

pub use assignment_table::AssignmentTable;
pub use preference_selector::PreferenceSelector;
pub use roster_importer::RosterImporter;
