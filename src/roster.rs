use crate::error::{AssignmentError, Result};
use crate::types::{Roster, ServiceCatalog, Volunteer};
use std::sync::{Arc, PoisonError, RwLock};

/// Source of the roster a run reads at its start
pub trait RosterSource {
    fn snapshot(&self) -> Roster;
}

impl RosterSource for Roster {
    fn snapshot(&self) -> Roster {
        self.clone()
    }
}

/// In-memory volunteer store shared between the form and the optimizer.
///
/// Submissions are validated against the catalog. A run works on a
/// [`snapshot`](RosterSource::snapshot), so later submissions only show up in
/// the next run.
#[derive(Clone)]
pub struct RosterStore {
    volunteers: Arc<RwLock<Roster>>,
    catalog: ServiceCatalog,
    max_preferences: usize,
}

impl RosterStore {
    pub fn new(catalog: ServiceCatalog, max_preferences: usize) -> Self {
        Self {
            volunteers: Arc::new(RwLock::new(Roster::new())),
            catalog,
            max_preferences,
        }
    }

    /// Inserts or replaces the volunteer with the same name
    pub fn save_preferences(&self, mut volunteer: Volunteer) -> Result<()> {
        volunteer.name = volunteer.name.trim().to_string();
        volunteer.validate(&self.catalog, self.max_preferences)?;

        let mut volunteers = self.volunteers.write().unwrap_or_else(PoisonError::into_inner);
        if volunteers.insert(volunteer.name.clone(), volunteer).is_some() {
            log::debug!("Replaced existing preferences");
        }
        Ok(())
    }

    /// Validates every entry first; nothing is stored unless all pass
    pub fn import_json(&self, json: &str) -> Result<usize> {
        let incoming: Vec<Volunteer> = serde_json::from_str(json)?;
        let mut cleaned = Vec::with_capacity(incoming.len());
        for mut volunteer in incoming {
            volunteer.name = volunteer.name.trim().to_string();
            volunteer.validate(&self.catalog, self.max_preferences)?;
            cleaned.push(volunteer);
        }

        let count = cleaned.len();
        let mut volunteers = self.volunteers.write().unwrap_or_else(PoisonError::into_inner);
        for volunteer in cleaned {
            volunteers.insert(volunteer.name.clone(), volunteer);
        }
        log::info!("Imported {} volunteers ({} total)", count, volunteers.len());
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<Volunteer> {
        self.volunteers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn remove(&self, name: &str) -> Result<Volunteer> {
        self.volunteers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .ok_or_else(|| AssignmentError::InvalidVolunteer(format!("No volunteer named '{}'", name)))
    }

    /// Volunteers in name order
    pub fn volunteers(&self) -> Vec<Volunteer> {
        self.volunteers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.volunteers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn max_preferences(&self) -> usize {
        self.max_preferences
    }
}

impl RosterSource for RosterStore {
    fn snapshot(&self) -> Roster {
        self.volunteers.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
