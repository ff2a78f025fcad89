use crate::error::{AssignmentError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Volunteers keyed by name. Name order keeps seeded runs reproducible.
pub type Roster = BTreeMap<String, Volunteer>;

/// One gene per volunteer: volunteer name -> service name.
pub type Assignment = BTreeMap<String, String>;

/// A volunteer and their ranked service preferences (most preferred first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub name: String,
    pub preferences: Vec<String>,
}

impl Volunteer {
    pub fn new(name: impl Into<String>, preferences: Vec<String>) -> Self {
        Self {
            name: name.into(),
            preferences,
        }
    }

    /// Zero-based position of `service` in the preference list
    pub fn rank_of(&self, service: &str) -> Option<usize> {
        self.preferences.iter().position(|p| p == service)
    }

    pub fn validate(&self, catalog: &ServiceCatalog, max_preferences: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AssignmentError::InvalidVolunteer(
                "Volunteer name must not be empty".to_string(),
            ));
        }
        if self.preferences.is_empty() {
            return Err(AssignmentError::InvalidVolunteer(format!(
                "{} has no preferences",
                self.name
            )));
        }
        if self.preferences.len() > max_preferences {
            return Err(AssignmentError::InvalidVolunteer(format!(
                "{} lists {} preferences, at most {} allowed",
                self.name,
                self.preferences.len(),
                max_preferences
            )));
        }

        let mut seen = HashSet::new();
        for service in &self.preferences {
            if !catalog.contains(service) {
                return Err(AssignmentError::InvalidVolunteer(format!(
                    "{} prefers unknown service '{}'",
                    self.name, service
                )));
            }
            if !seen.insert(service.as_str()) {
                return Err(AssignmentError::InvalidVolunteer(format!(
                    "{} lists '{}' more than once",
                    self.name, service
                )));
            }
        }

        Ok(())
    }
}

/// Fixed, ordered set of services sharing one capacity limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    services: Vec<String>,
    capacity: usize,
}

impl ServiceCatalog {
    pub fn new(services: Vec<String>, capacity: usize) -> Self {
        Self { services, capacity }
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn contains(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn total_capacity(&self) -> usize {
        self.services.len() * self.capacity
    }

    /// Non-empty, unique non-blank service names and a capacity of at least one
    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(AssignmentError::Configuration(
                "Service catalog must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for service in &self.services {
            if service.trim().is_empty() {
                return Err(AssignmentError::Configuration(
                    "Service names must not be blank".to_string(),
                ));
            }
            if !seen.insert(service.as_str()) {
                return Err(AssignmentError::Configuration(format!(
                    "Service '{}' is listed twice",
                    service
                )));
            }
        }
        if self.capacity == 0 {
            return Err(AssignmentError::Configuration(
                "Service capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Volunteers grouped under one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAssignment {
    pub service_name: String,
    pub assigned_volunteers: Vec<String>,
}

/// Final grouping handed to callers, one entry per catalog service in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub assignments: Vec<ServiceAssignment>,
    pub best_fitness: u32,
    pub generated_at: DateTime<Utc>,
}

impl AssignmentResult {
    pub fn volunteers_for(&self, service: &str) -> Option<&[String]> {
        self.assignments
            .iter()
            .find(|a| a.service_name == service)
            .map(|a| a.assigned_volunteers.as_slice())
    }

    pub fn total_assigned(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| a.assigned_volunteers.len())
            .sum()
    }
}
