use super::fitness::dissatisfaction;
use crate::error::{AssignmentError, Result};
use crate::types::{Assignment, Roster, ServiceCatalog};
use std::collections::{BTreeMap, HashMap};

/// Head count per service
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    counts: HashMap<String, usize>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_assignment(assignment: &Assignment) -> Self {
        let mut occupancy = Self::new();
        for service in assignment.values() {
            occupancy.add(service);
        }
        occupancy
    }

    pub fn count(&self, service: &str) -> usize {
        self.counts.get(service).copied().unwrap_or(0)
    }

    pub fn has_room(&self, service: &str, capacity: usize) -> bool {
        self.count(service) < capacity
    }

    pub fn add(&mut self, service: &str) {
        *self.counts.entry(service.to_string()).or_insert(0) += 1;
    }

    /// Volunteers above capacity, summed over all services
    pub fn overflow(&self, capacity: usize) -> usize {
        self.counts
            .values()
            .map(|&count| count.saturating_sub(capacity))
            .sum()
    }
}

/// Brings an assignment back within capacity.
///
/// Services over capacity keep their most satisfied volunteers (ties by name);
/// the rest are moved to their best-ranked preference with room, falling back
/// to the first catalog service with room. Genes pointing outside the catalog
/// are relocated the same way. Assignments already within capacity come back
/// untouched.
pub fn repair_capacity(
    mut assignment: Assignment,
    roster: &Roster,
    catalog: &ServiceCatalog,
) -> Result<Assignment> {
    let capacity = catalog.capacity();

    let mut groups: BTreeMap<&str, Vec<(u32, &str)>> = BTreeMap::new();
    for (name, service) in &assignment {
        let volunteer = roster.get(name).ok_or_else(|| {
            AssignmentError::DataIntegrity(format!("Unknown volunteer '{}' in assignment", name))
        })?;
        groups
            .entry(service.as_str())
            .or_default()
            .push((dissatisfaction(volunteer, service), name.as_str()));
    }

    let mut occupancy = Occupancy::new();
    let mut evicted: Vec<String> = Vec::new();
    for (service, mut members) in groups {
        if !catalog.contains(service) {
            evicted.extend(members.into_iter().map(|(_, name)| name.to_string()));
            continue;
        }
        members.sort();
        for (position, (_, name)) in members.into_iter().enumerate() {
            if position < capacity {
                occupancy.add(service);
            } else {
                evicted.push(name.to_string());
            }
        }
    }

    if evicted.is_empty() {
        return Ok(assignment);
    }
    evicted.sort();

    for name in evicted {
        let volunteer = roster.get(&name).ok_or_else(|| {
            AssignmentError::DataIntegrity(format!("Unknown volunteer '{}' in assignment", name))
        })?;

        let target = volunteer
            .preferences
            .iter()
            .filter(|service| catalog.contains(service))
            .chain(catalog.services().iter())
            .find(|service| occupancy.has_room(service, capacity))
            .cloned()
            .ok_or(AssignmentError::CapacityInfeasible {
                volunteers: roster.len(),
                capacity: catalog.total_capacity(),
            })?;

        occupancy.add(&target);
        assignment.insert(name, target);
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Volunteer;

    fn catalog(capacity: usize) -> ServiceCatalog {
        ServiceCatalog::new(vec!["S1".into(), "S2".into(), "S3".into()], capacity)
    }

    fn roster() -> Roster {
        let mut roster = Roster::new();
        for (name, prefs) in [
            ("A", vec!["S1", "S2"]),
            ("B", vec!["S1", "S3"]),
            ("C", vec!["S2", "S1"]),
        ] {
            roster.insert(
                name.to_string(),
                Volunteer::new(name, prefs.into_iter().map(String::from).collect()),
            );
        }
        roster
    }

    fn assign(pairs: &[(&str, &str)]) -> Assignment {
        pairs
            .iter()
            .map(|(v, s)| (v.to_string(), s.to_string()))
            .collect()
    }

    #[test]
    fn test_overflow_counts_excess_only() {
        let occupancy = Occupancy::from_assignment(&assign(&[("A", "S1"), ("B", "S1"), ("C", "S1")]));
        assert_eq!(occupancy.count("S1"), 3);
        assert_eq!(occupancy.overflow(1), 2);
        assert_eq!(occupancy.overflow(3), 0);
    }

    #[test]
    fn test_feasible_assignment_untouched() {
        let original = assign(&[("A", "S1"), ("B", "S3"), ("C", "S2")]);
        let repaired = repair_capacity(original.clone(), &roster(), &catalog(1)).unwrap();
        assert_eq!(repaired, original);
    }

    #[test]
    fn test_overfull_service_keeps_best_ranked() {
        // C ranks S1 second, A and B rank it first; capacity 1 keeps A (name tie-break)
        let repaired = repair_capacity(
            assign(&[("A", "S1"), ("B", "S1"), ("C", "S1")]),
            &roster(),
            &catalog(1),
        )
        .unwrap();

        assert_eq!(repaired["A"], "S1");
        assert_eq!(repaired["B"], "S3");
        assert_eq!(repaired["C"], "S2");
        assert_eq!(Occupancy::from_assignment(&repaired).overflow(1), 0);
    }

    #[test]
    fn test_unknown_service_is_relocated() {
        let repaired = repair_capacity(
            assign(&[("A", "Nowhere"), ("B", "S3"), ("C", "S2")]),
            &roster(),
            &catalog(1),
        )
        .unwrap();
        assert_eq!(repaired["A"], "S1");
    }
}
