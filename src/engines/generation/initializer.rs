use crate::engines::evaluation::Occupancy;
use crate::engines::generation::chromosome::Candidate;
use crate::error::{AssignmentError, Result};
use crate::types::{Assignment, Roster, ServiceCatalog};
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

/// Builds one capacity-respecting assignment.
///
/// Volunteers are visited in a random order; each takes the first service with
/// room from a shuffled copy of their own preferences, then from the catalog in
/// its fixed order. A volunteer who finds no room at all fails the whole build
/// with `CapacityInfeasible` instead of being dropped.
pub fn random_assignment<R: Rng + ?Sized>(
    roster: &Roster,
    catalog: &ServiceCatalog,
    rng: &mut R,
) -> Result<Assignment> {
    let capacity = catalog.capacity();
    let mut names: Vec<&String> = roster.keys().collect();
    names.shuffle(rng);

    let mut occupancy = Occupancy::new();
    let mut assignment = Assignment::new();

    for name in names {
        let mut preferences: Vec<&String> = roster[name]
            .preferences
            .iter()
            .filter(|service| catalog.contains(service))
            .collect();
        preferences.shuffle(rng);

        let service = preferences
            .into_iter()
            .chain(catalog.services().iter())
            .find(|service| occupancy.has_room(service, capacity))
            .ok_or(AssignmentError::CapacityInfeasible {
                volunteers: roster.len(),
                capacity: catalog.total_capacity(),
            })?;

        occupancy.add(service);
        assignment.insert(name.clone(), service.clone());
    }

    Ok(assignment)
}

/// Random construction of `size` candidates. Genes are drawn sequentially from
/// `rng`, scoring runs in parallel.
pub fn initialize_population<R: Rng + ?Sized>(
    roster: &Roster,
    catalog: &ServiceCatalog,
    size: usize,
    rng: &mut R,
) -> Result<Vec<Candidate>> {
    let assignments = (0..size)
        .map(|_| random_assignment(roster, catalog, rng))
        .collect::<Result<Vec<_>>>()?;

    assignments
        .into_par_iter()
        .map(|assignment| Candidate::new(assignment, roster))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Volunteer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new((1..=4).map(|i| format!("S{i}")).collect(), 2)
    }

    fn crowded_roster(count: usize) -> Roster {
        // Everyone wants S1 first, so most volunteers hit the capacity wall
        (0..count)
            .map(|i| {
                let name = format!("V{i:02}");
                let prefs = vec!["S1".to_string(), "S2".to_string()];
                (name.clone(), Volunteer::new(name, prefs))
            })
            .collect()
    }

    #[test]
    fn test_every_volunteer_assigned_once_within_capacity() {
        let roster = crowded_roster(8);
        let mut rng = StdRng::seed_from_u64(7);

        let population = initialize_population(&roster, &catalog(), 25, &mut rng).unwrap();
        assert_eq!(population.len(), 25);

        for candidate in &population {
            assert_eq!(candidate.assignment().len(), roster.len());
            for name in roster.keys() {
                assert!(candidate.service_of(name).is_some());
            }
            let occupancy = Occupancy::from_assignment(candidate.assignment());
            assert_eq!(occupancy.overflow(2), 0);
        }
    }

    #[test]
    fn test_falls_back_to_catalog_order() {
        let roster = crowded_roster(5);
        let mut rng = StdRng::seed_from_u64(1);

        let assignment = random_assignment(&roster, &catalog(), &mut rng).unwrap();
        let occupancy = Occupancy::from_assignment(&assignment);
        // S1 and S2 fill first, the fifth volunteer lands on S3
        assert_eq!(occupancy.count("S1"), 2);
        assert_eq!(occupancy.count("S2"), 2);
        assert_eq!(occupancy.count("S3"), 1);
    }

    #[test]
    fn test_over_capacity_fails_explicitly() {
        let roster = crowded_roster(9);
        let mut rng = StdRng::seed_from_u64(3);

        let err = random_assignment(&roster, &catalog(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            AssignmentError::CapacityInfeasible { volunteers: 9, capacity: 8 }
        ));
    }

    #[test]
    fn test_same_seed_same_population() {
        let roster = crowded_roster(6);
        let a = initialize_population(&roster, &catalog(), 5, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = initialize_population(&roster, &catalog(), 5, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
