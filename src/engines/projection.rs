use crate::engines::generation::Candidate;
use crate::error::{AssignmentError, Result};
use crate::types::{AssignmentResult, ServiceAssignment, ServiceCatalog};
use chrono::Utc;

/// Groups the winning candidate's genes by service.
///
/// Every catalog service appears, in catalog order, even when nobody was
/// assigned to it. Within a service, volunteers keep the candidate's
/// iteration order.
pub fn project(candidate: &Candidate, catalog: &ServiceCatalog) -> Result<AssignmentResult> {
    let mut assignments: Vec<ServiceAssignment> = catalog
        .services()
        .iter()
        .map(|service| ServiceAssignment {
            service_name: service.clone(),
            assigned_volunteers: Vec::new(),
        })
        .collect();

    for (volunteer, service) in candidate.assignment() {
        let slot = assignments
            .iter_mut()
            .find(|a| &a.service_name == service)
            .ok_or_else(|| {
                AssignmentError::DataIntegrity(format!(
                    "{} is assigned to '{}', which is not in the catalog",
                    volunteer, service
                ))
            })?;
        slot.assigned_volunteers.push(volunteer.clone());
    }

    Ok(AssignmentResult {
        assignments,
        best_fitness: candidate.fitness(),
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignment, Roster, Volunteer};

    fn roster() -> Roster {
        ["Ann", "Bob", "Cem"]
            .iter()
            .map(|n| (n.to_string(), Volunteer::new(*n, vec!["Food".to_string()])))
            .collect()
    }

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(
            vec!["Reception".into(), "Food".into(), "Medical".into()],
            3,
        )
    }

    #[test]
    fn test_groups_by_service_in_catalog_order() {
        let genes: Assignment = [("Ann", "Food"), ("Bob", "Reception"), ("Cem", "Food")]
            .iter()
            .map(|(v, s)| (v.to_string(), s.to_string()))
            .collect();
        let candidate = Candidate::new(genes, &roster()).unwrap();

        let result = project(&candidate, &catalog()).unwrap();

        let names: Vec<_> = result.assignments.iter().map(|a| a.service_name.as_str()).collect();
        assert_eq!(names, vec!["Reception", "Food", "Medical"]);
        assert_eq!(result.volunteers_for("Food").unwrap(), ["Ann", "Cem"]);
        assert_eq!(result.volunteers_for("Reception").unwrap(), ["Bob"]);
        assert!(result.volunteers_for("Medical").unwrap().is_empty());
        assert_eq!(result.total_assigned(), 3);
        assert_eq!(result.best_fitness, candidate.fitness());
    }

    #[test]
    fn test_service_outside_catalog_is_rejected() {
        let genes: Assignment = [("Ann", "Food"), ("Bob", "Parking"), ("Cem", "Food")]
            .iter()
            .map(|(v, s)| (v.to_string(), s.to_string()))
            .collect();
        let candidate = Candidate::new(genes, &roster()).unwrap();

        assert!(matches!(
            project(&candidate, &catalog()),
            Err(AssignmentError::DataIntegrity(_))
        ));
    }
}
