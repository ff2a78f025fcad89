use std::thread;
use std::time::Duration;
use volunteer_assign::config::{AppConfig, EvolutionConfig};
use volunteer_assign::roster::{RosterSource, RosterStore};
use volunteer_assign::service::{AssignmentService, RunStatus};
use volunteer_assign::{AssignmentError, ServiceCatalog, Volunteer};

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.evolution = EvolutionConfig {
        num_generations: 30,
        seed: Some(7),
        ..EvolutionConfig::default()
    };
    config
}

fn volunteer(name: &str, prefs: &[&str]) -> Volunteer {
    Volunteer::new(name, prefs.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_run_publishes_result() {
    let service = AssignmentService::new(&test_config()).unwrap();
    service.save_preferences(volunteer("Aysu", &["Reception", "Security"])).unwrap();
    service.save_preferences(volunteer("Emre", &["Medical"])).unwrap();
    service.save_preferences(volunteer("Lena", &["Reception", "Food", "Guiding"])).unwrap();

    assert_eq!(service.status(), RunStatus::Idle);
    assert!(service.assignments().is_none());

    service.start_optimization().unwrap();
    let status = service.wait_for_completion();

    match status {
        RunStatus::Done { best_fitness, .. } => assert_eq!(best_fitness, 0),
        other => panic!("unexpected status: {other:?}"),
    }

    let result = service.assignments().expect("result should be published");
    assert_eq!(result.assignments.len(), 10);
    assert_eq!(result.volunteers_for("Reception").unwrap(), ["Aysu", "Lena"]);
    assert_eq!(result.volunteers_for("Medical").unwrap(), ["Emre"]);
    assert!(result.volunteers_for("HelpDesk").unwrap().is_empty());
}

#[test]
fn test_empty_roster_rejected_synchronously() {
    let service = AssignmentService::new(&test_config()).unwrap();
    let err = service.start_optimization().unwrap_err();

    assert!(matches!(err, AssignmentError::Configuration(_)));
    assert_eq!(service.status(), RunStatus::Idle);
}

#[test]
fn test_invalid_evolution_config_rejected_up_front() {
    let mut config = test_config();
    config.evolution.population_size = 1;

    let err = AssignmentService::new(&config).err().expect("config should be rejected");
    assert!(matches!(err, AssignmentError::Configuration(_)));
}

#[test]
fn test_invalid_catalog_rejected_up_front() {
    let mut config = test_config();
    config.catalog.services = vec!["Food".to_string(), "Food".to_string()];

    let err = AssignmentService::new(&config).err().expect("catalog should be rejected");
    assert!(matches!(err, AssignmentError::Configuration(_)));
}

#[test]
fn test_with_roster_checks_its_catalog() {
    let closed = RosterStore::new(ServiceCatalog::new(vec!["Food".to_string()], 0), 3);
    let err = AssignmentService::with_roster(closed, EvolutionConfig::default())
        .err()
        .expect("zero capacity should be rejected");
    assert!(matches!(err, AssignmentError::Configuration(_)));

    let store = RosterStore::new(ServiceCatalog::new(vec!["Food".to_string()], 2), 3);
    let service = AssignmentService::with_roster(store, test_config().evolution).unwrap();
    service.save_preferences(volunteer("A", &["Food"])).unwrap();
    service.start_optimization().unwrap();

    assert!(matches!(service.wait_for_completion(), RunStatus::Done { best_fitness: 0, .. }));
    assert_eq!(service.assignments().unwrap().volunteers_for("Food").unwrap(), ["A"]);
}

#[test]
fn test_overlapping_run_is_rejected() {
    let mut config = test_config();
    config.evolution.num_generations = 500;
    let service = AssignmentService::new(&config).unwrap();
    for i in 0..30 {
        service
            .save_preferences(volunteer(&format!("V{i:02}"), &["Reception", "Food"]))
            .unwrap();
    }

    service.start_optimization().unwrap();
    let second = service.start_optimization();

    assert!(matches!(second, Err(AssignmentError::RunInProgress)));
    assert!(matches!(service.wait_for_completion(), RunStatus::Done { .. }));
}

#[test]
fn test_submissions_during_run_wait_for_next_run() {
    let service = AssignmentService::new(&test_config()).unwrap();
    service.save_preferences(volunteer("A", &["Food"])).unwrap();

    service.start_optimization().unwrap();
    service.save_preferences(volunteer("B", &["Food"])).unwrap();
    service.wait_for_completion();

    let first = service.assignments().unwrap();
    assert_eq!(first.total_assigned(), 1);
    assert_eq!(service.roster().snapshot().len(), 2);

    service.start_optimization().unwrap();
    service.wait_for_completion();
    assert_eq!(service.assignments().unwrap().volunteers_for("Food").unwrap(), ["A", "B"]);
}

#[test]
fn test_invalid_submission_is_rejected() {
    let service = AssignmentService::new(&test_config()).unwrap();
    let err = service
        .save_preferences(volunteer("Aysu", &["Reception", "Reception"]))
        .unwrap_err();

    assert!(matches!(err, AssignmentError::InvalidVolunteer(_)));
    assert!(service.volunteers().is_empty());
}

#[test]
fn test_progress_updates_are_streamed() {
    let service = AssignmentService::new(&test_config()).unwrap();
    service.save_preferences(volunteer("A", &["Food", "Medical"])).unwrap();

    service.start_optimization().unwrap();
    let mut updates = Vec::new();
    loop {
        while let Some(update) = service.poll_progress() {
            updates.push(update);
        }
        if !service.status().is_active() {
            while let Some(update) = service.poll_progress() {
                updates.push(update);
            }
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    service.wait_for_completion();

    assert!(updates.len() >= 30);
    let last = updates.last().expect("at least one progress update");
    assert_eq!(last.total_generations, 30);
    assert_eq!(last.generation, 30);
}
