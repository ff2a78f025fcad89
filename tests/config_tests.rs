use std::path::PathBuf;
use volunteer_assign::config::{AppConfig, ConfigManager, ConfigSection, EvolutionConfig};
use volunteer_assign::AssignmentError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("volunteer-assign-{}-{}", std::process::id(), name))
}

#[test]
fn test_reference_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.evolution.population_size, 50);
    assert_eq!(config.evolution.num_generations, 100);
    assert_eq!(config.evolution.elitism_count, 2);
    assert_eq!(config.evolution.tournament_size, 2);
    assert_eq!(config.evolution.mutation_rate, 0.05);
    assert_eq!(config.catalog.services.len(), 10);
    assert_eq!(config.catalog.capacity, 3);
    assert_eq!(config.catalog.max_preferences, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_evolution_validation() {
    let bad = [
        EvolutionConfig { population_size: 1, ..EvolutionConfig::default() },
        EvolutionConfig { elitism_count: 50, ..EvolutionConfig::default() },
        EvolutionConfig { tournament_size: 0, ..EvolutionConfig::default() },
        EvolutionConfig { mutation_rate: 1.5, ..EvolutionConfig::default() },
        EvolutionConfig { parent1_gene_probability: -0.1, ..EvolutionConfig::default() },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(AssignmentError::Configuration(_))),
            "{config:?}"
        );
    }
}

#[test]
fn test_catalog_validation() {
    let manager = ConfigManager::new();

    assert!(manager.update(|c| c.catalog.services.clear()).is_err());
    assert!(manager.update(|c| c.catalog.capacity = 0).is_err());
    assert!(manager
        .update(|c| c.catalog.services.push("Food".to_string()))
        .is_err());

    // Rejected updates leave the stored config untouched
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("round-trip.toml");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.evolution.seed = Some(42);
            c.catalog.capacity = 4;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_partial_file_uses_defaults() {
    let path = temp_path("partial.toml");
    std::fs::write(&path, "[evolution]\nnum_generations = 12\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_layered(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let config = manager.get();
    assert_eq!(config.evolution.num_generations, 12);
    assert_eq!(config.evolution.population_size, 50);
    assert_eq!(config.catalog, AppConfig::default().catalog);
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[catalog]\ncapacity = 0\n").unwrap();

    let manager = ConfigManager::new();
    let err = manager.load_from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, AssignmentError::Configuration(_)));
}

#[test]
fn test_missing_layered_file_falls_back_to_defaults() {
    let manager = ConfigManager::new();
    manager.load_layered(temp_path("does-not-exist.toml")).unwrap();
    assert_eq!(manager.get().catalog.capacity, 3);
    assert_eq!(EvolutionConfig::section_name(), "evolution");
}
