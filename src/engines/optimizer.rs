use crate::config::EvolutionConfig;
use crate::engines::generation::{Candidate, EvolutionEngine, LogProgressCallback, ProgressCallback};
use crate::engines::projection::project;
use crate::error::{AssignmentError, Result};
use crate::types::{AssignmentResult, Roster, ServiceCatalog};
use rand::Rng;

/// Outcome of one run: the projected result plus the winning candidate
#[derive(Debug, Clone)]
pub struct Optimization {
    pub result: AssignmentResult,
    pub best: Candidate,
    pub best_history: Vec<u32>,
}

/// Checks that a run can start at all
pub fn validate_inputs(roster: &Roster, catalog: &ServiceCatalog) -> Result<()> {
    if roster.is_empty() {
        return Err(AssignmentError::Configuration(
            "Roster is empty, nothing to assign".to_string(),
        ));
    }
    catalog.validate()?;
    if let Some((key, volunteer)) = roster.iter().find(|(key, v)| **key != v.name) {
        return Err(AssignmentError::DataIntegrity(format!(
            "Roster key '{}' holds volunteer '{}'",
            key, volunteer.name
        )));
    }
    if roster.len() > catalog.total_capacity() {
        return Err(AssignmentError::CapacityInfeasible {
            volunteers: roster.len(),
            capacity: catalog.total_capacity(),
        });
    }
    Ok(())
}

/// Assigns every roster volunteer to a catalog service.
///
/// Fails fast when the roster is empty, the catalog is empty or malformed,
/// or there are more volunteers than seats.
pub fn optimize(
    roster: &Roster,
    catalog: &ServiceCatalog,
    config: &EvolutionConfig,
) -> Result<AssignmentResult> {
    let mut engine = EvolutionEngine::new(config.clone());
    optimize_with(&mut engine, roster, catalog, LogProgressCallback::default())
        .map(|optimization| optimization.result)
}

/// Same as [`optimize`] with a caller-supplied engine (and random source) and callback
pub fn optimize_with<R: Rng, C: ProgressCallback>(
    engine: &mut EvolutionEngine<R>,
    roster: &Roster,
    catalog: &ServiceCatalog,
    callback: C,
) -> Result<Optimization> {
    log::info!(
        "Optimizing {} volunteers over {} services (capacity {})",
        roster.len(),
        catalog.len(),
        catalog.capacity()
    );

    let best = engine.run(roster, catalog, callback)?;
    let result = project(&best, catalog)?;

    log::info!("Optimization finished with fitness {}", best.fitness());

    Ok(Optimization {
        result,
        best,
        best_history: engine.best_history().to_vec(),
    })
}
