use crate::engines::generation::chromosome::Candidate;
use crate::error::Result;
use crate::types::{Assignment, Roster, ServiceCatalog};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Tournament selection: draw `tournament_size` candidates with replacement and
/// keep the lowest fitness. Ties go to the earliest draw.
pub fn tournament_selection<'a, R: Rng + ?Sized>(
    population: &'a [Candidate],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a Candidate> {
    if population.is_empty() {
        return None;
    }

    let mut best = &population[rng.gen_range(0..population.len())];
    for _ in 1..tournament_size {
        let challenger = &population[rng.gen_range(0..population.len())];
        if challenger.fitness() < best.fitness() {
            best = challenger;
        }
    }

    Some(best)
}

/// Uniform crossover over the union of both parents' volunteers.
///
/// A volunteer held by both parents inherits from `parent1` with probability
/// `rate`, otherwise from `parent2`. A volunteer held by only one parent keeps
/// that parent's service.
pub fn uniform_crossover<R: Rng + ?Sized>(
    parent1: &Assignment,
    parent2: &Assignment,
    rate: f64,
    rng: &mut R,
) -> Assignment {
    let volunteers: BTreeSet<&String> = parent1.keys().chain(parent2.keys()).collect();

    volunteers
        .into_iter()
        .filter_map(|name| {
            let service = match (parent1.get(name), parent2.get(name)) {
                (Some(first), Some(second)) => {
                    if rng.gen::<f64>() < rate {
                        first
                    } else {
                        second
                    }
                }
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => return None,
            };
            Some((name.clone(), service.clone()))
        })
        .collect()
}

/// Each gene is independently reassigned, with probability `rate`, to a
/// uniformly drawn catalog service. Capacity is ignored here.
pub fn mutate_genes<R: Rng + ?Sized>(
    mut assignment: Assignment,
    rate: f64,
    catalog: &ServiceCatalog,
    rng: &mut R,
) -> Assignment {
    for service in assignment.values_mut() {
        if rng.gen::<f64>() < rate {
            if let Some(replacement) = catalog.services().choose(rng) {
                *service = replacement.clone();
            }
        }
    }
    assignment
}

/// Crossover producing a scored child
pub fn crossover<R: Rng + ?Sized>(
    parent1: &Candidate,
    parent2: &Candidate,
    rate: f64,
    roster: &Roster,
    rng: &mut R,
) -> Result<Candidate> {
    let genes = uniform_crossover(parent1.assignment(), parent2.assignment(), rate, rng);
    Candidate::new(genes, roster)
}

/// Mutation producing a freshly scored candidate; the input is left as is
pub fn mutate<R: Rng + ?Sized>(
    candidate: &Candidate,
    rate: f64,
    catalog: &ServiceCatalog,
    roster: &Roster,
    rng: &mut R,
) -> Result<Candidate> {
    let genes = mutate_genes(candidate.assignment().clone(), rate, catalog, rng);
    Candidate::new(genes, roster)
}
