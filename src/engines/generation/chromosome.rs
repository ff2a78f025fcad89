use crate::engines::evaluation::fitness;
use crate::error::{AssignmentError, Result};
use crate::types::{Assignment, Roster};

/// One complete volunteer -> service assignment and its fitness.
///
/// Fitness is computed once, at construction. The assignment is only reachable
/// through shared references, so a `Candidate` can never carry a stale score;
/// operators that change genes build a new `Candidate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    assignment: Assignment,
    fitness: u32,
}

impl Candidate {
    /// Scores `assignment` against `roster`.
    ///
    /// Every roster volunteer must hold exactly one gene and every gene must
    /// belong to a roster volunteer; anything else is a data-integrity fault.
    pub fn new(assignment: Assignment, roster: &Roster) -> Result<Self> {
        let fitness = fitness::evaluate(&assignment, roster)?;

        if assignment.len() != roster.len() {
            let missing = roster
                .keys()
                .find(|name| !assignment.contains_key(*name))
                .cloned()
                .unwrap_or_default();
            return Err(AssignmentError::DataIntegrity(format!(
                "Volunteer '{}' has no assignment",
                missing
            )));
        }

        Ok(Self { assignment, fitness })
    }

    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn service_of(&self, volunteer: &str) -> Option<&str> {
        self.assignment.get(volunteer).map(String::as_str)
    }

    pub fn is_perfect(&self) -> bool {
        self.fitness == 0
    }
}
