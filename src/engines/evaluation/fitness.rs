use crate::error::{AssignmentError, Result};
use crate::types::{Assignment, Roster, Volunteer};

/// Cost of a service the volunteer did not list at all
pub const UNRANKED_PENALTY: u32 = 5;

/// Preference rank of `service` for this volunteer, or the fixed penalty
pub fn dissatisfaction(volunteer: &Volunteer, service: &str) -> u32 {
    volunteer
        .rank_of(service)
        .map(|rank| rank as u32)
        .unwrap_or(UNRANKED_PENALTY)
}

/// Summed dissatisfaction over every gene. Lower is better, 0 means every
/// volunteer got their first choice.
pub fn evaluate(assignment: &Assignment, roster: &Roster) -> Result<u32> {
    let mut total = 0;

    for (name, service) in assignment {
        let volunteer = roster.get(name).ok_or_else(|| {
            AssignmentError::DataIntegrity(format!(
                "Assignment references unknown volunteer '{}'",
                name
            ))
        })?;
        total += dissatisfaction(volunteer, service);
    }

    Ok(total)
}
