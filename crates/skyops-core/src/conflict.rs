//! Assignment conflict detection.
//!
//! Cross-references a pilot, a drone, and a mission against the six
//! assignment-validity rule classes and collects human-readable conflict
//! messages. Pure read-only evaluation over the roster tables; lookups
//! fail fast before any rule runs.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{Drone, Mission, Pilot, PilotStatus};
use crate::roster::Roster;

/// The assignment rule a conflict was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictRule {
    Availability,
    Skills,
    Certifications,
    Location,
    Budget,
    Weather,
    Maintenance,
}

/// A single violated assignment rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub rule: ConflictRule,
    pub message: String,
}

/// Result of checking one pilot/drone/mission combination.
///
/// Conflicts appear in rule-evaluation order: availability, skills,
/// certifications, location, budget, weather, maintenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub pilot_id: String,
    pub drone_id: String,
    pub project_id: String,
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// True when the assignment is safe to make.
    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.conflicts.iter().map(|c| c.message.clone()).collect()
    }
}

/// Check one candidate assignment.
///
/// Resolves the three identifiers first; a miss on any of them aborts the
/// whole evaluation with a lookup error (a missing record makes the rule
/// checks meaningless). Given resolved records, every rule is evaluated
/// regardless of earlier failures, so the report lists all violations at
/// once.
pub fn check_conflicts(
    roster: &Roster,
    pilot_id: &str,
    drone_id: &str,
    project_id: &str,
) -> Result<ConflictReport, RosterError> {
    let pilot = roster.pilot(pilot_id)?;
    let drone = roster.drone(drone_id)?;
    let mission = roster.mission(project_id)?;

    let mut conflicts = Vec::new();
    conflicts.extend(check_availability(pilot));
    conflicts.extend(check_skills(pilot, mission));
    conflicts.extend(check_certifications(pilot, mission));
    conflicts.extend(check_location(pilot, mission));
    conflicts.extend(check_budget(pilot, mission));
    conflicts.extend(check_weather(drone, mission));
    conflicts.extend(check_maintenance(drone, mission));

    Ok(ConflictReport {
        pilot_id: pilot.pilot_id.clone(),
        drone_id: drone.drone_id.clone(),
        project_id: mission.project_id.clone(),
        conflicts,
    })
}

fn check_availability(pilot: &Pilot) -> Option<Conflict> {
    if pilot.status == PilotStatus::Available {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Availability,
        message: format!("Pilot {} is currently {}.", pilot.name, pilot.status),
    })
}

/// Missing tokens from `required` that `held` does not cover.
/// Membership is a case-sensitive exact match; extra held tokens are fine.
fn missing_tokens<'a>(required: &'a [String], held: &[String]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|token| !held.contains(token))
        .map(String::as_str)
        .collect()
}

fn check_skills(pilot: &Pilot, mission: &Mission) -> Option<Conflict> {
    let missing = missing_tokens(&mission.required_skills, &pilot.skills);
    if missing.is_empty() {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Skills,
        message: format!(
            "Skill mismatch: mission requires {}; pilot {} lacks {}.",
            mission.required_skills.join(", "),
            pilot.name,
            missing.join(", ")
        ),
    })
}

fn check_certifications(pilot: &Pilot, mission: &Mission) -> Option<Conflict> {
    let missing = missing_tokens(&mission.required_certs, &pilot.certifications);
    if missing.is_empty() {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Certifications,
        message: format!(
            "Certification mismatch: mission requires {}; pilot {} lacks {}.",
            mission.required_certs.join(", "),
            pilot.name,
            missing.join(", ")
        ),
    })
}

fn check_location(pilot: &Pilot, mission: &Mission) -> Option<Conflict> {
    if pilot.location == mission.location {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Location,
        message: format!(
            "Location mismatch: pilot {} is in {}, mission is in {}.",
            pilot.name, pilot.location, mission.location
        ),
    })
}

fn check_budget(pilot: &Pilot, mission: &Mission) -> Option<Conflict> {
    let days = mission.duration_days();
    let total_cost = days as f64 * pilot.daily_rate;
    // A cost exactly equal to the budget is not an overrun.
    if total_cost <= mission.budget {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Budget,
        message: format!(
            "Budget overrun: pilot cost {} for {} days exceeds mission budget {}.",
            total_cost, days, mission.budget
        ),
    })
}

/// A drone counts as rain-rated when its free-text descriptor mentions rain
/// without negating it ("no rain rating" is not a rating).
fn rain_rated(weather_resistance: &str) -> bool {
    let lower = weather_resistance.to_lowercase();
    if lower.contains("no rain") || lower.contains("not rain") {
        return false;
    }
    lower.contains("rain")
}

fn check_weather(drone: &Drone, mission: &Mission) -> Option<Conflict> {
    if !mission.weather_forecast.eq_ignore_ascii_case("rainy") {
        return None;
    }
    if rain_rated(&drone.weather_resistance) {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Weather,
        message: format!(
            "Weather risk: drone {} ({}) is not rated for the {} forecast.",
            drone.model, drone.weather_resistance, mission.weather_forecast
        ),
    })
}

fn check_maintenance(drone: &Drone, mission: &Mission) -> Option<Conflict> {
    // Maintenance falling on the start date itself still blocks the mission.
    if drone.maintenance_due > mission.start_date {
        return None;
    }
    Some(Conflict {
        rule: ConflictRule::Maintenance,
        message: format!(
            "Maintenance due: drone {} requires maintenance by {}, before the mission starts on {}.",
            drone.model, drone.maintenance_due, mission.start_date
        ),
    })
}
