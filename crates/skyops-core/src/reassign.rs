//! Urgent-mission preemption advisor.
//!
//! Scans the pilot table for the first pilot who can be pulled off a
//! Standard-priority assignment to service an urgent mission. First match
//! in table order wins; there is no ranking. The advisor only recommends,
//! it never reassigns anyone itself.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{MissionPriority, PilotStatus};
use crate::roster::Roster;

/// Outcome of an urgent-reassignment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ReassignmentOutcome {
    Success {
        recommendation: String,
        pilot_id: String,
        from_project: String,
        to_project: String,
    },
    Failed {
        reason: String,
    },
}

impl ReassignmentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReassignmentOutcome::Success { .. })
    }

    fn failed(reason: impl Into<String>) -> Self {
        ReassignmentOutcome::Failed {
            reason: reason.into(),
        }
    }
}

/// Propose a pilot to preempt for the given urgent mission.
///
/// Only pilots whose current assignment is a Standard-priority mission are
/// eligible; preempting another urgent mission would just move the
/// shortfall. An unknown project ID propagates as a lookup error for the
/// boundary to report.
pub fn handle_urgent_reassignment(
    roster: &Roster,
    project_id: &str,
) -> Result<ReassignmentOutcome, RosterError> {
    let mission = roster.mission(project_id)?;

    if mission.priority != MissionPriority::Urgent {
        return Ok(ReassignmentOutcome::failed(format!(
            "Mission {} is not urgent.",
            mission.project_id
        )));
    }

    let candidate = roster.pilots().iter().find(|pilot| {
        if pilot.status != PilotStatus::Assigned {
            return false;
        }
        pilot.current_assignment.as_deref().map_or(false, |current| {
            roster
                .mission(current)
                .map_or(false, |m| m.priority == MissionPriority::Standard)
        })
    });

    let Some(pilot) = candidate else {
        return Ok(ReassignmentOutcome::failed(
            "No preemptable standard assignments found.",
        ));
    };

    // Guarded by the candidate filter above.
    let from_project = pilot.current_assignment.clone().unwrap_or_default();

    Ok(ReassignmentOutcome::Success {
        recommendation: format!(
            "Preempt pilot {} from {} and reassign to {}.",
            pilot.name, from_project, mission.project_id
        ),
        pilot_id: pilot.pilot_id.clone(),
        from_project,
        to_project: mission.project_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mission, Pilot};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pilot(id: &str, status: PilotStatus, assignment: Option<&str>) -> Pilot {
        Pilot {
            pilot_id: id.to_string(),
            name: format!("Pilot {id}"),
            status,
            location: "Bangalore".into(),
            skills: vec!["Survey".into()],
            certifications: vec!["DGCA".into()],
            daily_rate: 4_000.0,
            current_assignment: assignment.map(str::to_string),
        }
    }

    fn mission(id: &str, priority: MissionPriority) -> Mission {
        Mission {
            project_id: id.to_string(),
            required_skills: vec![],
            required_certs: vec![],
            location: "Bangalore".into(),
            start_date: date(2025, 3, 10),
            end_date: date(2025, 3, 12),
            budget: 50_000.0,
            weather_forecast: "Clear".into(),
            priority,
        }
    }

    #[test]
    fn test_standard_mission_is_never_reassigned() {
        let roster = Roster::with_records(
            vec![pilot("P1", PilotStatus::Assigned, Some("PRJ-STD"))],
            vec![],
            vec![
                mission("PRJ-STD", MissionPriority::Standard),
                mission("PRJ-OTHER", MissionPriority::Standard),
            ],
        )
        .unwrap();
        let outcome = handle_urgent_reassignment(&roster, "PRJ-OTHER").unwrap();
        match outcome {
            ReassignmentOutcome::Failed { reason } => {
                assert!(reason.contains("not urgent"), "reason: {reason}")
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_first_standard_assignment_in_table_order_wins() {
        let roster = Roster::with_records(
            vec![
                pilot("P1", PilotStatus::Available, None),
                pilot("P2", PilotStatus::Assigned, Some("PRJ-A")),
                pilot("P3", PilotStatus::Assigned, Some("PRJ-B")),
            ],
            vec![],
            vec![
                mission("PRJ-A", MissionPriority::Standard),
                mission("PRJ-B", MissionPriority::Standard),
                mission("PRJ-HOT", MissionPriority::Urgent),
            ],
        )
        .unwrap();
        let outcome = handle_urgent_reassignment(&roster, "PRJ-HOT").unwrap();
        match outcome {
            ReassignmentOutcome::Success {
                pilot_id,
                from_project,
                to_project,
                recommendation,
            } => {
                assert_eq!(pilot_id, "P2");
                assert_eq!(from_project, "PRJ-A");
                assert_eq!(to_project, "PRJ-HOT");
                assert!(recommendation.contains("Pilot P2"));
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_urgent_assignments_are_not_preempted() {
        // The only assigned pilot is already on an urgent mission; pulling
        // them would trade one urgent gap for another.
        let roster = Roster::with_records(
            vec![pilot("P1", PilotStatus::Assigned, Some("PRJ-HOT1"))],
            vec![],
            vec![
                mission("PRJ-HOT1", MissionPriority::Urgent),
                mission("PRJ-HOT2", MissionPriority::Urgent),
            ],
        )
        .unwrap();
        let outcome = handle_urgent_reassignment(&roster, "PRJ-HOT2").unwrap();
        match outcome {
            ReassignmentOutcome::Failed { reason } => {
                assert!(reason.contains("No preemptable"), "reason: {reason}")
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_roster_reports_no_candidates() {
        let roster = Roster::with_records(
            vec![pilot("P1", PilotStatus::Available, None)],
            vec![],
            vec![mission("PRJ-HOT", MissionPriority::Urgent)],
        )
        .unwrap();
        let outcome = handle_urgent_reassignment(&roster, "PRJ-HOT").unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_unknown_project_is_a_lookup_error() {
        let roster = Roster::with_records(vec![], vec![], vec![]).unwrap();
        let err = handle_urgent_reassignment(&roster, "NOPE").unwrap_err();
        assert!(matches!(err, RosterError::MissionNotFound(_)));
    }
}
