//! In-memory roster tables for pilots, drones, and missions.
//!
//! The roster is an explicitly owned value passed by reference into the
//! core operations; the caller decides its lifetime and any multi-session
//! isolation. Tables preserve load order, so full-table scans (and the
//! reassignment advisor's first-match pick) are deterministic.

use std::collections::HashSet;

use crate::error::RosterError;
use crate::models::{Drone, Mission, Pilot, PilotStatus};

/// The three record tables, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pilots: Vec<Pilot>,
    drones: Vec<Drone>,
    missions: Vec<Mission>,
}

impl Roster {
    /// Build a roster from pre-parsed records, enforcing the table
    /// invariants: unique identifiers, end date >= start date, and finite
    /// non-negative money fields.
    pub fn with_records(
        pilots: Vec<Pilot>,
        drones: Vec<Drone>,
        missions: Vec<Mission>,
    ) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for pilot in &pilots {
            if !seen.insert(pilot.pilot_id.clone()) {
                return Err(RosterError::DuplicateId {
                    kind: "pilot",
                    id: pilot.pilot_id.clone(),
                });
            }
            if !pilot.daily_rate.is_finite() || pilot.daily_rate < 0.0 {
                return Err(RosterError::InvalidAmount {
                    field: "daily_rate",
                    value: pilot.daily_rate,
                });
            }
        }

        let mut seen = HashSet::new();
        for drone in &drones {
            if !seen.insert(drone.drone_id.clone()) {
                return Err(RosterError::DuplicateId {
                    kind: "drone",
                    id: drone.drone_id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for mission in &missions {
            if !seen.insert(mission.project_id.clone()) {
                return Err(RosterError::DuplicateId {
                    kind: "mission",
                    id: mission.project_id.clone(),
                });
            }
            if mission.end_date < mission.start_date {
                return Err(RosterError::InvalidDateRange {
                    project_id: mission.project_id.clone(),
                    start_date: mission.start_date,
                    end_date: mission.end_date,
                });
            }
            if !mission.budget.is_finite() || mission.budget < 0.0 {
                return Err(RosterError::InvalidAmount {
                    field: "budget",
                    value: mission.budget,
                });
            }
        }

        Ok(Self {
            pilots,
            drones,
            missions,
        })
    }

    pub fn pilot(&self, pilot_id: &str) -> Result<&Pilot, RosterError> {
        self.pilots
            .iter()
            .find(|p| p.pilot_id == pilot_id)
            .ok_or_else(|| RosterError::PilotNotFound(pilot_id.to_string()))
    }

    pub fn drone(&self, drone_id: &str) -> Result<&Drone, RosterError> {
        self.drones
            .iter()
            .find(|d| d.drone_id == drone_id)
            .ok_or_else(|| RosterError::DroneNotFound(drone_id.to_string()))
    }

    pub fn mission(&self, project_id: &str) -> Result<&Mission, RosterError> {
        self.missions
            .iter()
            .find(|m| m.project_id == project_id)
            .ok_or_else(|| RosterError::MissionNotFound(project_id.to_string()))
    }

    /// Pilots in load order.
    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Set a pilot's status in place. The only mutation the core performs;
    /// any external write-back is the caller's concern and runs after this
    /// returns.
    pub fn update_pilot_status(
        &mut self,
        pilot_id: &str,
        status: PilotStatus,
    ) -> Result<&Pilot, RosterError> {
        let idx = self
            .pilots
            .iter()
            .position(|p| p.pilot_id == pilot_id)
            .ok_or_else(|| RosterError::PilotNotFound(pilot_id.to_string()))?;
        self.pilots[idx].status = status;
        Ok(&self.pilots[idx])
    }
}
