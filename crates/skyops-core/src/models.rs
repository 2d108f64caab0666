//! Core data models for the operations coordinator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// A pilot on the operations roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    pub pilot_id: String,
    pub name: String,
    pub status: PilotStatus,
    pub location: String,
    /// Skill tokens, parsed once from the roster's comma-separated encoding.
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    /// Day rate in the operating currency.
    pub daily_rate: f64,
    /// Project ID of the mission this pilot is currently on, if any.
    #[serde(default)]
    pub current_assignment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilotStatus {
    Available,
    Assigned,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl fmt::Display for PilotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PilotStatus::Available => "Available",
            PilotStatus::Assigned => "Assigned",
            PilotStatus::OnLeave => "On Leave",
        };
        f.write_str(label)
    }
}

impl FromStr for PilotStatus {
    type Err = RosterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "available" => Ok(PilotStatus::Available),
            "assigned" => Ok(PilotStatus::Assigned),
            "on leave" => Ok(PilotStatus::OnLeave),
            _ => Err(RosterError::InvalidStatus(raw.to_string())),
        }
    }
}

/// An aircraft in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    pub drone_id: String,
    pub model: String,
    /// Free-text weather rating, e.g. "All-weather, rain-rated".
    pub weather_resistance: String,
    pub maintenance_due: NaiveDate,
}

/// A mission on the project board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub project_id: String,
    pub required_skills: Vec<String>,
    pub required_certs: Vec<String>,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total mission budget in the operating currency.
    pub budget: f64,
    /// Free-text forecast, e.g. "Rainy" or "Clear".
    pub weather_forecast: String,
    pub priority: MissionPriority,
}

impl Mission {
    /// Inclusive mission length in days (a one-day mission is 1).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPriority {
    Standard,
    Urgent,
}

impl fmt::Display for MissionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissionPriority::Standard => "Standard",
            MissionPriority::Urgent => "Urgent",
        };
        f.write_str(label)
    }
}

impl FromStr for MissionPriority {
    type Err = RosterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "standard" => Ok(MissionPriority::Standard),
            "urgent" => Ok(MissionPriority::Urgent),
            _ => Err(RosterError::InvalidPriority(raw.to_string())),
        }
    }
}

/// Split a comma-separated token string, trimming whitespace around each
/// token and dropping empties. An empty or whitespace-only input yields an
/// empty set, so a mission with no required certs requires nothing.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
