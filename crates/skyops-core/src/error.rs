//! Error types for roster lookups and record validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the roster store and the core operations.
///
/// Lookup variants mean an identifier did not resolve to a record; callers
/// recover them at the boundary as a reported result (never a crash).
/// The remaining variants are validation failures raised while ingesting
/// records.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("pilot '{0}' not found")]
    PilotNotFound(String),

    #[error("drone '{0}' not found")]
    DroneNotFound(String),

    #[error("mission '{0}' not found")]
    MissionNotFound(String),

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("invalid {field} date '{value}'")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid {field} amount {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("mission '{project_id}' ends {end_date} before it starts {start_date}")]
    InvalidDateRange {
        project_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("invalid pilot status '{0}'")]
    InvalidStatus(String),

    #[error("invalid mission priority '{0}'")]
    InvalidPriority(String),
}

impl RosterError {
    /// True when the error is an identifier that failed to resolve.
    /// These are the fail-fast cases the boundary reports as a single
    /// "Invalid IDs provided." message.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            RosterError::PilotNotFound(_)
                | RosterError::DroneNotFound(_)
                | RosterError::MissionNotFound(_)
        )
    }
}
