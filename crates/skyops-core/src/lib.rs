pub mod conflict;
pub mod error;
pub mod models;
pub mod reassign;
pub mod roster;

pub use conflict::{check_conflicts, Conflict, ConflictReport, ConflictRule};
pub use error::RosterError;
pub use models::{split_tokens, Drone, Mission, MissionPriority, Pilot, PilotStatus};
pub use reassign::{handle_urgent_reassignment, ReassignmentOutcome};
pub use roster::Roster;
