//! skyops-sheets - Roster spreadsheet write-back client.
//!
//! Handles all communication with the remote worksheet service that
//! mirrors the in-memory roster tables.

pub mod client;
pub mod sync_roster;

pub use client::SheetsClient;
pub use sync_roster::{push_drone_fleet, push_mission_board, push_pilot_roster};
