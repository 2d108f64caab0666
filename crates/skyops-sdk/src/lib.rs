//! skyops-sdk - typed client for the skyops coordination API.

pub mod client;

pub use client::{CheckAssignmentResponse, OpsClient, StatusUpdateResponse};
