//! HTTP client for the skyops server.

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use skyops_core::{Conflict, ReassignmentOutcome};
use skyops_core::models::{Drone, Mission, Pilot};

/// Client for the skyops coordination API.
pub struct OpsClient {
    pub(crate) base_url: String,
    pub(crate) client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct CheckAssignmentRequest<'a> {
    pilot_id: &'a str,
    drone_id: &'a str,
    project_id: &'a str,
}

/// Result of a conflict check, as returned by the server.
#[derive(Debug, Deserialize)]
pub struct CheckAssignmentResponse {
    pub clear: bool,
    pub pilot_id: String,
    pub drone_id: String,
    pub project_id: String,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Serialize)]
struct UrgentReassignmentRequest<'a> {
    project_id: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateStatusRequest<'a> {
    status: &'a str,
}

/// Confirmation of a pilot status update.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateResponse {
    pub status: String,
    pub message: String,
    pub pilot: Pilot,
}

impl OpsClient {
    /// Create a new client against the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the full pilot roster.
    pub async fn list_pilots(&self) -> Result<Vec<Pilot>> {
        let url = format!("{}/v1/pilots", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Failed to list pilots: {}", response.status());
        }
        Ok(response.json().await?)
    }

    /// Fetch the drone fleet.
    pub async fn list_drones(&self) -> Result<Vec<Drone>> {
        let url = format!("{}/v1/drones", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Failed to list drones: {}", response.status());
        }
        Ok(response.json().await?)
    }

    /// Fetch the mission board.
    pub async fn list_missions(&self) -> Result<Vec<Mission>> {
        let url = format!("{}/v1/missions", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Failed to list missions: {}", response.status());
        }
        Ok(response.json().await?)
    }

    /// Check one pilot/drone/mission combination for conflicts.
    ///
    /// An identifier the server cannot resolve surfaces as an error carrying
    /// the recovered boundary message.
    pub async fn check_assignment(
        &self,
        pilot_id: &str,
        drone_id: &str,
        project_id: &str,
    ) -> Result<CheckAssignmentResponse> {
        let url = format!("{}/v1/assignments/check", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CheckAssignmentRequest {
                pilot_id,
                drone_id,
                project_id,
            })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            anyhow::bail!("Invalid IDs provided.");
        }
        if !response.status().is_success() {
            anyhow::bail!("Assignment check failed: {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Ask for a preemption proposal for an urgent mission.
    pub async fn urgent_reassignment(&self, project_id: &str) -> Result<ReassignmentOutcome> {
        let url = format!("{}/v1/reassignments/urgent", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&UrgentReassignmentRequest { project_id })
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Reassignment request failed: {}", response.status());
        }

        Ok(response.json().await?)
    }

    /// Update a pilot's roster status.
    pub async fn update_pilot_status(
        &self,
        pilot_id: &str,
        status: &str,
    ) -> Result<StatusUpdateResponse> {
        let url = format!("{}/v1/pilots/{}/status", self.base_url, pilot_id);
        let response = self
            .client
            .patch(&url)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            anyhow::bail!("Pilot not found.");
        }
        if !response.status().is_success() {
            anyhow::bail!("Status update failed: {}", response.status());
        }

        Ok(response.json().await?)
    }
}
