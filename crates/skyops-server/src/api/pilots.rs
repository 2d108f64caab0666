//! Pilot status update handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use skyops_core::models::{Pilot, PilotStatus};
use skyops_core::RosterError;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Status label, matched case-insensitively ("Available", "Assigned",
    /// "On Leave").
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub status: String,
    pub message: String,
    pub pilot: Pilot,
}

pub async fn update_pilot_status(
    State(state): State<Arc<AppState>>,
    Path(pilot_id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let new_status: PilotStatus = req.status.parse().map_err(|err: RosterError| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
    })?;

    match state.update_pilot_status(&pilot_id, new_status).await {
        Ok(pilot) => {
            tracing::info!("Updated pilot {} status to {}", pilot.pilot_id, pilot.status);
            let message = format!(
                "Updated pilot {} status to {}.",
                pilot.pilot_id, pilot.status
            );
            Ok(Json(UpdateStatusResponse {
                status: "Success".to_string(),
                message,
                pilot,
            }))
        }
        Err(RosterError::PilotNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Pilot not found." })),
        )),
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )),
    }
}
