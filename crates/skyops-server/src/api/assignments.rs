//! Assignment check and urgent reassignment handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use skyops_core::{ConflictReport, ReassignmentOutcome, RosterError};

#[derive(Debug, Deserialize)]
pub struct CheckAssignmentRequest {
    pub pilot_id: String,
    pub drone_id: String,
    pub project_id: String,
}

#[derive(Debug, Serialize)]
pub struct CheckAssignmentResponse {
    pub clear: bool,
    #[serde(flatten)]
    pub report: ConflictReport,
}

/// Check one pilot/drone/mission combination.
///
/// An identifier that fails to resolve aborts the evaluation; the boundary
/// reports it as the single recovered message rather than a partial check.
pub async fn check_assignment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckAssignmentRequest>,
) -> Result<Json<CheckAssignmentResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.check_conflicts(&req.pilot_id, &req.drone_id, &req.project_id) {
        Ok(report) => {
            tracing::info!(
                "Checked {}/{}/{}: {} conflicts",
                report.pilot_id,
                report.drone_id,
                report.project_id,
                report.conflicts.len()
            );
            Ok(Json(CheckAssignmentResponse {
                clear: report.is_clear(),
                report,
            }))
        }
        Err(err) if err.is_lookup() => {
            tracing::warn!("Assignment check with unresolved id: {}", err);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Invalid IDs provided.",
                    "detail": err.to_string(),
                })),
            ))
        }
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct UrgentReassignmentRequest {
    pub project_id: String,
}

/// Propose a preemption for an urgent mission.
///
/// An unknown project is a designed negative outcome here, not a transport
/// error: callers get a Failed outcome they can show as-is.
pub async fn urgent_reassignment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UrgentReassignmentRequest>,
) -> Result<Json<ReassignmentOutcome>, (StatusCode, Json<serde_json::Value>)> {
    match state.urgent_reassignment(&req.project_id) {
        Ok(outcome) => {
            if let ReassignmentOutcome::Success { pilot_id, .. } = &outcome {
                tracing::info!(
                    "Reassignment proposed for {}: pilot {}",
                    req.project_id,
                    pilot_id
                );
            }
            Ok(Json(outcome))
        }
        Err(RosterError::MissionNotFound(project_id)) => Ok(Json(ReassignmentOutcome::Failed {
            reason: format!("Invalid project ID '{}'.", project_id),
        })),
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )),
    }
}
