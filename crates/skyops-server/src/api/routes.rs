//! REST API routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;

use crate::api::{assignments, pilots, request_id};
use crate::state::AppState;
use skyops_core::models::{Drone, Mission, Pilot};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/pilots", get(list_pilots))
        .route("/v1/pilots/:pilot_id", get(get_pilot))
        .route(
            "/v1/pilots/:pilot_id/status",
            patch(pilots::update_pilot_status),
        )
        .route("/v1/drones", get(list_drones))
        .route("/v1/drones/:drone_id", get(get_drone))
        .route("/v1/missions", get(list_missions))
        .route("/v1/missions/:project_id", get(get_mission))
        .route("/v1/assignments/check", post(assignments::check_assignment))
        .route(
            "/v1/reassignments/urgent",
            post(assignments::urgent_reassignment),
        )
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

// === Roster handlers ===

async fn list_pilots(State(state): State<Arc<AppState>>) -> Json<Vec<Pilot>> {
    Json(state.list_pilots())
}

async fn get_pilot(
    State(state): State<Arc<AppState>>,
    Path(pilot_id): Path<String>,
) -> Result<Json<Pilot>, StatusCode> {
    state.get_pilot(&pilot_id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_drones(State(state): State<Arc<AppState>>) -> Json<Vec<Drone>> {
    Json(state.list_drones())
}

async fn get_drone(
    State(state): State<Arc<AppState>>,
    Path(drone_id): Path<String>,
) -> Result<Json<Drone>, StatusCode> {
    state.get_drone(&drone_id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_missions(State(state): State<Arc<AppState>>) -> Json<Vec<Mission>> {
    Json(state.list_missions())
}

async fn get_mission(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<Mission>, StatusCode> {
    state
        .get_mission(&project_id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
