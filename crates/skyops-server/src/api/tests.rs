use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};
use chrono::NaiveDate;
use skyops_core::models::{Drone, Mission, MissionPriority, Pilot, PilotStatus};
use skyops_core::{split_tokens, Roster};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        database_path: ":memory:".to_string(),
        database_max_connections: 1,
        seed_demo_data: false,
        sheets_url: String::new(),
        sheets_sheet_id: String::new(),
        sheets_token: String::new(),
    }
}

fn test_roster() -> Roster {
    let pilots = vec![
        Pilot {
            pilot_id: "P001".into(),
            name: "Arjun Mehta".into(),
            status: PilotStatus::Available,
            location: "Bangalore".into(),
            skills: split_tokens("Survey, Mapping"),
            certifications: split_tokens("DGCA Remote Pilot"),
            daily_rate: 4_500.0,
            current_assignment: None,
        },
        Pilot {
            pilot_id: "P002".into(),
            name: "Sana Iyer".into(),
            status: PilotStatus::Assigned,
            location: "Mumbai".into(),
            skills: split_tokens("Thermal, Inspection"),
            certifications: split_tokens("DGCA Remote Pilot, Night Ops"),
            daily_rate: 6_000.0,
            current_assignment: Some("PRJ002".into()),
        },
        Pilot {
            pilot_id: "P003".into(),
            name: "Dev Kulkarni".into(),
            status: PilotStatus::OnLeave,
            location: "Delhi".into(),
            skills: split_tokens("Survey, Thermal"),
            certifications: split_tokens("DGCA Remote Pilot"),
            daily_rate: 5_000.0,
            current_assignment: None,
        },
    ];
    let drones = vec![
        Drone {
            drone_id: "D001".into(),
            model: "Falcon V2".into(),
            weather_resistance: "All-weather, rain-rated".into(),
            maintenance_due: date(2026, 12, 15),
        },
        Drone {
            drone_id: "D002".into(),
            model: "Kite S1".into(),
            weather_resistance: "IP43, fair skies only".into(),
            maintenance_due: date(2026, 8, 20),
        },
    ];
    let missions = vec![
        Mission {
            project_id: "PRJ001".into(),
            required_skills: split_tokens("Survey"),
            required_certs: split_tokens("DGCA Remote Pilot"),
            location: "Bangalore".into(),
            start_date: date(2026, 9, 1),
            end_date: date(2026, 9, 5),
            budget: 30_000.0,
            weather_forecast: "Clear".into(),
            priority: MissionPriority::Standard,
        },
        Mission {
            project_id: "PRJ002".into(),
            required_skills: split_tokens("Thermal"),
            required_certs: split_tokens("DGCA Remote Pilot"),
            location: "Mumbai".into(),
            start_date: date(2026, 9, 10),
            end_date: date(2026, 9, 12),
            budget: 25_000.0,
            weather_forecast: "Rainy".into(),
            priority: MissionPriority::Standard,
        },
        Mission {
            project_id: "PRJ003".into(),
            required_skills: split_tokens("Survey, Mapping"),
            required_certs: split_tokens("DGCA Remote Pilot"),
            location: "Bangalore".into(),
            start_date: date(2026, 9, 3),
            end_date: date(2026, 9, 4),
            budget: 12_000.0,
            weather_forecast: "Clear".into(),
            priority: MissionPriority::Urgent,
        },
    ];
    Roster::with_records(pilots, drones, missions).expect("valid fixture roster")
}

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::with_roster(test_roster(), test_config()));
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn check_assignment_clear() {
    let (app, _state) = setup_app();

    let req = post_json(
        "/v1/assignments/check",
        json!({"pilot_id": "P001", "drone_id": "D001", "project_id": "PRJ001"}),
    );
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["clear"], json!(true));
    assert_eq!(body["conflicts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn check_assignment_reports_conflicts_in_rule_order() {
    let (app, _state) = setup_app();

    // On-leave pilot in the wrong city, fair-weather drone due for
    // maintenance, rainy mission.
    let req = post_json(
        "/v1/assignments/check",
        json!({"pilot_id": "P003", "drone_id": "D002", "project_id": "PRJ002"}),
    );
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["clear"], json!(false));
    let conflicts = body["conflicts"].as_array().unwrap();
    let rules: Vec<&str> = conflicts
        .iter()
        .map(|c| c["rule"].as_str().unwrap())
        .collect();
    assert_eq!(
        rules,
        vec!["availability", "location", "weather", "maintenance"]
    );
    assert!(conflicts[0]["message"]
        .as_str()
        .unwrap()
        .contains("On Leave"));
}

#[tokio::test]
async fn check_assignment_rejects_invalid_ids() {
    let (app, _state) = setup_app();

    let req = post_json(
        "/v1/assignments/check",
        json!({"pilot_id": "P001", "drone_id": "D001", "project_id": "NOPE"}),
    );
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = read_json(res).await;
    assert_eq!(body["error"], json!("Invalid IDs provided."));
}

#[tokio::test]
async fn urgent_reassignment_proposes_first_standard_assignment() {
    let (app, _state) = setup_app();

    let req = post_json("/v1/reassignments/urgent", json!({"project_id": "PRJ003"}));
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["status"], json!("Success"));
    assert_eq!(body["pilot_id"], json!("P002"));
    assert_eq!(body["from_project"], json!("PRJ002"));
    assert_eq!(body["to_project"], json!("PRJ003"));
    assert!(body["recommendation"]
        .as_str()
        .unwrap()
        .contains("Sana Iyer"));
}

#[tokio::test]
async fn urgent_reassignment_refuses_standard_missions() {
    let (app, _state) = setup_app();

    let req = post_json("/v1/reassignments/urgent", json!({"project_id": "PRJ001"}));
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["status"], json!("Failed"));
    assert!(body["reason"].as_str().unwrap().contains("not urgent"));
}

#[tokio::test]
async fn urgent_reassignment_reports_unknown_project_as_failed() {
    let (app, _state) = setup_app();

    let req = post_json("/v1/reassignments/urgent", json!({"project_id": "NOPE"}));
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["status"], json!("Failed"));
    assert!(body["reason"].as_str().unwrap().contains("Invalid project"));
}

#[tokio::test]
async fn status_update_flows_into_availability_check() {
    let (app, _state) = setup_app();

    let patch_req = Request::builder()
        .method("PATCH")
        .uri("/v1/pilots/P001/status")
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "On Leave"}).to_string()))
        .unwrap();
    let res = app.clone().oneshot(patch_req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["status"], json!("Success"));
    assert_eq!(body["pilot"]["status"], json!("On Leave"));

    let req = post_json(
        "/v1/assignments/check",
        json!({"pilot_id": "P001", "drone_id": "D001", "project_id": "PRJ001"}),
    );
    let res = app.oneshot(req).await.unwrap();
    let body = read_json(res).await;
    assert_eq!(body["clear"], json!(false));
    assert_eq!(body["conflicts"][0]["rule"], json!("availability"));
}

#[tokio::test]
async fn status_update_unknown_pilot_is_not_found() {
    let (app, _state) = setup_app();

    let req = Request::builder()
        .method("PATCH")
        .uri("/v1/pilots/P999/status")
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "Available"}).to_string()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["error"], json!("Pilot not found."));
}

#[tokio::test]
async fn status_update_rejects_unknown_label() {
    let (app, _state) = setup_app();

    let req = Request::builder()
        .method("PATCH")
        .uri("/v1/pilots/P001/status")
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "Retired"}).to_string()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn roster_listings_and_lookups() {
    let (app, _state) = setup_app();

    let res = app
        .clone()
        .oneshot(Request::get("/v1/pilots").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let res = app
        .clone()
        .oneshot(
            Request::get("/v1/missions/PRJ003")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["priority"], json!("Urgent"));

    let res = app
        .oneshot(Request::get("/v1/drones/D999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
