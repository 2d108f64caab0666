//! Roster-to-worksheet row mapping and push helpers.
//!
//! Rows use the same column layout the roster was originally loaded from,
//! with skill and cert sets joined back to their comma-separated encoding.

use anyhow::Result;
use skyops_core::models::{Drone, Mission, Pilot};

use crate::client::SheetsClient;

const PILOT_WORKSHEET: &str = "Pilot_Roster";
const DRONE_WORKSHEET: &str = "Drone_Fleet";
const MISSION_WORKSHEET: &str = "Missions";

fn pilot_rows(pilots: &[Pilot]) -> Vec<Vec<String>> {
    let header = vec![
        "pilot_id",
        "name",
        "status",
        "location",
        "skills",
        "certifications",
        "daily_rate",
        "current_assignment",
    ];
    let mut rows: Vec<Vec<String>> = vec![header.into_iter().map(String::from).collect()];
    rows.extend(pilots.iter().map(|pilot| {
        vec![
            pilot.pilot_id.clone(),
            pilot.name.clone(),
            pilot.status.to_string(),
            pilot.location.clone(),
            pilot.skills.join(", "),
            pilot.certifications.join(", "),
            pilot.daily_rate.to_string(),
            pilot.current_assignment.clone().unwrap_or_default(),
        ]
    }));
    rows
}

fn drone_rows(drones: &[Drone]) -> Vec<Vec<String>> {
    let header = vec!["drone_id", "model", "weather_resistance", "maintenance_due"];
    let mut rows: Vec<Vec<String>> = vec![header.into_iter().map(String::from).collect()];
    rows.extend(drones.iter().map(|drone| {
        vec![
            drone.drone_id.clone(),
            drone.model.clone(),
            drone.weather_resistance.clone(),
            drone.maintenance_due.to_string(),
        ]
    }));
    rows
}

fn mission_rows(missions: &[Mission]) -> Vec<Vec<String>> {
    let header = vec![
        "project_id",
        "required_skills",
        "required_certs",
        "location",
        "start_date",
        "end_date",
        "budget",
        "weather_forecast",
        "priority",
    ];
    let mut rows: Vec<Vec<String>> = vec![header.into_iter().map(String::from).collect()];
    rows.extend(missions.iter().map(|mission| {
        vec![
            mission.project_id.clone(),
            mission.required_skills.join(", "),
            mission.required_certs.join(", "),
            mission.location.clone(),
            mission.start_date.to_string(),
            mission.end_date.to_string(),
            mission.budget.to_string(),
            mission.weather_forecast.clone(),
            mission.priority.to_string(),
        ]
    }));
    rows
}

/// Push the full pilot roster to its worksheet.
pub async fn push_pilot_roster(client: &SheetsClient, pilots: &[Pilot]) -> Result<u16> {
    let status = client
        .update_worksheet(PILOT_WORKSHEET, pilot_rows(pilots))
        .await?;
    tracing::debug!("Pushed {} pilot rows (HTTP {})", pilots.len(), status);
    Ok(status)
}

/// Push the drone fleet to its worksheet.
pub async fn push_drone_fleet(client: &SheetsClient, drones: &[Drone]) -> Result<u16> {
    let status = client
        .update_worksheet(DRONE_WORKSHEET, drone_rows(drones))
        .await?;
    tracing::debug!("Pushed {} drone rows (HTTP {})", drones.len(), status);
    Ok(status)
}

/// Push the mission board to its worksheet.
pub async fn push_mission_board(client: &SheetsClient, missions: &[Mission]) -> Result<u16> {
    let status = client
        .update_worksheet(MISSION_WORKSHEET, mission_rows(missions))
        .await?;
    tracing::debug!("Pushed {} mission rows (HTTP {})", missions.len(), status);
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skyops_core::models::PilotStatus;

    #[test]
    fn test_pilot_rows_round_trip_the_token_encoding() {
        let pilot = Pilot {
            pilot_id: "P1".into(),
            name: "Asha Rao".into(),
            status: PilotStatus::OnLeave,
            location: "Bangalore".into(),
            skills: vec!["Survey".into(), "Thermal".into()],
            certifications: vec![],
            daily_rate: 4_500.0,
            current_assignment: Some("PRJ1".into()),
        };
        let rows = pilot_rows(&[pilot]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], "On Leave");
        assert_eq!(rows[1][4], "Survey, Thermal");
        assert_eq!(
            skyops_core::split_tokens(&rows[1][4]),
            vec!["Survey", "Thermal"]
        );
    }

    #[test]
    fn test_mission_rows_format_dates_as_iso() {
        let mission = Mission {
            project_id: "PRJ1".into(),
            required_skills: vec!["Survey".into()],
            required_certs: vec![],
            location: "Bangalore".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            budget: 12_000.0,
            weather_forecast: "Clear".into(),
            priority: skyops_core::MissionPriority::Standard,
        };
        let rows = mission_rows(&[mission]);
        assert_eq!(rows[1][4], "2025-03-10");
        assert_eq!(rows[1][8], "Standard");
    }
}
