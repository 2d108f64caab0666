//! Demo roster for fresh databases.

use anyhow::Result;
use chrono::NaiveDate;
use skyops_core::models::{Drone, Mission, MissionPriority, Pilot, PilotStatus};
use skyops_core::split_tokens;
use sqlx::SqlitePool;
use tracing::info;

use super::{drones, missions, pilots};

/// True when none of the roster tables have any rows yet.
pub async fn tables_empty(pool: &SqlitePool) -> Result<bool> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM pilots) + (SELECT COUNT(*) FROM drones) + (SELECT COUNT(*) FROM missions)",
    )
    .fetch_one(pool)
    .await?;
    Ok(count == 0)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn demo_pilots() -> Vec<Pilot> {
    vec![
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
    ]
}

fn demo_drones() -> Vec<Drone> {
    vec![
        Drone {
            drone_id: "D001".into(),
            model: "Falcon V2".into(),
            weather_resistance: "All-weather, rain-rated".into(),
            maintenance_due: date(2026, 12, 15),
        },
        Drone {
            drone_id: "D002".into(),
            model: "Kite S1".into(),
            weather_resistance: "IP43, fair weather only".into(),
            maintenance_due: date(2026, 8, 20),
        },
    ]
}

fn demo_missions() -> Vec<Mission> {
    vec![
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
    ]
}

/// Insert the demo roster. Callers gate this on `tables_empty`.
pub async fn seed_demo_roster(pool: &SqlitePool) -> Result<()> {
    for pilot in demo_pilots() {
        pilots::upsert_pilot(pool, &pilot).await?;
    }
    for drone in demo_drones() {
        drones::upsert_drone(pool, &drone).await?;
    }
    for mission in demo_missions() {
        missions::upsert_mission(pool, &mission).await?;
    }
    info!("Seeded demo roster");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;

    #[tokio::test]
    async fn test_seed_round_trips_through_sqlite() {
        let db = init_database(":memory:", 1).await.unwrap();
        assert!(tables_empty(db.pool()).await.unwrap());

        seed_demo_roster(db.pool()).await.unwrap();
        assert!(!tables_empty(db.pool()).await.unwrap());

        let pilots = pilots::load_all_pilots(db.pool()).await.unwrap();
        assert_eq!(pilots.len(), 3);
        assert_eq!(pilots[0].pilot_id, "P001");
        assert_eq!(pilots[1].current_assignment.as_deref(), Some("PRJ002"));

        let missions = missions::load_all_missions(db.pool()).await.unwrap();
        assert_eq!(missions.len(), 3);
        assert_eq!(missions[0].required_skills, vec!["Survey"]);
    }
}
