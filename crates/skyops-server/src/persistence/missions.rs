//! Mission persistence operations.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use skyops_core::models::{Mission, MissionPriority};
use skyops_core::split_tokens;
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Debug, sqlx::FromRow)]
struct MissionRow {
    project_id: String,
    required_skills: String,
    required_certs: String,
    location: String,
    start_date: String,
    end_date: String,
    budget: f64,
    weather_forecast: String,
    priority: String,
}

impl TryFrom<MissionRow> for Mission {
    type Error = anyhow::Error;

    fn try_from(row: MissionRow) -> Result<Self> {
        let start_date: NaiveDate = row
            .start_date
            .parse()
            .with_context(|| format!("mission {} start_date", row.project_id))?;
        let end_date: NaiveDate = row
            .end_date
            .parse()
            .with_context(|| format!("mission {} end_date", row.project_id))?;
        let priority: MissionPriority = row
            .priority
            .parse()
            .with_context(|| format!("mission {}", row.project_id))?;
        Ok(Mission {
            project_id: row.project_id,
            required_skills: split_tokens(&row.required_skills),
            required_certs: split_tokens(&row.required_certs),
            location: row.location,
            start_date,
            end_date,
            budget: row.budget,
            weather_forecast: row.weather_forecast,
            priority,
        })
    }
}

/// Load the mission board in table order, skipping malformed rows.
pub async fn load_all_missions(pool: &SqlitePool) -> Result<Vec<Mission>> {
    let rows = sqlx::query_as::<_, MissionRow>(
        "SELECT project_id, required_skills, required_certs, location, start_date, end_date, budget, weather_forecast, priority FROM missions ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut missions = Vec::with_capacity(rows.len());
    for row in rows {
        let project_id = row.project_id.clone();
        match Mission::try_from(row) {
            Ok(mission) => missions.push(mission),
            Err(err) => warn!("Skipping malformed mission row {}: {}", project_id, err),
        }
    }
    Ok(missions)
}

/// Upsert a mission into the database.
pub async fn upsert_mission(pool: &SqlitePool, mission: &Mission) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO missions (project_id, required_skills, required_certs, location, start_date, end_date, budget, weather_forecast, priority)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(project_id) DO UPDATE SET
            required_skills = ?2, required_certs = ?3, location = ?4,
            start_date = ?5, end_date = ?6, budget = ?7,
            weather_forecast = ?8, priority = ?9
        "#,
    )
    .bind(&mission.project_id)
    .bind(mission.required_skills.join(", "))
    .bind(mission.required_certs.join(", "))
    .bind(&mission.location)
    .bind(mission.start_date.to_string())
    .bind(mission.end_date.to_string())
    .bind(mission.budget)
    .bind(&mission.weather_forecast)
    .bind(mission.priority.to_string())
    .execute(pool)
    .await?;

    Ok(())
}
