//! Pilot persistence operations.

use anyhow::{Context, Result};
use skyops_core::models::{Pilot, PilotStatus};
use skyops_core::split_tokens;
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Debug, sqlx::FromRow)]
struct PilotRow {
    pilot_id: String,
    name: String,
    status: String,
    location: String,
    skills: String,
    certifications: String,
    daily_rate: f64,
    current_assignment: Option<String>,
}

impl TryFrom<PilotRow> for Pilot {
    type Error = anyhow::Error;

    fn try_from(row: PilotRow) -> Result<Self> {
        let status: PilotStatus = row
            .status
            .parse()
            .with_context(|| format!("pilot {}", row.pilot_id))?;
        Ok(Pilot {
            pilot_id: row.pilot_id,
            name: row.name,
            status,
            location: row.location,
            skills: split_tokens(&row.skills),
            certifications: split_tokens(&row.certifications),
            daily_rate: row.daily_rate,
            current_assignment: row
                .current_assignment
                .filter(|value| !value.trim().is_empty()),
        })
    }
}

/// Load all pilots in table order. Malformed rows are logged and skipped so
/// one bad record never takes the roster down.
pub async fn load_all_pilots(pool: &SqlitePool) -> Result<Vec<Pilot>> {
    let rows = sqlx::query_as::<_, PilotRow>(
        "SELECT pilot_id, name, status, location, skills, certifications, daily_rate, current_assignment FROM pilots ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut pilots = Vec::with_capacity(rows.len());
    for row in rows {
        let pilot_id = row.pilot_id.clone();
        match Pilot::try_from(row) {
            Ok(pilot) => pilots.push(pilot),
            Err(err) => warn!("Skipping malformed pilot row {}: {}", pilot_id, err),
        }
    }
    Ok(pilots)
}

/// Upsert a pilot into the database.
pub async fn upsert_pilot(pool: &SqlitePool, pilot: &Pilot) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO pilots (pilot_id, name, status, location, skills, certifications, daily_rate, current_assignment)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT(pilot_id) DO UPDATE SET
            name = ?2, status = ?3, location = ?4,
            skills = ?5, certifications = ?6,
            daily_rate = ?7, current_assignment = ?8
        "#,
    )
    .bind(&pilot.pilot_id)
    .bind(&pilot.name)
    .bind(pilot.status.to_string())
    .bind(&pilot.location)
    .bind(pilot.skills.join(", "))
    .bind(pilot.certifications.join(", "))
    .bind(pilot.daily_rate)
    .bind(&pilot.current_assignment)
    .execute(pool)
    .await?;

    Ok(())
}

/// Write a pilot's new status through to the database.
/// Returns false when the pilot row does not exist.
pub async fn update_pilot_status(
    pool: &SqlitePool,
    pilot_id: &str,
    status: PilotStatus,
) -> Result<bool> {
    let result = sqlx::query("UPDATE pilots SET status = ?1 WHERE pilot_id = ?2")
        .bind(status.to_string())
        .bind(pilot_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
