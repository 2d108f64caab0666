//! Drone persistence operations.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use skyops_core::models::Drone;
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Debug, sqlx::FromRow)]
struct DroneRow {
    drone_id: String,
    model: String,
    weather_resistance: String,
    maintenance_due: String,
}

impl TryFrom<DroneRow> for Drone {
    type Error = anyhow::Error;

    fn try_from(row: DroneRow) -> Result<Self> {
        let maintenance_due: NaiveDate = row
            .maintenance_due
            .parse()
            .with_context(|| format!("drone {} maintenance_due", row.drone_id))?;
        Ok(Drone {
            drone_id: row.drone_id,
            model: row.model,
            weather_resistance: row.weather_resistance,
            maintenance_due,
        })
    }
}

/// Load the fleet in table order, skipping malformed rows.
pub async fn load_all_drones(pool: &SqlitePool) -> Result<Vec<Drone>> {
    let rows = sqlx::query_as::<_, DroneRow>(
        "SELECT drone_id, model, weather_resistance, maintenance_due FROM drones ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut drones = Vec::with_capacity(rows.len());
    for row in rows {
        let drone_id = row.drone_id.clone();
        match Drone::try_from(row) {
            Ok(drone) => drones.push(drone),
            Err(err) => warn!("Skipping malformed drone row {}: {}", drone_id, err),
        }
    }
    Ok(drones)
}

/// Upsert a drone into the database.
pub async fn upsert_drone(pool: &SqlitePool, drone: &Drone) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO drones (drone_id, model, weather_resistance, maintenance_due)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(drone_id) DO UPDATE SET
            model = ?2, weather_resistance = ?3, maintenance_due = ?4
        "#,
    )
    .bind(&drone.drone_id)
    .bind(&drone.model)
    .bind(&drone.weather_resistance)
    .bind(drone.maintenance_due.to_string())
    .execute(pool)
    .await?;

    Ok(())
}
