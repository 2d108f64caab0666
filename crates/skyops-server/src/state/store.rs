//! Application state over the roster tables.
//!
//! The core assumes a single in-flight operation; the server is the
//! multi-caller deployment, so the tables live behind one lock here and
//! every operation runs to completion under it.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use skyops_core::models::{Drone, Mission, Pilot, PilotStatus};
use skyops_core::{
    check_conflicts, handle_urgent_reassignment, ConflictReport, ReassignmentOutcome, Roster,
    RosterError,
};
use skyops_sheets::SheetsClient;

use crate::config::Config;
use crate::persistence::{self, Database};

pub struct AppState {
    roster: RwLock<Roster>,
    db: Option<Database>,
    sheets: Option<Arc<SheetsClient>>,
    config: Config,
}

impl AppState {
    /// State with an empty roster and no persistence (used by tools that
    /// load records some other way).
    pub fn new(config: Config) -> Self {
        let sheets = sheets_client(&config);
        Self {
            roster: RwLock::new(Roster::default()),
            db: None,
            sheets,
            config,
        }
    }

    /// State backed by the SQLite store; call `load_from_database` next.
    pub fn with_database(db: Database, config: Config) -> Self {
        let sheets = sheets_client(&config);
        Self {
            roster: RwLock::new(Roster::default()),
            db: Some(db),
            sheets,
            config,
        }
    }

    /// State over a pre-built roster (tests).
    pub fn with_roster(roster: Roster, config: Config) -> Self {
        let sheets = sheets_client(&config);
        Self {
            roster: RwLock::new(roster),
            db: None,
            sheets,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load (and, for a fresh database, optionally seed) the roster tables.
    pub async fn load_from_database(&self) -> Result<()> {
        let Some(db) = &self.db else {
            return Ok(());
        };
        let pool = db.pool();

        if self.config.seed_demo_data && persistence::seed::tables_empty(pool).await? {
            persistence::seed::seed_demo_roster(pool).await?;
        }

        let pilots = persistence::pilots::load_all_pilots(pool).await?;
        let drones = persistence::drones::load_all_drones(pool).await?;
        let missions = persistence::missions::load_all_missions(pool).await?;
        tracing::info!(
            "Loaded roster: {} pilots, {} drones, {} missions",
            pilots.len(),
            drones.len(),
            missions.len()
        );

        let roster = Roster::with_records(pilots, drones, missions)?;
        *self.roster.write().unwrap_or_else(|e| e.into_inner()) = roster;
        Ok(())
    }

    /// Run the conflict checker against the current tables.
    pub fn check_conflicts(
        &self,
        pilot_id: &str,
        drone_id: &str,
        project_id: &str,
    ) -> Result<ConflictReport, RosterError> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        check_conflicts(&roster, pilot_id, drone_id, project_id)
    }

    /// Run the reassignment advisor against the current tables.
    pub fn urgent_reassignment(
        &self,
        project_id: &str,
    ) -> Result<ReassignmentOutcome, RosterError> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        handle_urgent_reassignment(&roster, project_id)
    }

    /// Mutate a pilot's status, then write it through to the database and
    /// the worksheet mirror. Write-back failures are logged and never undo
    /// the in-memory change.
    pub async fn update_pilot_status(
        &self,
        pilot_id: &str,
        status: PilotStatus,
    ) -> Result<Pilot, RosterError> {
        let (updated, pilots) = {
            let mut roster = self.roster.write().unwrap_or_else(|e| e.into_inner());
            let updated = roster.update_pilot_status(pilot_id, status)?.clone();
            (updated, roster.pilots().to_vec())
        };

        if let Some(db) = &self.db {
            if let Err(err) =
                persistence::pilots::update_pilot_status(db.pool(), pilot_id, status).await
            {
                tracing::warn!("Failed to persist status for {}: {}", pilot_id, err);
            }
        }

        if let Some(sheets) = &self.sheets {
            let sheets = sheets.clone();
            tokio::spawn(async move {
                if let Err(err) = skyops_sheets::push_pilot_roster(&sheets, &pilots).await {
                    tracing::warn!("Pilot roster sheet push failed: {}", err);
                }
            });
        }

        Ok(updated)
    }

    pub fn get_pilot(&self, pilot_id: &str) -> Option<Pilot> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.pilot(pilot_id).ok().cloned()
    }

    pub fn get_drone(&self, drone_id: &str) -> Option<Drone> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.drone(drone_id).ok().cloned()
    }

    pub fn get_mission(&self, project_id: &str) -> Option<Mission> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.mission(project_id).ok().cloned()
    }

    pub fn list_pilots(&self) -> Vec<Pilot> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.pilots().to_vec()
    }

    pub fn list_drones(&self) -> Vec<Drone> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.drones().to_vec()
    }

    pub fn list_missions(&self) -> Vec<Mission> {
        let roster = self.roster.read().unwrap_or_else(|e| e.into_inner());
        roster.missions().to_vec()
    }
}

fn sheets_client(config: &Config) -> Option<Arc<SheetsClient>> {
    if config.sheets_url.trim().is_empty() {
        return None;
    }
    Some(Arc::new(SheetsClient::new(
        config.sheets_url.clone(),
        config.sheets_sheet_id.clone(),
        config.sheets_token.clone(),
    )))
}
