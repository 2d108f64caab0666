//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Insert the demo roster when the tables are empty.
    pub seed_demo_data: bool,
    /// Base URL of the worksheet mirror; empty disables the write-back.
    pub sheets_url: String,
    pub sheets_sheet_id: String,
    pub sheets_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SKYOPS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            database_path: env::var("SKYOPS_DB")
                .unwrap_or_else(|_| "data/skyops.db".to_string()),
            database_max_connections: env::var("SKYOPS_DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            seed_demo_data: env_flag("SKYOPS_SEED_DEMO"),
            sheets_url: env::var("SKYOPS_SHEETS_URL").unwrap_or_default(),
            sheets_sheet_id: env::var("SKYOPS_SHEETS_ID")
                .unwrap_or_else(|_| "Skylark_Database".to_string()),
            sheets_token: env::var("SKYOPS_SHEETS_TOKEN").unwrap_or_default(),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
