//! SQLite persistence for the roster tables.

pub mod db;
pub mod drones;
pub mod missions;
pub mod pilots;
pub mod seed;

pub use db::{init_database, Database};
