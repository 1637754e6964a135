//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Database: SQLite inventory
//! - Storage: In-memory inventory
//! - Adapters: Platform integrations (Mattermost, console)

pub mod config;
pub mod database;
pub mod storage;
pub mod adapters;
