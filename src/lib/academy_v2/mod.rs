//! Normalized academy store. Faculties own departments, departments own
//! groups, and groups meet curators and lectures through junction tables.

pub mod models;
pub mod queries;
pub mod run_tool;
pub mod seed;

/// Schema of the normalized store, embedded at compile time
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations/academy_v2");

pub const DEFAULT_DATABASE: &str = "academy_v2.db";
