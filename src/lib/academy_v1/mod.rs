//! Flat academy store: departments, faculties, groups and teachers with no
//! relations between them.

pub mod models;
pub mod queries;
pub mod run_tool;
pub mod seed;

/// Schema of the flat store, embedded at compile time
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations/academy_v1");

pub const DEFAULT_DATABASE: &str = "academy_v1.db";
