pub mod academy_v1;
pub mod academy_v2;
pub mod db;
pub mod errors;
pub mod models;
pub mod report;
