//! Formations registry: courses made of educational contents and the users enrolled in them.
pub mod helpers;
pub mod models;
pub mod report_writer;
pub mod run_tool;
