//! Delete instance snapshots in parallel behind a single confirmation,
//! optionally waiting until each one is observed as deleted.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod ui;
