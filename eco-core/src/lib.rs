//! Core three-species ecosystem simulation library.
//!
//! Main components:
//! - [`model`] - the coupled population recurrences, advanced one tick at a time.
//! - [`state`] - the three population counters.
//! - [`config`] - rate and efficiency parameters for a run.
//! - [`history`] - append-only per-species population log.
//! - [`markers`] - marker counts and random scatter for visualization.
//! - [`types`] - shared species identifiers and aliases.

pub mod config;
pub mod history;
pub mod markers;
pub mod model;
pub mod state;
pub mod types;
