//! ---
//! wms_section: "01-core-functionality"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Shared primitives and utilities for the WELDSIM workspace."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
//! Core shared primitives for the WELDSIM workspace.
//! This crate exposes configuration loading, logging setup, and start-time
//! handling consumed by the simulation library and the generator CLI.

pub mod config;
pub mod logging;
pub mod time;

pub use config::{LoggingConfig, SimConfig};
pub use logging::{init_tracing, LogFormat};
pub use time::{StartTime, StartTimeError, TIMESTAMP_FORMAT};
