//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Simulation engine module exports and shared types."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
//! Welding-machine record simulation for the WELDSIM project.
//!
//! The engine walks a three-state Markov model (`running`/`idle`/`shutdown`)
//! at a fixed interval, deriving power draw and an auto-shutdown flag from
//! accumulated idle time, and the exporters serialise the resulting records
//! as CSV or JSON.

pub mod error;
pub mod export;
pub mod generator;
pub mod record;

pub use error::{Result, SimError};
pub use export::{default_file_name, export_csv_file, write_csv, write_json};
pub use generator::{generate, WeldingSimulationEngine};
pub use record::{MachineState, SimulationRecord};
