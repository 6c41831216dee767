//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Error taxonomy for simulation setup and export."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use thiserror::Error;
use weldsim_common::StartTimeError;

pub type Result<T> = std::result::Result<T, SimError>;

/// Failures raised at setup or export time. The generation loop itself
/// cannot fail once an engine has been constructed.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    StartTime(#[from] StartTimeError),
    #[error("record count must be greater than zero")]
    InvalidCount,
    #[error("interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
