//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Machine state and simulation record types."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Operating state of the welding machine at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineState {
    Running,
    Idle,
    Shutdown,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Idle => f.write_str("idle"),
            Self::Shutdown => f.write_str("shutdown"),
        }
    }
}

/// One observation of the machine. `power` semantics depend on `state`:
/// high draw when running, trickle draw when idle, zero when shut down.
/// `auto_shutdown` is set while the machine has been idle for 180 seconds
/// or more without interruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    #[serde(with = "timestamp_serde")]
    pub timestamp: NaiveDateTime,
    pub state: MachineState,
    pub power: f64,
    pub auto_shutdown: bool,
}

mod timestamp_serde {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use weldsim_common::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}
