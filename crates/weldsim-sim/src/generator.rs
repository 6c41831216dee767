//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Markov-chain record generator for welding telemetry."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use weldsim_common::StartTime;

use crate::error::{Result, SimError};
use crate::record::{MachineState, SimulationRecord};

/// Consecutive idle seconds after which the auto-shutdown flag raises.
const IDLE_SHUTDOWN_THRESHOLD_SECS: f64 = 180.0;

/// First-order transition weights. A machine that is shut down can only
/// come back through `running`; there is no `shutdown -> idle` row.
const FROM_RUNNING: &[(MachineState, f64)] = &[
    (MachineState::Running, 0.90),
    (MachineState::Idle, 0.05),
    (MachineState::Shutdown, 0.05),
];
const FROM_IDLE: &[(MachineState, f64)] = &[
    (MachineState::Idle, 0.92),
    (MachineState::Running, 0.04),
    (MachineState::Shutdown, 0.04),
];
const FROM_SHUTDOWN: &[(MachineState, f64)] = &[
    (MachineState::Shutdown, 0.80),
    (MachineState::Running, 0.20),
];

/// Steps a welding machine's operating state forward at a fixed interval,
/// emitting one [`SimulationRecord`] per tick.
#[derive(Debug)]
pub struct WeldingSimulationEngine<R: Rng> {
    rng: R,
    current_state: MachineState,
    idle_duration: f64,
    current_time: NaiveDateTime,
    interval_seconds: f64,
    step: Duration,
}

impl WeldingSimulationEngine<StdRng> {
    /// Engine with OS-entropy randomness; runs are non-reproducible.
    pub fn from_entropy(interval_seconds: f64, start: StartTime) -> Result<Self> {
        Self::with_rng(interval_seconds, start, StdRng::from_entropy())
    }

    /// Engine with a fixed seed for reproducible runs.
    pub fn seeded(interval_seconds: f64, start: StartTime, seed: u64) -> Result<Self> {
        Self::with_rng(interval_seconds, start, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WeldingSimulationEngine<R> {
    /// Engine with an injected randomness source. Fails before the first
    /// record when the interval is not a positive number of seconds.
    pub fn with_rng(interval_seconds: f64, start: StartTime, rng: R) -> Result<Self> {
        if !interval_seconds.is_finite() || interval_seconds <= 0.0 {
            return Err(SimError::InvalidInterval(interval_seconds));
        }
        // The clock steps in whole nanoseconds; an interval that rounds to
        // zero (or overflows) cannot advance timestamps exactly.
        let step_nanos = (interval_seconds * 1e9).round();
        if step_nanos < 1.0 || step_nanos >= i64::MAX as f64 {
            return Err(SimError::InvalidInterval(interval_seconds));
        }
        let start = start.resolve();
        debug!(interval_seconds, start = %start, "simulation engine initialised");
        Ok(Self {
            rng,
            current_state: MachineState::Running,
            idle_duration: 0.0,
            current_time: start,
            interval_seconds,
            step: Duration::nanoseconds(step_nanos as i64),
        })
    }

    /// Produce the record for the current tick and advance the machine.
    pub fn next_record(&mut self) -> SimulationRecord {
        // Idle time accumulates before the record is emitted, so the flag
        // covers the interval ending at this timestamp.
        if self.current_state == MachineState::Idle {
            self.idle_duration += self.interval_seconds;
        } else {
            self.idle_duration = 0.0;
        }

        let (power, auto_shutdown) = match self.current_state {
            MachineState::Running => (round2(self.rng.gen_range(500.0..=1500.0)), false),
            MachineState::Idle => (
                round2(self.rng.gen_range(80.0..=100.0)),
                self.idle_duration >= IDLE_SHUTDOWN_THRESHOLD_SECS,
            ),
            MachineState::Shutdown => (0.0, false),
        };

        let record = SimulationRecord {
            timestamp: self.current_time,
            state: self.current_state,
            power,
            auto_shutdown,
        };

        self.current_time = self.current_time + self.step;
        self.transition();
        record
    }

    /// Run the engine for `count` ticks. The loop itself cannot fail; only
    /// a zero count is rejected.
    pub fn generate(&mut self, count: u64) -> Result<Vec<SimulationRecord>> {
        if count == 0 {
            return Err(SimError::InvalidCount);
        }
        Ok((0..count).map(|_| self.next_record()).collect())
    }

    fn transition(&mut self) {
        let table = match self.current_state {
            MachineState::Running => FROM_RUNNING,
            MachineState::Idle => FROM_IDLE,
            MachineState::Shutdown => FROM_SHUTDOWN,
        };
        self.current_state = table
            .choose_weighted(&mut self.rng, |entry| entry.1)
            .expect("transition weights are positive")
            .0;
    }
}

/// Generate `count` records at `interval_seconds` spacing starting at
/// `start_time`, with unseeded process randomness.
pub fn generate(
    count: u64,
    interval_seconds: f64,
    start_time: StartTime,
) -> Result<Vec<SimulationRecord>> {
    WeldingSimulationEngine::from_entropy(interval_seconds, start_time)?.generate(count)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
