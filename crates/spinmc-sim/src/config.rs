//! Annealing schedules: validated (temperature, sweeps) phases.

use serde::{Deserialize, Serialize};
use spinmc_core::{ErrorInfo, SimError};

/// One phase of an annealing schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Temperature the simulator runs at during this phase.
    pub temperature: f64,
    /// Number of sweeps to perform at that temperature.
    pub sweeps: usize,
}

impl Phase {
    /// Validates the pair; negative and non-finite temperatures are
    /// rejected.
    pub fn new(temperature: f64, sweeps: usize) -> Result<Self, SimError> {
        validate_temperature(temperature)?;
        Ok(Self {
            temperature,
            sweeps,
        })
    }
}

pub(crate) fn validate_temperature(temperature: f64) -> Result<(), SimError> {
    if !temperature.is_finite() || temperature < 0.0 {
        return Err(SimError::InvalidScheduleEntry(
            ErrorInfo::new(
                "invalid-temperature",
                "temperature must be finite and non-negative",
            )
            .with_context("temperature", temperature.to_string()),
        ));
    }
    Ok(())
}

/// Ordered sequence of phases executed front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    phases: Vec<Phase>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-validated phases.
    pub fn from_phases(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// Appends a validated phase.
    pub fn push(&mut self, temperature: f64, sweeps: usize) -> Result<(), SimError> {
        self.phases.push(Phase::new(temperature, sweeps)?);
        Ok(())
    }

    /// Ingests raw `(temperature, sweeps)` pairs from an external producer.
    ///
    /// Sweep counts arrive signed at this boundary: a negative count is
    /// rejected with [`SimError::InvalidUpdateCount`] and a negative or
    /// non-finite temperature with [`SimError::InvalidScheduleEntry`].
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, i64)>) -> Result<Self, SimError> {
        let mut schedule = Self::new();
        for (temperature, sweeps) in pairs {
            if sweeps < 0 {
                return Err(SimError::InvalidUpdateCount(
                    ErrorInfo::new("negative-sweeps", "cannot update a negative number of times")
                        .with_context("sweeps", sweeps.to_string()),
                ));
            }
            schedule.push(temperature, sweeps as usize)?;
        }
        Ok(schedule)
    }

    /// The phases in execution order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether the schedule holds no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Total sweep count across all phases.
    pub fn total_sweeps(&self) -> usize {
        self.phases.iter().map(|phase| phase.sweeps).sum()
    }
}
