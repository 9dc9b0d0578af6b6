//! Boolean-domain adapter over the bipolar engine.

use std::collections::BTreeMap;

use spinmc_core::{Bit, Label, SimError, Spin};
use spinmc_model::{boolean_to_spin_model, Polynomial};

use crate::config::Schedule;
use crate::engine::SpinSimulator;

/// Metropolis simulator for Boolean-domain models.
///
/// Owns a bipolar [`SpinSimulator`] and translates at the boundary: the model
/// is substituted into the bipolar domain once at construction, and state
/// views are mapped through `boolean = (1 - spin) / 2` on every read or
/// write. The adapter holds no Boolean-domain state of its own, so the
/// simulation logic exists exactly once.
#[derive(Debug, Clone)]
pub struct BooleanSimulator<V: Label> {
    inner: SpinSimulator<V>,
    offset: f64,
}

impl<V: Label> BooleanSimulator<V> {
    /// Builds an adapter for a Boolean-domain `model`.
    ///
    /// `initial_state` values must be 0 or 1. When omitted, every variable
    /// starts at 0, which under the domain mapping is exactly the inner
    /// engine's all-+1 default, so no translation is needed at construction.
    pub fn new(
        model: &Polynomial<V>,
        initial_state: Option<&BTreeMap<V, i64>>,
        memory: usize,
    ) -> Result<Self, SimError> {
        let (spin_model, offset) = boolean_to_spin_model(model);
        let spin_initial = match initial_state {
            Some(assignment) => Some(boolean_assignment_to_spins(assignment)?),
            None => None,
        };
        let inner = SpinSimulator::new(spin_model, spin_initial.as_ref(), memory)?;
        Ok(Self { inner, offset })
    }

    /// Runs `sweeps` Metropolis sweeps at `temperature`.
    pub fn update(
        &mut self,
        temperature: f64,
        sweeps: usize,
        seed: Option<u64>,
    ) -> Result<(), SimError> {
        self.inner.update(temperature, sweeps, seed)
    }

    /// Runs every phase of `schedule` in order.
    pub fn schedule_update(
        &mut self,
        schedule: &Schedule,
        seed: Option<u64>,
    ) -> Result<(), SimError> {
        self.inner.schedule_update(schedule, seed)
    }

    /// Restores the initial assignment and clears the history buffer.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Copy of the current state as 0/1 values.
    pub fn state(&self) -> BTreeMap<V, u8> {
        boolean_view(self.inner.state())
    }

    /// Copy of the assignment the simulator started from, as 0/1 values.
    pub fn initial_state(&self) -> BTreeMap<V, u8> {
        boolean_view(self.inner.initial_state())
    }

    /// Replaces the current state with a validated Boolean assignment.
    pub fn set_state(&mut self, assignment: &BTreeMap<V, i64>) -> Result<(), SimError> {
        let spins = boolean_assignment_to_spins(assignment)?;
        self.inner.set_state(&spins)
    }

    /// The most recent states, oldest first, ending with the current state,
    /// all translated into the Boolean domain.
    pub fn get_past_states(&self, num_states: Option<usize>) -> Vec<BTreeMap<V, u8>> {
        self.inner
            .get_past_states(num_states)
            .into_iter()
            .map(boolean_view)
            .collect()
    }

    /// Current Boolean objective value, constant offset included.
    pub fn energy(&self) -> f64 {
        self.inner.energy() + self.offset
    }

    /// Maximum number of prior states retained.
    pub fn memory(&self) -> usize {
        self.inner.memory()
    }

    /// Number of variables in the simulated model.
    pub fn num_variables(&self) -> usize {
        self.inner.num_variables()
    }

    /// The variables of the simulated model in their fixed order.
    pub fn variables(&self) -> &[V] {
        self.inner.variables()
    }
}

/// Validates a raw Boolean assignment and maps it into spin values for the
/// inner engine.
fn boolean_assignment_to_spins<V: Label>(
    assignment: &BTreeMap<V, i64>,
) -> Result<BTreeMap<V, i64>, SimError> {
    let mut spins = BTreeMap::new();
    for (label, &raw) in assignment {
        let bit = Bit::from_value(raw)?;
        spins.insert(label.clone(), i64::from(Spin::from(bit).as_i8()));
    }
    Ok(spins)
}

/// Maps an exported spin assignment into the Boolean domain,
/// `boolean = (1 - spin) / 2`.
fn boolean_view<V: Label>(state: BTreeMap<V, i8>) -> BTreeMap<V, u8> {
    state
        .into_iter()
        .map(|(label, spin)| (label, ((1 - spin) / 2) as u8))
        .collect()
}
