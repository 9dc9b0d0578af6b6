//! The Metropolis engine: schedules, sweeps, and acceptance decisions.

use std::collections::BTreeMap;

use spinmc_core::{Label, RngHandle, SimError};
use spinmc_model::{Adjacency, Polynomial};

use crate::config::{validate_temperature, Schedule};
use crate::history::History;
use crate::state::SpinState;

/// Metropolis-Hastings simulator over a bipolar energy model.
///
/// The simulator owns its state, history, and random source. Every public
/// call runs to completion before returning; malformed arguments fail before
/// any state mutation, so no partial sweep is ever observable. The model is
/// indexed once at construction and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct SpinSimulator<V: Label> {
    model: Polynomial<V>,
    adjacency: Adjacency<V>,
    variables: Vec<V>,
    initial: SpinState<V>,
    state: SpinState<V>,
    history: History<V>,
    rng: RngHandle,
}

impl<V: Label> SpinSimulator<V> {
    /// Builds a simulator for `model`.
    ///
    /// When `initial_state` is `None`, every variable starts at +1. `memory`
    /// bounds how many prior states [`get_past_states`] can reach. The RNG
    /// starts from operating-system entropy; pass a seed to [`update`] or
    /// [`schedule_update`] for reproducible runs.
    ///
    /// [`get_past_states`]: SpinSimulator::get_past_states
    /// [`update`]: SpinSimulator::update
    /// [`schedule_update`]: SpinSimulator::schedule_update
    pub fn new(
        model: Polynomial<V>,
        initial_state: Option<&BTreeMap<V, i64>>,
        memory: usize,
    ) -> Result<Self, SimError> {
        let variables = model.variables();
        let initial = match initial_state {
            Some(assignment) => SpinState::from_assignment(&variables, assignment)?,
            None => SpinState::all_up(&variables),
        };
        let adjacency = Adjacency::build(&model);
        Ok(Self {
            state: initial.snapshot(),
            history: History::new(memory),
            rng: RngHandle::from_entropy(),
            model,
            adjacency,
            variables,
            initial,
        })
    }

    /// Runs `sweeps` Metropolis sweeps at `temperature`.
    ///
    /// A negative or non-finite temperature fails with
    /// [`SimError::InvalidScheduleEntry`] before anything changes. Providing
    /// `seed` re-seeds this simulator's own random source before any sampling
    /// in the call. Each sweep first snapshots the pre-sweep state into the
    /// history buffer, then evaluates as many flip candidates as there are
    /// variables, drawn uniformly with replacement. Sampling with replacement
    /// keeps the dynamics memoryless instead of tying them to a fixed
    /// visitation order.
    pub fn update(
        &mut self,
        temperature: f64,
        sweeps: usize,
        seed: Option<u64>,
    ) -> Result<(), SimError> {
        validate_temperature(temperature)?;
        if let Some(seed) = seed {
            self.rng.reseed(seed);
        }
        for _ in 0..sweeps {
            self.sweep(temperature);
        }
        Ok(())
    }

    /// Runs every phase of `schedule` in order.
    ///
    /// Optionally re-seeds once up front; the run is then identical to
    /// issuing the same sequence of [`update`] calls with the same seeding
    /// point. Every phase is validated before the first sweep runs, so a
    /// malformed entry anywhere in the schedule leaves the state untouched.
    ///
    /// [`update`]: SpinSimulator::update
    pub fn schedule_update(
        &mut self,
        schedule: &Schedule,
        seed: Option<u64>,
    ) -> Result<(), SimError> {
        for phase in schedule.phases() {
            validate_temperature(phase.temperature)?;
        }
        if let Some(seed) = seed {
            self.rng.reseed(seed);
        }
        for phase in schedule.phases() {
            self.update(phase.temperature, phase.sweeps, None)?;
        }
        Ok(())
    }

    fn sweep(&mut self, temperature: f64) {
        self.history.push(self.state.snapshot());
        for _ in 0..self.variables.len() {
            let candidate = self.variables[self.rng.index(self.variables.len())].clone();
            // Flipping the candidate negates every incident term exactly
            // once, so the energy change is minus twice the local value.
            let local = self
                .adjacency
                .local_value(&candidate, |label| self.state.value(label));
            let delta = -2.0 * local;
            let accept = delta <= 0.0
                || (temperature > 0.0 && self.rng.uniform() < (-delta / temperature).exp());
            if accept {
                self.state.flip(&candidate);
            }
        }
    }

    /// Restores the initial assignment and clears the history buffer.
    pub fn reset(&mut self) {
        self.state = self.initial.snapshot();
        self.history.clear();
    }

    /// Copy of the current state as +1/-1 values.
    pub fn state(&self) -> BTreeMap<V, i8> {
        self.state.to_assignment()
    }

    /// Copy of the assignment the simulator started from.
    pub fn initial_state(&self) -> BTreeMap<V, i8> {
        self.initial.to_assignment()
    }

    /// Replaces the current state with a validated assignment.
    pub fn set_state(&mut self, assignment: &BTreeMap<V, i64>) -> Result<(), SimError> {
        self.state = SpinState::from_assignment(&self.variables, assignment)?;
        Ok(())
    }

    /// The most recent states, oldest first, ending with the current state.
    ///
    /// `num_states == Some(1)` returns only the current state without
    /// consulting the history. `None` behaves as if `num_states` were the
    /// memory capacity, so a zero-memory simulator always yields exactly the
    /// current state. Every element is an independent copy.
    pub fn get_past_states(&self, num_states: Option<usize>) -> Vec<BTreeMap<V, i8>> {
        let requested = num_states.unwrap_or_else(|| self.history.capacity());
        if requested == 1 {
            return vec![self.state.to_assignment()];
        }
        let mut states: Vec<_> = self
            .history
            .recent(requested.saturating_sub(1))
            .map(SpinState::to_assignment)
            .collect();
        states.push(self.state.to_assignment());
        states
    }

    /// Current objective value of the model under the simulator's state.
    pub fn energy(&self) -> f64 {
        self.model.evaluate(|label| self.state.value(label))
    }

    /// Maximum number of prior states retained.
    pub fn memory(&self) -> usize {
        self.history.capacity()
    }

    /// The model's variables in the fixed (sorted) order candidate draws
    /// index into.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Number of variables in the model.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// The energy model driving the dynamics.
    pub fn model(&self) -> &Polynomial<V> {
        &self.model
    }
}
