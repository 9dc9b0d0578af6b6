#![deny(missing_docs)]

//! Metropolis-Hastings simulators for bipolar and Boolean energy models.
//!
//! [`SpinSimulator`] evolves a bipolar assignment under a sparse energy model
//! at caller-chosen temperatures; [`BooleanSimulator`] fronts the same engine
//! for Boolean-domain models by translating at the boundary. Both are
//! single-threaded and run every public call to completion.

/// Boolean-domain adapter over the bipolar engine.
pub mod boolean;
/// Annealing schedule configuration and validation.
pub mod config;
/// The Metropolis engine itself.
pub mod engine;
/// Bounded retention of prior states.
pub mod history;
/// Bipolar simulation state.
pub mod state;

pub use boolean::BooleanSimulator;
pub use config::{Phase, Schedule};
pub use engine::SpinSimulator;
pub use history::History;
pub use state::SpinState;
