#![deny(missing_docs)]

//! Sparse multilinear energy models, their arity specializations, and the
//! per-variable adjacency index the simulators flip against.

mod adjacency;
mod boolean;
mod poly;
mod serialization;
mod specialize;
mod term;

pub use adjacency::Adjacency;
pub use boolean::{
    boolean_to_spin_assignment, boolean_to_spin_model, spin_to_boolean_assignment,
};
pub use poly::Polynomial;
pub use serialization::{model_from_json, model_to_json};
pub use specialize::{Coupling, Field};
pub use term::Term;
