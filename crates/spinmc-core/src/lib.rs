#![deny(missing_docs)]

//! Core error, randomness, and value-domain types shared across the spinmc
//! crates.

use std::fmt::Debug;

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, SimError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Bit, Spin};

/// Capability bound for variable labels.
///
/// Models and simulators accept any label type with a stable total order;
/// numeric labels are never assumed. The order is what makes container
/// iteration, and therefore every derived artifact, deterministic.
pub trait Label: Clone + Ord + Debug {}

impl<T> Label for T where T: Clone + Ord + Debug {}
