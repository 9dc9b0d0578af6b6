use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SimError};

/// Bipolar variable value, restricted to exactly -1 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Spin {
    /// The -1 value.
    Down,
    /// The +1 value.
    Up,
}

impl Spin {
    /// Validates a raw value as a spin.
    pub fn from_value(value: i64) -> Result<Self, SimError> {
        match value {
            1 => Ok(Spin::Up),
            -1 => Ok(Spin::Down),
            other => Err(SimError::InvalidStateValue(
                ErrorInfo::new("not-bipolar", "spin values must be +1 or -1")
                    .with_context("value", other.to_string()),
            )),
        }
    }

    /// Numeric value used in energy products.
    pub fn value(&self) -> f64 {
        match self {
            Spin::Up => 1.0,
            Spin::Down => -1.0,
        }
    }

    /// Raw integer representation.
    pub fn as_i8(&self) -> i8 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    /// The opposite spin.
    pub fn flipped(&self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

/// Boolean variable value, restricted to exactly 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bit {
    /// The 0 value.
    Zero,
    /// The 1 value.
    One,
}

impl Bit {
    /// Validates a raw value as a bit.
    pub fn from_value(value: i64) -> Result<Self, SimError> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(SimError::InvalidStateValue(
                ErrorInfo::new("not-boolean", "boolean values must be 0 or 1")
                    .with_context("value", other.to_string()),
            )),
        }
    }

    /// Raw integer representation.
    pub fn as_u8(&self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

/// The mapping `boolean = (1 - spin) / 2`.
impl From<Spin> for Bit {
    fn from(spin: Spin) -> Self {
        match spin {
            Spin::Up => Bit::Zero,
            Spin::Down => Bit::One,
        }
    }
}

/// The inverse mapping `spin = 1 - 2 * boolean`.
impl From<Bit> for Spin {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => Spin::Up,
            Bit::One => Spin::Down,
        }
    }
}
