//! Bipolar simulation state owned by a simulator instance.

use std::collections::BTreeMap;

use spinmc_core::{ErrorInfo, Label, SimError, Spin};

/// Total assignment of bipolar values over a fixed variable set.
///
/// Every variable referenced by the model the state was built for has exactly
/// one entry; the engine mutates the state in place through [`flip`].
///
/// [`flip`]: SpinState::flip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinState<V: Label> {
    values: BTreeMap<V, Spin>,
}

impl<V: Label> SpinState<V> {
    /// All variables set to +1.
    pub fn all_up(variables: &[V]) -> Self {
        Self {
            values: variables
                .iter()
                .cloned()
                .map(|variable| (variable, Spin::Up))
                .collect(),
        }
    }

    /// Builds a state covering exactly `variables` from a raw assignment.
    ///
    /// Every variable must be present and map to +1 or -1; anything else is
    /// an [`SimError::InvalidStateValue`]. Labels in `assignment` outside the
    /// variable set are ignored; coverage is defined by the model.
    pub fn from_assignment(
        variables: &[V],
        assignment: &BTreeMap<V, i64>,
    ) -> Result<Self, SimError> {
        let mut values = BTreeMap::new();
        for variable in variables {
            match assignment.get(variable) {
                Some(&raw) => {
                    values.insert(variable.clone(), Spin::from_value(raw)?);
                }
                None => {
                    return Err(SimError::InvalidStateValue(
                        ErrorInfo::new(
                            "missing-variable",
                            "assignment must cover every model variable",
                        )
                        .with_context("variable", format!("{variable:?}")),
                    ));
                }
            }
        }
        Ok(Self { values })
    }

    /// Spin stored for `label`, if the label belongs to the variable set.
    pub fn get(&self, label: &V) -> Option<Spin> {
        self.values.get(label).copied()
    }

    /// Numeric value used in energy products. Labels outside the variable
    /// set evaluate to zero; engine callers only pass model variables.
    pub fn value(&self, label: &V) -> f64 {
        self.values.get(label).map_or(0.0, Spin::value)
    }

    /// Negates the stored value for `label`. Labels outside the variable set
    /// are left untouched.
    pub fn flip(&mut self, label: &V) {
        if let Some(value) = self.values.get_mut(label) {
            *value = value.flipped();
        }
    }

    /// Independent copy of the state; later mutation of `self` leaves the
    /// copy unaffected.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Exported copy as raw +1/-1 values.
    pub fn to_assignment(&self) -> BTreeMap<V, i8> {
        self.values
            .iter()
            .map(|(variable, spin)| (variable.clone(), spin.as_i8()))
            .collect()
    }

    /// Borrow of the underlying spin map for boundary translation.
    pub fn spins(&self) -> &BTreeMap<V, Spin> {
        &self.values
    }

    /// Number of variables covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the state covers no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
