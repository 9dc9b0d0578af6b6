//! Canonical term identities for sparse energy models.

use spinmc_core::{ErrorInfo, Label, SimError};

/// A non-empty set of pairwise distinct variable labels, stored sorted.
///
/// The sorted representation makes a term's identity independent of the order
/// in which its labels were supplied, so two insertions differing only in
/// listed order address the same model entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term<V: Label> {
    labels: Box<[V]>,
}

impl<V: Label> Term<V> {
    /// Canonicalizes `labels` into a term.
    ///
    /// Empty inputs and inputs that repeat a label are rejected with
    /// [`SimError::InvalidTerm`]; a repeated label would double-count that
    /// variable's effect on its own flip.
    pub fn new(labels: impl IntoIterator<Item = V>) -> Result<Self, SimError> {
        let mut labels: Vec<V> = labels.into_iter().collect();
        if labels.is_empty() {
            return Err(SimError::InvalidTerm(ErrorInfo::new(
                "empty-term",
                "a term must reference at least one variable",
            )));
        }
        labels.sort();
        if labels.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(SimError::InvalidTerm(
                ErrorInfo::new("duplicate-label", "term labels must be pairwise distinct")
                    .with_hint("merge repeated variables before building the model"),
            ));
        }
        Ok(Self {
            labels: labels.into_boxed_slice(),
        })
    }

    /// Single-variable term.
    pub fn unit(label: V) -> Self {
        Self {
            labels: Box::new([label]),
        }
    }

    /// Two-variable term; equal labels are rejected.
    pub fn pair(a: V, b: V) -> Result<Self, SimError> {
        if a == b {
            return Err(SimError::InvalidTerm(
                ErrorInfo::new("equal-labels", "a coupling must join two distinct variables")
                    .with_context("label", format!("{a:?}")),
            ));
        }
        let labels = if a < b { [a, b] } else { [b, a] };
        Ok(Self {
            labels: Box::new(labels),
        })
    }

    /// Rebuilds a term from labels already sorted and pairwise distinct.
    pub(crate) fn from_sorted_labels(labels: Vec<V>) -> Self {
        debug_assert!(!labels.is_empty());
        debug_assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
        Self {
            labels: labels.into_boxed_slice(),
        }
    }

    /// The labels in canonical (sorted) order.
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Number of variables referenced by the term.
    pub fn degree(&self) -> usize {
        self.labels.len()
    }

    /// Whether the term references `label`.
    pub fn contains(&self, label: &V) -> bool {
        self.labels.binary_search(label).is_ok()
    }
}
