//! Per-variable incident-term index derived from one fixed energy model.

use std::collections::BTreeMap;

use spinmc_core::Label;

use crate::poly::Polynomial;
use crate::term::Term;

/// Maps every variable of a model to the terms that reference it.
///
/// Construction costs O(total term arity); looking up a variable's incident
/// terms afterwards costs O(local degree), which is what keeps a candidate
/// flip's energy delta independent of model size. The index copies the source
/// terms, so the model must be treated as immutable while the index is in
/// use; rebuild after any mutation.
#[derive(Debug, Clone)]
pub struct Adjacency<V: Label> {
    terms: Vec<(Term<V>, f64)>,
    incident: BTreeMap<V, Vec<usize>>,
}

impl<V: Label> Adjacency<V> {
    /// Builds the index for `model`.
    pub fn build(model: &Polynomial<V>) -> Self {
        let mut terms = Vec::with_capacity(model.len());
        let mut incident: BTreeMap<V, Vec<usize>> = BTreeMap::new();
        for (term, coefficient) in model.iter() {
            let index = terms.len();
            for label in term.labels() {
                incident.entry(label.clone()).or_default().push(index);
            }
            terms.push((term.clone(), coefficient));
        }
        Self { terms, incident }
    }

    /// Sorted variables covered by the index.
    pub fn variables(&self) -> impl ExactSizeIterator<Item = &V> {
        self.incident.keys()
    }

    /// Number of variables covered by the index.
    pub fn num_variables(&self) -> usize {
        self.incident.len()
    }

    /// Number of terms incident to `label`.
    pub fn degree(&self, label: &V) -> usize {
        self.incident.get(label).map_or(0, Vec::len)
    }

    /// Sums coefficient times the product of the term's variables' values,
    /// over every term incident to `label`, under the assignment given by
    /// `f`. This is the quantity whose sign flips when `label` flips.
    pub fn local_value<F: Fn(&V) -> f64>(&self, label: &V, f: F) -> f64 {
        match self.incident.get(label) {
            Some(indices) => indices
                .iter()
                .map(|&index| {
                    let (term, coefficient) = &self.terms[index];
                    coefficient * term.labels().iter().map(&f).product::<f64>()
                })
                .sum(),
            None => 0.0,
        }
    }
}
