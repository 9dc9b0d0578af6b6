//! The energy-model container: a sparse multilinear polynomial with enforced
//! invariants.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use spinmc_core::{Label, SimError};

use crate::term::Term;

/// Sparse multilinear polynomial over opaque variable labels.
///
/// Three invariants hold after every mutation: no stored term has a zero
/// coefficient, terms are addressed by their canonical (sorted) identity, and
/// labels within a term are pairwise distinct. The container exposes only
/// invariant-preserving operations, so an [`crate::Adjacency`] index built
/// from it can rely on them without re-checking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial<V: Label> {
    terms: BTreeMap<Term<V>, f64>,
}

impl<V: Label> Polynomial<V> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Stores `coefficient` under `term`; a zero coefficient removes the
    /// entry instead.
    pub fn set(&mut self, term: Term<V>, coefficient: f64) {
        if coefficient == 0.0 {
            self.terms.remove(&term);
        } else {
            self.terms.insert(term, coefficient);
        }
    }

    /// Adds `coefficient` into the entry for `term`, pruning on a zero sum.
    pub fn accumulate(&mut self, term: Term<V>, coefficient: f64) {
        let updated = self.coefficient(&term) + coefficient;
        self.set(term, updated);
    }

    /// Canonicalizes `labels` and stores `coefficient` under the result.
    pub fn set_labels(
        &mut self,
        labels: impl IntoIterator<Item = V>,
        coefficient: f64,
    ) -> Result<(), SimError> {
        let term = Term::new(labels)?;
        self.set(term, coefficient);
        Ok(())
    }

    /// Canonicalizes `labels` and accumulates `coefficient` into the entry.
    pub fn accumulate_labels(
        &mut self,
        labels: impl IntoIterator<Item = V>,
        coefficient: f64,
    ) -> Result<(), SimError> {
        let term = Term::new(labels)?;
        self.accumulate(term, coefficient);
        Ok(())
    }

    /// Returns the stored coefficient for `term`, or zero when absent.
    /// Lookup never fails for a well-formed term.
    pub fn coefficient(&self, term: &Term<V>) -> f64 {
        self.terms.get(term).copied().unwrap_or(0.0)
    }

    /// Builds a model from a plain unordered collection of
    /// `(labels, coefficient)` pairs, re-applying canonicalization and
    /// zero-pruning. Pairs that canonicalize to the same term accumulate.
    pub fn from_pairs<I, L>(pairs: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: IntoIterator<Item = V>,
    {
        let mut model = Self::new();
        model.merge_pairs(pairs)?;
        Ok(model)
    }

    /// Adds every pair of a plain unordered collection into this model,
    /// behaving identically to adding a model built from the same pairs.
    pub fn merge_pairs<I, L>(&mut self, pairs: I) -> Result<(), SimError>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: IntoIterator<Item = V>,
    {
        for (labels, coefficient) in pairs {
            self.accumulate_labels(labels, coefficient)?;
        }
        Ok(())
    }

    /// Subtracts every pair of a plain unordered collection from this model.
    pub fn subtract_pairs<I, L>(&mut self, pairs: I) -> Result<(), SimError>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: IntoIterator<Item = V>,
    {
        for (labels, coefficient) in pairs {
            self.accumulate_labels(labels, -coefficient)?;
        }
        Ok(())
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the model stores no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(term, coefficient)` entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term<V>, f64)> {
        self.terms.iter().map(|(term, coefficient)| (term, *coefficient))
    }

    /// Iterates over the stored terms in canonical order.
    pub fn terms(&self) -> impl Iterator<Item = &Term<V>> {
        self.terms.keys()
    }

    /// Sorted, deduplicated labels referenced by any term.
    pub fn variables(&self) -> Vec<V> {
        let mut seen = BTreeSet::new();
        for term in self.terms.keys() {
            for label in term.labels() {
                seen.insert(label.clone());
            }
        }
        seen.into_iter().collect()
    }

    /// Number of distinct variables referenced by the model.
    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    /// Largest term arity, or zero for an empty model.
    pub fn degree(&self) -> usize {
        self.terms.keys().map(Term::degree).max().unwrap_or(0)
    }

    /// Evaluates the model under the assignment given by `f`: the sum over
    /// all terms of coefficient times the product of the term's variables'
    /// values.
    pub fn evaluate<F: Fn(&V) -> f64>(&self, f: F) -> f64 {
        self.terms
            .iter()
            .map(|(term, coefficient)| {
                coefficient * term.labels().iter().map(&f).product::<f64>()
            })
            .sum()
    }
}

impl<V: Label> AddAssign for Polynomial<V> {
    fn add_assign(&mut self, rhs: Self) {
        for (term, coefficient) in rhs.terms {
            self.accumulate(term, coefficient);
        }
    }
}

impl<V: Label> AddAssign<&Polynomial<V>> for Polynomial<V> {
    fn add_assign(&mut self, rhs: &Polynomial<V>) {
        for (term, coefficient) in rhs.iter() {
            self.accumulate(term.clone(), coefficient);
        }
    }
}

impl<V: Label> Add for Polynomial<V> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<V: Label> Add<&Polynomial<V>> for Polynomial<V> {
    type Output = Self;

    fn add(mut self, rhs: &Polynomial<V>) -> Self {
        self += rhs;
        self
    }
}

impl<V: Label> SubAssign for Polynomial<V> {
    fn sub_assign(&mut self, rhs: Self) {
        for (term, coefficient) in rhs.terms {
            self.accumulate(term, -coefficient);
        }
    }
}

impl<V: Label> SubAssign<&Polynomial<V>> for Polynomial<V> {
    fn sub_assign(&mut self, rhs: &Polynomial<V>) {
        for (term, coefficient) in rhs.iter() {
            self.accumulate(term.clone(), -coefficient);
        }
    }
}

impl<V: Label> Sub for Polynomial<V> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<V: Label> Sub<&Polynomial<V>> for Polynomial<V> {
    type Output = Self;

    fn sub(mut self, rhs: &Polynomial<V>) -> Self {
        self -= rhs;
        self
    }
}

impl<V: Label> Neg for Polynomial<V> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<V: Label> MulAssign<f64> for Polynomial<V> {
    fn mul_assign(&mut self, rhs: f64) {
        // Rebuild so that scaling to zero (including underflow) still prunes.
        let entries = std::mem::take(&mut self.terms);
        for (term, coefficient) in entries {
            let scaled = coefficient * rhs;
            if scaled != 0.0 {
                self.terms.insert(term, scaled);
            }
        }
    }
}

impl<V: Label> Mul<f64> for Polynomial<V> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl<V: Label> DivAssign<f64> for Polynomial<V> {
    fn div_assign(&mut self, rhs: f64) {
        let entries = std::mem::take(&mut self.terms);
        for (term, coefficient) in entries {
            let scaled = coefficient / rhs;
            if scaled != 0.0 {
                self.terms.insert(term, scaled);
            }
        }
    }
}

impl<V: Label> Div<f64> for Polynomial<V> {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self {
        self /= rhs;
        self
    }
}
