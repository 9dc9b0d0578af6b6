//! Arity-restricted specializations of the energy-model container.
//!
//! A [`Field`] holds per-variable biases (arity-1 terms) and a [`Coupling`]
//! holds pairwise interactions (arity-2 terms over distinct labels). Both
//! reuse the [`Polynomial`] contract, so zero-pruning and canonical
//! addressing behave exactly as in the general container.

use std::ops::{Add, Div, Mul, Sub};

use spinmc_core::{Label, SimError};

use crate::poly::Polynomial;
use crate::term::Term;

/// Per-variable bias model, restricted to arity-1 terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field<V: Label> {
    poly: Polynomial<V>,
}

impl<V: Label> Field<V> {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self {
            poly: Polynomial::new(),
        }
    }

    /// Stores the bias for `label`; zero removes the entry.
    pub fn set(&mut self, label: V, coefficient: f64) {
        self.poly.set(Term::unit(label), coefficient);
    }

    /// Adds into the bias for `label`, pruning on a zero sum.
    pub fn accumulate(&mut self, label: V, coefficient: f64) {
        self.poly.accumulate(Term::unit(label), coefficient);
    }

    /// Returns the stored bias for `label`, or zero.
    pub fn coefficient(&self, label: &V) -> f64 {
        self.poly.coefficient(&Term::unit(label.clone()))
    }

    /// Read access to the underlying model.
    pub fn as_polynomial(&self) -> &Polynomial<V> {
        &self.poly
    }

    /// Consumes the field, yielding the underlying model.
    pub fn into_polynomial(self) -> Polynomial<V> {
        self.poly
    }
}

impl<V: Label> Add for Field<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            poly: self.poly + rhs.poly,
        }
    }
}

impl<V: Label> Sub for Field<V> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            poly: self.poly - rhs.poly,
        }
    }
}

impl<V: Label> Mul<f64> for Field<V> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            poly: self.poly * rhs,
        }
    }
}

impl<V: Label> Div<f64> for Field<V> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            poly: self.poly / rhs,
        }
    }
}

/// Pairwise coupling model, restricted to arity-2 terms over distinct labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coupling<V: Label> {
    poly: Polynomial<V>,
}

impl<V: Label> Coupling<V> {
    /// Creates an empty coupling model.
    pub fn new() -> Self {
        Self {
            poly: Polynomial::new(),
        }
    }

    /// Stores the coupling between `a` and `b`; zero removes the entry.
    ///
    /// Equal labels are rejected with [`SimError::InvalidTerm`].
    pub fn set(&mut self, a: V, b: V, coefficient: f64) -> Result<(), SimError> {
        let term = Term::pair(a, b)?;
        self.poly.set(term, coefficient);
        Ok(())
    }

    /// Adds into the coupling between `a` and `b`, pruning on a zero sum.
    pub fn accumulate(&mut self, a: V, b: V, coefficient: f64) -> Result<(), SimError> {
        let term = Term::pair(a, b)?;
        self.poly.accumulate(term, coefficient);
        Ok(())
    }

    /// Returns the stored coupling for the unordered pair, or zero.
    pub fn coefficient(&self, a: &V, b: &V) -> f64 {
        match Term::pair(a.clone(), b.clone()) {
            Ok(term) => self.poly.coefficient(&term),
            Err(_) => 0.0,
        }
    }

    /// Read access to the underlying model.
    pub fn as_polynomial(&self) -> &Polynomial<V> {
        &self.poly
    }

    /// Consumes the coupling model, yielding the underlying model.
    pub fn into_polynomial(self) -> Polynomial<V> {
        self.poly
    }
}

impl<V: Label> Add for Coupling<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            poly: self.poly + rhs.poly,
        }
    }
}

impl<V: Label> Sub for Coupling<V> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            poly: self.poly - rhs.poly,
        }
    }
}

impl<V: Label> Mul<f64> for Coupling<V> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            poly: self.poly * rhs,
        }
    }
}

impl<V: Label> Div<f64> for Coupling<V> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            poly: self.poly / rhs,
        }
    }
}
