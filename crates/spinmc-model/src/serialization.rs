//! Serde forms for energy models.
//!
//! Models travel as a sequence of `(labels, coefficient)` pairs so that
//! ingestion re-applies canonicalization and zero-pruning instead of trusting
//! the wire format.

use serde::de::DeserializeOwned;
use serde::Serialize;
use spinmc_core::{ErrorInfo, Label, SimError};

use crate::poly::Polynomial;

/// Serializes the model to a JSON pair list.
pub fn model_to_json<V: Label + Serialize>(model: &Polynomial<V>) -> Result<String, SimError> {
    let pairs: Vec<(&[V], f64)> = model
        .iter()
        .map(|(term, coefficient)| (term.labels(), coefficient))
        .collect();
    serde_json::to_string(&pairs)
        .map_err(|err| SimError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a model from a JSON pair list, re-validating every term.
pub fn model_from_json<V: Label + DeserializeOwned>(json: &str) -> Result<Polynomial<V>, SimError> {
    let pairs: Vec<(Vec<V>, f64)> = serde_json::from_str(json)
        .map_err(|err| SimError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    Polynomial::from_pairs(pairs)
}
