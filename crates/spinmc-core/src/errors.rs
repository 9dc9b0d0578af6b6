//! Structured error types shared across spinmc crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SimError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (labels, offending values, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the spinmc engine.
///
/// Every variant is raised synchronously at the point of violation, before
/// any state mutation. Callers should treat these as programming errors to
/// fix, not conditions to recover from at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SimError {
    /// Term is empty, repeats a label, or breaks a specialization's shape.
    #[error("invalid term: {0}")]
    InvalidTerm(ErrorInfo),
    /// Assignment value outside its domain, or incomplete variable coverage.
    #[error("invalid state value: {0}")]
    InvalidStateValue(ErrorInfo),
    /// Negative sweep count supplied at an ingestion boundary.
    #[error("invalid update count: {0}")]
    InvalidUpdateCount(ErrorInfo),
    /// Schedule phase with a negative or non-finite temperature.
    #[error("invalid schedule entry: {0}")]
    InvalidScheduleEntry(ErrorInfo),
    /// Serialization and ingestion errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SimError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SimError::InvalidTerm(info)
            | SimError::InvalidStateValue(info)
            | SimError::InvalidUpdateCount(info)
            | SimError::InvalidScheduleEntry(info)
            | SimError::Serde(info) => info,
        }
    }
}
