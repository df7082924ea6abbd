//! Structured error types shared across the fuel workspace.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`FuelError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (specimen ids, offending values, etc.).
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

/// Canonical error type for correlation evaluation and propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FuelError {
    /// An input lies outside the validity range of a correlation.
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// Unsupported correlation names or incomplete uncertainty budgets.
    #[error("configuration error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors raised while writing artefacts.
    #[error("io error: {0}")]
    Io(ErrorInfo),
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

impl FuelError {
    /// Shorthand for a [`FuelError::Domain`] with the given code and message.
    pub fn domain(code: impl Into<String>, message: impl Into<String>) -> Self {
        FuelError::Domain(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`FuelError::Config`] with the given code and message.
    pub fn config(code: impl Into<String>, message: impl Into<String>) -> Self {
        FuelError::Config(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FuelError::Domain(info)
            | FuelError::Config(info)
            | FuelError::Serde(info)
            | FuelError::Io(info) => info,
        }
    }

    /// Returns true when the error signals an out-of-range physical input.
    pub fn is_domain(&self) -> bool {
        matches!(self, FuelError::Domain(_))
    }

    /// Returns true when the error signals a configuration problem.
    pub fn is_config(&self) -> bool {
        matches!(self, FuelError::Config(_))
    }

    /// Attaches an additional context entry, preserving the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            FuelError::Domain(info) => FuelError::Domain(info.with_context(key, value)),
            FuelError::Config(info) => FuelError::Config(info.with_context(key, value)),
            FuelError::Serde(info) => FuelError::Serde(info.with_context(key, value)),
            FuelError::Io(info) => FuelError::Io(info.with_context(key, value)),
        }
    }
}
