//! Structured error types shared across partite crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`PartiteError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (arity, sizes, thresholds, etc.).
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the partite workspace.
///
/// Every failure is fatal to the call that raised it: the extraction routines
/// are one-shot proof searches and never retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PartiteError {
    /// An edge tuple does not have the shape the hypergraph expects.
    #[error("arity error: {0}")]
    Arity(ErrorInfo),
    /// A density-derived parameter or construction argument is out of range.
    #[error("precondition violated: {0}")]
    Precondition(ErrorInfo),
    /// No candidate witness satisfied the density bound.
    #[error("search exhausted: {0}")]
    Exhaustion(ErrorInfo),
    /// Serialization and schema errors.
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

impl PartiteError {
    /// Shorthand for an [`PartiteError::Arity`] error.
    pub fn arity(code: impl Into<String>, message: impl Into<String>) -> Self {
        PartiteError::Arity(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`PartiteError::Precondition`] error.
    pub fn precondition(code: impl Into<String>, message: impl Into<String>) -> Self {
        PartiteError::Precondition(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`PartiteError::Exhaustion`] error.
    pub fn exhaustion(code: impl Into<String>, message: impl Into<String>) -> Self {
        PartiteError::Exhaustion(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PartiteError::Arity(info)
            | PartiteError::Precondition(info)
            | PartiteError::Exhaustion(info)
            | PartiteError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Sets a remediation hint, keeping the error family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            PartiteError::Arity(info) => PartiteError::Arity(f(info)),
            PartiteError::Precondition(info) => PartiteError::Precondition(f(info)),
            PartiteError::Exhaustion(info) => PartiteError::Exhaustion(f(info)),
            PartiteError::Serde(info) => PartiteError::Serde(f(info)),
        }
    }
}
