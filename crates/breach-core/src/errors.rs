//! Structured error types shared across the breach crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`BreachError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (deck sizes, clicks, widths).
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

/// Canonical error type for the breach odds engine.
///
/// Every variant is fatal for the computation that raised it: the composer
/// never returns a partial histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BreachError {
    /// Deck state violates `agendas_left <= cards_left` or a steal overdraws it.
    #[error("invalid deck state: {0}")]
    InvalidState(ErrorInfo),
    /// An access outcome spent more clicks than were available.
    #[error("budget underflow: {0}")]
    BudgetUnderflow(ErrorInfo),
    /// Hypergeometric parameters fell outside the distribution's domain.
    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(ErrorInfo),
    /// Scenario configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
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

impl BreachError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BreachError::InvalidState(info)
            | BreachError::BudgetUnderflow(info)
            | BreachError::DegenerateDistribution(info)
            | BreachError::Config(info)
            | BreachError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`BreachError::Config`] with the given code and message.
    pub fn config(code: impl Into<String>, message: impl Into<String>) -> Self {
        BreachError::Config(ErrorInfo::new(code, message))
    }
}
