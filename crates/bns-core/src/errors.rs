//! Error type returned by network construction, query validation, run
//! configuration and the manifest and network file formats.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic carried by every [`BnError`].
///
/// `code` is a stable kebab-case identifier such as `row-not-normalized` or
/// `unknown-state`; `context` names the offending variable, state, row or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable identifier of the failure.
    pub code: String,
    /// One-line description.
    pub message: String,
    /// Offending names and values keyed by role (`variable`, `state`, `row`, `path`).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy, e.g. the declared states of a variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a diagnostic with an empty context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records a named value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)?;
        for (key, value) in &self.context {
            write!(f, " {key}={value}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

/// Failure raised while building, querying or persisting a network run.
///
/// Well-formed queries never fail: impossible evidence yields a `0.0`
/// estimate, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BnError {
    /// Malformed declaration or CPT, cycle, or a lookup of an undeclared
    /// variable, state or unassigned parent.
    #[error("network error: {0}")]
    Network(ErrorInfo),
    /// Evidence naming a variable or state the network does not declare.
    #[error("evidence error: {0}")]
    Evidence(ErrorInfo),
    /// Query naming a variable or state the network does not declare.
    #[error("query error: {0}")]
    Query(ErrorInfo),
    /// Unreadable or invalid run configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Network documents and run manifests that fail to read, write or parse.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl BnError {
    /// Diagnostic of the failure, whatever its family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BnError::Network(info)
            | BnError::Evidence(info)
            | BnError::Query(info)
            | BnError::Config(info)
            | BnError::Serde(info) => info,
        }
    }
}
