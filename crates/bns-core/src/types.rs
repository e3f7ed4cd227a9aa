use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Partial assignment handed to [`crate::Network::conditional_probability`].
///
/// Keys are variable names, values are state labels.
pub type Assignment = BTreeMap<String, String>;

/// A total assignment produced by one sampling pass.
///
/// Samples are immutable once returned: only read accessors are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    values: Assignment,
}

impl Sample {
    /// Wraps a fully built assignment.
    pub fn from_assignment(values: Assignment) -> Self {
        Self { values }
    }

    /// Returns the state assigned to `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.values.get(variable).map(String::as_str)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(variable, state)` pairs in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(variable, state)| (variable.as_str(), state.as_str()))
    }

    /// Borrows the underlying assignment.
    pub fn as_assignment(&self) -> &Assignment {
        &self.values
    }

    /// Consumes the sample and returns the underlying assignment.
    pub fn into_assignment(self) -> Assignment {
        self.values
    }

    /// Returns true when `variable` is assigned `state`.
    pub fn satisfies(&self, query: &Query) -> bool {
        self.get(&query.variable) == Some(query.state.as_str())
    }
}

/// Observed values for a subset of the network's variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    observed: Assignment,
}

impl Evidence {
    /// Evidence that observes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds an observation, replacing any earlier observation of the same variable.
    pub fn with(mut self, variable: impl Into<String>, state: impl Into<String>) -> Self {
        self.observed.insert(variable.into(), state.into());
        self
    }

    /// Returns the observed state of `variable`, if it is observed.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.observed.get(variable).map(String::as_str)
    }

    /// Iterates observations in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.observed
            .iter()
            .map(|(variable, state)| (variable.as_str(), state.as_str()))
    }

    /// Number of observed variables.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Returns true when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Returns true when `sample` agrees with every observation.
    pub fn is_consistent_with(&self, sample: &Sample) -> bool {
        self.observed
            .iter()
            .all(|(variable, state)| sample.get(variable) == Some(state.as_str()))
    }
}

impl FromIterator<(String, String)> for Evidence {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            observed: iter.into_iter().collect(),
        }
    }
}

/// A `(variable, target state)` pair whose posterior is estimated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    /// Queried variable.
    pub variable: String,
    /// Target state of the queried variable.
    pub state: String,
}

impl Query {
    /// Creates a new query.
    pub fn new(variable: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            state: state.into(),
        }
    }
}
