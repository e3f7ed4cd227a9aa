use std::collections::{BTreeMap, BTreeSet};

use bns_core::errors::{BnError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::network::DiscreteNetwork;

/// Maximum deviation from one tolerated when summing a CPT row.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Declaration of one variable: its states, parents and CPT.
///
/// `table` holds one row per parent configuration. Rows are ordered
/// row-major over `parents` (the last parent varies fastest) and each row has
/// one probability per entry of `states`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    /// Variable name, unique within the network.
    pub name: String,
    /// Ordered state labels.
    pub states: Vec<String>,
    /// Parent variable names in CPT order.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Conditional probability table.
    pub table: Vec<Vec<f64>>,
}

impl VariableDef {
    /// Creates a declaration from borrowed labels.
    pub fn new(name: &str, states: &[&str], parents: &[&str], table: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.to_string(),
            states: states.iter().map(|s| s.to_string()).collect(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            table,
        }
    }
}

/// Accumulates variable declarations and validates them into a [`DiscreteNetwork`].
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    variables: Vec<VariableDef>,
}

impl NetworkBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable. Validation is deferred to [`NetworkBuilder::build`].
    pub fn variable(
        mut self,
        name: &str,
        states: &[&str],
        parents: &[&str],
        table: Vec<Vec<f64>>,
    ) -> Self {
        self.variables.push(VariableDef::new(name, states, parents, table));
        self
    }

    /// Declares a variable from an owned definition.
    pub fn push(&mut self, def: VariableDef) -> &mut Self {
        self.variables.push(def);
        self
    }

    /// Validates every declaration and computes the topological order.
    pub fn build(self) -> Result<DiscreteNetwork, BnError> {
        let mut index = BTreeMap::new();
        for (position, def) in self.variables.iter().enumerate() {
            if index.insert(def.name.clone(), position).is_some() {
                return Err(network_error(
                    ErrorInfo::new("duplicate-variable", "variable declared twice")
                        .with_context("variable", &def.name),
                ));
            }
        }
        for def in &self.variables {
            validate_states(def)?;
            validate_parents(def, &index)?;
        }
        for def in &self.variables {
            validate_table(def, &self.variables, &index)?;
        }
        let order = topological_order(&self.variables, &index)?;
        tracing::debug!(variables = self.variables.len(), "built discrete network");
        Ok(DiscreteNetwork::from_parts(self.variables, index, order))
    }
}

fn validate_states(def: &VariableDef) -> Result<(), BnError> {
    if def.states.is_empty() {
        return Err(network_error(
            ErrorInfo::new("empty-states", "variable declares no states")
                .with_context("variable", &def.name),
        ));
    }
    let mut seen = BTreeSet::new();
    for state in &def.states {
        if !seen.insert(state.as_str()) {
            return Err(network_error(
                ErrorInfo::new("duplicate-state", "state declared twice")
                    .with_context("variable", &def.name)
                    .with_context("state", state),
            ));
        }
    }
    Ok(())
}

fn validate_parents(def: &VariableDef, index: &BTreeMap<String, usize>) -> Result<(), BnError> {
    let mut seen = BTreeSet::new();
    for parent in &def.parents {
        if parent == &def.name {
            return Err(network_error(
                ErrorInfo::new("self-parent", "variable lists itself as a parent")
                    .with_context("variable", &def.name),
            ));
        }
        if !index.contains_key(parent) {
            return Err(network_error(
                ErrorInfo::new("unknown-parent", "parent is not declared")
                    .with_context("variable", &def.name)
                    .with_context("parent", parent),
            ));
        }
        if !seen.insert(parent.as_str()) {
            return Err(network_error(
                ErrorInfo::new("duplicate-parent", "parent listed twice")
                    .with_context("variable", &def.name)
                    .with_context("parent", parent),
            ));
        }
    }
    Ok(())
}

fn validate_table(
    def: &VariableDef,
    variables: &[VariableDef],
    index: &BTreeMap<String, usize>,
) -> Result<(), BnError> {
    let expected_rows = def
        .parents
        .iter()
        .try_fold(1usize, |rows, parent| {
            rows.checked_mul(variables[index[parent]].states.len())
        })
        .ok_or_else(|| {
            network_error(
                ErrorInfo::new("row-count", "parent configurations overflow the CPT size")
                    .with_context("variable", &def.name)
                    .with_context("parents", def.parents.len().to_string()),
            )
        })?;
    if def.table.len() != expected_rows {
        return Err(network_error(
            ErrorInfo::new(
                "row-count",
                "CPT row count does not match parent configurations",
            )
            .with_context("variable", &def.name)
            .with_context("expected", expected_rows.to_string())
            .with_context("got", def.table.len().to_string()),
        ));
    }
    for (row_index, row) in def.table.iter().enumerate() {
        if row.len() != def.states.len() {
            return Err(network_error(
                ErrorInfo::new("row-width", "CPT row width does not match state count")
                    .with_context("variable", &def.name)
                    .with_context("row", row_index.to_string())
                    .with_context("expected", def.states.len().to_string())
                    .with_context("got", row.len().to_string()),
            ));
        }
        if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(network_error(
                ErrorInfo::new("invalid-probability", "CPT entry is negative or not finite")
                    .with_context("variable", &def.name)
                    .with_context("row", row_index.to_string()),
            ));
        }
        let sum: f64 = row.iter().sum();
        if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(network_error(
                ErrorInfo::new("row-not-normalized", "CPT row does not sum to one")
                    .with_context("variable", &def.name)
                    .with_context("row", row_index.to_string())
                    .with_context("sum", format!("{sum}")),
            ));
        }
    }
    Ok(())
}

/// Kahn's algorithm; among ready variables the earliest declared goes first.
fn topological_order(
    variables: &[VariableDef],
    index: &BTreeMap<String, usize>,
) -> Result<Vec<String>, BnError> {
    let mut pending: Vec<usize> = variables.iter().map(|def| def.parents.len()).collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); variables.len()];
    for (position, def) in variables.iter().enumerate() {
        for parent in &def.parents {
            children[index[parent]].push(position);
        }
    }

    let mut ready: BTreeSet<usize> = pending
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(position, _)| position)
        .collect();
    let mut order = Vec::with_capacity(variables.len());
    while let Some(next) = ready.pop_first() {
        order.push(variables[next].name.clone());
        for &child in &children[next] {
            pending[child] -= 1;
            if pending[child] == 0 {
                ready.insert(child);
            }
        }
    }

    if order.len() != variables.len() {
        let stuck: Vec<&str> = variables
            .iter()
            .zip(&pending)
            .filter(|(_, count)| **count > 0)
            .map(|(def, _)| def.name.as_str())
            .collect();
        return Err(network_error(
            ErrorInfo::new("cycle", "parent relation contains a directed cycle")
                .with_context("variables", stuck.join(",")),
        ));
    }
    Ok(order)
}

fn network_error(info: ErrorInfo) -> BnError {
    BnError::Network(info)
}
