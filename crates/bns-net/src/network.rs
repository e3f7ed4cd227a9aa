use std::collections::BTreeMap;

use bns_core::errors::{BnError, ErrorInfo};
use bns_core::{Assignment, Network};

use crate::builder::VariableDef;

/// Validated discrete Bayesian network.
///
/// Construct through [`crate::NetworkBuilder`] or [`crate::network_from_json`];
/// both guarantee acyclicity, known parents and normalized CPT rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteNetwork {
    variables: Vec<VariableDef>,
    index: BTreeMap<String, usize>,
    order: Vec<String>,
}

impl DiscreteNetwork {
    pub(crate) fn from_parts(
        variables: Vec<VariableDef>,
        index: BTreeMap<String, usize>,
        order: Vec<String>,
    ) -> Self {
        Self {
            variables,
            index,
            order,
        }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true for a network without variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Declarations in the order they were supplied.
    pub fn variables(&self) -> &[VariableDef] {
        &self.variables
    }

    /// Looks up a declaration by name.
    pub fn variable(&self, name: &str) -> Option<&VariableDef> {
        self.index.get(name).map(|&position| &self.variables[position])
    }

    /// Parents of `variable` in CPT order.
    pub fn parents(&self, variable: &str) -> Result<&[String], BnError> {
        Ok(&self.lookup(variable)?.parents)
    }

    fn lookup(&self, variable: &str) -> Result<&VariableDef, BnError> {
        self.variable(variable).ok_or_else(|| {
            BnError::Network(
                ErrorInfo::new("unknown-variable", "variable is not part of the network")
                    .with_context("variable", variable),
            )
        })
    }

    /// Row of `def`'s CPT selected by the parent values found in `partial`.
    fn row_index(&self, def: &VariableDef, partial: &Assignment) -> Result<usize, BnError> {
        let mut row = 0;
        for parent in &def.parents {
            let parent_def = self.lookup(parent)?;
            let value = partial.get(parent).ok_or_else(|| {
                BnError::Network(
                    ErrorInfo::new("missing-parent", "parent value not yet assigned")
                        .with_context("variable", &def.name)
                        .with_context("parent", parent)
                        .with_hint("assign variables in topological order"),
                )
            })?;
            let position = state_position(parent_def, value)?;
            // Bounded by the row count checked in `NetworkBuilder::build`.
            row = row * parent_def.states.len() + position;
        }
        Ok(row)
    }
}

fn state_position(def: &VariableDef, state: &str) -> Result<usize, BnError> {
    def.states
        .iter()
        .position(|candidate| candidate == state)
        .ok_or_else(|| {
            BnError::Network(
                ErrorInfo::new("unknown-state", "state is not declared for variable")
                    .with_context("variable", &def.name)
                    .with_context("state", state),
            )
        })
}

impl Network for DiscreteNetwork {
    fn topological_order(&self) -> &[String] {
        &self.order
    }

    fn states(&self, variable: &str) -> Result<&[String], BnError> {
        Ok(&self.lookup(variable)?.states)
    }

    fn conditional_probability(
        &self,
        variable: &str,
        state: &str,
        partial: &Assignment,
    ) -> Result<f64, BnError> {
        let def = self.lookup(variable)?;
        let column = state_position(def, state)?;
        let row = self.row_index(def, partial)?;
        Ok(def.table[row][column])
    }
}
