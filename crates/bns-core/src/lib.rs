//! Core traits and data types for sampling-based inference over discrete
//! Bayesian networks.

#![deny(missing_docs)]

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{BnError, ErrorInfo};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RandomSource, RngHandle};
pub use types::{Assignment, Evidence, Query, Sample};

/// Read-only contract a discrete Bayesian network exposes to the samplers.
///
/// Implementations own the DAG and its conditional probability tables. For
/// every variable and every assignment of its parents the probabilities over
/// [`Network::states`] are expected to sum to one; the samplers rely on this
/// but never check it.
pub trait Network {
    /// Variables ordered so that every variable follows all of its parents.
    fn topological_order(&self) -> &[String];

    /// Ordered state labels of `variable`.
    fn states(&self, variable: &str) -> Result<&[String], BnError>;

    /// Returns `P(variable = state | parents)` where parent values are read
    /// from `partial`. Entries of `partial` that are not parents are ignored.
    fn conditional_probability(
        &self,
        variable: &str,
        state: &str,
        partial: &Assignment,
    ) -> Result<f64, BnError>;
}

impl<N: Network + ?Sized> Network for &N {
    fn topological_order(&self) -> &[String] {
        (**self).topological_order()
    }

    fn states(&self, variable: &str) -> Result<&[String], BnError> {
        (**self).states(variable)
    }

    fn conditional_probability(
        &self,
        variable: &str,
        state: &str,
        partial: &Assignment,
    ) -> Result<f64, BnError> {
        (**self).conditional_probability(variable, state, partial)
    }
}
