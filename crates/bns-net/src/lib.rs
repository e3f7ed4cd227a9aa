//! Discrete Bayesian networks backed by conditional probability tables,
//! implementing the `bns-core` contracts.

#![deny(missing_docs)]

mod builder;
mod fixtures;
mod hash;
mod network;
mod serialization;

pub use builder::{NetworkBuilder, VariableDef, ROW_SUM_TOLERANCE};
pub use fixtures::{asia_network, sprinkler_network};
pub use hash::canonical_hash;
pub use network::DiscreteNetwork;
pub use serialization::{network_from_json, network_to_json, NetworkDocument};
