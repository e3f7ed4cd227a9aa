use bns_core::errors::{BnError, ErrorInfo};
use bns_core::provenance::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::builder::{NetworkBuilder, VariableDef};
use crate::network::DiscreteNetwork;

/// On-disk JSON layout of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// Schema of the document.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Variable declarations; order is preserved on round trips.
    pub variables: Vec<VariableDef>,
}

impl NetworkDocument {
    /// Captures the declarations of `network`.
    pub fn from_network(network: &DiscreteNetwork) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            variables: network.variables().to_vec(),
        }
    }

    /// Validates the document into a network.
    pub fn into_network(self) -> Result<DiscreteNetwork, BnError> {
        let mut builder = NetworkBuilder::new();
        for def in self.variables {
            builder.push(def);
        }
        builder.build()
    }
}

/// Serializes the network to a JSON string.
pub fn network_to_json(network: &DiscreteNetwork) -> Result<String, BnError> {
    serde_json::to_string_pretty(&NetworkDocument::from_network(network))
        .map_err(|err| BnError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores and validates a network from a JSON string.
pub fn network_from_json(json: &str) -> Result<DiscreteNetwork, BnError> {
    let document: NetworkDocument = serde_json::from_str(json)
        .map_err(|err| BnError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    document.into_network()
}
