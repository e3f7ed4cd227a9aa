use bns_core::errors::BnError;
use bns_core::Network;
use sha2::{Digest, Sha256};

use crate::network::DiscreteNetwork;

/// Computes a canonical SHA-256 hash of the network definition.
///
/// Variables are visited in topological order, so two networks declared in a
/// different order but with the same resulting order hash identically.
pub fn canonical_hash(network: &DiscreteNetwork) -> Result<String, BnError> {
    let mut hasher = Sha256::new();
    let order = network.topological_order();
    hasher.update((order.len() as u64).to_le_bytes());
    for name in order {
        update_str(name, &mut hasher);
        let states = network.states(name)?;
        hasher.update((states.len() as u64).to_le_bytes());
        for state in states {
            update_str(state, &mut hasher);
        }
        let parents = network.parents(name)?;
        hasher.update((parents.len() as u64).to_le_bytes());
        for parent in parents {
            update_str(parent, &mut hasher);
        }
        if let Some(def) = network.variable(name) {
            for row in &def.table {
                for value in row {
                    hasher.update(value.to_le_bytes());
                }
            }
        }
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
