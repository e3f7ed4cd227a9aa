use std::error::Error;
use std::fs;
use std::path::Path;

use bns_net::{network_from_json, DiscreteNetwork};

pub mod query;
pub mod sample;
pub mod version;

/// Reads a network from its JSON document.
pub fn load_network(path: &Path) -> Result<DiscreteNetwork, Box<dyn Error>> {
    let json = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    Ok(network_from_json(&json)?)
}

/// Parses a `VAR=STATE` argument.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (variable, state) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected VAR=STATE, got `{raw}`"))?;
    let (variable, state) = (variable.trim(), state.trim());
    if variable.is_empty() || state.is_empty() {
        return Err(format!("expected VAR=STATE, got `{raw}`"));
    }
    Ok((variable.to_string(), state.to_string()))
}
