use bns_core::errors::{BnError, ErrorInfo};
use bns_core::{Evidence, Network, Query};

pub(crate) fn check_query<N: Network + ?Sized>(network: &N, query: &Query) -> Result<(), BnError> {
    check_pair(network, &query.variable, &query.state).map_err(BnError::Query)
}

pub(crate) fn check_evidence<N: Network + ?Sized>(
    network: &N,
    evidence: &Evidence,
) -> Result<(), BnError> {
    for (variable, state) in evidence.iter() {
        check_pair(network, variable, state).map_err(BnError::Evidence)?;
    }
    Ok(())
}

fn check_pair<N: Network + ?Sized>(
    network: &N,
    variable: &str,
    state: &str,
) -> Result<(), ErrorInfo> {
    if !network.topological_order().iter().any(|v| v == variable) {
        return Err(
            ErrorInfo::new("unknown-variable", "variable is not part of the network")
                .with_context("variable", variable),
        );
    }
    let states = network
        .states(variable)
        .map_err(|err| err.info().clone())?;
    if !states.iter().any(|s| s == state) {
        return Err(
            ErrorInfo::new("unknown-state", "state is not declared for variable")
                .with_context("variable", variable)
                .with_context("state", state)
                .with_hint(format!("declared states: {}", states.join(", "))),
        );
    }
    Ok(())
}
