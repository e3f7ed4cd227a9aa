use bns_core::errors::{BnError, ErrorInfo};
use bns_core::{Assignment, Network, RandomSource, Sample};

/// Draws one total assignment by forward sampling in topological order.
///
/// Each variable consumes exactly one draw from `rng`.
pub fn generate_sample<N, R>(network: &N, rng: &mut R) -> Result<Sample, BnError>
where
    N: Network + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut assignment = Assignment::new();
    for variable in network.topological_order() {
        let state = sample_variable(network, variable, &assignment, rng)?;
        assignment.insert(variable.clone(), state);
    }
    Ok(Sample::from_assignment(assignment))
}

/// Samples `variable` given the parents already present in `partial`.
pub(crate) fn sample_variable<N, R>(
    network: &N,
    variable: &str,
    partial: &Assignment,
    rng: &mut R,
) -> Result<String, BnError>
where
    N: Network + ?Sized,
    R: RandomSource + ?Sized,
{
    let states = network.states(variable)?;
    if states.is_empty() {
        return Err(BnError::Network(
            ErrorInfo::new("empty-states", "variable declares no states")
                .with_context("variable", variable),
        ));
    }
    let mut probabilities = Vec::with_capacity(states.len());
    for state in states {
        probabilities.push(network.conditional_probability(variable, state, partial)?);
    }
    let draw = rng.next_unit();
    Ok(states[select_state(&probabilities, draw)].clone())
}

/// Inverse-CDF selection over an ordered distribution.
///
/// Returns the first index with positive mass whose cumulative probability
/// reaches `draw`. When rounding keeps the running sum below `draw`, the last
/// index is returned.
pub fn select_state(probabilities: &[f64], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if p > 0.0 && draw <= cumulative {
            return index;
        }
    }
    probabilities.len().saturating_sub(1)
}
