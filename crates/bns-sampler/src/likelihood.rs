use bns_core::errors::BnError;
use bns_core::{Assignment, Evidence, Network, Query, RandomSource, Sample};
use serde::{Deserialize, Serialize};

use crate::prior::sample_variable;
use crate::report::{EstimateReport, Method, WeightAccumulator};
use crate::validate;

/// A sample with evidence clamped, weighted by the likelihood of the evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSample {
    /// Total assignment, agreeing with the evidence on every observed variable.
    pub sample: Sample,
    /// Product of `P(observed | parents)` over the evidence variables.
    pub weight: f64,
}

/// Draws one likelihood-weighted sample.
///
/// Evidence variables are fixed to their observed state and consume no draw;
/// all other variables are forward sampled.
pub fn weighted_sample<N, R>(
    network: &N,
    evidence: &Evidence,
    rng: &mut R,
) -> Result<WeightedSample, BnError>
where
    N: Network + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut assignment = Assignment::new();
    let mut weight = 1.0;
    for variable in network.topological_order() {
        let state = match evidence.get(variable) {
            Some(observed) => {
                weight *= network.conditional_probability(variable, observed, &assignment)?;
                observed.to_string()
            }
            None => sample_variable(network, variable, &assignment, rng)?,
        };
        assignment.insert(variable.clone(), state);
    }
    Ok(WeightedSample {
        sample: Sample::from_assignment(assignment),
        weight,
    })
}

/// Estimates `P(query | evidence)` by likelihood weighting.
///
/// Returns `Σ w·[query holds] / Σ w`, or `0.0` when the total weight is zero.
pub fn estimate_by_likelihood_weighting<N, R>(
    network: &N,
    query: &Query,
    evidence: &Evidence,
    sample_count: usize,
    rng: &mut R,
) -> Result<f64, BnError>
where
    N: Network + ?Sized,
    R: RandomSource + ?Sized,
{
    likelihood_weighting_report(network, query, evidence, sample_count, rng)
        .map(|report| report.estimate)
}

/// Likelihood weighting returning the full [`EstimateReport`].
///
/// No sample is ever rejected, so `samples_retained == samples_drawn`.
pub fn likelihood_weighting_report<N, R>(
    network: &N,
    query: &Query,
    evidence: &Evidence,
    sample_count: usize,
    rng: &mut R,
) -> Result<EstimateReport, BnError>
where
    N: Network + ?Sized,
    R: RandomSource + ?Sized,
{
    validate::check_query(network, query)?;
    validate::check_evidence(network, evidence)?;

    let span = tracing::info_span!(
        "likelihood_weighting",
        variable = %query.variable,
        state = %query.state,
        samples = sample_count
    );
    let _enter = span.enter();

    let mut acc = WeightAccumulator::default();
    for _ in 0..sample_count {
        let weighted = weighted_sample(network, evidence, rng)?;
        acc.record(weighted.weight, weighted.sample.satisfies(query));
    }

    let report = acc.into_report(Method::LikelihoodWeighting, query, evidence);
    tracing::debug!(
        weight_total = report.weight_total,
        effective_sample_size = report.effective_sample_size,
        estimate = report.estimate,
        "likelihood weighting finished"
    );
    Ok(report)
}
