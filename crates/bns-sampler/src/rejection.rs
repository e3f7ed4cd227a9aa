use bns_core::errors::BnError;
use bns_core::{Evidence, Network, Query, RandomSource};

use crate::prior::generate_sample;
use crate::report::{EstimateReport, Method, WeightAccumulator};
use crate::validate;

/// Estimates `P(query | evidence)` by rejection sampling.
///
/// Draws `sample_count` prior samples, discards those disagreeing with the
/// evidence and returns the fraction of the remainder satisfying the query.
/// Returns `0.0` when every sample is rejected.
pub fn estimate_by_rejection<N, R>(
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
    rejection_sampling_report(network, query, evidence, sample_count, rng)
        .map(|report| report.estimate)
}

/// Rejection sampling returning the full [`EstimateReport`].
pub fn rejection_sampling_report<N, R>(
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
        "rejection_sampling",
        variable = %query.variable,
        state = %query.state,
        samples = sample_count
    );
    let _enter = span.enter();

    let mut acc = WeightAccumulator::default();
    for _ in 0..sample_count {
        let sample = generate_sample(network, rng)?;
        if evidence.is_consistent_with(&sample) {
            acc.record(1.0, sample.satisfies(query));
        } else {
            acc.record_rejected();
        }
    }

    let report = acc.into_report(Method::Rejection, query, evidence);
    tracing::debug!(
        retained = report.samples_retained,
        estimate = report.estimate,
        "rejection sampling finished"
    );
    Ok(report)
}
