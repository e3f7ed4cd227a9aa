use bns_core::{Evidence, Query};
use serde::{Deserialize, Serialize};

/// Estimator that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Forward sampling with evidence rejection.
    Rejection,
    /// Evidence clamping with likelihood weights.
    LikelihoodWeighting,
}

impl Method {
    /// Stable label used in logs and manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Rejection => "rejection",
            Method::LikelihoodWeighting => "likelihood-weighting",
        }
    }

    /// Substream index reserved for the method within a query's seed.
    pub(crate) fn substream(&self) -> u64 {
        match self {
            Method::Rejection => 0,
            Method::LikelihoodWeighting => 1,
        }
    }
}

/// Estimate together with the diagnostics of the run that produced it.
///
/// Rejection sampling reports unit weights: `weight_true` counts retained
/// samples satisfying the query and `weight_total` counts retained samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Estimator used.
    pub method: Method,
    /// Query whose posterior was estimated.
    pub query: Query,
    /// Evidence conditioned on.
    pub evidence: Evidence,
    /// Estimated `P(query | evidence)`; `0.0` when no weight was retained.
    pub estimate: f64,
    /// Samples generated.
    pub samples_drawn: usize,
    /// Samples that contributed to the estimate.
    pub samples_retained: usize,
    /// Weight of contributing samples satisfying the query.
    pub weight_true: f64,
    /// Weight of all contributing samples.
    pub weight_total: f64,
    /// Effective sample size `(Σw)² / Σw²`.
    pub effective_sample_size: f64,
}

/// Running sums folded over weighted samples.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WeightAccumulator {
    pub drawn: usize,
    pub retained: usize,
    pub weight_true: f64,
    pub weight_total: f64,
    pub weight_squares: f64,
}

impl WeightAccumulator {
    pub fn record_rejected(&mut self) {
        self.drawn += 1;
    }

    pub fn record(&mut self, weight: f64, satisfies_query: bool) {
        self.drawn += 1;
        self.retained += 1;
        self.weight_total += weight;
        self.weight_squares += weight * weight;
        if satisfies_query {
            self.weight_true += weight;
        }
    }

    pub fn estimate(&self) -> f64 {
        if self.weight_total > 0.0 {
            self.weight_true / self.weight_total
        } else {
            0.0
        }
    }

    pub fn effective_sample_size(&self) -> f64 {
        if self.weight_squares > 0.0 {
            self.weight_total * self.weight_total / self.weight_squares
        } else {
            0.0
        }
    }

    pub fn into_report(self, method: Method, query: &Query, evidence: &Evidence) -> EstimateReport {
        EstimateReport {
            method,
            query: query.clone(),
            evidence: evidence.clone(),
            estimate: self.estimate(),
            samples_drawn: self.drawn,
            samples_retained: self.retained,
            weight_true: self.weight_true,
            weight_total: self.weight_total,
            effective_sample_size: self.effective_sample_size(),
        }
    }
}
