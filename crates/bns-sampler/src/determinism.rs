use bns_core::derive_substream_seed;

use crate::report::Method;

/// Derives the deterministic seed shared by all estimators of one query.
pub fn query_seed(master_seed: u64, query_index: usize) -> u64 {
    derive_substream_seed(master_seed, query_index as u64)
}

/// Derives the seed of a single estimation run.
pub fn estimator_seed(master_seed: u64, query_index: usize, method: Method) -> u64 {
    derive_substream_seed(query_seed(master_seed, query_index), method.substream())
}
