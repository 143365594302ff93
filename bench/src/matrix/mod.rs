pub mod benchmark_case;
pub mod parameter_space;
pub mod skip_set;

use crate::matrix::benchmark_case::BenchmarkCase;
use crate::matrix::parameter_space::ParameterSpace;
use crate::matrix::skip_set::SkipSet;
use std::collections::HashSet;
use tracing::debug;

/// Expands the parameter space into the ordered, de-duplicated list of
/// combinations to run.
///
/// Combinations whose function and resolved parameters coincide are kept
/// once, in the position of the first one generated. The result is sorted
/// descending by target directory, data size, app buffer size, resolved
/// stream buffer size, reserve flag and function, so indices are stable
/// across runs with the same space.
pub fn build_matrix(space: &ParameterSpace, skip_set: &SkipSet) -> Vec<BenchmarkCase> {
    let mut seen = HashSet::new();
    let mut matrix = space
        .combinations()
        .into_iter()
        .filter(|case| seen.insert(case.key()))
        .collect::<Vec<_>>();
    let generated = matrix.len();
    matrix.sort_by(|left, right| right.key().cmp(&left.key()));
    matrix.retain(|case| !skip_set.contains(&case.request));
    debug!(
        "Built matrix of {} combinations, skipped {}.",
        matrix.len(),
        generated - matrix.len()
    );
    matrix
}
