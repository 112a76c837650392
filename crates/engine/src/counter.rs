use std::time::{Duration, Instant};

use log::{debug, log_enabled, trace, Level};

use crate::search::{LinearScan, SignatureSearch, SortedSightings};
use crate::sighting::{Signature, Sighting};
use crate::strategy::SearchStrategy;

/// Result of one timed search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub strategy: SearchStrategy,
    /// Queries with at least one matching sighting. Always `<= queries.len()`.
    pub matches: usize,
    /// Strategy construction (the sort, for binary) plus every lookup.
    pub elapsed: Duration,
}

/// Count queries answered by an already-bound strategy.
///
/// Duplicate queries are looked up and counted independently.
pub fn count_in<S: SignatureSearch + ?Sized>(search: &S, queries: &[Signature]) -> usize {
    queries.iter().filter(|&&target| search.contains(target)).count()
}

/// Bind `strategy` over `sightings` once and count matching queries.
///
/// The binary strategy sorts `sightings` in place; the linear strategy leaves
/// them untouched.
pub fn count_matches(sightings: &mut [Sighting], queries: &[Signature], strategy: SearchStrategy) -> usize {
    match strategy {
        SearchStrategy::Linear => count_in(&LinearScan::new(sightings), queries),
        SearchStrategy::Binary => {
            let sorted = SortedSightings::sort(sightings);
            if log_enabled!(Level::Trace) {
                for s in sorted.as_slice() {
                    trace!("sorted {s}");
                }
            }
            count_in(&sorted, queries)
        }
    }
}

/// [`count_matches`], timed from just before the strategy is built to just
/// after the last lookup.
pub fn timed_count(sightings: &mut [Sighting], queries: &[Signature], strategy: SearchStrategy) -> SearchOutcome {
    let start = Instant::now();
    let matches = count_matches(sightings, queries, strategy);
    let elapsed = start.elapsed();

    debug!(
        "{strategy} search: {matches}/{} queries matched over {} sightings in {elapsed:?}",
        queries.len(),
        sightings.len()
    );

    SearchOutcome { strategy, matches, elapsed }
}
