//! Greedy nearest-neighbor timestamp association.
//!
//! ## Algorithm
//!
//! 1. Collect candidate pairs `(a, b)` with `|(a + offset) - b| <= max_difference`.
//!    Candidates come from a sliding window over a sorted copy of the second
//!    series, so the full cross product is never built.
//! 2. Sort candidates by cost, then `a`, then `b`.
//! 3. Accept candidates in order, skipping any whose `a` or `b` is already used.
//! 4. Return the accepted matches sorted by `a`.
//!
//! The result is not a globally minimum-cost assignment. Downstream tooling
//! depends on the greedy output, so it must stay greedy.

use std::collections::HashSet;

use log::debug;

use super::config::AssociationConfig;
use super::match_set::{Match, MatchSet};
use crate::core::TimestampNs;

/// A potential match and its cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    // Field order gives the (cost, a, b) sort order.
    cost: u128,
    a: TimestampNs,
    b: TimestampNs,
}

/// Associate two timestamp series.
///
/// `offset_ns` is added to every value of `series_a` before comparison.
/// Returned matches hold the original values and are sorted by `a`.
/// Empty inputs give an empty set.
pub fn associate(
    series_a: &[TimestampNs],
    series_b: &[TimestampNs],
    offset_ns: i64,
    max_difference_ns: u64,
) -> MatchSet {
    if series_a.is_empty() || series_b.is_empty() {
        debug!("Associated 0 timestamps (empty series)");
        return MatchSet::new();
    }

    let mut candidates = collect_candidates(series_a, series_b, offset_ns, max_difference_ns);
    candidates.sort_unstable();

    let mut used_a: HashSet<TimestampNs> = HashSet::with_capacity(series_a.len());
    let mut used_b: HashSet<TimestampNs> = HashSet::with_capacity(series_b.len());
    let mut accepted = Vec::with_capacity(series_a.len().min(series_b.len()));

    for c in &candidates {
        if used_a.contains(&c.a) || used_b.contains(&c.b) {
            continue;
        }
        used_a.insert(c.a);
        used_b.insert(c.b);
        accepted.push(Match::new(c.a, c.b));
    }

    debug!(
        "Associated {} of {} timestamps from {} candidates (offset {} ns, max difference {} ns)",
        accepted.len(),
        series_a.len(),
        candidates.len(),
        offset_ns,
        max_difference_ns
    );

    MatchSet::from_matches(accepted)
}

/// Candidate pairs within tolerance.
///
/// Uses 128-bit arithmetic so offset and tolerance never overflow.
fn collect_candidates(
    series_a: &[TimestampNs],
    series_b: &[TimestampNs],
    offset_ns: i64,
    max_difference_ns: u64,
) -> Vec<Candidate> {
    let mut sorted_b = series_b.to_vec();
    sorted_b.sort_unstable();

    let tolerance = max_difference_ns as i128;
    let mut candidates = Vec::new();

    for &a in series_a {
        let shifted = a as i128 + offset_ns as i128;
        let lower = shifted - tolerance;
        let upper = shifted + tolerance;

        let start = sorted_b.partition_point(|&b| (b as i128) < lower);
        for &b in sorted_b[start..].iter().take_while(|&&b| (b as i128) <= upper) {
            candidates.push(Candidate {
                cost: (shifted - b as i128).unsigned_abs(),
                a,
                b,
            });
        }
    }

    candidates
}

/// Timestamp associator bound to a fixed configuration.
///
/// # Example
///
/// ```
/// use kala_align::association::{AssociationConfig, TimestampAssociator};
///
/// let associator = TimestampAssociator::new(AssociationConfig::new(0, 5));
/// let matches = associator.associate(&[100, 200, 300], &[101, 199, 500]);
///
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches.lookup(100), Some(101));
/// assert_eq!(matches.lookup(300), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimestampAssociator {
    config: AssociationConfig,
}

impl TimestampAssociator {
    /// Create a new associator.
    pub fn new(config: AssociationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AssociationConfig {
        &self.config
    }

    /// Associate `series_a` (offset applied) against `series_b`.
    pub fn associate(&self, series_a: &[TimestampNs], series_b: &[TimestampNs]) -> MatchSet {
        associate(
            series_a,
            series_b,
            self.config.offset_ns,
            self.config.max_difference_ns,
        )
    }
}
