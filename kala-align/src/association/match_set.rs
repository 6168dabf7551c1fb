//! Match and MatchSet types.

use crate::core::TimestampNs;

/// A pair of timestamps judged simultaneous within tolerance.
///
/// Both values are the original, un-offset timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    /// Timestamp from the first series (estimate)
    pub a: TimestampNs,
    /// Timestamp from the second series (ground truth)
    pub b: TimestampNs,
}

impl Match {
    /// Create a new match.
    #[inline]
    pub fn new(a: TimestampNs, b: TimestampNs) -> Self {
        Self { a, b }
    }

    /// Signed residual `(a + offset) - b` in nanoseconds.
    #[inline]
    pub fn residual_ns(&self, offset_ns: i64) -> i128 {
        self.a as i128 + offset_ns as i128 - self.b as i128
    }
}

impl From<(TimestampNs, TimestampNs)> for Match {
    fn from((a, b): (TimestampNs, TimestampNs)) -> Self {
        Self::new(a, b)
    }
}

/// Broken MatchSet invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Matches are not in ascending order of `a`
    #[error("match {index} is out of order ({previous} followed by {current})")]
    Unordered {
        /// Index of the offending match
        index: usize,
        /// `a` of the previous match
        previous: TimestampNs,
        /// `a` of the offending match
        current: TimestampNs,
    },

    /// A first-series timestamp appears in more than one match
    #[error("timestamp {0} of the first series is matched more than once")]
    DuplicateA(TimestampNs),

    /// A second-series timestamp appears in more than one match
    #[error("timestamp {0} of the second series is matched more than once")]
    DuplicateB(TimestampNs),
}

/// One-to-one association between two timestamp series.
///
/// Always sorted by `a` ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<Match>,
}

impl MatchSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from matches in any order; sorts by `a` (then `b`).
    ///
    /// Does not check the one-to-one invariant, see [`MatchSet::validate`].
    pub fn from_matches(mut matches: Vec<Match>) -> Self {
        matches.sort_unstable();
        Self { matches }
    }

    /// Number of matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if there are no matches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over matches in ascending `a` order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Matches as a slice.
    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Matched second-series timestamp for `a`, if any.
    pub fn lookup(&self, a: TimestampNs) -> Option<TimestampNs> {
        self.matches
            .binary_search_by_key(&a, |m| m.a)
            .ok()
            .map(|i| self.matches[i].b)
    }

    /// Check ordering and one-to-one invariants.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (index, pair) in self.matches.windows(2).enumerate() {
            let (previous, current) = (pair[0].a, pair[1].a);
            if current == previous {
                return Err(InvariantViolation::DuplicateA(current));
            }
            if current < previous {
                return Err(InvariantViolation::Unordered {
                    index: index + 1,
                    previous,
                    current,
                });
            }
        }

        let mut seen_b = std::collections::HashSet::with_capacity(self.matches.len());
        for m in &self.matches {
            if !seen_b.insert(m.b) {
                return Err(InvariantViolation::DuplicateB(m.b));
            }
        }

        Ok(())
    }

    /// Residual statistics for these matches under `offset_ns`.
    pub fn statistics(&self, offset_ns: i64) -> MatchStatistics {
        MatchStatistics::compute(self, offset_ns)
    }

    pub(crate) fn push_unchecked(&mut self, m: Match) {
        self.matches.push(m);
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl IntoIterator for MatchSet {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl FromIterator<Match> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self::from_matches(iter.into_iter().collect())
    }
}

/// Time residual statistics of a MatchSet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchStatistics {
    /// Number of matches
    pub count: usize,
    /// Mean signed residual `(a + offset) - b` (ns)
    pub mean_residual_ns: f64,
    /// Mean absolute residual (ns)
    pub mean_abs_residual_ns: f64,
    /// Smallest absolute residual (ns)
    pub min_abs_residual_ns: u128,
    /// Largest absolute residual (ns)
    pub max_abs_residual_ns: u128,
}

impl MatchStatistics {
    /// Compute statistics over all matches.
    pub fn compute(matches: &MatchSet, offset_ns: i64) -> Self {
        if matches.is_empty() {
            return Self::default();
        }

        let count = matches.len();
        let mut sum = 0.0f64;
        let mut sum_abs = 0.0f64;
        let mut min_abs = u128::MAX;
        let mut max_abs = 0u128;

        for m in matches {
            let residual = m.residual_ns(offset_ns);
            let abs = residual.unsigned_abs();
            sum += residual as f64;
            sum_abs += abs as f64;
            min_abs = min_abs.min(abs);
            max_abs = max_abs.max(abs);
        }

        Self {
            count,
            mean_residual_ns: sum / count as f64,
            mean_abs_residual_ns: sum_abs / count as f64,
            min_abs_residual_ns: min_abs,
            max_abs_residual_ns: max_abs,
        }
    }

    /// Format as a single-line summary (milliseconds).
    pub fn summary(&self) -> String {
        format!(
            "{} matches, residual mean {:.3} ms, |residual| mean {:.3} ms (min {:.3}, max {:.3})",
            self.count,
            self.mean_residual_ns / 1e6,
            self.mean_abs_residual_ns / 1e6,
            self.min_abs_residual_ns as f64 / 1e6,
            self.max_abs_residual_ns as f64 / 1e6,
        )
    }
}
