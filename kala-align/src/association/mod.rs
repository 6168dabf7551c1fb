//! Timestamp association between two trajectories.
//!
//! Pairs each timestamp of a first series (usually the estimate) with at most
//! one timestamp of a second series (usually ground truth), within a maximum
//! time difference and after a constant clock offset is applied to the first
//! series.
//!
//! ## Example
//!
//! ```
//! use kala_align::association::associate;
//!
//! let matches = associate(&[100, 200, 300], &[101, 199, 500], 0, 5);
//! let pairs: Vec<_> = matches.iter().map(|m| (m.a, m.b)).collect();
//! assert_eq!(pairs, vec![(100, 101), (200, 199)]);
//! ```

mod associator;
mod config;
mod match_set;

pub use associator::{TimestampAssociator, associate};
pub use config::{AssociationConfig, DEFAULT_MAX_DIFFERENCE_NS};
pub use match_set::{InvariantViolation, Match, MatchSet, MatchStatistics};
