//! Association parameters.

use crate::core::secs_to_nanos;
use crate::error::{Error, Result};

/// Default maximum time difference between matched samples (20 ms).
pub const DEFAULT_MAX_DIFFERENCE_NS: u64 = 20_000_000;

/// Parameters for timestamp association.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssociationConfig {
    /// Added to every timestamp of the first series before comparison.
    /// Compensates constant clock skew; may be negative.
    pub offset_ns: i64,

    /// Maximum absolute time difference for a valid match.
    pub max_difference_ns: u64,
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self {
            offset_ns: 0,
            max_difference_ns: DEFAULT_MAX_DIFFERENCE_NS,
        }
    }
}

impl AssociationConfig {
    /// Create a config from nanosecond values.
    pub fn new(offset_ns: i64, max_difference_ns: u64) -> Self {
        Self {
            offset_ns,
            max_difference_ns,
        }
    }

    /// Create a config from values in seconds.
    ///
    /// Fails if either value is not finite, or if the tolerance is negative.
    pub fn from_secs(offset_secs: f64, max_difference_secs: f64) -> Result<Self> {
        let offset_ns = secs_to_nanos(offset_secs)
            .ok_or_else(|| Error::Config(format!("invalid offset: {} s", offset_secs)))?;

        if max_difference_secs < 0.0 {
            return Err(Error::Config(format!(
                "max difference must be non-negative, got {} s",
                max_difference_secs
            )));
        }
        let max_difference_ns = secs_to_nanos(max_difference_secs).ok_or_else(|| {
            Error::Config(format!("invalid max difference: {} s", max_difference_secs))
        })?;

        Ok(Self::new(offset_ns, max_difference_ns as u64))
    }
}
