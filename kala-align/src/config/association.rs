//! Timestamp association section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::association::AssociationConfig;
use crate::error::Result;

/// Association parameters in seconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssociationSection {
    /// Added to estimate timestamps before matching (seconds)
    #[serde(default)]
    pub offset_secs: f64,

    /// Maximum time difference for a match (seconds)
    #[serde(default = "defaults::max_difference_secs")]
    pub max_difference_secs: f64,
}

impl Default for AssociationSection {
    fn default() -> Self {
        Self {
            offset_secs: 0.0,
            max_difference_secs: defaults::max_difference_secs(),
        }
    }
}

impl AssociationSection {
    /// Convert to nanosecond runtime parameters
    pub fn to_association_config(&self) -> Result<AssociationConfig> {
        AssociationConfig::from_secs(self.offset_secs, self.max_difference_secs)
    }
}
