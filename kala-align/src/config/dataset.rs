//! Dataset file names section.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// File names inside a dataset directory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSection {
    /// Ground-truth trajectory (quaternion columns `qw, qx, qy, qz`)
    #[serde(default = "defaults::gt_file")]
    pub gt_file: String,

    /// Estimated trajectory (quaternion columns `qx, qy, qz, qw`)
    #[serde(default = "defaults::es_file")]
    pub es_file: String,

    /// Cached timestamp matches
    #[serde(default = "defaults::matches_file")]
    pub matches_file: String,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            gt_file: defaults::gt_file(),
            es_file: defaults::es_file(),
            matches_file: defaults::matches_file(),
        }
    }
}

impl DatasetSection {
    /// Ground-truth path under `data_dir`
    pub fn gt_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.gt_file)
    }

    /// Estimate path under `data_dir`
    pub fn es_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.es_file)
    }

    /// Match cache path under `data_dir`
    pub fn matches_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.matches_file)
    }
}
