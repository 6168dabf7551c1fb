//! Main KalaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::association::AssociationSection;
use super::dataset::DatasetSection;
use crate::association::AssociationConfig;
use crate::error::{Error, Result};

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/kala.toml";

/// Full KalaAlign configuration loaded from TOML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KalaConfig {
    /// Dataset file names
    #[serde(default)]
    pub dataset: DatasetSection,

    /// Association parameters
    #[serde(default)]
    pub association: AssociationSection,
}

impl KalaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Self::from_toml(&contents)
    }

    /// Load from the default config path, or use defaults if it is absent
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Runtime association parameters
    pub fn association_config(&self) -> Result<AssociationConfig> {
        self.association.to_association_config()
    }
}
