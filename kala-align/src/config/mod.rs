//! Configuration loading for KalaAlign.
//!
//! All settings live in one TOML file; every key is optional.
//!
//! ```rust,ignore
//! use kala_align::config::KalaConfig;
//!
//! // configs/kala.toml if present, defaults otherwise
//! let config = KalaConfig::load_default()?;
//! let association = config.association_config()?;
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! [dataset]
//! gt_file = "traj_gt.csv"
//! es_file = "traj_es.csv"
//! matches_file = "traj_matches.csv"
//!
//! [association]
//! offset_secs = 0.0            # added to estimate timestamps
//! max_difference_secs = 0.02   # 20ms tolerance
//! ```

mod association;
mod dataset;
mod defaults;
mod kala;

pub use association::AssociationSection;
pub use dataset::DatasetSection;
pub use kala::{DEFAULT_CONFIG_PATH, KalaConfig};
