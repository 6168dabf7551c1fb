//! # KalaAlign
//!
//! Temporal alignment of an estimated trajectory against ground truth.
//!
//! ## Overview
//!
//! Both trajectories are CSV files of timestamped poses recorded by clocks
//! that are sampled independently and may be skewed. KalaAlign pairs each
//! estimate sample with at most one ground-truth sample:
//!
//! - **Association**: greedy nearest-neighbor matching under a maximum time
//!   difference, after a constant clock offset is applied to the estimate
//! - **Match cache**: matches are written next to the data and reused until a
//!   rematch is forced
//! - **Join**: matched samples are turned into parallel position and
//!   orientation arrays for error metrics
//!
//! Matching is purely temporal. Error metrics and trajectory alignment are
//! left to downstream tools.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use kala_align::{KalaConfig, load_dataset};
//!
//! let config = KalaConfig::load_default()?;
//! let aligned = load_dataset(
//!     Path::new("results/run_01"),
//!     &config.dataset,
//!     &config.association_config()?,
//!     false, // reuse traj_matches.csv if present
//! )?;
//!
//! println!("{} aligned poses", aligned.len());
//! ```
//!
//! ## Timestamps
//!
//! All timestamps are integer nanoseconds ([`TimestampNs`]). The offset is
//! added to estimate timestamps only while deciding matches; matches always
//! hold the original values.

#![warn(missing_docs)]

// Core types
pub mod core;

// Timestamp association (greedy matcher, MatchSet)
pub mod association;

// Series loader and match cache
pub mod io;

// TOML configuration
pub mod config;

// Cached association + pose join
pub mod dataset;

mod error;

pub use association::{
    AssociationConfig, Match, MatchSet, MatchStatistics, TimestampAssociator, associate,
};
pub use config::KalaConfig;
pub use crate::core::{Pose3D, QuaternionOrder, TimestampNs};
pub use dataset::{AlignedTrajectories, associate_cached, load_dataset};
pub use error::{Error, Result};
pub use io::{TrajectorySeries, load_series, read_matches, write_matches};
