//! Dataset loading: series, cached association, and the pose join.
//!
//! ## Flow
//!
//! ```text
//! traj_es.csv ──┐
//!               ├─► associate (or traj_matches.csv) ─► join ─► AlignedTrajectories
//! traj_gt.csv ──┘
//! ```
//!
//! The estimate is the first series (the offset applies to it), ground truth
//! the second.

use std::path::Path;

use log::info;

use crate::association::{AssociationConfig, MatchSet, associate};
use crate::config::DatasetSection;
use crate::core::{QuaternionOrder, TimestampNs};
use crate::error::{Error, Result};
use crate::io::{TrajectorySeries, load_series, read_matches, write_matches};

/// Estimated and ground-truth poses paired by timestamp.
///
/// All arrays have one entry per matched estimate sample, in estimate file
/// order. Quaternions are `[qx, qy, qz, qw]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignedTrajectories {
    /// Estimate timestamps
    pub t_es: Vec<TimestampNs>,
    /// Estimate positions
    pub p_es: Vec<[f64; 3]>,
    /// Estimate orientations
    pub q_es: Vec<[f64; 4]>,
    /// Matched ground-truth timestamps
    pub t_gt: Vec<TimestampNs>,
    /// Ground-truth positions
    pub p_gt: Vec<[f64; 3]>,
    /// Ground-truth orientations
    pub q_gt: Vec<[f64; 4]>,
}

impl AlignedTrajectories {
    /// Join two series through a MatchSet.
    ///
    /// `matches_source` names the match file in errors. A match whose
    /// ground-truth timestamp is missing from `ground_truth` (stale cache)
    /// fails with [`Error::Parse`].
    pub fn join(
        estimate: &TrajectorySeries,
        ground_truth: &TrajectorySeries,
        matches: &MatchSet,
        matches_source: &Path,
    ) -> Result<Self> {
        let mut aligned = Self::with_capacity(matches.len());

        for (i, &t_es) in estimate.timestamps().iter().enumerate() {
            let Some(t_gt) = matches.lookup(t_es) else {
                continue;
            };
            let gt_index = ground_truth.index_of(t_gt).ok_or_else(|| {
                let message = format!(
                    "ground-truth timestamp {} not in {}",
                    t_gt,
                    ground_truth.source().display()
                );
                Error::parse(matches_source, 0, message)
            })?;

            // Both series hold at least 7 columns, so poses always exist.
            let (Some(es), Some(gt)) = (
                estimate.pose(i, QuaternionOrder::Xyzw),
                ground_truth.pose(gt_index, QuaternionOrder::Wxyz),
            ) else {
                continue;
            };

            aligned.t_es.push(t_es);
            aligned.p_es.push(es.position);
            aligned.q_es.push(es.orientation);
            aligned.t_gt.push(t_gt);
            aligned.p_gt.push(gt.position);
            aligned.q_gt.push(gt.orientation);
        }

        Ok(aligned)
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            t_es: Vec::with_capacity(n),
            p_es: Vec::with_capacity(n),
            q_es: Vec::with_capacity(n),
            t_gt: Vec::with_capacity(n),
            p_gt: Vec::with_capacity(n),
            q_gt: Vec::with_capacity(n),
        }
    }

    /// Number of aligned pose pairs.
    pub fn len(&self) -> usize {
        self.t_es.len()
    }

    /// True if nothing was aligned.
    pub fn is_empty(&self) -> bool {
        self.t_es.is_empty()
    }
}

/// Associate with an on-disk cache.
///
/// Loads `cache_path` verbatim if it exists and `rematch` is false.
/// Otherwise computes the matches and writes them to `cache_path`.
pub fn associate_cached(
    series_a: &[TimestampNs],
    series_b: &[TimestampNs],
    config: &AssociationConfig,
    cache_path: &Path,
    rematch: bool,
) -> Result<MatchSet> {
    if cache_path.exists() && !rematch {
        info!("Load timestamp matches from file {}", cache_path.display());
        return read_matches(cache_path);
    }

    info!("Find timestamp matches");
    let matches = associate(
        series_a,
        series_b,
        config.offset_ns,
        config.max_difference_ns,
    );
    write_matches(cache_path, &matches)?;
    info!(
        "Matched {} of {} timestamps, written to {}",
        matches.len(),
        series_a.len(),
        cache_path.display()
    );
    Ok(matches)
}

/// Load a dataset directory and align its trajectories.
///
/// Missing trajectory files fail with [`Error::NotFound`] before matching.
pub fn load_dataset(
    data_dir: &Path,
    files: &DatasetSection,
    config: &AssociationConfig,
    rematch: bool,
) -> Result<AlignedTrajectories> {
    let gt_path = files.gt_path(data_dir);
    let es_path = files.es_path(data_dir);
    let matches_path = files.matches_path(data_dir);

    for path in [&gt_path, &es_path] {
        if !path.is_file() {
            return Err(Error::NotFound(path.clone()));
        }
    }

    let ground_truth = load_series(&gt_path)?;
    let estimate = load_series(&es_path)?;

    let matches = associate_cached(
        estimate.timestamps(),
        ground_truth.timestamps(),
        config,
        &matches_path,
        rematch,
    )?;

    AlignedTrajectories::join(&estimate, &ground_truth, &matches, &matches_path)
}
