//! File I/O: trajectory series and the match cache.
//!
//! ```rust,ignore
//! use kala_align::io::{load_series, read_matches, write_matches};
//!
//! let estimate = load_series("data/traj_es.csv")?;
//! let ground_truth = load_series("data/traj_gt.csv")?;
//!
//! write_matches("data/traj_matches.csv", &matches)?;
//! let cached = read_matches("data/traj_matches.csv")?;
//! ```

mod match_cache;
mod series;

pub use match_cache::{
    MATCHES_HEADER, read_matches, read_matches_from, write_matches, write_matches_to,
};
pub use series::{MIN_POSE_COLUMNS, TrajectorySeries, load_series};
