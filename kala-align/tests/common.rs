//! Test utilities for KalaAlign.
//!
//! Synthetic timestamp series and trajectory CSV fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Evenly spaced timestamps starting at `start_ns`.
pub fn regular_timestamps(n: usize, start_ns: i64, period_ns: i64) -> Vec<i64> {
    (0..n as i64).map(|i| start_ns + i * period_ns).collect()
}

/// Add deterministic jitter in `[-max_jitter_ns, max_jitter_ns]`.
pub fn add_jitter(timestamps: &[i64], max_jitter_ns: i64, seed: u64) -> Vec<i64> {
    use std::num::Wrapping;

    // Simple LCG PRNG for reproducibility
    let mut state = Wrapping(seed);
    let a = Wrapping(1664525u64);
    let c = Wrapping(1013904223u64);

    timestamps
        .iter()
        .map(|&t| {
            state = a * state + c;
            let unit = ((state.0 >> 16) & 0xFFFF) as f64 / 65535.0;
            t + ((unit * 2.0 - 1.0) * max_jitter_ns as f64).round() as i64
        })
        .collect()
}

/// CSV body for an estimate trajectory (`qx, qy, qz, qw`).
pub fn estimate_csv(timestamps: &[i64]) -> String {
    let mut text = String::from("# timestamp,x,y,z,qx,qy,qz,qw\n");
    for (i, t) in timestamps.iter().enumerate() {
        text.push_str(&format!("{},{},0,0,0,0,0,1\n", t, i as f64 * 0.1));
    }
    text
}

/// CSV body for a ground-truth trajectory (`qw, qx, qy, qz`).
pub fn ground_truth_csv(timestamps: &[i64]) -> String {
    let mut text = String::from("# timestamp,x,y,z,qw,qx,qy,qz\n");
    for (i, t) in timestamps.iter().enumerate() {
        text.push_str(&format!("{},{},0,0,1,0,0,0\n", t, i as f64 * 0.1));
    }
    text
}

/// Temporary dataset directory with `traj_es.csv` and `traj_gt.csv`.
///
/// The directory is removed when the fixture is dropped.
pub struct DatasetFixture {
    temp_dir: TempDir,
}

impl DatasetFixture {
    /// Create a dataset from estimate and ground-truth timestamps.
    pub fn new(es: &[i64], gt: &[i64]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let fixture = Self { temp_dir };
        fixture.write_estimate(es);
        fixture.write_ground_truth(gt);
        fixture
    }

    /// Create a directory with no files.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_estimate(&self, timestamps: &[i64]) {
        fs::write(self.path("traj_es.csv"), estimate_csv(timestamps))
            .expect("Failed to write estimate");
    }

    pub fn write_ground_truth(&self, timestamps: &[i64]) {
        fs::write(self.path("traj_gt.csv"), ground_truth_csv(timestamps))
            .expect("Failed to write ground truth");
    }

    pub fn matches_path(&self) -> PathBuf {
        self.path("traj_matches.csv")
    }
}
