//! Timestamped pose series loader.
//!
//! Reads comma-separated trajectory files:
//!
//! ```text
//! # timestamp, x, y, z, qx, qy, qz, qw
//! 1403636579758555392,0.1,0.2,0.3,0.0,0.0,0.0,1.0
//! ```
//!
//! The first line is always a header. Column 0 is an integer nanosecond
//! timestamp; the remaining columns are the pose payload.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::{Pose3D, QuaternionOrder, TimestampNs};
use crate::error::{Error, Result};

/// Minimum payload columns per row: position (3) + quaternion (4).
pub const MIN_POSE_COLUMNS: usize = 7;

/// An ordered series of timestamped pose rows loaded from a file.
#[derive(Clone, Debug)]
pub struct TrajectorySeries {
    source: PathBuf,
    timestamps: Vec<TimestampNs>,
    /// Row-major payload, `columns` values per row
    data: Vec<f64>,
    columns: usize,
    index: HashMap<TimestampNs, usize>,
}

impl TrajectorySeries {
    /// Parse a series from any reader. `source` is used in error messages.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut series = Self {
            source: source.to_path_buf(),
            timestamps: Vec::new(),
            data: Vec::new(),
            columns: 0,
            index: HashMap::new(),
        };
        let mut duplicates = 0usize;

        for (i, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let line_no = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.split(',').map(str::trim);
            let timestamp: TimestampNs = fields
                .next()
                .unwrap_or_default()
                .parse()
                .map_err(|e| Error::parse(source, line_no, format!("invalid timestamp: {}", e)))?;

            let row_start = series.data.len();
            for field in fields {
                let value: f64 = field.parse().map_err(|e| {
                    Error::parse(source, line_no, format!("invalid value '{}': {}", field, e))
                })?;
                series.data.push(value);
            }
            let width = series.data.len() - row_start;

            if series.columns == 0 {
                if width < MIN_POSE_COLUMNS {
                    return Err(Error::parse(
                        source,
                        line_no,
                        format!(
                            "expected at least {} pose columns, found {}",
                            MIN_POSE_COLUMNS, width
                        ),
                    ));
                }
                series.columns = width;
            } else if width != series.columns {
                return Err(Error::parse(
                    source,
                    line_no,
                    format!("expected {} pose columns, found {}", series.columns, width),
                ));
            }

            if series.index.contains_key(&timestamp) {
                series.data.truncate(row_start);
                duplicates += 1;
                continue;
            }
            series.index.insert(timestamp, series.timestamps.len());
            series.timestamps.push(timestamp);
        }

        if duplicates > 0 {
            warn!(
                "{}: dropped {} rows with duplicate timestamps",
                source.display(),
                duplicates
            );
        }
        debug!(
            "Loaded {} samples ({} columns) from {}",
            series.len(),
            series.columns,
            source.display()
        );

        Ok(series)
    }

    /// File this series was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Timestamps in file row order.
    pub fn timestamps(&self) -> &[TimestampNs] {
        &self.timestamps
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Payload columns per row (0 for an empty series).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Payload of row `i`.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.len() {
            return None;
        }
        let start = i * self.columns;
        Some(&self.data[start..start + self.columns])
    }

    /// Row index for a timestamp.
    pub fn index_of(&self, timestamp: TimestampNs) -> Option<usize> {
        self.index.get(&timestamp).copied()
    }

    /// Payload for a timestamp.
    pub fn get(&self, timestamp: TimestampNs) -> Option<&[f64]> {
        self.index_of(timestamp).and_then(|i| self.row(i))
    }

    /// Pose of row `i`, reading the quaternion in `order`.
    pub fn pose(&self, i: usize, order: QuaternionOrder) -> Option<Pose3D> {
        Pose3D::from_columns(self.row(i)?, order)
    }
}

/// Load a series from a file.
///
/// Fails with [`Error::NotFound`] if the file does not exist.
pub fn load_series(path: impl AsRef<Path>) -> Result<TrajectorySeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    TrajectorySeries::from_reader(BufReader::new(file), path)
}
