//! Match cache file.
//!
//! Two integer columns with a header row, one match per line, ordered by the
//! first column:
//!
//! ```text
//! timestamp_es,timestamp_gt
//! 1403636579758555392,1403636579763555584
//! ```
//!
//! Files are written to a sibling `.tmp` path and renamed into place, so an
//! interrupted write never leaves a truncated cache behind. No locking:
//! concurrent writers to the same path race.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::association::{Match, MatchSet};
use crate::error::{Error, Result};

/// Header row of the cache file.
pub const MATCHES_HEADER: &str = "timestamp_es,timestamp_gt";

/// Staging path next to the cache file.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write matches, replacing any existing file.
///
/// The file at `path` is either the complete new table or untouched. On
/// failure the staging file is removed.
pub fn write_matches(path: impl AsRef<Path>, matches: &MatchSet) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = staging_path(path);

    let result = write_staged(&tmp_path, matches)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(Error::from));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_staged(tmp_path: &Path, matches: &MatchSet) -> Result<()> {
    let mut writer = BufWriter::new(File::create(tmp_path)?);
    write_matches_to(&mut writer, matches)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Write matches to any writer.
pub fn write_matches_to<W: Write>(writer: &mut W, matches: &MatchSet) -> Result<()> {
    writeln!(writer, "{}", MATCHES_HEADER)?;
    for m in matches {
        writeln!(writer, "{},{}", m.a, m.b)?;
    }
    Ok(())
}

/// Read matches written by [`write_matches`].
///
/// Rows are taken verbatim. Wrong column counts, non-integer values, and
/// sets that are unordered or not one-to-one fail with [`Error::Parse`].
pub fn read_matches(path: impl AsRef<Path>) -> Result<MatchSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    read_matches_from(BufReader::new(file), path)
}

/// Read matches from any reader. `source` is used in error messages.
pub fn read_matches_from<R: BufRead>(reader: R, source: &Path) -> Result<MatchSet> {
    let mut matches = MatchSet::new();

    for (i, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(Error::parse(
                source,
                line_no,
                format!("expected 2 columns, found {}", fields.len()),
            ));
        }

        let parse_field = |field: &str| {
            field.parse::<i64>().map_err(|e| {
                Error::parse(source, line_no, format!("invalid timestamp '{}': {}", field, e))
            })
        };
        let a = parse_field(fields[0])?;
        let b = parse_field(fields[1])?;
        matches.push_unchecked(Match::new(a, b));
    }

    matches
        .validate()
        .map_err(|violation| Error::parse(source, 0, violation.to_string()))?;

    Ok(matches)
}
