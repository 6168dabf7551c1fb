//! Nanosecond timestamps.

/// Timestamp in nanoseconds since an arbitrary, per-source epoch.
pub type TimestampNs = i64;

/// Nanoseconds in one second.
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Convert seconds to the nearest whole nanosecond.
///
/// Returns `None` for NaN, infinities, and values outside the `i64` range.
pub fn secs_to_nanos(secs: f64) -> Option<i64> {
    if !secs.is_finite() {
        return None;
    }
    let nanos = (secs * NANOS_PER_SEC).round();
    if nanos < i64::MIN as f64 || nanos > i64::MAX as f64 {
        return None;
    }
    Some(nanos as i64)
}
