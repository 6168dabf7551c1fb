//! Core types: nanosecond timestamps and 3D poses.

mod pose;
mod timestamp;

pub use pose::{Pose3D, QuaternionOrder};
pub use timestamp::{NANOS_PER_SEC, TimestampNs, secs_to_nanos};
