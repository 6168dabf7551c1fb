//! Pose type for 3D trajectories.

/// Component order of a quaternion stored in a row of pose columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionOrder {
    /// `qx, qy, qz, qw` (estimated trajectories)
    Xyzw,
    /// `qw, qx, qy, qz` (ground-truth trajectories)
    Wxyz,
}

/// Rigid body pose in 3D space.
///
/// Position in meters, orientation as a unit quaternion in `x, y, z, w` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose3D {
    /// Position `[x, y, z]`
    pub position: [f64; 3],
    /// Orientation quaternion `[qx, qy, qz, qw]`
    pub orientation: [f64; 4],
}

impl Pose3D {
    /// Create a new pose from position and an `x, y, z, w` quaternion.
    #[inline]
    pub fn new(position: [f64; 3], orientation: [f64; 4]) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Identity pose at origin.
    #[inline]
    pub fn identity() -> Self {
        Self::new([0.0; 3], [0.0, 0.0, 0.0, 1.0])
    }

    /// Build a pose from 7 payload columns: position then quaternion in `order`.
    ///
    /// Returns `None` if fewer than 7 values are given.
    pub fn from_columns(values: &[f64], order: QuaternionOrder) -> Option<Self> {
        if values.len() < 7 {
            return None;
        }
        let position = [values[0], values[1], values[2]];
        let q = &values[3..7];
        let orientation = match order {
            QuaternionOrder::Xyzw => [q[0], q[1], q[2], q[3]],
            QuaternionOrder::Wxyz => [q[1], q[2], q[3], q[0]],
        };
        Some(Self::new(position, orientation))
    }
}

impl Default for Pose3D {
    fn default() -> Self {
        Self::identity()
    }
}
