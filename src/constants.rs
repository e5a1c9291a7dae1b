//! Physical constants used in launch calculations
//!
//! Distances are in blocks, times in seconds. "Motion" is the simulation's
//! native per-tick velocity unit that the host applies to a spawned entity.

/// Gravitational deceleration acting on a primed explosive, blocks/s²
///
/// Measured in-game, not derived from the tick rate. Must be reproduced exactly.
pub const GRAV_ACCEL: f64 = 19.8347;

/// Horizontal speed (blocks/s) of a primed explosive launched with a motion of 1
///
/// A horizontal motion of 1 combined with a vertical motion of 1 carries the
/// projectile 30 blocks; a horizontal motion of 2 carries it 60. The linear
/// relationship is what lets drag be ignored.
pub const LATERAL_CONSTANT: f64 = 13.63;

/// Vertical speed (blocks/s) of a primed explosive launched with a motion of 1
pub const VERTICAL_CONSTANT: f64 = 21.81817;

/// How far above the higher endpoint the arc peaks, as a multiple of its height
pub const DEFAULT_ARC_FACTOR: f64 = 1.25;

/// Upper bound on the number of intervals in an arc preview
pub const MAX_ARC_SAMPLES: usize = 10_000;

/// Minimum threshold for preventing division by zero in general calculations
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;

/// Calibration table handed to the solver.
///
/// The defaults are the values measured against the host's integrator; a
/// different projectile entity needs its own measurements.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    pub gravity: f64,           // blocks/s²
    pub lateral_constant: f64,  // blocks/s per unit of horizontal motion
    pub vertical_constant: f64, // blocks/s per unit of vertical motion
}

impl PhysicsConstants {
    pub const TNT: PhysicsConstants = PhysicsConstants {
        gravity: GRAV_ACCEL,
        lateral_constant: LATERAL_CONSTANT,
        vertical_constant: VERTICAL_CONSTANT,
    };

    /// Convert a real horizontal speed into motion units
    pub fn lateral_motion(&self, speed: f64) -> f64 {
        speed / self.lateral_constant
    }

    /// Convert a real vertical speed into motion units
    pub fn vertical_motion(&self, speed: f64) -> f64 {
        speed / self.vertical_constant
    }
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self::TNT
    }
}
