use crate::constants::{PhysicsConstants, DEFAULT_ARC_FACTOR, MIN_DIVISION_THRESHOLD};
use crate::error::LaunchError;
use nalgebra::{Point3, Vector3};

/* Kinematics used below, constant acceleration, no drag:
 *
 *   v   = v0 + a*t
 *   v^2 = v0^2 + 2*a*(x - x0)
 *   x   = v*t              (horizontal, a = 0)
 */

/// Multiplier applied to the higher endpoint's height to place the arc peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFactor(f64);

impl ArcFactor {
    pub fn new(value: f64) -> Result<Self, LaunchError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LaunchError::InvalidInput(format!(
                "arc factor must be a positive finite number, got {value}"
            )));
        }
        Ok(ArcFactor(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ArcFactor {
    fn default() -> Self {
        ArcFactor(DEFAULT_ARC_FACTOR)
    }
}

/// Everything the solver worked out for a single launch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSolution {
    /// Initial motion to apply to the spawned projectile, in motion units
    pub motion: Vector3<f64>,
    pub flight_time_s: f64,
    /// Absolute height the arc is aimed to reach
    pub peak_height: f64,
    /// Lower of the two endpoint heights
    pub launch_height: f64,
    pub vertical_speed: f64,   // blocks/s
    pub horizontal_distance: f64,
    pub horizontal_speed: f64, // blocks/s
}

/// Closed-form arc solver bound to one calibration table and arc factor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrajectorySolver {
    constants: PhysicsConstants,
    arc_factor: ArcFactor,
}

impl TrajectorySolver {
    pub fn new(constants: PhysicsConstants, arc_factor: ArcFactor) -> Self {
        Self { constants, arc_factor }
    }

    pub fn with_arc_factor(arc_factor: ArcFactor) -> Self {
        Self::new(PhysicsConstants::default(), arc_factor)
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    pub fn arc_factor(&self) -> ArcFactor {
        self.arc_factor
    }

    pub fn set_arc_factor(&mut self, arc_factor: ArcFactor) {
        self.arc_factor = arc_factor;
    }

    /// Initial motion that carries a projectile from `source` to `destination`
    pub fn solve(
        &self,
        source: &Point3<f64>,
        destination: &Point3<f64>,
    ) -> Result<Vector3<f64>, LaunchError> {
        self.solve_detailed(source, destination).map(|s| s.motion)
    }

    /// Same as [`solve`](Self::solve) but keeps the intermediate quantities
    pub fn solve_detailed(
        &self,
        source: &Point3<f64>,
        destination: &Point3<f64>,
    ) -> Result<LaunchSolution, LaunchError> {
        validate_point("source", source)?;
        validate_point("destination", destination)?;
        validate_constants(&self.constants)?;

        let g = self.constants.gravity;
        let arc_factor = self.arc_factor.value();

        // Vertical component: launch from the lower endpoint, rise to the peak
        let launch_height = source.y.min(destination.y);
        let peak_height = source.y.max(destination.y) * arc_factor;
        let rise = peak_height - launch_height;
        if rise < 0.0 {
            return Err(LaunchError::InvalidArc {
                peak: peak_height,
                low: launch_height,
            });
        }
        let vertical_speed = (2.0 * g * rise).sqrt();

        // Symmetric rise and fall
        let flight_time_s = 2.0 * vertical_speed / g;
        if !flight_time_s.is_finite() || flight_time_s < MIN_DIVISION_THRESHOLD {
            return Err(LaunchError::DegenerateInput(format!(
                "time of flight is {flight_time_s} s (peak {peak_height}, launch height {launch_height})"
            )));
        }

        // Horizontal component, constant velocity over the whole flight
        let x_leg = (destination.x - source.x).abs();
        let z_leg = (destination.z - source.z).abs();
        let horizontal_distance = x_leg.hypot(z_leg);
        let horizontal_speed = horizontal_distance / flight_time_s;

        let x_inc = direction(source.x, destination.x);
        let z_inc = direction(source.z, destination.z);

        let motion = Vector3::new(
            self.constants.lateral_motion(x_leg / flight_time_s) * x_inc,
            self.constants.vertical_motion(vertical_speed),
            self.constants.lateral_motion(z_leg / flight_time_s) * z_inc,
        );

        Ok(LaunchSolution {
            motion,
            flight_time_s,
            peak_height,
            launch_height,
            vertical_speed,
            horizontal_distance,
            horizontal_speed,
        })
    }

    /// Source given as three scalars, e.g. an entity's exact (non-block) position
    pub fn solve_from_coords(
        &self,
        source_x: f64,
        source_y: f64,
        source_z: f64,
        destination: &Point3<f64>,
    ) -> Result<Vector3<f64>, LaunchError> {
        self.solve(&Point3::new(source_x, source_y, source_z), destination)
    }
}

/// Launch motion using the default calibration table
pub fn solve(
    source: &Point3<f64>,
    destination: &Point3<f64>,
    arc_factor: f64,
) -> Result<Vector3<f64>, LaunchError> {
    TrajectorySolver::with_arc_factor(ArcFactor::new(arc_factor)?).solve(source, destination)
}

/// Scalar-source form of [`solve`]
pub fn solve_from_coords(
    source_x: f64,
    source_y: f64,
    source_z: f64,
    destination: &Point3<f64>,
    arc_factor: f64,
) -> Result<Vector3<f64>, LaunchError> {
    solve(&Point3::new(source_x, source_y, source_z), destination, arc_factor)
}

/// +1 if the coordinate increases from `from` to `to`, -1 if it decreases, 0 otherwise
fn direction(from: f64, to: f64) -> f64 {
    if to > from {
        1.0
    } else if to < from {
        -1.0
    } else {
        0.0
    }
}

fn validate_point(name: &str, p: &Point3<f64>) -> Result<(), LaunchError> {
    if p.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(LaunchError::InvalidInput(format!(
            "{name} has a non-finite coordinate: ({}, {}, {})",
            p.x, p.y, p.z
        )))
    }
}

fn validate_constants(constants: &PhysicsConstants) -> Result<(), LaunchError> {
    let usable = |v: f64| v.is_finite() && v > MIN_DIVISION_THRESHOLD;
    if !usable(constants.gravity) {
        return Err(LaunchError::DegenerateInput(format!(
            "gravitational deceleration must be positive, got {}",
            constants.gravity
        )));
    }
    if !usable(constants.lateral_constant) || !usable(constants.vertical_constant) {
        return Err(LaunchError::DegenerateInput(format!(
            "calibration constants must be positive, got lateral {} vertical {}",
            constants.lateral_constant, constants.vertical_constant
        )));
    }
    Ok(())
}
