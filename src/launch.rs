//! Hand-off between the solver and the game host.
//!
//! The host owns the world: it builds the primed explosive, gives it the
//! initial motion and ticks physics. This module only computes the motion and
//! passes it across.

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::trajectory_solver::LaunchSolution;
use nalgebra::{Point3, Vector3};

/// World-side operations needed to fire a projectile
pub trait ProjectileHost {
    /// Spawn a primed explosive at `position` with initial `motion` (motion units)
    fn spawn_primed(&mut self, position: Point3<f64>, motion: Vector3<f64>) -> Result<(), LaunchError>;
}

/// Solve the arc from `source` to `destination` and spawn the projectile at `source`
pub fn launch<H: ProjectileHost + ?Sized>(
    host: &mut H,
    source: Point3<f64>,
    destination: Point3<f64>,
    config: &LauncherConfig,
) -> Result<LaunchSolution, LaunchError> {
    let solver = config.solver()?;
    let solution = solver.solve_detailed(&source, &destination)?;

    tracing::debug!(
        motion_x = solution.motion.x,
        motion_y = solution.motion.y,
        motion_z = solution.motion.z,
        flight_time_s = solution.flight_time_s,
        "launching primed explosive"
    );

    host.spawn_primed(source, solution.motion)?;
    Ok(solution)
}

/// [`launch`] with the source given as three scalars
pub fn launch_from_coords<H: ProjectileHost + ?Sized>(
    host: &mut H,
    source_x: f64,
    source_y: f64,
    source_z: f64,
    destination: Point3<f64>,
    config: &LauncherConfig,
) -> Result<LaunchSolution, LaunchError> {
    launch(host, Point3::new(source_x, source_y, source_z), destination, config)
}
