use crate::constants::{PhysicsConstants, MAX_ARC_SAMPLES};
use crate::error::LaunchError;
use crate::trajectory_solver::LaunchSolution;
use nalgebra::{Point3, Vector3};

/// Notable points along the arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcFlag {
    Launch,
    Apex,
    /// End of the flight time: the projectile is back at the source's height.
    /// When the destination is lower than the source it is still falling here.
    ReturnHeight,
}

impl ArcFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArcFlag::Launch => "launch",
            ArcFlag::Apex => "apex",
            ArcFlag::ReturnHeight => "return_height",
        }
    }
}

/// Single point on the previewed arc
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSample {
    pub time_s: f64,
    pub position: Point3<f64>,
    pub speed: f64, // blocks/s
    pub flags: Vec<ArcFlag>,
}

/// Real-unit launch velocity (blocks/s) for a solved motion vector
pub fn launch_velocity(solution: &LaunchSolution, constants: &PhysicsConstants) -> Vector3<f64> {
    Vector3::new(
        solution.motion.x * constants.lateral_constant,
        solution.motion.y * constants.vertical_constant,
        solution.motion.z * constants.lateral_constant,
    )
}

/// Evaluate the drag-free arc at `samples + 1` evenly spaced instants.
///
/// Closed form: x(t) = x0 + v0*t + a*t^2/2 with a = (0, -g, 0). This is the
/// path the host's integrator should reproduce for the given motion.
///
/// Flight time assumes a symmetric rise and fall, so the last sample sits over
/// the destination's column but at the source's height.
pub fn sample_arc(
    source: &Point3<f64>,
    solution: &LaunchSolution,
    constants: &PhysicsConstants,
    samples: usize,
) -> Result<Vec<ArcSample>, LaunchError> {
    if samples == 0 {
        return Err(LaunchError::InvalidInput(
            "arc preview needs at least one sample interval".to_string(),
        ));
    }
    if samples > MAX_ARC_SAMPLES {
        return Err(LaunchError::InvalidInput(format!(
            "arc preview is limited to {MAX_ARC_SAMPLES} sample intervals, got {samples}"
        )));
    }

    let v0 = launch_velocity(solution, constants);
    let g = constants.gravity;
    let t_end = solution.flight_time_s;
    let dt = t_end / samples as f64;

    let mut out: Vec<ArcSample> = (0..=samples)
        .map(|i| {
            let t = i as f64 * dt;
            let position = Point3::new(
                source.x + v0.x * t,
                source.y + v0.y * t - 0.5 * g * t * t,
                source.z + v0.z * t,
            );
            let velocity = Vector3::new(v0.x, v0.y - g * t, v0.z);
            ArcSample {
                time_s: t,
                position,
                speed: velocity.norm(),
                flags: Vec::new(),
            }
        })
        .collect();

    out[0].flags.push(ArcFlag::Launch);
    out[samples].flags.push(ArcFlag::ReturnHeight);

    let apex_time = v0.y / g;
    if let Some(idx) = find_closest_sample_index(&out, apex_time) {
        out[idx].flags.push(ArcFlag::Apex);
    }

    Ok(out)
}

/// Highest point of the arc in world coordinates
pub fn apex_position(
    source: &Point3<f64>,
    solution: &LaunchSolution,
    constants: &PhysicsConstants,
) -> Point3<f64> {
    let v0 = launch_velocity(solution, constants);
    let t = v0.y / constants.gravity;
    Point3::new(
        source.x + v0.x * t,
        source.y + v0.y * v0.y / (2.0 * constants.gravity),
        source.z + v0.z * t,
    )
}

fn find_closest_sample_index(samples: &[ArcSample], time_s: f64) -> Option<usize> {
    samples
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.time_s - time_s)
                .abs()
                .total_cmp(&(b.time_s - time_s).abs())
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_solver::TrajectorySolver;

    fn solved(source: Point3<f64>, destination: Point3<f64>) -> LaunchSolution {
        TrajectorySolver::default()
            .solve_detailed(&source, &destination)
            .unwrap()
    }

    #[test]
    fn test_arc_reaches_destination_columns() {
        let source = Point3::new(0.0, 64.0, 0.0);
        let destination = Point3::new(30.0, 64.0, -12.0);
        let solution = solved(source, destination);
        let constants = PhysicsConstants::TNT;

        let samples = sample_arc(&source, &solution, &constants, 20).unwrap();
        assert_eq!(samples.len(), 21);

        let first = &samples[0];
        assert_eq!(first.position, source);
        assert_eq!(first.flags, vec![ArcFlag::Launch]);

        let last = &samples[20];
        assert!((last.position.x - 30.0).abs() < 1e-9);
        assert!((last.position.z + 12.0).abs() < 1e-9);
        assert!((last.position.y - 64.0).abs() < 1e-9);
        assert!((last.time_s - solution.flight_time_s).abs() < 1e-12);
        assert!(last.flags.contains(&ArcFlag::ReturnHeight));
    }

    #[test]
    fn test_apex_flag_and_height() {
        let source = Point3::new(0.0, 64.0, 0.0);
        let destination = Point3::new(16.0, 64.0, 0.0);
        let solution = solved(source, destination);
        let constants = PhysicsConstants::TNT;

        let samples = sample_arc(&source, &solution, &constants, 10).unwrap();
        assert!(samples[5].flags.contains(&ArcFlag::Apex));

        let apex = apex_position(&source, &solution, &constants);
        assert!((apex.y - solution.peak_height).abs() < 1e-9);
        assert!((apex.x - 8.0).abs() < 1e-9);
        assert!(samples.iter().all(|s| s.position.y <= apex.y + 1e-9));
    }

    #[test]
    fn test_speed_symmetric() {
        let source = Point3::new(0.0, 50.0, 0.0);
        let solution = solved(source, Point3::new(0.0, 50.0, 25.0));
        let samples = sample_arc(&source, &solution, &PhysicsConstants::TNT, 4).unwrap();
        assert!((samples[0].speed - samples[4].speed).abs() < 1e-9);
        assert!(samples[2].speed < samples[0].speed);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let source = Point3::new(0.0, 64.0, 0.0);
        let solution = solved(source, Point3::new(4.0, 64.0, 0.0));
        assert!(matches!(
            sample_arc(&source, &solution, &PhysicsConstants::TNT, 0),
            Err(LaunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sample_count_limit() {
        let source = Point3::new(0.0, 64.0, 0.0);
        let solution = solved(source, Point3::new(4.0, 64.0, 0.0));
        let constants = PhysicsConstants::TNT;

        let samples = sample_arc(&source, &solution, &constants, MAX_ARC_SAMPLES).unwrap();
        assert_eq!(samples.len(), MAX_ARC_SAMPLES + 1);

        assert!(matches!(
            sample_arc(&source, &solution, &constants, MAX_ARC_SAMPLES + 1),
            Err(LaunchError::InvalidInput(_))
        ));
        assert!(matches!(
            sample_arc(&source, &solution, &constants, usize::MAX),
            Err(LaunchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_downhill_arc_ends_at_source_height() {
        let source = Point3::new(0.0, 80.0, 0.0);
        let destination = Point3::new(20.0, 64.0, 0.0);
        let solution = solved(source, destination);

        let samples = sample_arc(&source, &solution, &PhysicsConstants::TNT, 10).unwrap();
        let last = &samples[10];
        assert!((last.position.x - 20.0).abs() < 1e-9);
        assert!((last.position.y - 80.0).abs() < 1e-9);
        assert_eq!(last.flags, vec![ArcFlag::ReturnHeight]);
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(ArcFlag::Launch.as_str(), "launch");
        assert_eq!(ArcFlag::Apex.as_str(), "apex");
        assert_eq!(ArcFlag::ReturnHeight.as_str(), "return_height");
    }
}
