//! FFI bindings for hosts that embed the solver through a C ABI

use crate::constants::PhysicsConstants;
use crate::error::LaunchError;
use crate::trajectory_solver::{ArcFactor, TrajectorySolver};
use nalgebra::Point3;
use std::os::raw::{c_double, c_int};

// Status codes returned by the solve functions
pub const ARC_LAUNCHER_OK: c_int = 0;
pub const ARC_LAUNCHER_NULL_POINTER: c_int = 1;
pub const ARC_LAUNCHER_INVALID_ARC: c_int = 2;
pub const ARC_LAUNCHER_DEGENERATE_INPUT: c_int = 3;
pub const ARC_LAUNCHER_INVALID_INPUT: c_int = 4;

// FFI-safe structures with C-compatible layouts

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FFIPoint3 {
    pub x: c_double,
    pub y: c_double,
    pub z: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FFIVector3 {
    pub x: c_double,
    pub y: c_double,
    pub z: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FFIPhysicsConstants {
    pub gravity: c_double,
    pub lateral_constant: c_double,
    pub vertical_constant: c_double,
}

impl From<&FFIPoint3> for Point3<f64> {
    fn from(p: &FFIPoint3) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<&FFIPhysicsConstants> for PhysicsConstants {
    fn from(c: &FFIPhysicsConstants) -> Self {
        PhysicsConstants {
            gravity: c.gravity,
            lateral_constant: c.lateral_constant,
            vertical_constant: c.vertical_constant,
        }
    }
}

fn status_code(err: &LaunchError) -> c_int {
    match err {
        LaunchError::InvalidArc { .. } => ARC_LAUNCHER_INVALID_ARC,
        LaunchError::DegenerateInput(_) => ARC_LAUNCHER_DEGENERATE_INPUT,
        LaunchError::InvalidInput(_) | LaunchError::Host(_) => ARC_LAUNCHER_INVALID_INPUT,
    }
}

fn solve_into(
    source: *const FFIPoint3,
    destination: *const FFIPoint3,
    arc_factor: c_double,
    constants: PhysicsConstants,
    out: *mut FFIVector3,
) -> c_int {
    if source.is_null() || destination.is_null() || out.is_null() {
        return ARC_LAUNCHER_NULL_POINTER;
    }

    let source: Point3<f64> = unsafe { &*source }.into();
    let destination: Point3<f64> = unsafe { &*destination }.into();

    let result = ArcFactor::new(arc_factor)
        .and_then(|arc| TrajectorySolver::new(constants, arc).solve(&source, &destination));

    match result {
        Ok(motion) => {
            unsafe {
                *out = FFIVector3 {
                    x: motion.x,
                    y: motion.y,
                    z: motion.z,
                };
            }
            ARC_LAUNCHER_OK
        }
        Err(e) => status_code(&e),
    }
}

// Solve with the built-in calibration table; writes the motion to `out`
#[no_mangle]
pub extern "C" fn arc_launcher_solve(
    source: *const FFIPoint3,
    destination: *const FFIPoint3,
    arc_factor: c_double,
    out: *mut FFIVector3,
) -> c_int {
    solve_into(source, destination, arc_factor, PhysicsConstants::TNT, out)
}

// Solve with a caller-supplied calibration table
#[no_mangle]
pub extern "C" fn arc_launcher_solve_with_constants(
    source: *const FFIPoint3,
    destination: *const FFIPoint3,
    arc_factor: c_double,
    constants: *const FFIPhysicsConstants,
    out: *mut FFIVector3,
) -> c_int {
    if constants.is_null() {
        return ARC_LAUNCHER_NULL_POINTER;
    }
    let constants = PhysicsConstants::from(unsafe { &*constants });
    solve_into(source, destination, arc_factor, constants, out)
}
