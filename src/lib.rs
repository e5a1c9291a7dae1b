//! # Arc Launcher
//!
//! Closed-form launch motion for lobbing a primed explosive from one point to
//! another along a drag-free parabolic arc. The host game spawns the entity and
//! integrates its motion; this crate only computes the initial motion vector.

// Re-export the main types and functions
pub use config::{ConfigError, LauncherConfig, ARC_FACTOR_ENV};
pub use constants::{PhysicsConstants, DEFAULT_ARC_FACTOR};
pub use error::LaunchError;
pub use launch::{launch, launch_from_coords, ProjectileHost};
pub use trajectory_sampling::{apex_position, launch_velocity, sample_arc, ArcFlag, ArcSample};
pub use trajectory_solver::{solve, solve_from_coords, ArcFactor, LaunchSolution, TrajectorySolver};

// Module declarations
pub mod cli_api;
pub mod config;
pub mod constants;
pub mod ffi;
mod error;
mod launch;
mod trajectory_sampling;
mod trajectory_solver;
