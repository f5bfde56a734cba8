//! # Projectile Engine
//!
//! Trajectory integration for a point mass launched under gravity and linear
//! velocity-proportional drag, using fixed-step classical RK4 with a
//! ground-contact termination rule, plus a pure potential-energy field
//! evaluator for contour visualization.

pub use error::SimError;
pub use motion::MotionParameters;
pub use potential::{potential, PotentialGrid, PotentialKind};
pub use solver::{simulate, TrajectorySolver};
pub use trajectory::{Trajectory, TrajectoryPoint, TrajectorySummary};

// Module declarations
pub mod constants;
mod derivatives;
pub mod error;
pub mod motion;
pub mod plot;
pub mod potential;
pub mod solver;
pub mod trajectory;
