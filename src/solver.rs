use nalgebra::Vector2;

use crate::derivatives::{compute_derivatives, State};
use crate::motion::MotionParameters;
use crate::trajectory::{Trajectory, TrajectoryPoint};

/// Fixed-step trajectory integrator.
///
/// Advances the launch state with classical 4th-order Runge-Kutta until the
/// simulation horizon is exhausted or the body reaches the ground. RK4 is
/// used instead of explicit Euler because the drag-coupled system drifts
/// visibly in energy under Euler at the step sizes and horizons this engine
/// targets, while RK4 keeps 4th-order local accuracy at a fixed cost per
/// step.
pub struct TrajectorySolver {
    params: MotionParameters,
}

impl TrajectorySolver {
    pub fn new(params: MotionParameters) -> Self {
        Self { params }
    }

    /// Integrate the trajectory.
    ///
    /// Produces at most `floor(t_max / dt)` samples, the launch state
    /// included. When a freshly computed sample's height falls below zero,
    /// the height is clamped to exactly `0.0`, the sample is kept as the
    /// final one, and integration stops. Velocity at that sample is left
    /// untouched; the engine does not solve for the sub-step impact time.
    ///
    /// Purely deterministic: identical parameters yield bit-identical
    /// trajectories.
    pub fn solve(&self) -> Trajectory {
        let dt = self.params.dt();
        let drag_k = self.params.drag_k();
        let max_samples = self.params.max_samples();

        let (vx0, vy0) = self.params.velocity_components();
        let mut state: State = [0.0, self.params.h0(), vx0, vy0];

        let mut trajectory = Trajectory::with_capacity(max_samples);
        trajectory.push(sample(0.0, &state));

        for i in 1..max_samples {
            state = rk4_step(&state, dt, drag_k);
            let time = i as f64 * dt;

            if state[1] < 0.0 {
                // Ground contact: pin the height, keep the velocity, stop.
                state[1] = 0.0;
                trajectory.push(sample(time, &state));
                trajectory.mark_grounded();
                break;
            }

            trajectory.push(sample(time, &state));
        }

        trajectory
    }
}

/// Integrate a trajectory from validated parameters.
///
/// Convenience wrapper over [`TrajectorySolver`]; parameter validation lives
/// in [`MotionParameters::new`], so the integration itself cannot fail.
pub fn simulate(params: &MotionParameters) -> Trajectory {
    TrajectorySolver::new(*params).solve()
}

/// One classical RK4 step of the coupled `[x, y, vx, vy]` system.
fn rk4_step(state: &State, dt: f64, drag_k: f64) -> State {
    let k1 = compute_derivatives(state, drag_k);
    let k2 = compute_derivatives(&offset(state, &k1, dt * 0.5), drag_k);
    let k3 = compute_derivatives(&offset(state, &k2, dt * 0.5), drag_k);
    let k4 = compute_derivatives(&offset(state, &k3, dt), drag_k);

    let mut next = *state;
    for c in 0..4 {
        next[c] += dt / 6.0 * (k1[c] + 2.0 * k2[c] + 2.0 * k3[c] + k4[c]);
    }
    next
}

fn offset(state: &State, derivative: &State, h: f64) -> State {
    [
        state[0] + derivative[0] * h,
        state[1] + derivative[1] * h,
        state[2] + derivative[2] * h,
        state[3] + derivative[3] * h,
    ]
}

fn sample(time: f64, state: &State) -> TrajectoryPoint {
    TrajectoryPoint {
        time,
        position: Vector2::new(state[0], state[1]),
        velocity: Vector2::new(state[2], state[3]),
    }
}
