use crate::constants::G_ACCEL_MPS2;

/// State layout for the coupled drag system: `[x, y, vx, vy]`.
pub(crate) type State = [f64; 4];

/// Right-hand side of the linear-drag projectile system:
///
/// ```text
/// dx/dt  = vx
/// dy/dt  = vy
/// dvx/dt = -k·vx
/// dvy/dt = -g - k·vy
/// ```
///
/// Drag is proportional to velocity and applied independently per component.
/// The expression is total over finite inputs, so this never fails.
pub(crate) fn compute_derivatives(state: &State, drag_k: f64) -> State {
    let [_, _, vx, vy] = *state;
    [vx, vy, -drag_k * vx, -G_ACCEL_MPS2 - drag_k * vy]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rates_equal_velocity() {
        let d = compute_derivatives(&[5.0, 2.0, 12.0, -3.0], 0.0);
        assert_eq!(d[0], 12.0);
        assert_eq!(d[1], -3.0);
    }

    #[test]
    fn drag_free_fall_accelerates_at_g_only() {
        let d = compute_derivatives(&[0.0, 10.0, 8.0, 1.0], 0.0);
        assert_eq!(d[2], 0.0);
        assert!((d[3] + G_ACCEL_MPS2).abs() < 1e-12);
    }

    #[test]
    fn drag_opposes_each_velocity_component() {
        let d = compute_derivatives(&[0.0, 0.0, 10.0, -4.0], 0.5);
        assert!((d[2] + 5.0).abs() < 1e-12);
        // Upward drag on a falling body: -g - k·vy = -9.81 + 2.0
        assert!((d[3] - (-G_ACCEL_MPS2 + 2.0)).abs() < 1e-12);
    }
}
