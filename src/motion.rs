use crate::error::SimError;

/// Validated launch and integration parameters for a trajectory run.
///
/// Construction through [`MotionParameters::new`] is the only way to obtain
/// a value, so every instance handed to the solver already satisfies the
/// input invariants. Fields stay private to keep a validated value from
/// being edited into an invalid one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParameters {
    v0: f64,
    angle_deg: f64,
    h0: f64,
    drag_k: f64,
    t_max: f64,
    dt: f64,
}

impl MotionParameters {
    /// Validate and build a parameter set.
    ///
    /// * `v0`: initial speed in m/s, must be >= 0
    /// * `angle_deg`: launch angle in degrees, must lie in [0, 90]
    /// * `h0`: initial height in meters, must be >= 0
    /// * `drag_k`: linear drag coefficient in 1/s, must be >= 0
    /// * `t_max`: simulation horizon in seconds, must be > 0
    /// * `dt`: integration step in seconds, must be > 0 and <= `t_max`
    ///
    /// Any violation fails with [`SimError::InvalidParameter`] naming the
    /// offending field.
    pub fn new(
        v0: f64,
        angle_deg: f64,
        h0: f64,
        drag_k: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<Self, SimError> {
        ensure_finite("v0", v0)?;
        ensure_finite("angle_deg", angle_deg)?;
        ensure_finite("h0", h0)?;
        ensure_finite("drag_k", drag_k)?;
        ensure_finite("t_max", t_max)?;
        ensure_finite("dt", dt)?;

        if v0 < 0.0 {
            return Err(invalid(format!("v0 must be >= 0, got {v0}")));
        }
        if !(0.0..=90.0).contains(&angle_deg) {
            return Err(invalid(format!(
                "angle_deg must lie in [0, 90], got {angle_deg}"
            )));
        }
        if h0 < 0.0 {
            return Err(invalid(format!("h0 must be >= 0, got {h0}")));
        }
        if drag_k < 0.0 {
            return Err(invalid(format!("drag_k must be >= 0, got {drag_k}")));
        }
        if t_max <= 0.0 {
            return Err(invalid(format!("t_max must be > 0, got {t_max}")));
        }
        if dt <= 0.0 {
            return Err(invalid(format!("dt must be > 0, got {dt}")));
        }
        if dt > t_max {
            return Err(invalid(format!(
                "dt must not exceed t_max, got dt = {dt}, t_max = {t_max}"
            )));
        }

        Ok(Self {
            v0,
            angle_deg,
            h0,
            drag_k,
            t_max,
            dt,
        })
    }

    /// Initial speed in m/s.
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Launch angle in degrees above the horizontal.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Initial height in meters.
    pub fn h0(&self) -> f64 {
        self.h0
    }

    /// Linear drag coefficient in 1/s.
    pub fn drag_k(&self) -> f64 {
        self.drag_k
    }

    /// Simulation horizon in seconds.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Integration time step in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Initial velocity components `(vx0, vy0)` from speed and launch angle.
    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        (self.v0 * theta.cos(), self.v0 * theta.sin())
    }

    /// Maximum number of samples the solver may produce, first sample included.
    pub fn max_samples(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn invalid(message: String) -> SimError {
    SimError::InvalidParameter(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MotionParameters {
        MotionParameters::new(20.0, 45.0, 0.0, 0.1, 10.0, 0.01).unwrap()
    }

    #[test]
    fn accepts_valid_parameters() {
        let p = valid();
        assert_eq!(p.v0(), 20.0);
        assert_eq!(p.angle_deg(), 45.0);
        assert_eq!(p.max_samples(), 1000);
    }

    #[test]
    fn rejects_negative_speed() {
        let err = MotionParameters::new(-1.0, 45.0, 0.0, 0.0, 10.0, 0.01).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter(_)));
        assert!(err.to_string().contains("v0"));
    }

    #[test]
    fn rejects_angle_outside_quadrant() {
        assert!(MotionParameters::new(10.0, -0.1, 0.0, 0.0, 10.0, 0.01).is_err());
        assert!(MotionParameters::new(10.0, 90.1, 0.0, 0.0, 10.0, 0.01).is_err());
        assert!(MotionParameters::new(10.0, 0.0, 0.0, 0.0, 10.0, 0.01).is_ok());
        assert!(MotionParameters::new(10.0, 90.0, 0.0, 0.0, 10.0, 0.01).is_ok());
    }

    #[test]
    fn rejects_non_positive_step_and_horizon() {
        assert!(MotionParameters::new(10.0, 45.0, 0.0, 0.0, 0.0, 0.01).is_err());
        assert!(MotionParameters::new(10.0, 45.0, 0.0, 0.0, 10.0, 0.0).is_err());
        assert!(MotionParameters::new(10.0, 45.0, 0.0, 0.0, 10.0, -0.5).is_err());
    }

    #[test]
    fn rejects_step_larger_than_horizon() {
        let err = MotionParameters::new(10.0, 45.0, 0.0, 0.0, 1.0, 2.0).unwrap_err();
        assert!(err.to_string().contains("t_max"));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(MotionParameters::new(f64::NAN, 45.0, 0.0, 0.0, 10.0, 0.01).is_err());
        assert!(MotionParameters::new(10.0, 45.0, f64::INFINITY, 0.0, 10.0, 0.01).is_err());
    }

    #[test]
    fn velocity_components_decompose_launch_angle() {
        let p = MotionParameters::new(10.0, 90.0, 0.0, 0.0, 10.0, 0.01).unwrap();
        let (vx, vy) = p.velocity_components();
        assert!(vx.abs() < 1e-12);
        assert!((vy - 10.0).abs() < 1e-12);
    }
}
