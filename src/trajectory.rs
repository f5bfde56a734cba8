use nalgebra::Vector2;

/// One kinematic sample along a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Time since launch in seconds.
    pub time: f64,
    /// Position `(x, y)` in meters: horizontal displacement and height.
    pub position: Vector2<f64>,
    /// Velocity `(vx, vy)` in m/s.
    pub velocity: Vector2<f64>,
}

impl TrajectoryPoint {
    /// Speed as the magnitude of the velocity vector.
    ///
    /// Derived view only; the solver never stores speed separately.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Ordered sequence of kinematic samples produced by a single solver run.
///
/// Times are strictly increasing and spaced by the integration step. The
/// sequence is grown incrementally during integration and never mutated
/// after the solver returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
    grounded: bool,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            grounded: false,
        }
    }

    pub(crate) fn push(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    pub(crate) fn mark_grounded(&mut self) {
        self.grounded = true;
    }

    /// All samples, index 0 at `time = 0`.
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final sample of the run.
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Whether the run ended on ground contact rather than at the horizon.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Aggregate figures derived from the sample sequence.
    pub fn summary(&self) -> TrajectorySummary {
        let peak_height = self
            .points
            .iter()
            .map(|p| p.position.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let last = self.points.last();

        TrajectorySummary {
            sample_count: self.points.len(),
            range: last.map_or(0.0, |p| p.position.x),
            peak_height: if peak_height.is_finite() {
                peak_height
            } else {
                0.0
            },
            flight_time: last.map_or(0.0, |p| p.time),
            impact_speed: last.map_or(0.0, |p| p.speed()),
            grounded: self.grounded,
        }
    }
}

/// Headline numbers for a completed trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    pub sample_count: usize,
    /// Horizontal displacement of the final sample in meters.
    pub range: f64,
    /// Greatest height reached over the run in meters.
    pub peak_height: f64,
    /// Time of the final sample in seconds.
    pub flight_time: f64,
    /// Speed at the final sample in m/s.
    pub impact_speed: f64,
    /// True when the run terminated on ground contact.
    pub grounded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: f64, x: f64, y: f64, vx: f64, vy: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            time,
            position: Vector2::new(x, y),
            velocity: Vector2::new(vx, vy),
        }
    }

    #[test]
    fn speed_is_velocity_magnitude() {
        let p = point(0.0, 0.0, 0.0, 3.0, 4.0);
        assert!((p.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn summary_reports_peak_and_impact() {
        let mut traj = Trajectory::with_capacity(3);
        traj.push(point(0.0, 0.0, 1.0, 10.0, 5.0));
        traj.push(point(0.1, 1.0, 2.5, 10.0, 0.0));
        traj.push(point(0.2, 2.0, 0.0, 10.0, -5.0));
        traj.mark_grounded();

        let summary = traj.summary();
        assert_eq!(summary.sample_count, 3);
        assert!((summary.range - 2.0).abs() < 1e-12);
        assert!((summary.peak_height - 2.5).abs() < 1e-12);
        assert!((summary.flight_time - 0.2).abs() < 1e-12);
        assert!((summary.impact_speed - (125.0f64).sqrt()).abs() < 1e-12);
        assert!(summary.grounded);
    }

    #[test]
    fn empty_trajectory_summarizes_to_zeros() {
        let traj = Trajectory::with_capacity(0);
        let summary = traj.summary();
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.range, 0.0);
        assert_eq!(summary.peak_height, 0.0);
        assert!(!summary.grounded);
    }
}
