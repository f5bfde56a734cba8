use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CUSTOM_COEFF_A, CUSTOM_COEFF_B, ELASTIC_SPRING_CONSTANT, G_ACCEL_MPS2, GRAVITY_POINT_MASS,
    GRID_DEFAULT_HALF_WIDTH, GRID_DEFAULT_RESOLUTION,
};
use crate::error::SimError;

/// Closed-form potential field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialKind {
    /// Spring energy `0.5 · k · (x² + y²)`.
    Elastic,
    /// Gravitational energy `m · g · y`.
    Gravity,
    /// Quadratic form `a·x² + b·y²`.
    Custom,
}

impl FromStr for PotentialKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elastic" | "elasticity" => Ok(Self::Elastic),
            "gravity" => Ok(Self::Gravity),
            "custom" => Ok(Self::Custom),
            other => Err(SimError::UnknownForceKind(other.to_string())),
        }
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Elastic => "elastic",
            Self::Gravity => "gravity",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Potential energy at `(x, y)` for the selected field kind.
///
/// Pure and stateless; evaluated element-wise when sampling a grid.
pub fn potential(x: f64, y: f64, kind: PotentialKind) -> f64 {
    match kind {
        PotentialKind::Elastic => 0.5 * ELASTIC_SPRING_CONSTANT * (x * x + y * y),
        PotentialKind::Gravity => GRAVITY_POINT_MASS * G_ACCEL_MPS2 * y,
        PotentialKind::Custom => CUSTOM_COEFF_A * x * x + CUSTOM_COEFF_B * y * y,
    }
}

/// Scalar field sampled over a uniform square grid, ready for contouring.
#[derive(Debug, Clone)]
pub struct PotentialGrid {
    kind: PotentialKind,
    xs: Vec<f64>,
    ys: Vec<f64>,
    // Row-major: values[j * resolution + i] holds U(xs[i], ys[j]).
    values: Vec<f64>,
    min_energy: f64,
    max_energy: f64,
}

impl PotentialGrid {
    /// Sample `kind` over `[min, max] × [min, max]` at `resolution` points
    /// per axis.
    ///
    /// Fails with [`SimError::InvalidParameter`] when the bounds are not an
    /// increasing finite pair or the resolution is below 2.
    pub fn sample(
        kind: PotentialKind,
        min: f64,
        max: f64,
        resolution: usize,
    ) -> Result<Self, SimError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "grid bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(SimError::InvalidParameter(format!(
                "grid bounds must satisfy min < max, got [{min}, {max}]"
            )));
        }
        if resolution < 2 {
            return Err(SimError::InvalidParameter(format!(
                "grid resolution must be at least 2, got {resolution}"
            )));
        }

        let step = (max - min) / (resolution - 1) as f64;
        let axis: Vec<f64> = (0..resolution).map(|i| min + i as f64 * step).collect();

        let mut values = Vec::with_capacity(resolution * resolution);
        let mut min_energy = f64::INFINITY;
        let mut max_energy = f64::NEG_INFINITY;
        for &y in &axis {
            for &x in &axis {
                let u = potential(x, y, kind);
                min_energy = min_energy.min(u);
                max_energy = max_energy.max(u);
                values.push(u);
            }
        }

        Ok(Self {
            kind,
            xs: axis.clone(),
            ys: axis,
            values,
            min_energy,
            max_energy,
        })
    }

    /// Sample over the default `[-10, 10]²` window at the default resolution.
    pub fn sample_default(kind: PotentialKind) -> Result<Self, SimError> {
        Self::sample(
            kind,
            -GRID_DEFAULT_HALF_WIDTH,
            GRID_DEFAULT_HALF_WIDTH,
            GRID_DEFAULT_RESOLUTION,
        )
    }

    pub fn kind(&self) -> PotentialKind {
        self.kind
    }

    /// Sample coordinates along the x axis.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Sample coordinates along the y axis.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Energy at grid indices `(i, j)` = `(xs[i], ys[j])`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[j * self.xs.len() + i]
    }

    /// Smallest sampled energy.
    pub fn min_energy(&self) -> f64 {
        self.min_energy
    }

    /// Largest sampled energy.
    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }
}
