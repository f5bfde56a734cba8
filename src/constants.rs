/// Physical constants used in trajectory and potential calculations

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Default spring constant for the elastic potential (N/m)
pub const ELASTIC_SPRING_CONSTANT: f64 = 1.0;

/// Default point mass for the gravity potential (kg)
pub const GRAVITY_POINT_MASS: f64 = 1.0;

/// Default quadratic coefficients for the custom potential
pub const CUSTOM_COEFF_A: f64 = 1.0;
pub const CUSTOM_COEFF_B: f64 = 1.0;

/// Default half-width of the square sampling window for potential grids.
///
/// Fields are evaluated over [-10, 10] × [-10, 10] unless the caller
/// overrides the bounds.
pub const GRID_DEFAULT_HALF_WIDTH: f64 = 10.0;

/// Default number of samples along each grid axis
pub const GRID_DEFAULT_RESOLUTION: usize = 100;

// Numerical stability constants
/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;
