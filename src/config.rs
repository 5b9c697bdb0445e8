// Constants

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-8; // For site coordinate comparison and wrapping
pub const COEFFICIENT_TOLERANCE: f64 = 1e-6; // For cumulant coefficient sum checks
