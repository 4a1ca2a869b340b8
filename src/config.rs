// Constants

// Tolerances
pub const DEGENERATE_AREA_TOLERANCE: f64 = 1e-10; // Below this a lattice counts as degenerate
