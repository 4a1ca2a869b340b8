// Lattice module: 2D lattice representation used throughout the matching pipeline

// ======================== MODULE DECLARATIONS ========================
pub mod lattice2d;


// ======================== 2D LATTICE STRUCTURE ========================
pub use lattice2d::Lattice2D; // struct - 2D lattice as an ordered pair of primitive vectors
// Lattice2D impl methods:
//   new(a: Vector2<f64>, b: Vector2<f64>) -> Self            - constructs lattice from primitive vectors
//   from_rows(rows: [[f64; 2]; 2]) -> Self                   - constructs lattice from row-vector pairs
//   area(&self) -> f64                                       - unit cell area |a × b|
//   lattice_parameters(&self) -> (f64, f64)                  - lengths of the primitive vectors
//   lattice_angle(&self) -> f64                              - angle γ between the vectors in radians
//   diagonal(&self) -> Vector2<f64>                          - cell diagonal a + b
//   validate_nondegenerate(&self, which) -> Result<()>       - rejects linearly dependent vectors
