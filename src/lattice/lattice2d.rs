use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEGENERATE_AREA_TOLERANCE;
use crate::error::{MatchError, Result};

/// A 2D lattice given by its two in-plane primitive vectors.
///
/// The vectors are assumed linearly independent; operations on a
/// degenerate lattice produce NaN/Inf. Callers that accept lattices from
/// the outside should run [`Lattice2D::validate_nondegenerate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lattice2D {
    /// First primitive vector.
    pub a: Vector2<f64>,
    /// Second primitive vector.
    pub b: Vector2<f64>,
}

impl Lattice2D {
    /// Construct a lattice from its two primitive vectors.
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Lattice2D { a, b }
    }

    /// Construct a lattice from row vectors `[[ax, ay], [bx, by]]`.
    pub fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Lattice2D {
            a: Vector2::new(rows[0][0], rows[0][1]),
            b: Vector2::new(rows[1][0], rows[1][1]),
        }
    }

    /// Unit cell area = |a × b| (2D cross-product magnitude).
    pub fn area(&self) -> f64 {
        (self.a.x * self.b.y - self.a.y * self.b.x).abs()
    }

    /// Lattice parameters: lengths of the two primitive vectors.
    pub fn lattice_parameters(&self) -> (f64, f64) {
        (self.a.norm(), self.b.norm())
    }

    /// Angle γ between the two primitive vectors, in radians.
    pub fn lattice_angle(&self) -> f64 {
        let (a, b) = self.lattice_parameters();
        (self.a.dot(&self.b) / (a * b)).acos()
    }

    /// Cell diagonal a + b.
    pub fn diagonal(&self) -> Vector2<f64> {
        self.a + self.b
    }

    /// Reject lattices with (near-)zero cell area. `which` labels the
    /// lattice ("substrate", "film") in the error.
    pub fn validate_nondegenerate(&self, which: &'static str) -> Result<()> {
        let area = self.area();
        if area < DEGENERATE_AREA_TOLERANCE {
            return Err(MatchError::DegenerateLattice { which, area });
        }
        Ok(())
    }
}

impl fmt::Display for Lattice2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{:.6} {:.6}]\n [{:.6} {:.6}]]",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}
