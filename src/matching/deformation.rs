use serde::{Deserialize, Serialize};

use crate::lattice::Lattice2D;

/// Relative deformation between a substrate supercell and a film
/// supercell of matching shape.
///
/// Each component is the norm of a difference vector divided by the norm
/// of the corresponding substrate vector, so the measure is asymmetric:
/// `relative_deformation(s, f)` generally differs from
/// `relative_deformation(f, s)`. This is a strain proxy, not a strain
/// tensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deformation {
    /// |s.a - f.a| / |s.a|
    pub da: f64,
    /// |s.b - f.b| / |s.b|
    pub db: f64,
    /// |(s.a + s.b) - (f.a + f.b)| / |s.a + s.b|
    pub dab: f64,
}

impl Deformation {
    /// The scalar metric max(da, db, dab).
    pub fn max(&self) -> f64 {
        self.da.max(self.db).max(self.dab)
    }
}

/// Compute the three relative edge/diagonal mismatches between two
/// supercells, normalized by the substrate supercell.
pub fn relative_deformation(substrate: &Lattice2D, film: &Lattice2D) -> Deformation {
    let da = substrate.a - film.a;
    let db = substrate.b - film.b;
    let dab = da + db;
    Deformation {
        da: da.norm() / substrate.a.norm(),
        db: db.norm() / substrate.b.norm(),
        dab: dab.norm() / substrate.diagonal().norm(),
    }
}
