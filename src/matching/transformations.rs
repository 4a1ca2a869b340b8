use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::lattice::Lattice2D;

/// Integer 2x2 supercell transformation `[[a1, a2], [b1, b2]]`.
///
/// Left-multiplying a lattice basis by this matrix produces a supercell
/// whose area is `|det|` times the primitive cell area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformationMatrix {
    pub a1: i32,
    pub a2: i32,
    pub b1: i32,
    pub b2: i32,
}

impl TransformationMatrix {
    pub fn new(a1: i32, a2: i32, b1: i32, b2: i32) -> Self {
        TransformationMatrix { a1, a2, b1, b2 }
    }

    /// The identity transformation (supercell = primitive cell).
    pub fn identity() -> Self {
        TransformationMatrix::new(1, 0, 0, 1)
    }

    /// Determinant a1·b2 - a2·b1. Exact in integer arithmetic, so no
    /// rounding guard is needed here.
    pub fn determinant(&self) -> i32 {
        self.a1 * self.b2 - self.a2 * self.b1
    }

    /// Build the supercell: new a = a1·a + a2·b, new b = b1·a + b2·b.
    pub fn apply(&self, lattice: &Lattice2D) -> Lattice2D {
        Lattice2D::new(
            lattice.a * f64::from(self.a1) + lattice.b * f64::from(self.a2),
            lattice.a * f64::from(self.b1) + lattice.b * f64::from(self.b2),
        )
    }

    /// Matrix elements in row order.
    pub fn elements(&self) -> [i32; 4] {
        [self.a1, self.a2, self.b1, self.b2]
    }
}

impl fmt::Display for TransformationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a1, self.a2, self.b1, self.b2)
    }
}

/// Enumerate all transformation matrices with entries in [-radius, radius]
/// whose determinant equals `target_det`.
///
/// Matrices with a1 = 0 are skipped, which excludes a slice of
/// determinant-matching matrices whose first entry is zero.
pub fn enumerate_matrices(target_det: i32, radius: i32) -> Vec<TransformationMatrix> {
    let mut matrices = Vec::new();
    for a1 in -radius..=radius {
        if a1 == 0 {
            continue;
        }
        for a2 in -radius..=radius {
            for b1 in -radius..=radius {
                for b2 in -radius..=radius {
                    let t = TransformationMatrix::new(a1, a2, b1, b2);
                    if t.determinant() == target_det {
                        matrices.push(t);
                    }
                }
            }
        }
    }
    matrices
}

/// Enumerate the integer grid once and bucket matrices by determinant,
/// keeping only the requested target determinants.
///
/// Every requested target is present as a key, possibly with an empty
/// group: at small radii some determinants are unreachable, which the
/// scan treats as "no combinations for this ratio pair".
pub fn group_by_determinant(
    targets: &[i32],
    radius: i32,
) -> HashMap<i32, Vec<TransformationMatrix>> {
    let mut groups: HashMap<i32, Vec<TransformationMatrix>> =
        targets.iter().map(|&t| (t, Vec::new())).collect();
    for a1 in -radius..=radius {
        if a1 == 0 {
            continue;
        }
        for a2 in -radius..=radius {
            for b1 in -radius..=radius {
                for b2 in -radius..=radius {
                    let t = TransformationMatrix::new(a1, a2, b1, b2);
                    if let Some(group) = groups.get_mut(&t.determinant()) {
                        group.push(t);
                    }
                }
            }
        }
    }
    groups
}
