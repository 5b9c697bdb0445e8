use nalgebra::{Matrix3, Vector3};

use super::operations::SymmetryOperation;
use super::space_group::SpaceGroup;

/// Generate the 48 point operations of the full cubic group m-3m.
///
/// These are exactly the signed permutation matrices: each of the 6 axis
/// permutations combined with each of the 8 sign choices.
pub fn cubic_point_operations() -> Vec<Matrix3<f64>> {
    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let mut operations = Vec::with_capacity(48);
    for perm in &PERMUTATIONS {
        for signs in 0..8u8 {
            let mut m = Matrix3::zeros();
            for (row, &axis) in perm.iter().enumerate() {
                let sign = if signs & (1 << row) == 0 { 1.0 } else { -1.0 };
                m[(row, axis)] = sign;
            }
            operations.push(m);
        }
    }
    operations
}

/// Space group of a body-centered cubic structure on a `cells`-wide torus.
///
/// Operations are the cubic point group about the origin combined with every
/// lattice translation class of the torus, corner and body-center alike:
/// 48 * 2 * cells^3 operations in total.
pub fn bcc_space_group(cells: usize) -> SpaceGroup {
    let basis = [Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)];
    SpaceGroup::new("bcc", build_operations(cells, &basis))
}

/// Space group of a simple cubic structure on a `cells`-wide torus.
///
/// Corner translations only: 48 * cells^3 operations. This is also the group
/// of the B2 (CsCl) ordering of a bcc structure, where the corner/center
/// exchange is broken.
pub fn simple_cubic_space_group(cells: usize) -> SpaceGroup {
    let basis = [Vector3::zeros()];
    SpaceGroup::new("simple-cubic", build_operations(cells, &basis))
}

/// Space group of a face-centered cubic structure on a `cells`-wide torus:
/// 48 * 4 * cells^3 operations.
pub fn fcc_space_group(cells: usize) -> SpaceGroup {
    let basis = [
        Vector3::zeros(),
        Vector3::new(0.0, 0.5, 0.5),
        Vector3::new(0.5, 0.0, 0.5),
        Vector3::new(0.5, 0.5, 0.0),
    ];
    SpaceGroup::new("fcc", build_operations(cells, &basis))
}

/// Combine the cubic point operations with the translation classes of a
/// lattice whose repeat cell holds `basis` offsets, on a `cells`-wide torus.
fn build_operations(cells: usize, basis: &[Vector3<f64>]) -> Vec<SymmetryOperation> {
    let rotations = cubic_point_operations();
    let scale = cells as f64;

    let mut translations = Vec::with_capacity(cells * cells * cells * basis.len());
    for i in 0..cells {
        for j in 0..cells {
            for k in 0..cells {
                for offset in basis {
                    translations.push(Vector3::new(
                        (i as f64 + offset.x) / scale,
                        (j as f64 + offset.y) / scale,
                        (k as f64 + offset.z) / scale,
                    ));
                }
            }
        }
    }

    let mut operations = Vec::with_capacity(rotations.len() * translations.len());
    for translation in &translations {
        for rotation in &rotations {
            operations.push(SymmetryOperation::new(*rotation, *translation));
        }
    }
    operations
}
