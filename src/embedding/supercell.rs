use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::GEOMETRY_TOLERANCE;

/// A periodic L x L x L block of conventional cells with a fixed site basis.
///
/// Site indices run cell-major: `((i * L + j) * L + k) * basis_count + b`,
/// with positions measured in conventional-cell units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supercell {
    basis: Vec<Vector3<f64>>,
    cells: usize,
}

impl Supercell {
    pub fn new(basis: Vec<Vector3<f64>>, cells: usize) -> Self {
        Self { basis, cells }
    }

    /// Body-centred cubic: corner and centre site per cell.
    pub fn bcc(cells: usize) -> Self {
        Self::new(
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.5)],
            cells,
        )
    }

    /// Simple cubic: one corner site per cell.
    pub fn simple_cubic(cells: usize) -> Self {
        Self::new(vec![Vector3::new(0.0, 0.0, 0.0)], cells)
    }

    /// Face-centred cubic: corner and three face sites per cell.
    pub fn fcc(cells: usize) -> Self {
        Self::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 0.5, 0.5),
                Vector3::new(0.5, 0.0, 0.5),
                Vector3::new(0.5, 0.5, 0.0),
            ],
            cells,
        )
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn basis_count(&self) -> usize {
        self.basis.len()
    }

    pub fn site_count(&self) -> usize {
        self.basis.len() * self.cells * self.cells * self.cells
    }

    /// Flat site index of a cell and basis slot.
    pub fn site_index(&self, cell: [usize; 3], basis: usize) -> usize {
        ((cell[0] * self.cells + cell[1]) * self.cells + cell[2]) * self.basis.len() + basis
    }

    /// Cell indices and basis slot of a flat site index.
    pub fn site_cell(&self, index: usize) -> ([usize; 3], usize) {
        let basis = index % self.basis.len();
        let mut rest = index / self.basis.len();
        let k = rest % self.cells;
        rest /= self.cells;
        let j = rest % self.cells;
        let i = rest / self.cells;
        ([i, j, k], basis)
    }

    /// Position of a site in conventional-cell units.
    pub fn site_position(&self, index: usize) -> Vector3<f64> {
        let (cell, basis) = self.site_cell(index);
        Vector3::new(cell[0] as f64, cell[1] as f64, cell[2] as f64) + self.basis[basis]
    }

    /// Site index of an arbitrary position, wrapped into the block.
    ///
    /// Returns `None` when the position sits on no lattice site.
    pub fn decompose(&self, position: &Vector3<f64>) -> Option<usize> {
        self.locate(position).map(|(index, _)| index)
    }

    /// Site index of an arbitrary position plus the block image it lies in.
    ///
    /// The offset counts whole blocks per axis: an offset of `[0, 0, 0]` means
    /// the position is inside the home block, `[1, 0, 0]` one block over along
    /// x. Returns `None` when the position sits on no lattice site.
    pub fn locate(&self, position: &Vector3<f64>) -> Option<(usize, [i64; 3])> {
        if self.cells == 0 {
            return None;
        }
        let length = self.cells as i64;
        for (slot, offset) in self.basis.iter().enumerate() {
            let shifted = position - offset;
            let rounded = shifted.map(f64::round);
            if (shifted - rounded).abs().max() < GEOMETRY_TOLERANCE {
                let along = |c: usize| {
                    let value = rounded[c] as i64;
                    (value.rem_euclid(length) as usize, value.div_euclid(length))
                };
                let (i, bi) = along(0);
                let (j, bj) = along(1);
                let (k, bk) = along(2);
                return Some((self.site_index([i, j, k], slot), [bi, bj, bk]));
            }
        }
        None
    }
}
