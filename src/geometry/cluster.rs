use std::cmp::Ordering;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::GEOMETRY_TOLERANCE;
use crate::error::{CvmError, Result};

use super::site::{wrap_unit, Site};
use super::sublattice::Sublattice;

/// A cluster of lattice sites partitioned into sublattices.
///
/// The sublattice partitioning reflects the source resource and is carried
/// through identification unchanged; all equality and orbit decisions go
/// through the canonical (flattened, rebased, sorted) site list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    sublattices: Vec<Sublattice>,
}

impl Cluster {
    pub fn new(sublattices: Vec<Sublattice>) -> Self {
        Self { sublattices }
    }

    pub fn sublattices(&self) -> &[Sublattice] {
        &self.sublattices
    }

    /// Total number of sites across all sublattices.
    pub fn site_count(&self) -> usize {
        self.sublattices.iter().map(Sublattice::len).sum()
    }

    /// Sites in resource order: sublattice by sublattice, site order preserved.
    pub fn flatten(&self) -> Vec<Site> {
        self.sublattices.iter().flat_map(|s| s.sites().iter().cloned()).collect()
    }

    /// Copy with every site shifted by a fractional displacement.
    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        Self {
            sublattices: self.sublattices.iter().map(|s| s.translated(shift)).collect(),
        }
    }

    /// Sub-cluster picked out by flattened site indices.
    ///
    /// Sublattice membership is preserved; sublattices left without sites are
    /// dropped. Indices must be valid flattened positions.
    pub fn select(&self, indices: &[usize]) -> Cluster {
        let mut picked: Vec<Vec<Site>> = vec![Vec::new(); self.sublattices.len()];
        let mut offset = 0;
        for (slot, sub) in self.sublattices.iter().enumerate() {
            let end = offset + sub.len();
            for &idx in indices {
                if idx >= offset && idx < end {
                    picked[slot].push(sub.sites()[idx - offset].clone());
                }
            }
            offset = end;
        }
        Cluster {
            sublattices: picked
                .into_iter()
                .filter(|sites| !sites.is_empty())
                .map(Sublattice::new)
                .collect(),
        }
    }

    /// Canonical site list: flatten, rebase by the best anchor, sort.
    pub fn canonical_sites(&self) -> Vec<Site> {
        canonicalize_sites(&self.flatten())
    }

    /// Canonical site list with decorations stripped, for shape-only matching.
    pub fn canonical_shape(&self) -> Vec<Site> {
        let bare: Vec<Site> = self.flatten().iter().map(Site::undecorated).collect();
        canonicalize_sites(&bare)
    }

    /// Whether two sites of this cluster coincide once wrapped into the unit cell.
    pub fn has_coincident_sites(&self) -> bool {
        let mut wrapped: Vec<Site> = self
            .flatten()
            .iter()
            .map(|site| site.wrapped().undecorated())
            .collect();
        wrapped.sort_by(|a, b| a.cmp_canonical(b));
        wrapped
            .windows(2)
            .any(|pair| pair[0].cmp_canonical(&pair[1]) == Ordering::Equal)
    }

    /// Copy of this cluster pulled onto one compact image of the torus.
    ///
    /// Resource files may write the sites of a seam-crossing cluster on either
    /// side of the periodic boundary. Clusters whose raw coordinates are
    /// already compact (every pairwise displacement within half a cell on each
    /// axis) are kept exactly as written, so a deliberate half-cell bond keeps
    /// the arc its author chose. Otherwise each axis is rebuilt from the
    /// wrapped coordinates by cutting the widest empty arc of the unit circle
    /// and shifting the sites below the cut up by one period, and the result
    /// is translated so its first site lands in the unit cell. Fails with a
    /// `Geometry` error when the sites span more than half the cell on some
    /// axis, since no compact image exists then.
    pub fn unfolded(&self) -> Result<Cluster> {
        let sites = self.flatten();
        let compact = sites.iter().all(|a| {
            sites.iter().all(|b| {
                let delta = a.position() - b.position();
                (0..3).all(|axis| delta[axis].abs() <= 0.5 + GEOMETRY_TOLERANCE)
            })
        });
        if compact {
            return Ok(self.clone());
        }
        let mut positions: Vec<Vector3<f64>> =
            sites.iter().map(|site| site.position().map(wrap_unit)).collect();
        for axis in 0..3 {
            let mut coords: Vec<f64> = positions.iter().map(|p| p[axis]).collect();
            coords.sort_by(|a, b| a.total_cmp(b));
            let count = coords.len();
            let mut widest = -1.0;
            let mut cut = 0.0;
            for i in 0..count {
                let lo = coords[i];
                let hi = if i + 1 < count { coords[i + 1] } else { coords[0] + 1.0 };
                let gap = hi - lo;
                if gap > widest {
                    widest = gap;
                    cut = lo + gap / 2.0;
                }
            }
            if widest < 0.5 - GEOMETRY_TOLERANCE {
                return Err(CvmError::geometry(format!(
                    "cluster spans more than half the cell along axis {axis}; no compact periodic image exists"
                )));
            }
            let cut = if cut >= 1.0 { cut - 1.0 } else { cut };
            for position in &mut positions {
                if position[axis] < cut {
                    position[axis] += 1.0;
                }
            }
        }
        let shift = positions[0].map(wrap_unit) - positions[0];
        let mut next = 0;
        let sublattices = self
            .sublattices
            .iter()
            .map(|sub| {
                let rebuilt = sub
                    .sites()
                    .iter()
                    .map(|site| {
                        let position = positions[next] + shift;
                        next += 1;
                        match site.species() {
                            Some(symbol) => Site::with_species(position, symbol),
                            None => Site::new(position),
                        }
                    })
                    .collect();
                Sublattice::new(rebuilt)
            })
            .collect();
        Ok(Cluster { sublattices })
    }
}

/// Canonicalize a flat site list: translate so one site wraps into the unit
/// cell, sort, and keep the least such image over all anchor choices.
///
/// Exact displacements between sites are preserved, so two site lists share a
/// canonical form only when one is an integer translate of the other. A
/// half-cell bond and the opposite bond through the cell boundary stay
/// distinct even though their wrapped site sets coincide. Only the winning
/// anchor is guaranteed to lie inside the unit cell.
pub fn canonicalize_sites(sites: &[Site]) -> Vec<Site> {
    let mut best: Option<Vec<Site>> = None;
    for anchor in sites {
        let origin = anchor.position();
        let shift = origin.map(wrap_unit) - origin;
        let mut candidate: Vec<Site> = sites.iter().map(|s| s.translated(&shift)).collect();
        candidate.sort_by(|a, b| a.cmp_canonical(b));
        let better = match &best {
            None => true,
            Some(current) => cmp_site_lists(&candidate, current) == Ordering::Less,
        };
        if better {
            best = Some(candidate);
        }
    }
    best.unwrap_or_default()
}

/// Lexicographic comparison of two canonical site lists.
pub fn cmp_site_lists(a: &[Site], b: &[Site]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp_canonical(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Tolerant equality of two site lists (position and species).
pub fn site_lists_equal(a: &[Site], b: &[Site]) -> bool {
    a.len() == b.len() && cmp_site_lists(a, b) == Ordering::Equal
}
