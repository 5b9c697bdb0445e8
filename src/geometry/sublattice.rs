use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::site::Site;

/// An ordered group of sites belonging to one Wyckoff class of the input structure.
///
/// The site order is the order of the source resource and is preserved; it
/// determines sub-selection traversal order and therefore type numbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sublattice {
    sites: Vec<Site>,
}

impl Sublattice {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Copy with every site shifted by a fractional displacement.
    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        Self {
            sites: self.sites.iter().map(|s| s.translated(shift)).collect(),
        }
    }

    /// Canonical copy with sites in ascending coordinate order. Never mutates.
    pub fn sorted(&self) -> Self {
        let mut sites = self.sites.clone();
        sites.sort_by(|a, b| a.cmp_canonical(b));
        Self { sites }
    }
}
