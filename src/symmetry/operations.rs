use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::GEOMETRY_TOLERANCE;
use crate::geometry::site::{wrap_unit, Site};

/// A single space-group operation: rotation part plus fractional translation.
///
/// Both parts are expressed in the fractional frame of the periodicity cell.
/// [`SymmetryOperation::apply`] wraps the image back onto the torus; the
/// `*_unwrapped` variants keep the affine image as is, for callers that track
/// displacements across the cell boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Rotation part (may be improper, determinant -1)
    pub rotation: Matrix3<f64>,
    /// Fractional translation shift
    pub translation: Vector3<f64>,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Apply the operation to a fractional point and wrap the image into [0, 1).
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        (self.rotation * point + self.translation).map(wrap_unit)
    }

    /// Apply the operation to a site, carrying any decoration along.
    pub fn apply_site(&self, site: &Site) -> Site {
        let image = self.apply(&site.position());
        match site.species() {
            Some(symbol) => Site::with_species(image, symbol),
            None => Site::new(image),
        }
    }

    /// Image of a whole site list.
    pub fn apply_sites(&self, sites: &[Site]) -> Vec<Site> {
        sites.iter().map(|s| self.apply_site(s)).collect()
    }

    /// Apply the operation to a fractional point without wrapping the image.
    pub fn apply_unwrapped(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * point + self.translation
    }

    /// Unwrapped image of a site, carrying any decoration along.
    pub fn apply_site_unwrapped(&self, site: &Site) -> Site {
        let image = self.apply_unwrapped(&site.position());
        match site.species() {
            Some(symbol) => Site::with_species(image, symbol),
            None => Site::new(image),
        }
    }

    /// Unwrapped image of a whole site list.
    pub fn apply_sites_unwrapped(&self, sites: &[Site]) -> Vec<Site> {
        sites.iter().map(|s| self.apply_site_unwrapped(s)).collect()
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        (self.rotation - Matrix3::identity()).abs().max() < GEOMETRY_TOLERANCE && self.is_pure_rotation()
    }

    /// Whether the translation part vanishes on the torus.
    pub fn is_pure_rotation(&self) -> bool {
        self.translation.iter().all(|&t| wrap_unit(t) == 0.0)
    }
}

/// Affine map taking ordered-phase coordinates into the disordered frame.
///
/// Does not wrap; the mapped sites go through canonicalization afterwards,
/// which rebases them onto the torus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTransform {
    /// Linear part of the frame change
    pub matrix: Matrix3<f64>,
    /// Fractional shift between the frame origins
    pub translation: Vector3<f64>,
}

impl FrameTransform {
    pub fn new(matrix: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            matrix,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Map a fractional point between frames.
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * point + self.translation
    }

    /// Map a site between frames, carrying any decoration along.
    pub fn apply_site(&self, site: &Site) -> Site {
        let image = self.apply(&site.position());
        match site.species() {
            Some(symbol) => Site::with_species(image, symbol),
            None => Site::new(image),
        }
    }

    pub fn is_identity(&self) -> bool {
        (self.matrix - Matrix3::identity()).abs().max() < GEOMETRY_TOLERANCE
            && self.translation.abs().max() < GEOMETRY_TOLERANCE
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::identity()
    }
}
