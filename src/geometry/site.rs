use std::cmp::Ordering;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::GEOMETRY_TOLERANCE;

/// Wrap a fractional coordinate into [0, 1).
///
/// Values within tolerance of either cell boundary collapse to exactly 0.0 so
/// that equivalent boundary sites compare equal after wrapping.
pub fn wrap_unit(x: f64) -> f64 {
    let y = x - x.floor();
    if y < GEOMETRY_TOLERANCE || y > 1.0 - GEOMETRY_TOLERANCE {
        0.0
    } else {
        y
    }
}

/// Map a fractional displacement onto its minimum-image representative in [-1/2, 1/2].
pub fn min_image(x: f64) -> f64 {
    x - x.round()
}

/// Tolerant comparison of two fractional coordinates.
///
/// Coordinates closer than the geometry tolerance compare equal. Input data is
/// required to be no finer than the tolerance, which keeps this a strict weak
/// ordering over every coordinate set the crate accepts.
pub fn compare_coords(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < GEOMETRY_TOLERANCE {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Tolerant lexicographic comparison of two fractional positions (x, then y, then z).
pub fn compare_positions(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering {
    for i in 0..3 {
        match compare_coords(a[i], b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// A lattice site: fractional position plus an optional species decoration.
///
/// Undecorated sites (`species == None`) represent bare geometry; decorated
/// sites carry the species symbol of a correlation-function candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    position: Vector3<f64>,
    species: Option<String>,
}

impl Site {
    /// Create an undecorated site.
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            species: None,
        }
    }

    /// Create a site decorated with a species symbol.
    pub fn with_species(position: Vector3<f64>, species: impl Into<String>) -> Self {
        Self {
            position,
            species: Some(species.into()),
        }
    }

    /// Fractional position of this site.
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    /// Species symbol, if the site is decorated.
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Whether the site carries a species decoration.
    pub fn is_decorated(&self) -> bool {
        self.species.is_some()
    }

    /// Copy of this site shifted by a fractional displacement.
    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        Self {
            position: self.position + shift,
            species: self.species.clone(),
        }
    }

    /// Copy of this site with every coordinate wrapped into [0, 1).
    pub fn wrapped(&self) -> Self {
        Self {
            position: self.position.map(wrap_unit),
            species: self.species.clone(),
        }
    }

    /// Copy of this site with the decoration removed.
    pub fn undecorated(&self) -> Self {
        Self {
            position: self.position,
            species: None,
        }
    }

    /// Total order used for canonical site lists: position first, species as tie-break.
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        compare_positions(&self.position, &other.position).then_with(|| self.species.cmp(&other.species))
    }
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        compare_positions(&self.position, &other.position) == Ordering::Equal && self.species == other.species
    }
}
