// Geometry module: Contains sites, sublattices, clusters and canonical ordering
// This module provides the fractional-coordinate primitives shared by identification and embedding

// ======================== MODULE DECLARATIONS ========================
pub mod cluster;
pub mod site;
pub mod sublattice;


// ======================== SITES & COORDINATE HELPERS ========================
pub use site::{
    Site,              // struct - fractional position plus optional species decoration
    compare_coords,    // fn(a: f64, b: f64) -> Ordering - tolerant coordinate comparison
    compare_positions, // fn(a: &Vector3<f64>, b: &Vector3<f64>) -> Ordering - tolerant lexicographic position comparison
    min_image,         // fn(x: f64) -> f64 - minimum-image displacement in [-1/2, 1/2]
    wrap_unit,         // fn(x: f64) -> f64 - wraps a coordinate into [0, 1), boundary values to 0.0
};

// Site impl methods:
//   new(position: Vector3<f64>) -> Self                            - creates undecorated site
//   with_species(position: Vector3<f64>, species) -> Self          - creates decorated site
//   position(&self) -> Vector3<f64>                                - returns fractional position
//   species(&self) -> Option<&str>                                 - returns species symbol if decorated
//   is_decorated(&self) -> bool                                    - whether a decoration is present
//   translated(&self, shift: &Vector3<f64>) -> Self                - shifted copy
//   wrapped(&self) -> Self                                         - copy with coordinates wrapped into [0, 1)
//   undecorated(&self) -> Self                                     - copy with the decoration removed
//   cmp_canonical(&self, other: &Self) -> Ordering                 - canonical order (position, then species)

// ======================== SUBLATTICES ========================
pub use sublattice::Sublattice; // struct - ordered site group sharing one Wyckoff class
// Sublattice impl methods:
//   new(sites: Vec<Site>) -> Self                                  - creates sublattice from sites
//   sites(&self) -> &[Site]                                        - returns sites in resource order
//   len(&self) -> usize / is_empty(&self) -> bool                  - site count queries
//   translated(&self, shift: &Vector3<f64>) -> Self                - shifted copy
//   sorted(&self) -> Self                                          - canonical copy, ascending coordinates

// ======================== CLUSTERS & CANONICAL FORMS ========================
pub use cluster::{
    Cluster,            // struct - sublattice-partitioned site set with canonical form
    canonicalize_sites, // fn(sites: &[Site]) -> Vec<Site> - least anchor-rebased sorted image of a site list
    cmp_site_lists,     // fn(a: &[Site], b: &[Site]) -> Ordering - lexicographic site-list comparison
    site_lists_equal,   // fn(a: &[Site], b: &[Site]) -> bool - tolerant site-list equality
};

// Cluster impl methods:
//   new(sublattices: Vec<Sublattice>) -> Self                      - creates cluster from sublattices
//   sublattices(&self) -> &[Sublattice]                            - returns the partitioning
//   site_count(&self) -> usize                                     - total sites across sublattices
//   flatten(&self) -> Vec<Site>                                    - sites in resource order
//   translated(&self, shift: &Vector3<f64>) -> Self                - shifted copy
//   select(&self, indices: &[usize]) -> Cluster                    - sub-cluster by flattened indices
//   canonical_sites(&self) -> Vec<Site>                            - rebased, sorted canonical site list
//   canonical_shape(&self) -> Vec<Site>                            - canonical list with decorations stripped
//   has_coincident_sites(&self) -> bool                            - detects sites coinciding after wrapping
//   unfolded(&self) -> Result<Cluster>                             - compact periodic image across the wrap seam
