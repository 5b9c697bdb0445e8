// Symmetry module: Contains space-group operations, frame transforms and point-group presets
// This module provides the symmetry machinery behind orbit generation and phase reconciliation

// ======================== MODULE DECLARATIONS ========================
pub mod operations;
pub mod point_groups;
pub mod space_group;


// ======================== SYMMETRY OPERATIONS & FRAME TRANSFORMS ========================
pub use operations::{
    FrameTransform,    // struct - affine map from an ordered frame into the disordered frame
    SymmetryOperation, // struct - rotation part plus fractional translation
};

// SymmetryOperation impl methods:
//   new(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self - creates new symmetry operation
//   identity() -> Self                                             - creates identity operation
//   apply(&self, point: &Vector3<f64>) -> Vector3<f64>             - applies and wraps into [0, 1)
//   apply_site(&self, site: &Site) -> Site                         - applies to a site, keeps decoration
//   apply_sites(&self, sites: &[Site]) -> Vec<Site>                - image of a site list
//   apply_unwrapped(&self, point: &Vector3<f64>) -> Vector3<f64>   - applies without wrapping
//   apply_site_unwrapped(&self, site: &Site) -> Site               - unwrapped site image, keeps decoration
//   apply_sites_unwrapped(&self, sites: &[Site]) -> Vec<Site>      - unwrapped image of a site list
//   is_identity(&self) -> bool                                     - checks for the identity operation
//   is_pure_rotation(&self) -> bool                                - whether the translation vanishes on the torus

// FrameTransform impl methods:
//   new(matrix: Matrix3<f64>, translation: Vector3<f64>) -> Self   - creates frame transform
//   identity() -> Self                                             - identity transform (also Default)
//   apply(&self, point: &Vector3<f64>) -> Vector3<f64>             - maps a point, no wrapping
//   apply_site(&self, site: &Site) -> Site                         - maps a site, keeps decoration
//   is_identity(&self) -> bool                                     - checks for the identity transform

// ======================== SPACE GROUPS ========================
pub use space_group::SpaceGroup; // struct - named operation list plus frame transform
// SpaceGroup impl methods:
//   new(name, operations: Vec<SymmetryOperation>) -> Self          - creates group with identity frame
//   with_frame(self, frame: FrameTransform) -> Self                - attaches a frame transform
//   name(&self) -> &str                                            - group name
//   operations(&self) -> &[SymmetryOperation]                      - operations in resource order
//   frame(&self) -> &FrameTransform                                - frame into the disordered reference
//   len(&self) -> usize / is_empty(&self) -> bool                  - operation count queries

// ======================== POINT GROUP & SPACE GROUP PRESETS ========================
pub use point_groups::{
    bcc_space_group,          // fn(cells: usize) -> SpaceGroup - bcc group on a cells-wide torus (48 * 2 * cells^3 ops)
    cubic_point_operations,   // fn() -> Vec<Matrix3<f64>> - the 48 signed permutation matrices of m-3m
    fcc_space_group,          // fn(cells: usize) -> SpaceGroup - fcc group on a cells-wide torus
    simple_cubic_space_group, // fn(cells: usize) -> SpaceGroup - simple cubic / B2 group on a cells-wide torus
};
