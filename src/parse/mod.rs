// Parse module: Contains the text-resource parsers for cluster and symmetry inputs
// The library core owns no file I/O; callers hand in string slices and get typed values back

// ======================== MODULE DECLARATIONS ========================
pub mod cluster_file;
pub mod symmetry_file;

// Test modules
mod _tests_parse;

// ======================== CLUSTER RESOURCES ========================
pub use cluster_file::parse_cluster_file; // fn(input: &str) -> Result<Vec<Cluster>> - nested brace list of clusters/sublattices/sites

// ======================== SYMMETRY RESOURCES ========================
pub use symmetry_file::{
    parse_frame_file,    // fn(input: &str) -> Result<FrameTransform> - exactly 12 floats (3x3 matrix + shift)
    parse_symmetry_file, // fn(input: &str) -> Result<Vec<SymmetryOperation>> - 12 floats per operation
};
