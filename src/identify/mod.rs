// Identification module: Contains cluster-type orbits, cumulant coefficients,
// correlation functions, configuration matrices and the ordered-phase classification
// This module turns parsed cluster resources into the full identification data set

// ======================== MODULE DECLARATIONS ========================
pub mod cmatrix;
pub mod coefficients;
pub mod correlation;
pub mod decorations;
pub mod orbits;
pub mod ordered;
pub mod subclusters;

// Test modules
mod _tests_cmatrix;
mod _tests_coefficients;
mod _tests_correlation;

// ======================== CLUSTER TYPES & ORBITS ========================
pub use orbits::{
    ClusterType,            // struct - symmetry orbit of one geometric cluster
    ClusterTypeSet,         // struct - discovered types plus the containment table
    generate_cluster_types, // fn(clusters: &[Cluster], group: &SpaceGroup) -> Result<ClusterTypeSet>
};

// ClusterTypeSet impl methods:
//   type_count(&self) -> usize                                     - number of discovered types
//   full_size_count(&self) -> usize                                - types of maximal site count
//   maximal_ids(&self) -> Vec<usize>                               - ids of types contained in no other type
//   find_match(&self, canonical: &[Site]) -> Option<usize>         - lowest type id whose orbit matches
//   verify_closure(&self, group: &SpaceGroup) -> Result<()>        - checks every orbit is group-closed

// ======================== CUMULANT COEFFICIENTS ========================
pub use coefficients::{
    KikuchiBakerCoefficients, // struct - coefficient per type plus diagnostic sums
    solve_coefficients,       // fn(set: &ClusterTypeSet) -> Result<KikuchiBakerCoefficients>
};

// ======================== DECORATIONS ========================
pub use decorations::{
    decorate_cluster,  // fn(cluster, digits, symbols) -> Result<Cluster> - applies one digit per site
    decoration_count,  // fn(length: usize, radix: usize) -> usize - radix^length
    decoration_digits, // fn(code, radix, length) -> Vec<usize> - digit expansion, site 0 fastest
    strip_undecorated, // fn(cluster: &Cluster) -> Option<Cluster> - drops undecorated sites
};

// ======================== CORRELATION FUNCTIONS ========================
pub use correlation::{
    CorrelationFunction,            // struct - symmetry orbit of one decorated cluster
    CorrelationFunctionSet,         // struct - functions in discovery order, grouped by type
    identify_correlation_functions, // fn(set, group, symbols) -> Result<CorrelationFunctionSet>
};

// CorrelationFunctionSet impl methods:
//   function_count(&self) -> usize                                 - number of discovered functions
//   full_size_count(&self, max_size: usize) -> usize               - functions covering a maximal cluster
//   find_match(&self, canonical: &[Site]) -> Option<usize>         - lowest function id whose orbit matches

// ======================== ORDERED-PHASE CLASSIFICATION ========================
pub use ordered::{
    OrderedClassification,       // struct - ordered type ids bucketed by disordered parent
    CorrelationGrouping,         // struct - ordered function ids grouped by disordered parent
    classify_ordered_clusters,   // fn(ordered, disordered, frame) -> Result<OrderedClassification>
    group_correlation_functions, // fn(ordered, disordered, frame) -> Result<CorrelationGrouping>
};

// ======================== CONFIGURATION MATRICES ========================
pub use cmatrix::{
    CMatrix,         // struct - occupation rows over correlation-function columns
    CMatrixColumn,   // struct - column descriptor (function id or constant, weight)
    CMatrixSet,      // struct - one matrix per cluster type
    build_cmatrices, // fn(set, functions, symbols) -> Result<CMatrixSet>
};

// ======================== SUB-CLUSTER ENUMERATION ========================
pub use subclusters::Combinations; // struct - lexicographic k-of-n index iterator
