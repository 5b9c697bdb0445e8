// Embedding module: Contains supercells, cluster embedding generation and the
// cluster-expansion energy model
// This module turns identified cluster types into concrete periodic placements

// ======================== MODULE DECLARATIONS ========================
pub mod energy;
pub mod generator;
pub mod supercell;


// ======================== SUPERCELLS ========================
pub use supercell::Supercell; // struct - L x L x L cell block with a site basis

// Supercell impl methods:
//   new(basis: Vec<Vector3<f64>>, cells: usize) -> Self             - creates block from basis offsets
//   bcc(cells) / simple_cubic(cells) / fcc(cells) -> Self           - standard cubic presets
//   cells(&self) -> usize / basis_count(&self) -> usize             - shape queries
//   site_count(&self) -> usize                                      - basis_count * cells^3
//   site_index(&self, cell: [usize; 3], basis: usize) -> usize      - flat index, cell-major
//   site_cell(&self, index: usize) -> ([usize; 3], usize)           - inverse of site_index
//   site_position(&self, index: usize) -> Vector3<f64>              - position in cell units
//   decompose(&self, position: &Vector3<f64>) -> Option<usize>      - wrapped site lookup
//   locate(&self, position: &Vector3<f64>) -> Option<(usize, [i64; 3])> - wrapped site plus block winding

// ======================== EMBEDDING GENERATION ========================
pub use generator::{
    Embedding,           // struct - one placement: cluster type, orbit member, site indices
    EmbeddingSet,        // struct - all distinct placements plus per-site lookup
    generate_embeddings, // fn(set, supercell, frame_scale) -> Result<EmbeddingSet>
};

// EmbeddingSet impl methods:
//   instance_count(&self) -> usize                                  - total placements
//   counts_by_type(&self) -> Vec<usize>                             - placements per cluster type
//   instances_at(&self, site: usize) -> &[usize]                    - placements touching a site
//   instances_of_type_at(&self, cluster_type, site) -> Vec<usize>   - one type's placements at a site

// ======================== ENERGY MODEL ========================
pub use energy::EnergyModel; // struct - Ising-style expansion over embedded instances

// EnergyModel impl methods:
//   new(coefficients: Vec<f64>) -> Self                             - one coefficient per cluster type
//   coefficients(&self) -> &[f64]                                   - returns the coefficients
//   total_energy(&self, embeddings, occupation) -> Result<f64>      - sum over all instances
//   site_energy(&self, embeddings, occupation, site) -> Result<f64> - sum over instances at a site
//   flip_delta(&self, embeddings, occupation, site) -> Result<f64>  - energy change of one flip
//   type_averages(&self, embeddings, occupation) -> Result<Vec<f64>> - mean spin product per type
