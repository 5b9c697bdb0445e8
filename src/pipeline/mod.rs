// Pipeline module: Contains the staged identification runner and its config
// This module wires parsed resources through the identification stages

// ======================== MODULE DECLARATIONS ========================
pub mod runner;

// Test modules
mod _tests_pipeline;

// ======================== PIPELINE ========================
pub use runner::{
    IdentificationResult, // struct - types, coefficients, functions, matrices, ordered analysis
    OrderedAnalysis,      // struct - ordered types plus their disordered classification
    Phase,                // enum - Disordered | Ordered
    PhaseResources,       // struct - clusters and symmetry group of one phase
    PipelineConfig,       // struct - component count and species symbols
    ResourceMap,          // type - BTreeMap<Phase, PhaseResources>
    run_identification,   // fn(resources: &ResourceMap, config: &PipelineConfig) -> Result<IdentificationResult>
};

// PipelineConfig impl methods:
//   binary() -> Self                                                - two components, symbol "B"
//   with_components(components: usize) -> Self                      - default alphabet B, C, D, ...
