use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};
use crate::geometry::Cluster;
use crate::identify::{
    build_cmatrices, classify_ordered_clusters, generate_cluster_types,
    group_correlation_functions, identify_correlation_functions, solve_coefficients, CMatrixSet,
    ClusterTypeSet, CorrelationFunctionSet, CorrelationGrouping, KikuchiBakerCoefficients,
    OrderedClassification,
};
use crate::symmetry::SpaceGroup;

/// Phase role of one resource bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Disordered,
    Ordered,
}

/// Clusters and symmetry group describing one phase.
///
/// For the ordered phase the group carries the frame transform back into the
/// disordered parent.
#[derive(Debug, Clone)]
pub struct PhaseResources {
    pub clusters: Vec<Cluster>,
    pub group: SpaceGroup,
}

impl PhaseResources {
    pub fn new(clusters: Vec<Cluster>, group: SpaceGroup) -> Self {
        Self { clusters, group }
    }
}

/// Input bundles keyed by phase. The disordered entry is required.
pub type ResourceMap = BTreeMap<Phase, PhaseResources>;

/// Run-wide settings for one identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of chemical components, the undecorated host included
    pub components: usize,
    /// Species symbols of the non-host components
    pub symbols: Vec<String>,
}

impl PipelineConfig {
    /// Binary alloy with the default species alphabet.
    pub fn binary() -> Self {
        Self::with_components(2)
    }

    /// `components` species with symbols drawn from B, C, D, ...
    pub fn with_components(components: usize) -> Self {
        let symbols = (0..components.saturating_sub(1))
            .map(|index| ((b'B' + index as u8) as char).to_string())
            .collect();
        Self {
            components,
            symbols,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.components < 2 {
            return Err(CvmError::configuration(format!(
                "{} component(s) leave nothing to decorate, need at least 2",
                self.components
            )));
        }
        if self.symbols.len() != self.components - 1 {
            return Err(CvmError::configuration(format!(
                "{} components need {} species symbols, found {}",
                self.components,
                self.components - 1,
                self.symbols.len()
            )));
        }
        for (index, symbol) in self.symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(CvmError::configuration("species symbols must be non-empty"));
            }
            if self.symbols[..index].contains(symbol) {
                return Err(CvmError::configuration(format!(
                    "species symbol '{symbol}' appears twice"
                )));
            }
        }
        Ok(())
    }
}

/// Identification products of the ordered phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedAnalysis {
    pub types: ClusterTypeSet,
    pub cluster_buckets: OrderedClassification,
    pub functions: CorrelationFunctionSet,
    pub function_groups: CorrelationGrouping,
}

/// Everything the identification stage produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationResult {
    pub disordered: ClusterTypeSet,
    pub coefficients: KikuchiBakerCoefficients,
    pub functions: CorrelationFunctionSet,
    pub cmatrices: CMatrixSet,
    pub ordered: Option<OrderedAnalysis>,
}

/// Run the identification stages in order, stopping at the first failure.
///
/// The disordered phase supplies the type family, cumulant coefficients,
/// correlation functions and configuration matrices; an ordered bundle, when
/// present, is classified against those disordered results through its frame
/// transform.
pub fn run_identification(
    resources: &ResourceMap,
    config: &PipelineConfig,
) -> Result<IdentificationResult> {
    config.validate()?;

    let bundle = resources.get(&Phase::Disordered).ok_or_else(|| {
        CvmError::configuration("no disordered resources supplied to the pipeline")
    })?;

    info!(
        "identifying cluster types from {} disordered cluster(s)",
        bundle.clusters.len()
    );
    let disordered = generate_cluster_types(&bundle.clusters, &bundle.group)?;
    info!("found {} disordered cluster types", disordered.type_count());

    let coefficients = solve_coefficients(&disordered)?;

    let functions = identify_correlation_functions(&disordered, &bundle.group, &config.symbols)?;
    info!(
        "found {} correlation functions across {} candidates",
        functions.function_count(),
        functions.candidate_count
    );

    let cmatrices = build_cmatrices(&disordered, &functions, &config.symbols)?;

    let ordered = match resources.get(&Phase::Ordered) {
        Some(ordered_bundle) => {
            info!(
                "classifying the ordered phase from {} cluster(s)",
                ordered_bundle.clusters.len()
            );
            let types = generate_cluster_types(&ordered_bundle.clusters, &ordered_bundle.group)?;
            let cluster_buckets =
                classify_ordered_clusters(&types, &disordered, ordered_bundle.group.frame())?;
            let ordered_functions = identify_correlation_functions(
                &types,
                &ordered_bundle.group,
                &config.symbols,
            )?;
            let function_groups = group_correlation_functions(
                &ordered_functions,
                &functions,
                ordered_bundle.group.frame(),
            )?;
            info!(
                "ordered phase: {} types, {} functions",
                types.type_count(),
                ordered_functions.function_count()
            );
            Some(OrderedAnalysis {
                types,
                cluster_buckets,
                functions: ordered_functions,
                function_groups,
            })
        }
        None => None,
    };

    Ok(IdentificationResult {
        disordered,
        coefficients,
        functions,
        cmatrices,
        ordered,
    })
}
