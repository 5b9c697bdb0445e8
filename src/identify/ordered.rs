use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};
use crate::geometry::canonicalize_sites;
use crate::symmetry::FrameTransform;

use super::correlation::CorrelationFunctionSet;
use super::orbits::ClusterTypeSet;

/// Assignment of ordered-phase cluster types to their disordered parents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedClassification {
    /// Ordered type ids grouped by the disordered type they map onto
    pub buckets: Vec<Vec<usize>>,
}

/// Assignment of ordered-phase correlation functions to their disordered parents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationGrouping {
    /// Ordered function ids grouped by the disordered function they map onto
    pub groups: Vec<Vec<usize>>,
}

/// Map every ordered cluster type into the disordered frame and find the
/// disordered type whose orbit absorbs it.
///
/// The frame transform carries ordered-phase coordinates into the parent
/// frame; an ordered type with no parent orbit means the two phases describe
/// different lattices and is rejected.
pub fn classify_ordered_clusters(
    ordered: &ClusterTypeSet,
    disordered: &ClusterTypeSet,
    frame: &FrameTransform,
) -> Result<OrderedClassification> {
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); disordered.types.len()];
    for cluster_type in &ordered.types {
        let image: Vec<_> = cluster_type
            .canonical
            .iter()
            .map(|site| frame.apply_site(site))
            .collect();
        let canonical = canonicalize_sites(&image);
        let parent = disordered.find_match(&canonical).ok_or_else(|| {
            CvmError::geometry(format!(
                "ordered cluster type {} has no disordered counterpart",
                cluster_type.id
            ))
        })?;
        buckets[parent].push(cluster_type.id);
    }
    debug!(
        "classified {} ordered cluster types into {} disordered buckets",
        ordered.types.len(),
        buckets.len()
    );
    Ok(OrderedClassification { buckets })
}

/// Map every ordered correlation function into the disordered frame and find
/// the disordered function whose orbit absorbs it.
pub fn group_correlation_functions(
    ordered: &CorrelationFunctionSet,
    disordered: &CorrelationFunctionSet,
    frame: &FrameTransform,
) -> Result<CorrelationGrouping> {
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); disordered.functions.len()];
    for function in &ordered.functions {
        let image: Vec<_> = function
            .canonical
            .iter()
            .map(|site| frame.apply_site(site))
            .collect();
        let canonical = canonicalize_sites(&image);
        let parent = disordered.find_match(&canonical).ok_or_else(|| {
            CvmError::geometry(format!(
                "ordered correlation function {} has no disordered counterpart",
                function.id
            ))
        })?;
        groups[parent].push(function.id);
    }
    debug!(
        "grouped {} ordered correlation functions under {} disordered functions",
        ordered.functions.len(),
        groups.len()
    );
    Ok(CorrelationGrouping { groups })
}
