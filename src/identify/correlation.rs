use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};
use crate::geometry::{canonicalize_sites, cmp_site_lists, Cluster, Site};
use crate::symmetry::SpaceGroup;

use super::decorations::{decorate_cluster, decoration_count, decoration_digits, strip_undecorated};
use super::orbits::ClusterTypeSet;

/// A correlation function: the symmetry orbit of one decorated cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationFunction {
    /// Discovery-order identifier
    pub id: usize,
    /// Geometric cluster type of the decorated shape
    pub cluster_type: usize,
    /// Number of decorated sites
    pub site_count: usize,
    /// Orbit size under the symmetry group
    pub multiplicity: usize,
    /// First decorated cluster discovered for this function
    pub representative: Cluster,
    /// Canonical decorated site list of the representative
    pub canonical: Vec<Site>,
    /// Every distinct canonical image under the group, sorted
    pub orbit: Vec<Vec<Site>>,
}

impl CorrelationFunction {
    /// Whether a canonical decorated site list lies in this orbit.
    pub fn orbit_contains(&self, canonical: &[Site]) -> bool {
        if canonical.len() != self.site_count {
            return false;
        }
        self.orbit
            .binary_search_by(|member| cmp_site_lists(member, canonical))
            .is_ok()
    }
}

/// Correlation functions discovered from the decorations of the maximal
/// cluster types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationFunctionSet {
    /// Functions in discovery order
    pub functions: Vec<CorrelationFunction>,
    /// Function ids grouped by geometric cluster type
    pub by_type: Vec<Vec<usize>>,
    /// Decoration candidates examined, the empty decoration included
    pub candidate_count: usize,
}

impl CorrelationFunctionSet {
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Functions whose decorated cluster covers a maximal cluster completely.
    pub fn full_size_count(&self, max_size: usize) -> usize {
        self.functions
            .iter()
            .filter(|f| f.site_count == max_size)
            .count()
    }

    /// Lowest function id whose orbit contains the canonical decorated site list.
    pub fn find_match(&self, canonical: &[Site]) -> Option<usize> {
        self.functions.iter().position(|f| f.orbit_contains(canonical))
    }
}

/// Enumerate every species decoration of every maximal cluster type and fold
/// the candidates into symmetry-distinct correlation functions.
///
/// Decoration digit 0 stands for the undecorated state and removes the site;
/// the remaining digits map onto `symbols` in order. Candidates walk in
/// ascending code order with site 0 varying fastest, which fixes the discovery
/// order of the functions.
pub fn identify_correlation_functions(
    set: &ClusterTypeSet,
    group: &SpaceGroup,
    symbols: &[String],
) -> Result<CorrelationFunctionSet> {
    if symbols.is_empty() {
        return Err(CvmError::configuration(
            "correlation functions need at least one species symbol",
        ));
    }

    let radix = symbols.len() + 1;
    let mut functions: Vec<CorrelationFunction> = Vec::new();
    let mut by_type: Vec<Vec<usize>> = vec![Vec::new(); set.types.len()];
    let mut candidate_count = 0;

    for type_id in set.maximal_ids() {
        let cluster_type = &set.types[type_id];
        let length = cluster_type.site_count;
        candidate_count += decoration_count(length, radix);
        for code in 0..decoration_count(length, radix) {
            let digits = decoration_digits(code, radix, length);
            let decorated = decorate_cluster(&cluster_type.representative, &digits, symbols)?;
            let stripped = match strip_undecorated(&decorated) {
                Some(cluster) => cluster,
                None => continue,
            };
            let canonical = stripped.canonical_sites();
            let shape_type = set.find_match(&stripped.canonical_shape()).ok_or_else(|| {
                CvmError::geometry(format!(
                    "decoration {code} of cluster type {} matches no cluster type",
                    cluster_type.id
                ))
            })?;
            if functions.iter().any(|f| f.orbit_contains(&canonical)) {
                continue;
            }
            let id = functions.len();
            functions.push(found_function(id, shape_type, stripped, canonical, group));
            by_type[shape_type].push(id);
        }
    }

    debug!(
        "correlation functions: {} distinct from {} decoration candidates",
        functions.len(),
        candidate_count
    );

    Ok(CorrelationFunctionSet {
        functions,
        by_type,
        candidate_count,
    })
}

fn found_function(
    id: usize,
    cluster_type: usize,
    representative: Cluster,
    canonical: Vec<Site>,
    group: &SpaceGroup,
) -> CorrelationFunction {
    let mut orbit: Vec<Vec<Site>> = Vec::new();
    for op in group.operations() {
        let image = canonicalize_sites(&op.apply_sites_unwrapped(&canonical));
        if let Err(slot) = orbit.binary_search_by(|member| cmp_site_lists(member, &image)) {
            orbit.insert(slot, image);
        }
    }
    CorrelationFunction {
        id,
        cluster_type,
        site_count: canonical.len(),
        multiplicity: orbit.len(),
        representative,
        canonical,
        orbit,
    }
}
