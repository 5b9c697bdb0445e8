use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};
use crate::geometry::{canonicalize_sites, cmp_site_lists, Cluster, Site};
use crate::symmetry::SpaceGroup;

use super::subclusters::Combinations;

/// One geometrically distinct cluster type.
///
/// The representative keeps the sublattice partitioning of the selection it
/// was discovered from; every comparison goes through the canonical form. The
/// orbit holds the canonical form of each distinct symmetry image and stays
/// sorted, so membership is a binary search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterType {
    /// Discovery-order index
    pub id: usize,
    /// Number of sites
    pub site_count: usize,
    /// Orbit size on the torus
    pub multiplicity: usize,
    /// First cluster of this type encountered
    pub representative: Cluster,
    /// Canonical form of the representative
    pub canonical: Vec<Site>,
    /// Sorted canonical forms of every distinct symmetry image
    pub orbit: Vec<Vec<Site>>,
}

impl ClusterType {
    /// Whether a canonical site list belongs to this type's orbit.
    pub fn orbit_contains(&self, canonical: &[Site]) -> bool {
        self.site_count == canonical.len()
            && self
                .orbit
                .binary_search_by(|member| cmp_site_lists(member, canonical))
                .is_ok()
    }
}

/// Every distinct cluster type of an input family, with the containment
/// table between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterTypeSet {
    /// Types in discovery order
    pub types: Vec<ClusterType>,
    /// containment[i][j]: sub-selections of representative i matching type j
    pub containment: Vec<Vec<usize>>,
    /// Largest site count over the input clusters
    pub max_size: usize,
}

impl ClusterTypeSet {
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of types at the full maximal site count.
    pub fn full_size_count(&self) -> usize {
        self.types.iter().filter(|t| t.site_count == self.max_size).count()
    }

    /// Ids of the maximal types, ascending: types contained in no other type.
    ///
    /// With a single input cluster this is just the full-size type; with
    /// several maximal clusters of different sizes each input contributes its
    /// own maximal type.
    pub fn maximal_ids(&self) -> Vec<usize> {
        (0..self.types.len())
            .filter(|&j| (0..self.types.len()).all(|i| i == j || self.containment[i][j] == 0))
            .collect()
    }

    /// First type in ascending id order whose orbit contains the canonical list.
    pub fn find_match(&self, canonical: &[Site]) -> Option<usize> {
        self.types.iter().position(|t| t.orbit_contains(canonical))
    }

    /// Check that every type's orbit is closed under every group operation.
    pub fn verify_closure(&self, group: &SpaceGroup) -> Result<()> {
        for cluster_type in &self.types {
            for op in group.operations() {
                let image = canonicalize_sites(&op.apply_sites_unwrapped(&cluster_type.canonical));
                if !cluster_type.orbit_contains(&image) {
                    return Err(CvmError::geometry(format!(
                        "orbit of cluster type {} is not closed under the symmetry group",
                        cluster_type.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Enumerate and classify every sub-cluster of the input family.
///
/// Each input cluster is first pulled onto one compact periodic image, so a
/// cluster written across the wrap seam keeps its physical shape. Per input
/// cluster, sub-selections run sizes descending and, within a size, index
/// combinations in lexicographic order. The first selection matching no
/// known orbit founds a new type; its orbit is the set of distinct canonical
/// images under the whole group. Afterwards the containment table is filled
/// from each representative's own sub-selections.
pub fn generate_cluster_types(clusters: &[Cluster], group: &SpaceGroup) -> Result<ClusterTypeSet> {
    if clusters.is_empty() {
        return Err(CvmError::configuration("no maximal clusters supplied"));
    }
    if group.is_empty() {
        return Err(CvmError::configuration(format!(
            "symmetry group '{}' has no operations",
            group.name()
        )));
    }
    let mut compact = Vec::with_capacity(clusters.len());
    for (index, cluster) in clusters.iter().enumerate() {
        if cluster.site_count() == 0 {
            return Err(CvmError::geometry(format!("maximal cluster {index} has no sites")));
        }
        for (slot, sublattice) in cluster.sublattices().iter().enumerate() {
            if sublattice.is_empty() {
                return Err(CvmError::geometry(format!(
                    "maximal cluster {index} has an empty sublattice (slot {slot})"
                )));
            }
        }
        if cluster.has_coincident_sites() {
            return Err(CvmError::geometry(format!(
                "maximal cluster {index} has sites that coincide after wrapping"
            )));
        }
        compact.push(cluster.unfolded()?);
    }
    let clusters = compact;

    let max_size = clusters.iter().map(Cluster::site_count).max().unwrap_or(0);

    // Discovery pass over every sub-selection of every input cluster.
    let mut types: Vec<ClusterType> = Vec::new();
    for cluster in &clusters {
        let site_total = cluster.site_count();
        for size in (1..=site_total).rev() {
            for selection in Combinations::new(site_total, size) {
                let sub = cluster.select(&selection);
                let canonical = sub.canonical_sites();
                if types.iter().any(|t| t.orbit_contains(&canonical)) {
                    continue;
                }
                let id = types.len();
                types.push(found_type(id, sub, canonical, group));
            }
        }
    }

    // Containment pass: classify each representative's sub-selections against
    // the finished type list.
    let type_count = types.len();
    let mut containment = vec![vec![0usize; type_count]; type_count];
    for i in 0..type_count {
        let representative = types[i].representative.clone();
        let site_total = representative.site_count();
        for size in (1..=site_total).rev() {
            for selection in Combinations::new(site_total, size) {
                let canonical = representative.select(&selection).canonical_sites();
                match types.iter().position(|t| t.orbit_contains(&canonical)) {
                    Some(j) => containment[i][j] += 1,
                    None => {
                        return Err(CvmError::geometry(format!(
                            "sub-selection of cluster type {i} matches no discovered type"
                        )))
                    }
                }
            }
        }
        if containment[i][i] != 1 {
            return Err(CvmError::geometry(format!(
                "cluster type {i} contains itself {} times, expected exactly once",
                containment[i][i]
            )));
        }
    }

    let set = ClusterTypeSet {
        types,
        containment,
        max_size,
    };
    debug!(
        "classified {} cluster types, {} at full size {}",
        set.type_count(),
        set.full_size_count(),
        set.max_size
    );
    Ok(set)
}

fn found_type(id: usize, representative: Cluster, canonical: Vec<Site>, group: &SpaceGroup) -> ClusterType {
    let mut orbit: Vec<Vec<Site>> = Vec::new();
    for op in group.operations() {
        let image = canonicalize_sites(&op.apply_sites_unwrapped(&canonical));
        if let Err(slot) = orbit.binary_search_by(|member| cmp_site_lists(member, &image)) {
            orbit.insert(slot, image);
        }
    }
    ClusterType {
        id,
        site_count: canonical.len(),
        multiplicity: orbit.len(),
        representative,
        canonical,
        orbit,
    }
}
