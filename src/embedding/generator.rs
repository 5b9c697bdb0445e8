use std::collections::BTreeSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};
use crate::identify::ClusterTypeSet;

use super::supercell::Supercell;

/// One concrete placement of a cluster type in a supercell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Cluster type being placed
    pub cluster_type: usize,
    /// Orbit member the template came from
    pub member: usize,
    /// Supercell site indices in template order
    pub sites: Vec<usize>,
}

/// Every distinct embedding of every cluster type, plus per-site lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSet {
    /// Instances grouped by cluster type, types in ascending id order
    pub instances: Vec<Embedding>,
    /// Instance indices touching each supercell site
    pub by_site: Vec<Vec<usize>>,
    pub site_count: usize,
    pub type_count: usize,
}

impl EmbeddingSet {
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Number of instances per cluster type.
    pub fn counts_by_type(&self) -> Vec<usize> {
        let mut counts = vec![0; self.type_count];
        for embedding in &self.instances {
            counts[embedding.cluster_type] += 1;
        }
        counts
    }

    /// Instance indices containing the given site.
    pub fn instances_at(&self, site: usize) -> &[usize] {
        &self.by_site[site]
    }

    /// Instance indices of one cluster type containing the given site.
    pub fn instances_of_type_at(&self, cluster_type: usize, site: usize) -> Vec<usize> {
        self.by_site[site]
            .iter()
            .copied()
            .filter(|&index| self.instances[index].cluster_type == cluster_type)
            .collect()
    }
}

/// Tile every orbit member of every cluster type across a supercell.
///
/// Orbit members live in torus fractional coordinates; `frame_scale` is the
/// whole number of conventional cells per torus edge, so a template
/// displacement times `frame_scale` is a displacement in cell units. Each
/// template is anchored at every supercell site and kept when all of its
/// sites land on the lattice. Two placements count as the same instance when
/// they occupy the same sites with the same relative block windings, so a
/// half-block bond and the opposite bond through the boundary stay distinct.
/// A template that wraps onto itself in a small supercell is dropped.
pub fn generate_embeddings(
    set: &ClusterTypeSet,
    supercell: &Supercell,
    frame_scale: f64,
) -> Result<EmbeddingSet> {
    if !(frame_scale.is_finite() && frame_scale > 0.0) {
        return Err(CvmError::configuration(format!(
            "frame scale {frame_scale} is not a positive cell count"
        )));
    }
    if frame_scale.fract() != 0.0 {
        return Err(CvmError::configuration(format!(
            "frame scale {frame_scale} is not a whole number of cells per torus edge"
        )));
    }
    if supercell.site_count() == 0 {
        return Err(CvmError::configuration(
            "supercell contains no sites to embed into",
        ));
    }

    let mut instances: Vec<Embedding> = Vec::new();
    let mut seen: BTreeSet<(usize, Vec<(usize, [i64; 3])>)> = BTreeSet::new();

    for cluster_type in &set.types {
        let before = instances.len();
        for (member, template) in cluster_type.orbit.iter().enumerate() {
            let origin = template[0].position();
            let deltas: Vec<_> = template
                .iter()
                .map(|site| (site.position() - origin) * frame_scale)
                .collect();
            for anchor in 0..supercell.site_count() {
                let base = supercell.site_position(anchor);
                let mut placed = Vec::with_capacity(deltas.len());
                for delta in &deltas {
                    match supercell.locate(&(base + delta)) {
                        Some(entry) => placed.push(entry),
                        None => break,
                    }
                }
                if placed.len() != deltas.len() {
                    continue;
                }
                let mut key = placed.clone();
                key.sort_unstable();
                if key.windows(2).any(|pair| pair[0].0 == pair[1].0) {
                    continue;
                }
                // Winding offsets are only meaningful relative to each other;
                // rebase on the first entry so every realization of one
                // physical instance produces the same key.
                let home = key[0].1;
                for entry in &mut key {
                    entry.1 = [
                        entry.1[0] - home[0],
                        entry.1[1] - home[1],
                        entry.1[2] - home[2],
                    ];
                }
                let sites: Vec<usize> = placed.iter().map(|entry| entry.0).collect();
                if seen.insert((cluster_type.id, key)) {
                    instances.push(Embedding {
                        cluster_type: cluster_type.id,
                        member,
                        sites,
                    });
                }
            }
        }
        if instances.len() == before {
            warn!(
                "cluster type {} embeds nowhere in a {}-cell supercell",
                cluster_type.id,
                supercell.cells()
            );
        }
    }

    let mut by_site = vec![Vec::new(); supercell.site_count()];
    for (index, embedding) in instances.iter().enumerate() {
        for &site in &embedding.sites {
            by_site[site].push(index);
        }
    }

    debug!(
        "embedded {} instances of {} cluster types into {} sites",
        instances.len(),
        set.types.len(),
        supercell.site_count()
    );

    Ok(EmbeddingSet {
        instances,
        by_site,
        site_count: supercell.site_count(),
        type_count: set.types.len(),
    })
}
