use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};

use super::correlation::CorrelationFunctionSet;
use super::decorations::{decorate_cluster, decoration_count, decoration_digits, strip_undecorated};
use super::orbits::ClusterTypeSet;

/// One column of a configuration matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMatrixColumn {
    /// Correlation function this column reads, `None` for the constant column
    pub function: Option<usize>,
    /// Decoration candidates of the cluster type mapping to this function
    pub weight: usize,
}

/// Configuration matrix of one cluster type.
///
/// Each row expands one occupation state of the cluster into a signed sum of
/// correlation-function expectations; multiplying a row by the column vector
/// of function values (with a leading 1 for the constant column) yields the
/// probability of that occupation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMatrix {
    /// Cluster type this matrix belongs to
    pub cluster_type: usize,
    /// Constant column first, then reachable functions by ascending id
    pub columns: Vec<CMatrixColumn>,
    /// One row per occupation state, site 0 varying fastest
    pub rows: Vec<Vec<f64>>,
}

impl CMatrix {
    /// Column weights: 1 for the constant column, candidate counts for the rest.
    pub fn weights(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.weight as f64).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Configuration matrices for every cluster type, in type order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMatrixSet {
    pub matrices: Vec<CMatrix>,
    /// Number of occupation states per site, the host species included
    pub components: usize,
}

/// Build the configuration matrix of every cluster type.
///
/// The expansion writes the host indicator of each site as one minus the sum
/// of the species indicators, so a row over a cluster with h host sites is a
/// signed sum of `radix^h` decoration terms. Every non-constant term is
/// routed to the column of the correlation function its decorated sub-cluster
/// belongs to.
pub fn build_cmatrices(
    set: &ClusterTypeSet,
    functions: &CorrelationFunctionSet,
    symbols: &[String],
) -> Result<CMatrixSet> {
    if symbols.is_empty() {
        return Err(CvmError::configuration(
            "configuration matrices need at least one species symbol",
        ));
    }

    let radix = symbols.len() + 1;
    let mut matrices = Vec::with_capacity(set.types.len());

    for cluster_type in &set.types {
        let length = cluster_type.site_count;
        let total = decoration_count(length, radix);

        // Classify every non-empty decoration of this type once.
        let mut classes: Vec<Option<usize>> = vec![None; total];
        let mut counts: Vec<usize> = vec![0; functions.function_count()];
        for code in 1..total {
            let digits = decoration_digits(code, radix, length);
            let decorated = decorate_cluster(&cluster_type.representative, &digits, symbols)?;
            let stripped = match strip_undecorated(&decorated) {
                Some(cluster) => cluster,
                None => continue,
            };
            let function = functions
                .find_match(&stripped.canonical_sites())
                .ok_or_else(|| {
                    CvmError::geometry(format!(
                        "decoration {code} of cluster type {} matches no correlation function",
                        cluster_type.id
                    ))
                })?;
            classes[code] = Some(function);
            counts[function] += 1;
        }

        // Constant column first, then every reachable function by ascending id.
        let mut columns = vec![CMatrixColumn {
            function: None,
            weight: 1,
        }];
        let mut slot_of: Vec<Option<usize>> = vec![None; functions.function_count()];
        for (function, &count) in counts.iter().enumerate() {
            if count > 0 {
                slot_of[function] = Some(columns.len());
                columns.push(CMatrixColumn {
                    function: Some(function),
                    weight: count,
                });
            }
        }
        let mut slots: Vec<Option<usize>> = vec![None; total];
        for code in 1..total {
            slots[code] = classes[code].and_then(|function| slot_of[function]);
        }

        let mut rows = Vec::with_capacity(total);
        for row_code in 0..total {
            let occupation = decoration_digits(row_code, radix, length);
            let host_sites: Vec<usize> = occupation
                .iter()
                .enumerate()
                .filter(|(_, &digit)| digit == 0)
                .map(|(site, _)| site)
                .collect();
            let mut row = vec![0.0; columns.len()];
            for term in 0..decoration_count(host_sites.len(), radix) {
                let choices = decoration_digits(term, radix, host_sites.len());
                let decorated_hosts = choices.iter().filter(|&&digit| digit > 0).count();
                let sign = if decorated_hosts % 2 == 0 { 1.0 } else { -1.0 };
                let mut digits = occupation.clone();
                for (slot, &site) in host_sites.iter().enumerate() {
                    digits[site] = choices[slot];
                }
                let code: usize = digits.iter().rev().fold(0, |acc, &digit| acc * radix + digit);
                if code == 0 {
                    row[0] += sign;
                } else {
                    let slot = slots[code].ok_or_else(|| {
                        CvmError::geometry(format!(
                            "occupation term {code} of cluster type {} has no matrix column",
                            cluster_type.id
                        ))
                    })?;
                    row[slot] += sign;
                }
            }
            rows.push(row);
        }

        matrices.push(CMatrix {
            cluster_type: cluster_type.id,
            columns,
            rows,
        });
    }

    debug!("built {} configuration matrices", matrices.len());

    Ok(CMatrixSet {
        matrices,
        components: radix,
    })
}
