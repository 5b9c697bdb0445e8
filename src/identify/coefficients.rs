use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::COEFFICIENT_TOLERANCE;
use crate::error::{CvmError, Result};

use super::orbits::ClusterTypeSet;

/// Kikuchi-Baker cumulant coefficients, one per cluster type.
///
/// On a complete three-dimensional cluster family the plain sum is 1 and the
/// multiplicity-weighted sum is 0; degenerate families (a lone pair, a lone
/// point) do not satisfy either, so neither sum is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KikuchiBakerCoefficients {
    /// Coefficient per type, indexed by type id
    pub values: Vec<f64>,
    /// Plain sum over all types
    pub sum: f64,
    /// Sum weighted by orbit multiplicity
    pub weighted_sum: f64,
}

/// Solve the cumulant coefficients by back-substitution, largest clusters first.
///
/// Types contained in no larger type get coefficient 1; every other type
/// balances the weighted contributions of its containing types:
///
///   kb[j] = 1 - sum over i of kb[i] * multiplicity[i] * containment[i][j] / multiplicity[j]
///
/// The containment table must describe a strict partial order by size with a
/// unit diagonal, otherwise the solve is rejected.
pub fn solve_coefficients(set: &ClusterTypeSet) -> Result<KikuchiBakerCoefficients> {
    let type_count = set.types.len();

    for i in 0..type_count {
        for j in 0..type_count {
            if i == j {
                if set.containment[i][j] != 1 {
                    return Err(CvmError::geometry(format!(
                        "containment diagonal for type {i} is {}, expected 1",
                        set.containment[i][j]
                    )));
                }
            } else if set.containment[i][j] > 0 && set.types[i].site_count <= set.types[j].site_count {
                return Err(CvmError::geometry(format!(
                    "containment of type {j} in type {i} violates the size order"
                )));
            }
        }
    }

    let mut order: Vec<usize> = (0..type_count).collect();
    order.sort_by(|&a, &b| {
        set.types[b]
            .site_count
            .cmp(&set.types[a].site_count)
            .then(a.cmp(&b))
    });

    let mut values = vec![0.0; type_count];
    for &j in &order {
        let mut correction = 0.0;
        for i in 0..type_count {
            if i != j && set.containment[i][j] > 0 {
                correction += values[i] * (set.types[i].multiplicity * set.containment[i][j]) as f64
                    / set.types[j].multiplicity as f64;
            }
        }
        values[j] = 1.0 - correction;
    }

    let sum: f64 = values.iter().sum();
    let weighted_sum: f64 = values
        .iter()
        .zip(&set.types)
        .map(|(v, t)| v * t.multiplicity as f64)
        .sum();
    debug!("cumulant coefficient sums: plain {sum:.6}, multiplicity-weighted {weighted_sum:.6}");
    if (sum - 1.0).abs() > COEFFICIENT_TOLERANCE || weighted_sum.abs() > COEFFICIENT_TOLERANCE {
        warn!(
            "cumulant sums {sum:.6} / {weighted_sum:.6} are off the complete-family values 1 / 0; \
             the cluster family may be degenerate"
        );
    }

    Ok(KikuchiBakerCoefficients {
        values,
        sum,
        weighted_sum,
    })
}
