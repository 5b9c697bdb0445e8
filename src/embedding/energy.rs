use serde::{Deserialize, Serialize};

use crate::error::{CvmError, Result};

use super::generator::{Embedding, EmbeddingSet};

/// Ising-style cluster expansion over the embedded instances.
///
/// Binary occupations only: state 0 carries spin +1, state 1 carries spin -1.
/// Each instance contributes its type coefficient times the product of the
/// spins on its sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyModel {
    coefficients: Vec<f64>,
}

fn spin(state: u8) -> f64 {
    if state == 0 {
        1.0
    } else {
        -1.0
    }
}

fn instance_product(embedding: &Embedding, occupation: &[u8]) -> f64 {
    embedding
        .sites
        .iter()
        .map(|&site| spin(occupation[site]))
        .product()
}

impl EnergyModel {
    /// One interaction coefficient per cluster type, in type order.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Sum of every instance contribution.
    pub fn total_energy(&self, embeddings: &EmbeddingSet, occupation: &[u8]) -> Result<f64> {
        self.check(embeddings, occupation)?;
        Ok(embeddings
            .instances
            .iter()
            .map(|e| self.coefficients[e.cluster_type] * instance_product(e, occupation))
            .sum())
    }

    /// Sum of the contributions of every instance containing one site.
    pub fn site_energy(
        &self,
        embeddings: &EmbeddingSet,
        occupation: &[u8],
        site: usize,
    ) -> Result<f64> {
        self.check(embeddings, occupation)?;
        if site >= embeddings.site_count {
            return Err(CvmError::configuration(format!(
                "site index {site} is outside the supercell"
            )));
        }
        Ok(embeddings
            .instances_at(site)
            .iter()
            .map(|&index| {
                let embedding = &embeddings.instances[index];
                self.coefficients[embedding.cluster_type] * instance_product(embedding, occupation)
            })
            .sum())
    }

    /// Energy change from flipping one site.
    ///
    /// Every containing instance is linear in the spin of the site, so the
    /// flip negates exactly the site energy twice over.
    pub fn flip_delta(
        &self,
        embeddings: &EmbeddingSet,
        occupation: &[u8],
        site: usize,
    ) -> Result<f64> {
        Ok(-2.0 * self.site_energy(embeddings, occupation, site)?)
    }

    /// Mean spin product per cluster type, the embedded correlation estimate.
    ///
    /// A type with no instances in the supercell averages to 0.
    pub fn type_averages(&self, embeddings: &EmbeddingSet, occupation: &[u8]) -> Result<Vec<f64>> {
        self.check(embeddings, occupation)?;
        let mut sums = vec![0.0; embeddings.type_count];
        let mut counts = vec![0usize; embeddings.type_count];
        for embedding in &embeddings.instances {
            sums[embedding.cluster_type] += instance_product(embedding, occupation);
            counts[embedding.cluster_type] += 1;
        }
        Ok(sums
            .iter()
            .zip(&counts)
            .map(|(&total, &count)| if count == 0 { 0.0 } else { total / count as f64 })
            .collect())
    }

    fn check(&self, embeddings: &EmbeddingSet, occupation: &[u8]) -> Result<()> {
        if occupation.len() != embeddings.site_count {
            return Err(CvmError::configuration(format!(
                "occupation covers {} sites, the supercell has {}",
                occupation.len(),
                embeddings.site_count
            )));
        }
        if let Some(state) = occupation.iter().find(|&&state| state > 1) {
            return Err(CvmError::configuration(format!(
                "occupation state {state} is outside the binary basis"
            )));
        }
        if self.coefficients.len() != embeddings.type_count {
            return Err(CvmError::configuration(format!(
                "model carries {} coefficients for {} cluster types",
                self.coefficients.len(),
                embeddings.type_count
            )));
        }
        Ok(())
    }
}
