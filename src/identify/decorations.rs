use crate::error::{CvmError, Result};
use crate::geometry::{Cluster, Site, Sublattice};

/// Number of distinct decorations of `length` sites over `radix` states.
pub fn decoration_count(length: usize, radix: usize) -> usize {
    radix.pow(length as u32)
}

/// Digit expansion of `code` in base `radix`, one digit per flattened site.
///
/// Site 0 carries the least significant digit, so walking codes in ascending
/// order varies the first site fastest.
pub fn decoration_digits(code: usize, radix: usize, length: usize) -> Vec<usize> {
    let mut digits = Vec::with_capacity(length);
    let mut rest = code;
    for _ in 0..length {
        digits.push(rest % radix);
        rest /= radix;
    }
    digits
}

/// Apply one decoration digit per flattened site of a cluster.
///
/// Digit 0 leaves the site undecorated, digit d > 0 assigns the d-th species
/// symbol. Sublattice structure is preserved.
pub fn decorate_cluster(cluster: &Cluster, digits: &[usize], symbols: &[String]) -> Result<Cluster> {
    if digits.len() != cluster.site_count() {
        return Err(CvmError::configuration(format!(
            "decoration carries {} digits for a cluster of {} sites",
            digits.len(),
            cluster.site_count()
        )));
    }
    let mut flat = 0;
    let mut sublattices = Vec::with_capacity(cluster.sublattices().len());
    for sublattice in cluster.sublattices() {
        let mut sites = Vec::with_capacity(sublattice.len());
        for site in sublattice.sites() {
            let digit = digits[flat];
            flat += 1;
            if digit == 0 {
                sites.push(site.undecorated());
            } else {
                let symbol = symbols.get(digit - 1).ok_or_else(|| {
                    CvmError::configuration(format!(
                        "decoration digit {digit} exceeds the {} available species",
                        symbols.len()
                    ))
                })?;
                sites.push(Site::with_species(site.position(), symbol.clone()));
            }
        }
        sublattices.push(Sublattice::new(sites));
    }
    Ok(Cluster::new(sublattices))
}

/// Drop every undecorated site, keeping the decorated sub-cluster.
///
/// Returns `None` when no site is decorated (the empty cluster).
pub fn strip_undecorated(cluster: &Cluster) -> Option<Cluster> {
    let keep: Vec<usize> = cluster
        .flatten()
        .iter()
        .enumerate()
        .filter(|(_, site)| site.is_decorated())
        .map(|(index, _)| index)
        .collect();
    if keep.is_empty() {
        None
    } else {
        Some(cluster.select(&keep))
    }
}
