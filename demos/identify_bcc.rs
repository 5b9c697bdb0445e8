/// Example walking the identification stages on the bcc tetrahedron family
///
/// The maximal cluster is the nearest-neighbor tetrahedron of a bcc crystal,
/// expressed in fractional coordinates of a two-cell torus. The demo prints
/// the symmetry-distinct cluster types, their cumulant coefficients, the
/// binary correlation functions and the configuration-matrix shapes.
use std::collections::BTreeMap;

use nalgebra::Vector3;

use cvm_lattice::geometry::{Cluster, Site, Sublattice};
use cvm_lattice::pipeline::{run_identification, Phase, PhaseResources, PipelineConfig};
use cvm_lattice::symmetry::bcc_space_group;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Identifying the BCC Tetrahedron Family ===\n");

    // The four tetrahedron corners on the two-cell torus
    let corners = [
        [0.0, 0.0, 0.0],
        [0.25, 0.25, 0.25],
        [0.25, -0.25, 0.25],
        [0.5, 0.0, 0.0],
    ];
    let sites = corners
        .iter()
        .map(|c| Site::new(Vector3::new(c[0], c[1], c[2])))
        .collect();
    let cluster = Cluster::new(vec![Sublattice::new(sites)]);

    let mut resources = BTreeMap::new();
    resources.insert(
        Phase::Disordered,
        PhaseResources::new(vec![cluster], bcc_space_group(2)),
    );

    let result = run_identification(&resources, &PipelineConfig::binary())?;

    println!("1. Cluster types (discovery order):");
    for (ty, kb) in result
        .disordered
        .types
        .iter()
        .zip(&result.coefficients.values)
    {
        println!(
            "   type {}: {} site(s), multiplicity {:>3}, kb {:+.1}",
            ty.id, ty.site_count, ty.multiplicity, kb
        );
    }
    println!();

    println!("2. Containment table (sub-selections of row type matching column type):");
    for row in &result.disordered.containment {
        println!("   {:?}", row);
    }
    println!();

    println!("3. Binary correlation functions:");
    for function in &result.functions.functions {
        println!(
            "   function {}: {} site(s), multiplicity {:>3}, shape type {}",
            function.id, function.site_count, function.multiplicity, function.cluster_type
        );
    }
    println!(
        "   {} candidates enumerated, {} kept\n",
        result.functions.candidate_count,
        result.functions.function_count()
    );

    println!("4. Configuration matrices:");
    for matrix in &result.cmatrices.matrices {
        println!(
            "   cluster type {}: {} rows x {} columns",
            matrix.cluster_type,
            matrix.row_count(),
            matrix.column_count()
        );
    }

    Ok(())
}
