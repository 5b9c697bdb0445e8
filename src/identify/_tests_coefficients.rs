#[cfg(test)]
mod _tests_coefficients {
    use super::super::coefficients::solve_coefficients;
    use super::super::orbits::{generate_cluster_types, ClusterType, ClusterTypeSet};
    use crate::error::CvmError;
    use crate::geometry::{Cluster, Site, Sublattice};
    use crate::symmetry::bcc_space_group;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn build_cluster(coords: &[[f64; 3]]) -> Cluster {
        let sites = coords
            .iter()
            .map(|p| Site::new(Vector3::new(p[0], p[1], p[2])))
            .collect();
        Cluster::new(vec![Sublattice::new(sites)])
    }

    fn tetrahedron_set() -> ClusterTypeSet {
        let cluster = build_cluster(&[
            [0.0, 0.0, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, -0.25, 0.25],
            [0.5, 0.0, 0.0],
        ]);
        generate_cluster_types(&[cluster], &bcc_space_group(2)).expect("generation should succeed")
    }

    // Hand-built degenerate type for the validation tests
    fn dummy_type(id: usize, site_count: usize, multiplicity: usize) -> ClusterType {
        let cluster = build_cluster(&[[0.0, 0.0, 0.0]]);
        let canonical = cluster.canonical_sites();
        ClusterType {
            id,
            site_count,
            multiplicity,
            representative: cluster,
            canonical: canonical.clone(),
            orbit: vec![canonical],
        }
    }

    #[test]
    fn test_tetrahedron_coefficients() {
        let set = tetrahedron_set();
        let kb = solve_coefficients(&set).expect("solve should succeed");

        let expected = [1.0, -1.0, 1.0, 1.0, -1.0];
        assert_eq!(kb.values.len(), expected.len());
        for (value, want) in kb.values.iter().zip(expected.iter()) {
            assert_relative_eq!(*value, *want, epsilon = 1e-12);
        }
        assert_relative_eq!(kb.sum, 1.0, epsilon = 1e-12);
        assert_relative_eq!(kb.weighted_sum, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pair_family_coefficients() {
        // A lone pair family is not a space-filling hierarchy, so the sums
        // are free to leave 1 and 0
        let cluster = build_cluster(&[[0.0, 0.0, 0.0], [0.25, 0.25, 0.25]]);
        let set = generate_cluster_types(&[cluster], &bcc_space_group(2))
            .expect("generation should succeed");
        let kb = solve_coefficients(&set).expect("solve should succeed");

        assert_relative_eq!(kb.values[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(kb.values[1], -7.0, epsilon = 1e-12);
        assert_relative_eq!(kb.sum, -6.0, epsilon = 1e-12);
        assert_relative_eq!(kb.weighted_sum, -48.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_broken_diagonal() {
        let set = ClusterTypeSet {
            types: vec![dummy_type(0, 1, 16)],
            containment: vec![vec![0]],
            max_size: 1,
        };
        let err = solve_coefficients(&set).unwrap_err();
        assert!(matches!(err, CvmError::Geometry { .. }));
    }

    #[test]
    fn test_rejects_size_order_violation() {
        // A pair claiming to contain another pair breaks the strict size order
        let set = ClusterTypeSet {
            types: vec![dummy_type(0, 2, 64), dummy_type(1, 2, 48)],
            containment: vec![vec![1, 1], vec![0, 1]],
            max_size: 2,
        };
        let err = solve_coefficients(&set).unwrap_err();
        assert!(matches!(err, CvmError::Geometry { .. }));
    }
}
