#[cfg(test)]
mod _tests_correlation {
    use super::super::correlation::identify_correlation_functions;
    use super::super::orbits::{generate_cluster_types, ClusterTypeSet};
    use crate::error::CvmError;
    use crate::geometry::{canonicalize_sites, Cluster, Site, Sublattice};
    use crate::symmetry::{bcc_space_group, SpaceGroup};
    use nalgebra::Vector3;

    fn build_cluster(coords: &[[f64; 3]]) -> Cluster {
        let sites = coords
            .iter()
            .map(|p| Site::new(Vector3::new(p[0], p[1], p[2])))
            .collect();
        Cluster::new(vec![Sublattice::new(sites)])
    }

    fn tetrahedron_set(group: &SpaceGroup) -> ClusterTypeSet {
        let cluster = build_cluster(&[
            [0.0, 0.0, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, -0.25, 0.25],
            [0.5, 0.0, 0.0],
        ]);
        generate_cluster_types(&[cluster], group).expect("generation should succeed")
    }

    fn binary() -> Vec<String> {
        vec!["B".to_string()]
    }

    fn ternary() -> Vec<String> {
        vec!["B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_binary_discovery_order() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");

        assert_eq!(functions.function_count(), 5);
        assert_eq!(functions.candidate_count, 16);
        assert_eq!(functions.full_size_count(set.max_size), 1);

        // Walking the decoration codes with site 0 fastest discovers the
        // point first and the full tetrahedron last
        let types: Vec<usize> = functions.functions.iter().map(|f| f.cluster_type).collect();
        assert_eq!(types, vec![4, 2, 3, 1, 0]);

        let sizes: Vec<usize> = functions.functions.iter().map(|f| f.site_count).collect();
        assert_eq!(sizes, vec![1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_binary_multiplicities_follow_the_shapes() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");

        // One species only, so each function inherits its shape multiplicity
        let mults: Vec<usize> = functions.functions.iter().map(|f| f.multiplicity).collect();
        assert_eq!(mults, vec![16, 64, 48, 192, 96]);
    }

    #[test]
    fn test_binary_one_function_per_type() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");

        assert_eq!(functions.by_type.len(), 5);
        for ids in &functions.by_type {
            assert_eq!(ids.len(), 1);
        }
        assert_eq!(functions.by_type[0], vec![4]);
        assert_eq!(functions.by_type[4], vec![0]);
    }

    #[test]
    fn test_ternary_counts() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &ternary())
            .expect("identification should succeed");

        assert_eq!(functions.candidate_count, 81);
        assert_eq!(functions.function_count(), 20);
        assert_eq!(functions.full_size_count(set.max_size), 6);

        let per_type: Vec<usize> = functions.by_type.iter().map(Vec::len).collect();
        assert_eq!(per_type, vec![6, 6, 3, 3, 2]);
        eprintln!("Debug: ternary functions per type {per_type:?}");
    }

    #[test]
    fn test_ternary_mixed_pair_doubles_the_orbit() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &ternary())
            .expect("identification should succeed");

        // The B-C pair decorates each geometric pair two ways, and the swap
        // symmetry keeps both in one orbit
        let mixed = functions
            .functions
            .iter()
            .find(|f| {
                f.cluster_type == 2
                    && f.canonical.iter().any(|s| s.species() == Some("B"))
                    && f.canonical.iter().any(|s| s.species() == Some("C"))
            })
            .expect("mixed nearest-neighbour function should exist");
        assert_eq!(mixed.multiplicity, 128);

        let pure: Vec<usize> = functions
            .functions
            .iter()
            .filter(|f| f.cluster_type == 2 && f.id != mixed.id)
            .map(|f| f.multiplicity)
            .collect();
        assert_eq!(pure, vec![64, 64]);
    }

    #[test]
    fn test_find_match_accepts_decorated_images() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");

        let pair = vec![
            Site::with_species(Vector3::new(0.5, 0.5, 0.0), "B"),
            Site::with_species(Vector3::new(0.25, 0.25, 0.25), "B"),
        ];
        assert_eq!(functions.find_match(&canonicalize_sites(&pair)), Some(1));

        // An unknown species never matches
        let foreign = vec![Site::with_species(Vector3::new(0.0, 0.0, 0.0), "Q")];
        assert_eq!(functions.find_match(&canonicalize_sites(&foreign)), None);
    }

    #[test]
    fn test_rejects_empty_symbols() {
        let group = bcc_space_group(2);
        let set = tetrahedron_set(&group);
        let err = identify_correlation_functions(&set, &group, &[]).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));
    }

    #[test]
    fn test_every_maximal_type_is_decorated() {
        // A second maximal cluster smaller than the largest one still gets its
        // decorations enumerated
        let group = bcc_space_group(2);
        let tetrahedron = build_cluster(&[
            [0.0, 0.0, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, -0.25, 0.25],
            [0.5, 0.0, 0.0],
        ]);
        let distant_pair = build_cluster(&[[0.0, 0.0, 0.0], [0.5, 0.5, 0.0]]);
        let set = generate_cluster_types(&[tetrahedron, distant_pair], &group)
            .expect("generation should succeed");
        assert_eq!(set.type_count(), 6);
        assert_eq!(set.maximal_ids(), vec![0, 5]);

        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");
        eprintln!(
            "Debug: candidate_count {}, by_type[5] {:?}",
            functions.candidate_count, functions.by_type[5]
        );
        assert_eq!(functions.candidate_count, 20);
        assert_eq!(functions.function_count(), 6);
        assert_eq!(functions.by_type[5], vec![5]);
        assert_eq!(functions.functions[5].cluster_type, 5);
        assert_eq!(functions.functions[5].multiplicity, 96);
    }
}
