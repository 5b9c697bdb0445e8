#[cfg(test)]
mod _tests_pipeline {
    use super::super::runner::{
        run_identification, IdentificationResult, Phase, PhaseResources, PipelineConfig,
        ResourceMap,
    };
    use crate::error::CvmError;
    use crate::geometry::{Cluster, Site, Sublattice};
    use crate::symmetry::{bcc_space_group, simple_cubic_space_group, FrameTransform};
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    fn build_cluster(coords: &[[f64; 3]]) -> Cluster {
        let sites = coords
            .iter()
            .map(|p| Site::new(Vector3::new(p[0], p[1], p[2])))
            .collect();
        Cluster::new(vec![Sublattice::new(sites)])
    }

    fn disordered_resources() -> ResourceMap {
        let cluster = build_cluster(&[
            [0.0, 0.0, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, -0.25, 0.25],
            [0.5, 0.0, 0.0],
        ]);
        let mut resources = ResourceMap::new();
        resources.insert(
            Phase::Disordered,
            PhaseResources::new(vec![cluster], bcc_space_group(2)),
        );
        resources
    }

    fn with_b2_phase(mut resources: ResourceMap) -> ResourceMap {
        let cluster = Cluster::new(vec![
            Sublattice::new(vec![
                Site::new(Vector3::new(0.0, 0.0, 0.0)),
                Site::new(Vector3::new(0.0, 0.5, 0.0)),
            ]),
            Sublattice::new(vec![
                Site::new(Vector3::new(0.75, 0.75, 0.75)),
                Site::new(Vector3::new(0.25, 0.75, 0.75)),
            ]),
        ]);
        let frame = FrameTransform::new(Matrix3::identity(), Vector3::new(0.25, 0.25, 0.25));
        let group = simple_cubic_space_group(2).with_frame(frame);
        resources.insert(Phase::Ordered, PhaseResources::new(vec![cluster], group));
        resources
    }

    #[test]
    fn test_binary_run_end_to_end() {
        let result = run_identification(&disordered_resources(), &PipelineConfig::binary())
            .expect("run should succeed");

        assert_eq!(result.disordered.type_count(), 5);
        assert_eq!(result.disordered.full_size_count(), 1);

        let expected = [1.0, -1.0, 1.0, 1.0, -1.0];
        for (value, want) in result.coefficients.values.iter().zip(expected.iter()) {
            assert_relative_eq!(*value, *want, epsilon = 1e-12);
        }

        assert_eq!(result.functions.function_count(), 5);
        assert_eq!(result.functions.candidate_count, 16);
        assert_eq!(result.cmatrices.matrices.len(), 5);
        assert!(result.ordered.is_none());
    }

    #[test]
    fn test_ordered_run_produces_groupings() {
        let resources = with_b2_phase(disordered_resources());
        let result = run_identification(&resources, &PipelineConfig::binary())
            .expect("run should succeed");

        let ordered = result.ordered.expect("ordered analysis should be present");
        assert_eq!(ordered.types.type_count(), 8);
        assert_eq!(
            ordered.cluster_buckets.buckets,
            vec![vec![0], vec![1, 2], vec![4], vec![3, 5], vec![6, 7]]
        );
        assert_eq!(ordered.functions.function_count(), 8);
        assert_eq!(
            ordered.function_groups.groups,
            vec![vec![0, 2], vec![3], vec![1, 5], vec![4, 6], vec![7]]
        );
    }

    #[test]
    fn test_ternary_run_widens_the_function_set() {
        let result = run_identification(
            &disordered_resources(),
            &PipelineConfig::with_components(3),
        )
        .expect("run should succeed");

        assert_eq!(result.functions.candidate_count, 81);
        assert_eq!(result.functions.function_count(), 20);
    }

    #[test]
    fn test_default_symbol_alphabet() {
        assert_eq!(PipelineConfig::binary().symbols, vec!["B".to_string()]);
        assert_eq!(
            PipelineConfig::with_components(4).symbols,
            vec!["B".to_string(), "C".to_string(), "D".to_string()]
        );
    }

    #[test]
    fn test_config_validation() {
        let resources = disordered_resources();

        let single = PipelineConfig::with_components(1);
        let err = run_identification(&resources, &single).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));

        let mismatched = PipelineConfig {
            components: 3,
            symbols: vec!["B".to_string()],
        };
        let err = run_identification(&resources, &mismatched).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));

        let duplicated = PipelineConfig {
            components: 3,
            symbols: vec!["B".to_string(), "B".to_string()],
        };
        let err = run_identification(&resources, &duplicated).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));
    }

    #[test]
    fn test_missing_disordered_bundle_is_rejected() {
        let resources = with_b2_phase(ResourceMap::new());
        let err = run_identification(&resources, &PipelineConfig::binary()).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));
    }

    #[test]
    fn test_result_survives_json() {
        let resources = with_b2_phase(disordered_resources());
        let result = run_identification(&resources, &PipelineConfig::binary())
            .expect("run should succeed");

        let encoded = serde_json::to_string(&result).expect("serialization should succeed");
        let decoded: IdentificationResult =
            serde_json::from_str(&encoded).expect("deserialization should succeed");
        assert_eq!(result, decoded);
    }
}
