#[cfg(test)]
mod _tests_parse {
    use super::super::cluster_file::parse_cluster_file;
    use super::super::symmetry_file::{parse_frame_file, parse_symmetry_file};
    use crate::error::CvmError;
    use nalgebra::Vector3;

    // The bcc tetrahedron in fractional coordinates of a two-cell torus
    const TETRAHEDRON: &str = "
        {
          {
            { {0, 0, 0}, {0.25, 0.25, 0.25}, {0.25, -0.25, 0.25}, {0.5, 0, 0} }
          }
        }
    ";

    #[test]
    fn test_parse_single_cluster() {
        let clusters = parse_cluster_file(TETRAHEDRON).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].sublattices().len(), 1);
        assert_eq!(clusters[0].site_count(), 4);

        let flat = clusters[0].flatten();
        assert_eq!(flat[1].position(), Vector3::new(0.25, 0.25, 0.25));
        assert_eq!(flat[2].position(), Vector3::new(0.25, -0.25, 0.25));
        assert!(flat.iter().all(|s| !s.is_decorated()));
    }

    #[test]
    fn test_parse_multiple_sublattices_without_commas() {
        let input = "{ { { {0 0 0} {0.5 0 0} } { {0.25 0.25 0.25} } } }";
        let clusters = parse_cluster_file(input).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].sublattices().len(), 2);
        assert_eq!(clusters[0].sublattices()[0].len(), 2);
        assert_eq!(clusters[0].sublattices()[1].len(), 1);
    }

    #[test]
    fn test_parse_two_clusters() {
        let input = "{
            { { {0,0,0}, {0.25,0.25,0.25} } }
            { { {0,0,0} } }
        }";
        let clusters = parse_cluster_file(input).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].site_count(), 2);
        assert_eq!(clusters[1].site_count(), 1);
    }

    #[test]
    fn test_parse_rejects_unbalanced_braces() {
        let err = parse_cluster_file("{ { { {0,0,0} }").unwrap_err();
        assert!(matches!(err, CvmError::InputFormat { .. }));

        let err = parse_cluster_file("{ } }").unwrap_err();
        assert!(matches!(err, CvmError::InputFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_site_arity() {
        let err = parse_cluster_file("{ { { {0, 0} } } }").unwrap_err();
        assert!(matches!(err, CvmError::InputFormat { .. }));

        let err = parse_cluster_file("{ { { {0, 0, 0, 0} } } }").unwrap_err();
        assert!(matches!(err, CvmError::InputFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_garbage_tokens() {
        let err = parse_cluster_file("{ { { {0, zero, 0} } } }").unwrap_err();
        match err {
            CvmError::InputFormat { message } => assert!(message.contains("zero")),
            other => panic!("expected input format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_and_trailing() {
        assert!(parse_cluster_file("").is_err());
        assert!(parse_cluster_file("{ }").is_err());
        assert!(parse_cluster_file("{ { { {0,0,0} } } } 1.0").is_err());
    }

    #[test]
    fn test_parse_symmetry_operations() {
        let input = "
            1 0 0  0 1 0  0 0 1   0 0 0
            -1 0 0  0 -1 0  0 0 -1   0.5 0.5 0.5
        ";
        let ops = parse_symmetry_file(input).unwrap();
        assert_eq!(ops.len(), 2);
        assert!(ops[0].is_identity());
        assert!(!ops[1].is_pure_rotation());
        assert_eq!(ops[1].translation, Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(ops[1].rotation[(0, 0)], -1.0);
    }

    #[test]
    fn test_parse_symmetry_rejects_partial_operation() {
        // 13 values: one complete operation plus a stray float
        let input = "1 0 0 0 1 0 0 0 1 0 0 0 0.5";
        let err = parse_symmetry_file(input).unwrap_err();
        assert!(matches!(err, CvmError::InputFormat { .. }));

        assert!(parse_symmetry_file("").is_err());
    }

    #[test]
    fn test_parse_frame_file() {
        let input = "1 0 0 0 1 0 0 0 1  0.25 0.25 0.25";
        let frame = parse_frame_file(input).unwrap();
        assert!(!frame.is_identity());
        assert_eq!(frame.translation, Vector3::new(0.25, 0.25, 0.25));

        // A frame resource is exactly one 3x3 matrix plus shift
        assert!(parse_frame_file("1 0 0 0 1 0 0 0 1").is_err());
        assert!(parse_frame_file("1 0 0 0 1 0 0 0 1 0 0 0 0").is_err());
    }
}
