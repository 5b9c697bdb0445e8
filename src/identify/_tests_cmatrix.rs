#[cfg(test)]
mod _tests_cmatrix {
    use super::super::cmatrix::build_cmatrices;
    use super::super::correlation::{identify_correlation_functions, CorrelationFunctionSet};
    use super::super::decorations::{decoration_count, decoration_digits};
    use super::super::orbits::{generate_cluster_types, ClusterTypeSet};
    use crate::error::CvmError;
    use crate::geometry::{Cluster, Site, Sublattice};
    use crate::symmetry::{bcc_space_group, SpaceGroup};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn build_cluster(coords: &[[f64; 3]]) -> Cluster {
        let sites = coords
            .iter()
            .map(|p| Site::new(Vector3::new(p[0], p[1], p[2])))
            .collect();
        Cluster::new(vec![Sublattice::new(sites)])
    }

    fn tetrahedron_family(
        group: &SpaceGroup,
        symbols: &[String],
    ) -> (ClusterTypeSet, CorrelationFunctionSet) {
        let cluster = build_cluster(&[
            [0.0, 0.0, 0.0],
            [0.25, 0.25, 0.25],
            [0.25, -0.25, 0.25],
            [0.5, 0.0, 0.0],
        ]);
        let set = generate_cluster_types(&[cluster], group).expect("generation should succeed");
        let functions = identify_correlation_functions(&set, group, symbols)
            .expect("identification should succeed");
        (set, functions)
    }

    fn binary() -> Vec<String> {
        vec!["B".to_string()]
    }

    fn ternary() -> Vec<String> {
        vec!["B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_binary_point_matrix() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &binary());
        let matrices = build_cmatrices(&set, &functions, &binary()).expect("build should succeed");

        assert_eq!(matrices.components, 2);
        assert_eq!(matrices.matrices.len(), 5);

        let point = &matrices.matrices[4];
        let columns: Vec<Option<usize>> = point.columns.iter().map(|c| c.function).collect();
        assert_eq!(columns, vec![None, Some(0)]);
        assert_eq!(point.weights(), vec![1.0, 1.0]);
        assert_eq!(point.rows, vec![vec![1.0, -1.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_binary_pair_matrix() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &binary());
        let matrices = build_cmatrices(&set, &functions, &binary()).expect("build should succeed");

        let pair = &matrices.matrices[2];
        let columns: Vec<Option<usize>> = pair.columns.iter().map(|c| c.function).collect();
        assert_eq!(columns, vec![None, Some(0), Some(1)]);
        assert_eq!(pair.weights(), vec![1.0, 2.0, 1.0]);
        assert_eq!(
            pair.rows,
            vec![
                vec![1.0, -2.0, 1.0],
                vec![0.0, 1.0, -1.0],
                vec![0.0, 1.0, -1.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_binary_tetrahedron_matrix_shape() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &binary());
        let matrices = build_cmatrices(&set, &functions, &binary()).expect("build should succeed");

        let tetra = &matrices.matrices[0];
        assert_eq!(tetra.row_count(), 16);
        assert_eq!(tetra.column_count(), 6);
        assert_eq!(tetra.weights(), vec![1.0, 4.0, 4.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_column_sums_telescope() {
        // Summing the expansion over every occupation state leaves exactly the
        // constant term
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &ternary());
        let matrices = build_cmatrices(&set, &functions, &ternary()).expect("build should succeed");

        for matrix in &matrices.matrices {
            for column in 0..matrix.column_count() {
                let total: f64 = matrix.rows.iter().map(|row| row[column]).sum();
                let want = if column == 0 { 1.0 } else { 0.0 };
                assert_relative_eq!(total, want, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_ideal_solution_probabilities() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &binary());
        let matrices = build_cmatrices(&set, &functions, &binary()).expect("build should succeed");

        // In an uncorrelated solution every function factorizes into x^sites,
        // and each row must reproduce the product probability
        let x: f64 = 0.3;
        let values: Vec<f64> = functions
            .functions
            .iter()
            .map(|f| x.powi(f.site_count as i32))
            .collect();

        for matrix in &matrices.matrices {
            let length = set.types[matrix.cluster_type].site_count;
            let mut total = 0.0;
            for (code, row) in matrix.rows.iter().enumerate() {
                let mut probability = row[0];
                for (slot, column) in matrix.columns.iter().enumerate().skip(1) {
                    if let Some(function) = column.function {
                        probability += row[slot] * values[function];
                    }
                }
                let digits = decoration_digits(code, 2, length);
                let expected: f64 = digits
                    .iter()
                    .map(|&d| if d == 0 { 1.0 - x } else { x })
                    .product();
                assert_relative_eq!(probability, expected, epsilon = 1e-12);
                total += probability;
            }
            assert_relative_eq!(total, 1.0, epsilon = 1e-12);
            assert_eq!(matrix.row_count(), decoration_count(length, 2));
        }
    }

    #[test]
    fn test_ternary_point_matrix() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &ternary());
        let matrices = build_cmatrices(&set, &functions, &ternary()).expect("build should succeed");

        let point = &matrices.matrices[4];
        let columns: Vec<Option<usize>> = point.columns.iter().map(|c| c.function).collect();
        assert_eq!(columns, vec![None, Some(0), Some(1)]);
        assert_eq!(
            point.rows,
            vec![
                vec![1.0, -1.0, -1.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_rejects_empty_symbols() {
        let group = bcc_space_group(2);
        let (set, functions) = tetrahedron_family(&group, &binary());
        let err = build_cmatrices(&set, &functions, &[]).unwrap_err();
        assert!(matches!(err, CvmError::Configuration { .. }));
    }

    #[test]
    fn test_second_maximal_type_gets_a_matrix() {
        // A maximal pair beyond the tetrahedron's reach contributes its own
        // functions and matrix instead of failing the build
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
        let functions = identify_correlation_functions(&set, &group, &binary())
            .expect("identification should succeed");
        let matrices = build_cmatrices(&set, &functions, &binary()).expect("build should succeed");

        assert_eq!(matrices.matrices.len(), 6);
        let distant = &matrices.matrices[5];
        assert_eq!(distant.row_count(), 4);
        let columns: Vec<Option<usize>> = distant.columns.iter().map(|c| c.function).collect();
        assert_eq!(columns, vec![None, Some(0), Some(5)]);
        assert_eq!(distant.weights(), vec![1.0, 2.0, 1.0]);
    }
}
