#[cfg(test)]
mod _tests_deformation {
    use crate::lattice::Lattice2D;
    use crate::matching::deformation::relative_deformation;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_identical_supercells_have_zero_deformation() {
        let lattice = Lattice2D::from_rows([[3.25, 0.0], [-1.625, 2.815]]);
        let d = relative_deformation(&lattice, &lattice);
        assert_eq!(d.da, 0.0);
        assert_eq!(d.db, 0.0);
        assert_eq!(d.dab, 0.0);
        assert_eq!(d.max(), 0.0);
    }

    #[test]
    fn test_known_mismatch_components() {
        let substrate = Lattice2D::from_rows([[2.0, 0.0], [0.0, 1.0]]);
        let film = Lattice2D::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        let d = relative_deformation(&substrate, &film);
        // Da = (1, 0), |s.a| = 2
        assert!((d.da - 0.5).abs() < TOL);
        assert!(d.db.abs() < TOL);
        // Da + Db = (1, 0), |s.a + s.b| = sqrt(5)
        assert!((d.dab - 1.0 / 5.0_f64.sqrt()).abs() < TOL);
        assert!((d.max() - 0.5).abs() < TOL);
    }

    #[test]
    fn test_metric_is_normalized_by_substrate_not_film() {
        // Swapping roles changes the normalization, so the measure is
        // asymmetric by construction.
        let substrate = Lattice2D::from_rows([[2.0, 0.0], [0.0, 1.0]]);
        let film = Lattice2D::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        let forward = relative_deformation(&substrate, &film);
        let reverse = relative_deformation(&film, &substrate);
        assert!((forward.da - 0.5).abs() < TOL);
        assert!((reverse.da - 1.0).abs() < TOL);
        assert!(forward.max() != reverse.max());
    }

    #[test]
    fn test_max_picks_largest_component() {
        let substrate = Lattice2D::from_rows([[1.0, 0.0], [0.0, 2.0]]);
        let film = Lattice2D::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        let d = relative_deformation(&substrate, &film);
        // Db = (0, 1), |s.b| = 2 -> 0.5; Da = 0; diagonal (1, 2) vs (1, 1)
        assert!((d.db - 0.5).abs() < TOL);
        assert_eq!(d.max(), d.db);
    }
}
