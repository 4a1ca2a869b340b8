#[cfg(test)]
mod _tests_ratio {
    use crate::error::MatchError;
    use crate::matching::ratio::{find_ratio_pairs, RatioPair};

    #[test]
    fn test_accepted_pairs_satisfy_tolerance_window() {
        let (area_s, area_f, tol) = (9.14875, 5.644683, 0.1);
        let search = find_ratio_pairs(area_s, area_f, 150.0, tol, false).unwrap();
        assert!(!search.pairs.is_empty());
        for pair in &search.pairs {
            let ratio = (f64::from(pair.rs) * area_s) / (f64::from(pair.rf) * area_f);
            assert!(ratio > 1.0 - tol, "pair {pair:?} below window: {ratio}");
            assert!(ratio < 1.0 + tol, "pair {pair:?} above window: {ratio}");
        }
    }

    #[test]
    fn test_pairs_are_in_increasing_rs_then_rf_order() {
        let search = find_ratio_pairs(1.0, 1.0, 16.0, 0.15, false).unwrap();
        for window in search.pairs.windows(2) {
            let (p, q) = (window[0], window[1]);
            assert!(p.rs < q.rs || (p.rs == q.rs && p.rf < q.rf));
        }
    }

    #[test]
    fn test_monotonic_in_max_area() {
        let small = find_ratio_pairs(2.0, 3.0, 30.0, 0.05, false).unwrap();
        let large = find_ratio_pairs(2.0, 3.0, 90.0, 0.05, false).unwrap();
        for pair in &small.pairs {
            assert!(
                large.pairs.contains(pair),
                "pair {pair:?} lost when max_area grew"
            );
        }
    }

    #[test]
    fn test_best_pair_tie_break_keeps_first() {
        // area_f/area_s = 2, so every accepted pair has rs/rf exactly 2
        // and ties at distance zero; the first one encountered must win.
        let search = find_ratio_pairs(1.0, 2.0, 8.0, 0.05, false).unwrap();
        assert_eq!(search.pairs, vec![
            RatioPair { rs: 2, rf: 1 },
            RatioPair { rs: 4, rf: 2 },
            RatioPair { rs: 6, rf: 3 },
            RatioPair { rs: 8, rf: 4 },
        ]);
        assert_eq!(search.best, RatioPair { rs: 2, rf: 1 });
        assert_eq!(search.approximation, 0.0);
    }

    #[test]
    fn test_best_pair_minimizes_distance_to_inverse_area_ratio() {
        let (area_s, area_f) = (9.14875, 5.644683);
        let search = find_ratio_pairs(area_s, area_f, 150.0, 0.1, false).unwrap();
        let target = area_f / area_s;
        let best_distance = (f64::from(search.best.rs) / f64::from(search.best.rf) - target).abs();
        for pair in &search.pairs {
            let distance = (f64::from(pair.rs) / f64::from(pair.rf) - target).abs();
            assert!(best_distance <= distance, "pair {pair:?} beats reported best");
        }
        assert!((search.approximation - best_distance).abs() < 1e-15);
    }

    #[test]
    fn test_no_feasible_ratio_is_reported_with_inputs() {
        let err = find_ratio_pairs(1.0, 1.618, 3.0, 0.001, false).unwrap_err();
        match err {
            MatchError::NoFeasibleRatio {
                area_s,
                area_f,
                max_area,
                tol,
            } => {
                assert_eq!(area_s, 1.0);
                assert_eq!(area_f, 1.618);
                assert_eq!(max_area, 3.0);
                assert_eq!(tol, 0.001);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shrinking_tol_shrinks_pair_set_toward_empty() {
        let wide = find_ratio_pairs(1.0, 1.618, 20.0, 0.2, false).unwrap();
        let narrow = find_ratio_pairs(1.0, 1.618, 20.0, 0.05, false).unwrap();
        assert!(narrow.pairs.len() <= wide.pairs.len());
        for pair in &narrow.pairs {
            assert!(wide.pairs.contains(pair));
        }
        assert!(find_ratio_pairs(1.0, 1.618, 20.0, 1e-9, false).is_err());
    }

    #[test]
    fn test_distinct_multiplicities_preserve_first_seen_order() {
        let search = find_ratio_pairs(1.0, 1.0, 9.0, 0.15, false).unwrap();
        let rs = search.distinct_rs();
        let rf = search.distinct_rf();
        for values in [&rs, &rf] {
            let mut sorted_dedup = values.clone();
            sorted_dedup.dedup();
            assert_eq!(&sorted_dedup, values, "duplicate multiplicity reported");
        }
        for pair in &search.pairs {
            assert!(rs.contains(&pair.rs));
            assert!(rf.contains(&pair.rf));
        }
    }
}
