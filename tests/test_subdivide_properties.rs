//! Geometry properties of `Hyperrectangle::subdivide`, checked over every
//! rectangle produced by real runs rather than a handful of hand-made boxes.

use ldirect::{run, Evaluator, Hyperrectangle};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// A varied population: every rectangle from short runs on a few domains.
fn sample_rects() -> Vec<Hyperrectangle> {
    let domains: Vec<Vec<(f64, f64)>> = vec![
        vec![(-5.12, 5.12)],
        vec![(-2.0, 3.0), (-1.0, 4.0)],
        vec![(0.0, 1.0), (0.0, 3.0), (-7.5, 0.25)],
        vec![(-1.0, 1.0); 4],
    ];
    let mut rects = Vec::new();
    for domain in domains {
        let eval = Evaluator::new(sphere, domain.clone()).unwrap();
        rects.extend(run(&eval, &domain, 6).unwrap());
    }
    rects
}

#[test]
fn test_pieces_tile_parent() {
    for parent in sample_rects() {
        let axis = parent.split_axis();
        let (left, center, right) = parent.subdivide();
        let (lo, hi) = parent.bounds()[axis];

        assert_eq!(left.bounds()[axis].0, lo);
        assert_eq!(left.bounds()[axis].1, center.bounds()[axis].0);
        assert_eq!(center.bounds()[axis].1, right.bounds()[axis].0);
        assert_eq!(right.bounds()[axis].1, hi);

        let third = (hi - lo) / 3.0;
        for piece in [&left, &center, &right] {
            assert!((piece.extent(axis) - third).abs() <= 1e-12 * (hi - lo).max(1.0));
            for d in (0..parent.dim()).filter(|&d| d != axis) {
                assert_eq!(piece.bounds()[d], parent.bounds()[d]);
            }
        }
    }
}

#[test]
fn test_split_axis_is_a_longest_side() {
    for rect in sample_rects() {
        let axis = rect.split_axis();
        let wmax = (0..rect.dim()).map(|d| rect.extent(d)).fold(f64::MIN, f64::max);
        assert_eq!(rect.extent(axis), wmax);
        // Nothing earlier ties it.
        for d in 0..axis {
            assert!(rect.extent(d) < wmax);
        }
        assert_eq!(rect.split_axis(), axis);
    }
}

#[test]
fn test_tied_axes_split_deterministically() {
    let rect = Hyperrectangle::new(vec![(0.0, 2.0), (-1.0, 1.0), (5.0, 7.0)]).unwrap();
    let first = rect.subdivide();
    for _ in 0..5 {
        assert_eq!(rect.subdivide(), first);
    }
    assert_eq!(first.0.bounds()[0].0, 0.0);
    assert_eq!(first.2.bounds()[0].1, 2.0);
    assert_eq!(first.1.bounds()[1], (-1.0, 1.0));
}

#[test]
fn test_child_radius_formula() {
    for parent in sample_rects() {
        let axis = parent.split_axis();
        let others: f64 = (0..parent.dim())
            .filter(|&d| d != axis)
            .map(|d| (parent.extent(d) / 2.0).powi(2))
            .sum();
        let expected = ((parent.extent(axis) / 3.0 / 2.0).powi(2) + others).sqrt();

        let (left, center, right) = parent.subdivide();
        for piece in [&left, &center, &right] {
            assert!(
                (piece.radius() - expected).abs() <= 1e-12 * parent.radius().max(1.0),
                "radius {} vs {}",
                piece.radius(),
                expected
            );
        }

        let unique_max = (0..parent.dim())
            .filter(|&d| d != axis)
            .all(|d| parent.extent(d) < parent.extent(axis));
        if unique_max && parent.extent(axis) > 0.0 {
            assert!(center.radius() < parent.radius());
        }
    }
}

#[test]
fn test_geometry_queries_are_stable() {
    for rect in sample_rects() {
        let c = rect.center();
        let r = rect.radius();
        for _ in 0..3 {
            assert_eq!(rect.center(), c);
            assert_eq!(rect.radius(), r);
        }
        assert!(rect.contains(&c));
    }
}

#[test]
fn test_pool_members_partition_domain_volume() {
    // Pieces never overlap and never leave gaps, so volumes add up.
    let domain = vec![(-2.0, 3.0), (-1.0, 4.0)];
    let eval = Evaluator::new(sphere, domain.clone()).unwrap();
    let pool = run(&eval, &domain, 8).unwrap();
    let volume: f64 = pool
        .iter()
        .map(|r| (0..r.dim()).map(|d| r.extent(d)).product::<f64>())
        .sum();
    assert!((volume - 25.0).abs() < 1e-9, "volume = {}", volume);
    for r in &pool {
        for (&(lo, hi), &(dlo, dhi)) in r.bounds().iter().zip(&domain) {
            assert!(dlo <= lo && hi <= dhi);
        }
    }
}
