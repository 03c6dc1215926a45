use approx::assert_abs_diff_eq;
use spline_core::SplineError;
use spline_curve::{basis_for, build_geometry, evaluate, CurveSampler, CurveType, RebuildStatus};
use spline_math::{DVec3, Point3};
use spline_points::{PointArena, PointId, PointSource};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn zigzag() -> Vec<Point3> {
    vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 1.0, 0.0),
        dvec3(2.0, 0.0, 0.5),
        dvec3(3.0, 1.5, 0.0),
        dvec3(4.0, 0.0, -0.5),
        dvec3(5.0, 1.0, 0.0),
    ]
}

fn setup(positions: &[Point3]) -> (PointArena, Vec<PointId>) {
    let mut arena = PointArena::new();
    let ids = arena.create_points(positions);
    (arena, ids)
}

#[test]
fn test_scenario_bezier_three_points() {
    let (arena, ids) = setup(&[dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0), dvec3(2.0, 0.0, 0.0)]);
    let mut sampler = CurveSampler::new();

    let status = sampler.rebuild(CurveType::Bezier, &ids, &arena, 3).unwrap();
    assert_eq!(status, RebuildStatus::Rebuilt);
    assert_eq!(sampler.segment_count(), 1);

    let samples = sampler.samples();
    assert_eq!(samples.len(), 3);
    assert_abs_diff_eq!(samples[0], dvec3(0.5, 0.5, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(samples[1], dvec3(1.0, 0.75, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(samples[2], dvec3(1.5, 0.5, 0.0), epsilon = 1e-12);
}

#[test]
fn test_two_points_give_empty_buffer_for_every_type() {
    let (arena, ids) = setup(&[DVec3::ZERO, DVec3::X]);
    for ty in CurveType::ALL {
        let mut sampler = CurveSampler::new();
        let err = sampler.rebuild(ty, &ids, &arena, 10).unwrap_err();
        assert!(matches!(err, SplineError::Configuration(_)));
        assert!(sampler.samples().is_empty());
    }
}

#[test]
fn test_bspline_with_three_points_is_undefined() {
    let (arena, ids) = setup(&zigzag()[..3]);
    let mut sampler = CurveSampler::new();
    let err = sampler.rebuild(CurveType::BSpline, &ids, &arena, 10).unwrap_err();
    assert!(matches!(err, SplineError::Configuration(_)));
    assert!(sampler.samples().is_empty());
}

#[test]
fn test_buffer_length() {
    let (arena, ids) = setup(&zigzag());
    let mut sampler = CurveSampler::new();
    for (ty, segments) in [
        (CurveType::Bezier, 4),
        (CurveType::CatmullRom, 5),
        (CurveType::BSpline, 3),
    ] {
        sampler.rebuild(ty, &ids, &arena, 7).unwrap();
        assert_eq!(sampler.segment_count(), segments);
        assert_eq!(sampler.samples().len(), 7 * segments);
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let (arena, ids) = setup(&zigzag());
    for ty in CurveType::ALL {
        let mut a = CurveSampler::new();
        let mut b = CurveSampler::new();
        a.rebuild(ty, &ids, &arena, 12).unwrap();
        b.rebuild(ty, &ids, &arena, 12).unwrap();
        b.invalidate();
        b.rebuild(ty, &ids, &arena, 12).unwrap();
        assert_eq!(a.samples(), b.samples());
    }
}

#[test]
fn test_segment_joins_are_continuous() {
    let positions = zigzag();
    let (arena, ids) = setup(&positions);
    let n = 9;

    for ty in CurveType::ALL {
        let basis = basis_for(ty);
        let mut sampler = CurveSampler::new();
        sampler.rebuild(ty, &ids, &arena, n).unwrap();
        let samples = sampler.samples();

        for j in 0..sampler.segment_count() - 1 {
            // The step a non-final segment never takes is supplied by the
            // next segment's first sample.
            let g = build_geometry(&basis, &positions, j).unwrap();
            assert_abs_diff_eq!(evaluate(&g, 1.0), samples[(j + 1) * n], epsilon = 1e-12);

            let last_of_j = samples[(j + 1) * n - 1];
            assert_abs_diff_eq!(evaluate(&g, (n - 1) as f64 / n as f64), last_of_j, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_last_sample_is_terminal_point() {
    let positions = zigzag();
    let (arena, ids) = setup(&positions);
    let mut sampler = CurveSampler::new();

    sampler.rebuild(CurveType::CatmullRom, &ids, &arena, 20).unwrap();
    assert_abs_diff_eq!(*sampler.samples().last().unwrap(), positions[5], epsilon = 1e-12);
    assert_abs_diff_eq!(sampler.samples()[0], positions[0], epsilon = 1e-12);

    sampler.rebuild(CurveType::Bezier, &ids, &arena, 20).unwrap();
    let end = 0.5 * (positions[4] + positions[5]);
    assert_abs_diff_eq!(*sampler.samples().last().unwrap(), end, epsilon = 1e-12);
}

#[test]
fn test_stale_handle_keeps_last_good_buffer() {
    let (mut arena, ids) = setup(&zigzag());
    let mut sampler = CurveSampler::new();
    sampler.rebuild(CurveType::BSpline, &ids, &arena, 5).unwrap();
    let good = sampler.samples().to_vec();

    arena.destroy(ids[4]);
    let err = sampler.rebuild(CurveType::BSpline, &ids, &arena, 5).unwrap_err();
    assert_eq!(err, SplineError::InvalidWindow { segment: 1, index: 4 });
    assert_eq!(sampler.samples(), good.as_slice());

    // Self-heals once the sequence no longer references the stale handle
    let repaired: Vec<PointId> = ids.iter().copied().filter(|&id| arena.is_live(id)).collect();
    let status = sampler.rebuild(CurveType::BSpline, &repaired, &arena, 5).unwrap();
    assert_eq!(status, RebuildStatus::Rebuilt);
    assert_eq!(sampler.samples().len(), 5 * 2);
}

#[test]
fn test_catmull_rom_boundary_window_checks_neighbor_taps() {
    let (mut arena, ids) = setup(&zigzag());
    let mut sampler = CurveSampler::new();

    // Point 3 is first read as the forward tap of segment 1
    arena.destroy(ids[3]);
    let err = sampler.rebuild(CurveType::CatmullRom, &ids, &arena, 4).unwrap_err();
    assert_eq!(err, SplineError::InvalidWindow { segment: 1, index: 3 });
    assert!(sampler.samples().is_empty());
}

#[test]
fn test_duplicate_handles_are_sampled() {
    let (arena, ids) = setup(&zigzag()[..4]);
    let mut seq = ids.clone();
    seq.push(ids[3]);

    let mut sampler = CurveSampler::new();
    sampler.rebuild(CurveType::Bezier, &seq, &arena, 4).unwrap();
    assert_eq!(sampler.samples().len(), 12);
    assert_abs_diff_eq!(*sampler.samples().last().unwrap(), arena.position_of(ids[3]).unwrap(), epsilon = 1e-12);
}
