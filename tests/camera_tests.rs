use flockview::camera::{self, Camera};
use flockview::sprite;
use nannou::prelude::*;

fn window() -> Rect {
    Rect::from_w_h(720.0, 720.0)
}

#[test]
fn fit_matches_coverage_formula() {
    // xspan = yspan = 10, so zoom = 720 * 0.5 / 10
    let positions = [pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(0.0, 10.0)];
    let camera = Camera::fit(&positions, window(), 0.5);

    assert!((camera.zoom - 36.0).abs() < 1e-4);
}

#[test]
fn fit_uses_larger_span() {
    // xspan = 40, yspan = 10; the wider axis wins
    let positions = [pt2(-20.0, 0.0), pt2(20.0, 10.0)];
    let camera = Camera::fit(&positions, window(), 0.5);

    assert!((camera.zoom - 720.0 * 0.5 / 40.0).abs() < 1e-4);
}

#[test]
fn zoom_is_positive_and_finite_for_spread_flocks() {
    let positions = [pt2(-3.5, 2.0), pt2(7.25, -1.0), pt2(0.5, 9.75)];
    let camera = Camera::fit(&positions, window(), 0.5);

    assert!(camera.zoom.is_finite());
    assert!(camera.zoom > 0.0);
}

#[test]
fn zoom_is_invariant_under_uniform_translation() {
    let positions = [pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(0.0, 10.0)];
    let shifted: Vec<Point2> = positions
        .iter()
        .map(|&p| p + vec2(123.25, -55.5))
        .collect();

    let zoom_a = Camera::fit(&positions, window(), 0.5).zoom;
    let zoom_b = Camera::fit(&shifted, window(), 0.5).zoom;

    assert!((zoom_a - zoom_b).abs() < 1e-3);
}

#[test]
fn coincident_flock_yields_non_finite_zoom() {
    // Zero span on both axes divides by zero; the fit does not guard it
    let positions = [pt2(5.0, 5.0)];
    let camera = Camera::fit(&positions, window(), 0.5);

    assert!(!camera.zoom.is_finite());
}

#[test]
fn fit_centers_flock_on_window() {
    let positions = [pt2(100.0, 200.0), pt2(110.0, 200.0), pt2(105.0, 210.0)];
    let camera = Camera::fit(&positions, window(), 0.5);

    let center = camera.world_to_screen(camera::centroid(&positions), window());
    assert!(center.x.abs() < 1e-3);
    assert!(center.y.abs() < 1e-3);
}

#[test]
fn world_to_screen_scales_distances_by_zoom() {
    let positions = [pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(0.0, 10.0)];
    let camera = Camera::fit(&positions, window(), 0.5);

    let a = camera.world_to_screen(positions[0], window());
    let b = camera.world_to_screen(positions[1], window());

    let world_distance = positions[0].distance(positions[1]);
    assert!((a.distance(b) - world_distance * camera.zoom).abs() < 1e-2);
}

#[test]
fn centroid_is_a_proper_xy_pair() {
    let positions = [pt2(0.0, 6.0), pt2(2.0, 0.0), pt2(4.0, 0.0)];
    let mean = camera::centroid(&positions);

    assert!((mean.x - 2.0).abs() < 1e-6);
    assert!((mean.y - 2.0).abs() < 1e-6);
}

#[test]
fn placements_round_trip_under_identity_transform() {
    let positions = vec![pt2(3.0, -4.0), pt2(0.0, 0.0), pt2(17.5, 42.25)];

    let rects = sprite::placements(&positions, sprite::arrow_wh());
    assert_eq!(rects.len(), positions.len());

    let recovered = sprite::placement_positions(&rects);
    for (original, recovered) in positions.iter().zip(&recovered) {
        assert!((original.x - recovered.x).abs() < 1e-5);
        assert!((original.y - recovered.y).abs() < 1e-5);
    }
}

#[test]
fn arrow_points_fit_the_declared_bounding_size() {
    let wh = sprite::arrow_wh();

    for p in sprite::arrow_points(wh.x / 2.0) {
        assert!(p.x.abs() <= wh.x / 2.0 + 1e-6);
        assert!(p.y.abs() <= wh.y / 2.0 + 1e-6);
    }
}
