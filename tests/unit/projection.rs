use super::*;

const EPS: f64 = 1e-6;

fn assert_close(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

fn us_bounds() -> CropBounds {
    CropBounds::new(2633.0, 1385.0, 49.0, -124.7, 25.1, -66.9).unwrap()
}

fn chicago_bounds() -> CropBounds {
    CropBounds::new(1115.0, 829.0, 42.7, -89.1, 41.0, -86.1).unwrap()
}

#[test]
fn north_west_corner_is_origin_for_cropped_maps() {
    for bounds in [us_bounds(), chicago_bounds()] {
        let p = Projection::calibrate(bounds);
        assert_close(p.project(bounds.north, bounds.west), 0.0, 0.0);
    }
}

#[test]
fn north_west_corner_is_origin_for_whole_world_at_minus_180() {
    let bounds = CropBounds::new(2048.0, 2048.0, 85.05, -180.0, -85.05, 180.0).unwrap();
    let p = Projection::calibrate(bounds);
    assert_close(p.project(85.05, -180.0), 0.0, 0.0);
    assert_eq!(p.world_size(), (2048.0, 2048.0));
}

#[test]
fn whole_world_equator_meridian_near_center() {
    let bounds = CropBounds::new(2048.0, 2048.0, 85.05, -180.0, -85.05, 180.0).unwrap();
    let p = Projection::calibrate(bounds);
    let c = p.project(0.0, 0.0);
    assert!((c.x - 1024.0).abs() < EPS);
    // 85.05 is just short of the square-world limit, so the equator sits a hair above center.
    assert!((c.y - 1023.925_570_705).abs() < EPS, "y = {}", c.y);
}

#[test]
fn whole_world_x_anchor_doubles_west_residual() {
    // Literal anchoring: when west is not exactly -180 the x residual is doubled, not removed.
    let bounds = CropBounds::new(2048.0, 2048.0, 85.05, -179.95, -85.05, 180.0).unwrap();
    let p = Projection::calibrate(bounds);
    let expected_x = 2.0 * (0.05 * 2048.0 / 360.0);
    assert_close(p.project(85.05, -179.95), expected_x, 0.0);
}

#[test]
fn cropped_x_spans_image_width() {
    let bounds = us_bounds();
    let p = Projection::calibrate(bounds);
    let se = p.project(bounds.south, bounds.east);
    assert!((se.x - bounds.width).abs() < EPS, "x = {}", se.x);
}

#[test]
fn cropped_y_scales_by_world_aspect() {
    // y is driven by the world width, so the south edge lands at height * full_w / full_h.
    let bounds = chicago_bounds();
    let p = Projection::calibrate(bounds);
    let (full_w, full_h) = p.world_size();
    let se = p.project(bounds.south, bounds.east);
    assert!((se.y - bounds.height * full_w / full_h).abs() < EPS);
    assert!((se.y - 848.300_104_623_973_3).abs() < EPS, "y = {}", se.y);
}

#[test]
fn chicago_grid_cell_regression() {
    let p = Projection::calibrate(chicago_bounds());
    assert_close(
        p.project(41.531_25, -87.093_75),
        745.656_25,
        585.615_219_483_384_9,
    );
    assert_close(
        p.project(41.468_75, -87.031_25),
        768.885_416_666_664_2,
        616.630_630_643_921_9,
    );
}

#[test]
fn calibration_outputs_for_us_map() {
    let p = Projection::calibrate(us_bounds());
    let (full_w, full_h) = p.world_size();
    assert!((full_w - 16_399.307_958_477_51).abs() < 1e-6);
    assert!((full_h - 16_388.160_681_493_984).abs() < 1e-6);
    let (x_off, y_off) = p.offsets();
    assert!((x_off - 2_519.115_916_955_018).abs() < 1e-6);
    assert!((y_off - 5_626.311_368_760_351).abs() < 1e-6);
    assert_eq!(p.bounds(), us_bounds());
}

#[test]
fn projection_is_monotonic_in_both_axes() {
    let p = Projection::calibrate(us_bounds());
    let a = p.project(40.0, -100.0);
    let east = p.project(40.0, -99.0);
    let south = p.project(39.0, -100.0);
    assert!(east.x > a.x);
    assert_eq!(east.y, a.y);
    assert!(south.y > a.y);
    assert_eq!(south.x, a.x);
}

#[test]
fn whole_world_map_with_pole_edges_projects_finite_points() {
    let p = Projection::calibrate(
        CropBounds::new(2047.0, 2042.0, 90.0, -180.0, -90.0, 180.0).unwrap(),
    );
    let nw = p.project(90.0, -180.0);
    assert!(nw.x.abs() < EPS && nw.y.abs() < EPS, "{nw:?}");
    let center = p.project(0.0, 0.0);
    assert!(center.x.is_finite() && center.y.is_finite());
    assert!((center.x - 1023.5).abs() < EPS);
}
