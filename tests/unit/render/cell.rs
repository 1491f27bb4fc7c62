use super::*;
use crate::foundation::core::CropBounds;
use kurbo::PathEl;

fn us_map() -> Projection {
    Projection::calibrate(CropBounds::new(2633.0, 1385.0, 49.0, -124.7, 25.1, -66.9).unwrap())
}

fn chicago() -> Projection {
    Projection::calibrate(CropBounds::new(1115.0, 829.0, 42.7, -89.1, 41.0, -86.1).unwrap())
}

#[test]
fn corners_are_clockwise_from_top_left() {
    let [tl, tr, br, bl] = cell_corners(&chicago(), 41.5, -87.0625, 0.0625);
    assert!(tl.x < tr.x && tl.y == tr.y);
    assert!(br.x == tr.x && br.y > tr.y);
    assert!(bl.x == tl.x && bl.y == br.y);
}

#[test]
fn corners_match_direct_projection() {
    let p = chicago();
    let [tl, _, br, _] = cell_corners(&p, 41.5, -87.0625, 0.0625);
    assert!((tl.x - 745.65625).abs() < 1e-9);
    assert!((tl.y - 585.6152194833849).abs() < 1e-6);
    assert!((br.x - 768.8854166666642).abs() < 1e-6);
    assert!((br.y - 616.6306306439219).abs() < 1e-6);
}

#[test]
fn wide_cells_are_not_centered_rectangles() {
    let p = us_map();
    let center = p.project(60.0, -100.0);
    let [tl, tr, br, bl] = cell_corners(&p, 60.0, -100.0, 10.0);

    let north_half = center.y - tl.y;
    let south_half = bl.y - center.y;
    assert!(
        north_half - south_half > 50.0,
        "north {north_half} south {south_half}"
    );
    assert_eq!(tl.y, tr.y);
    assert_eq!(bl.y, br.y);
}

#[test]
fn path_uses_truncated_corners() {
    let corners = [
        Point::new(10.9, 20.2),
        Point::new(30.99, 20.2),
        Point::new(30.99, 40.7),
        Point::new(10.9, 40.7),
    ];
    let got: Vec<PathEl> = cell_path(&corners).elements().to_vec();
    assert_eq!(
        got,
        vec![
            PathEl::MoveTo(Point::new(10.0, 20.0)),
            PathEl::LineTo(Point::new(30.0, 20.0)),
            PathEl::LineTo(Point::new(30.0, 40.0)),
            PathEl::LineTo(Point::new(10.0, 40.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn snapping_truncates_toward_zero() {
    assert_eq!(snap_to_pixel(Point::new(-0.7, 2.9)), Point::new(0.0, 2.0));
}
