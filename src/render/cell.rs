//! Geographic cell outlines in pixel space.

use kurbo::{BezPath, Point};

use crate::projection::Projection;

/// Projected corners of a square geographic cell, clockwise from top-left:
/// top-left, top-right, bottom-right, bottom-left.
///
/// Each corner goes through the projection on its own, so the north and south edges
/// land at their true Mercator rows rather than at a linear offset from the center.
pub fn cell_corners(
    projection: &Projection,
    latitude: f64,
    longitude: f64,
    width: f64,
) -> [Point; 4] {
    let half = width / 2.0;
    let (north, south) = (latitude + half, latitude - half);
    let (west, east) = (longitude - half, longitude + half);
    [
        projection.project(north, west),
        projection.project(north, east),
        projection.project(south, east),
        projection.project(south, west),
    ]
}

/// Truncate toward zero onto the integer pixel grid.
pub fn snap_to_pixel(p: Point) -> Point {
    Point::new(p.x.trunc(), p.y.trunc())
}

/// Closed polygon through the pixel-snapped corners, in the given order.
pub fn cell_path(corners: &[Point; 4]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(snap_to_pixel(corners[0]));
    for &c in &corners[1..] {
        path.line_to(snap_to_pixel(c));
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/cell.rs"]
mod tests;
