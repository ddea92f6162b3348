//! Planar geometry predicates used by the rasterizer.
//!
//! Coordinates are plain lon/lat degrees; at verification-grid scales the
//! footprints are small enough that planar tests are adequate.

use crate::bbox::BoundingBox;

/// A closed polygon ring given by its vertices in order.
///
/// The closing edge from the last vertex back to the first is implicit;
/// a duplicated final vertex is accepted and simply contributes a
/// zero-length edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<(f64, f64)>,
}

impl Ring {
    /// Creates a ring from `(lon, lat)` vertices.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns the vertices.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Tight bounding box of the vertices, or `None` for rings with no
    /// finite vertex.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied()).ok()
    }
}

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from the point and counts edge crossings.
/// Points exactly on an edge may land on either side; the rasterizer's
/// cell-level results do not depend on that knife-edge case. Rings with
/// fewer than 3 vertices contain nothing.
pub fn point_in_ring(x: f64, y: f64, ring: &Ring) -> bool {
    let poly = ring.points();
    let n = poly.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        let crosses = ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi);
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Orientation of the ordered triple (a, b, c):
/// positive for counter-clockwise, negative for clockwise, zero collinear.
fn orient(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}

/// True if segments `a1-a2` and `b1-b2` share any point, including
/// endpoint contact and collinear overlap.
pub fn segments_intersect(
    a1: (f64, f64),
    a2: (f64, f64),
    b1: (f64, f64),
    b2: (f64, f64),
) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}

/// True if an axis-aligned rectangle and a polygon ring share any area or
/// boundary point.
///
/// The overlap is non-empty exactly when a ring vertex lies in the
/// rectangle, a rectangle corner lies in the ring, or some ring edge
/// crosses some rectangle edge.
pub fn rect_intersects_ring(rect: &BoundingBox, ring: &Ring) -> bool {
    let poly = ring.points();
    if poly.len() < 3 {
        return false;
    }

    // Cheap reject on the ring's own extent.
    match ring.bbox() {
        Some(rb) if rb.overlaps(rect) => {}
        _ => return false,
    }

    if poly.iter().any(|&(x, y)| rect.contains(x, y)) {
        return true;
    }

    let corners = [
        (rect.lon_min, rect.lat_min),
        (rect.lon_max, rect.lat_min),
        (rect.lon_max, rect.lat_max),
        (rect.lon_min, rect.lat_max),
    ];
    if corners.iter().any(|&(x, y)| point_in_ring(x, y, ring)) {
        return true;
    }

    let n = poly.len();
    let mut j = n - 1;
    for i in 0..n {
        let (p1, p2) = (poly[j], poly[i]);
        for k in 0..4 {
            let (q1, q2) = (corners[k], corners[(k + 1) % 4]);
            if segments_intersect(p1, p2, q1, q2) {
                return true;
            }
        }
        j = i;
    }
    false
}
