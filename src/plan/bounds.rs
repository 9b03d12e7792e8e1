use crate::foundation::core::{Affine, MAX_COORD, Point};
use crate::region::rect::WeightedRect;

const UNIT_QUAD: [Point; 4] = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(0.0, 1.0),
    Point::new(1.0, 1.0),
];

/// Axis-aligned bounds of the unit square pushed through `transform`.
///
/// Corners are clamped to non-negative coordinates before taking extrema, so anything left of
/// or above the frame collapses onto its edge. The result may be empty; callers discard it when
/// [`is_degenerate_bounds`] holds or it is otherwise invalid.
pub fn resolve_quad_bounds(transform: Affine, priority: f32) -> WeightedRect {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    for corner in UNIT_QUAD {
        let p = transform * corner;
        let x = p.x.max(0.0);
        let y = p.y.max(0.0);
        min = Point::new(min.x.min(x), min.y.min(y));
        max = Point::new(max.x.max(x), max.y.max(y));
    }

    WeightedRect {
        top: to_coord(min.y),
        bottom: to_coord(max.y),
        left: to_coord(min.x),
        right: to_coord(max.x),
        priority: priority.clamp(-1.0, 1.0),
    }
}

/// Bounds that end on the top or left frame edge cover nothing visible.
pub fn is_degenerate_bounds(rect: &WeightedRect) -> bool {
    rect.bottom == 0 || rect.right == 0
}

fn to_coord(v: f64) -> u32 {
    // NaN maps to 0, which the degenerate check then rejects.
    (v as u32).min(MAX_COORD)
}

#[cfg(test)]
#[path = "../../tests/unit/plan/bounds.rs"]
mod tests;
