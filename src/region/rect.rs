use crate::foundation::core::MAX_COORD;
use crate::foundation::math::{clamp_coord, clamp_priority};

/// One planned encoder region: an axis-aligned pixel rectangle with a priority weight.
///
/// Emitted rectangles always satisfy `left < right <= MAX_COORD`, `top < bottom <= MAX_COORD`
/// and `priority` in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeightedRect {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
    /// Positive values ask for more bits, negative for fewer.
    pub priority: f32,
}

impl WeightedRect {
    pub fn new(top: u32, bottom: u32, left: u32, right: u32, priority: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            priority,
        }
    }

    /// Clamp signed bounds and priority into range, discarding empty results.
    pub(crate) fn clamped(top: i64, bottom: i64, left: i64, right: i64, priority: f64) -> Option<Self> {
        let rect = Self {
            top: clamp_coord(top),
            bottom: clamp_coord(bottom),
            left: clamp_coord(left),
            right: clamp_coord(right),
            priority: clamp_priority(priority),
        };
        rect.is_valid().then_some(rect)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Bounds and priority are within the ranges an encoder accepts.
    pub fn is_valid(&self) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= MAX_COORD
            && self.bottom <= MAX_COORD
            && (-1.0..=1.0).contains(&self.priority)
    }

    /// Half-open containment test: `left <= x < right`, `top <= y < bottom`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }
}

/// How overlapping rectangles in a plan resolve to one priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapRule {
    /// The earliest rectangle in the list takes precedence (front-most).
    #[default]
    FirstWins,
    /// The latest rectangle in the list takes precedence.
    LastWins,
}

impl OverlapRule {
    /// Priority at pixel `(x, y)` under this rule, or `None` if no rectangle covers it.
    pub fn priority_at(self, rects: &[WeightedRect], x: u32, y: u32) -> Option<f32> {
        let hit = |r: &&WeightedRect| r.contains(x, y);
        let found = match self {
            Self::FirstWins => rects.iter().find(hit),
            Self::LastWins => rects.iter().rev().find(hit),
        };
        found.map(|r| r.priority)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/region/rect.rs"]
mod tests;
