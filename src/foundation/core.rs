use crate::foundation::error::{RoiError, RoiResult};

pub use kurbo::{Affine, Point, Vec2};

/// Largest coordinate an encoder region may reach, on either axis.
pub const MAX_COORD: u32 = 16384;

/// Smallest block an encoder can weight independently (H.264 macroblock).
pub const DEFAULT_MIN_BLOCK: u32 = 16;

/// Plans with more rectangles than this are likely to be truncated by encoders.
pub const MAX_RECOMMENDED_REGIONS: usize = 256;

/// Frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> RoiResult<Self> {
        if width == 0 || height == 0 {
            return Err(RoiError::validation("frame width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center of the frame, rounded down.
    pub fn center(self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// `width / height`, or 1.0 for an empty frame.
    pub fn aspect(self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Placement of a movable, scalable item on the frame.
///
/// The item occupies the unit square `[0,1]x[0,1]` in local space, so `size` is its on-screen
/// extent in pixels and `anchor` is the pivot expressed in unit-square coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemTransform {
    /// Where the anchor lands on the frame.
    pub translate: Vec2,
    #[serde(default)]
    pub rotation_rad: f64,
    /// Item extent in pixels.
    pub size: Vec2,
    #[serde(default)]
    pub anchor: Vec2, // pivot in unit-square space
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            size: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl ItemTransform {
    /// Affine mapping the unit square onto the item's on-screen quad.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_size = Affine::scale_non_uniform(self.size.x, self.size.y);
        let t_unanchor = Affine::translate(-self.anchor);

        // T(translate) * R(rot) * S(size) * T(-anchor)
        t_translate * t_rotate * t_size * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
