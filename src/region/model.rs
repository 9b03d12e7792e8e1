use crate::foundation::core::Affine;
use crate::foundation::error::{RoiError, RoiResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Feathering mode applied to rectangle-like regions.
pub enum SmoothingMode {
    /// Emit the rectangle unchanged.
    #[default]
    None,
    /// Shrink toward the rectangle's center.
    Inside,
    /// Grow outward from the rectangle's edges.
    Outside,
    /// Half inside, half outside.
    Edge,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Feathering parameters.
pub struct SmoothingSpec {
    #[serde(default)]
    pub mode: SmoothingMode,
    /// Number of feather rectangles, including the original.
    #[serde(default)]
    pub steps: u32,
    /// Priority reached by the last feather step.
    #[serde(default)]
    pub edge_priority: f32,
}

impl SmoothingSpec {
    /// Whether feathering changes anything for a region of the given priority.
    pub fn applies_to(&self, priority: f32) -> bool {
        self.mode != SmoothingMode::None && self.steps > 1 && self.edge_priority != priority
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One ring set (inner or outer) of a center-focus region.
pub struct RingSpec {
    /// Ring extent in pixels.
    #[serde(default)]
    pub radius: u32,
    #[serde(default)]
    pub steps: u32,
    /// Stretch horizontally by the frame aspect ratio.
    #[serde(default)]
    pub aspect_correct: bool,
    /// Approximate a disc with horizontal slabs. Only honored for inner rings.
    #[serde(default)]
    pub circular: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Pixel position of a configurable center point.
pub struct CenterPoint {
    pub x: u32,
    pub y: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fixed rectangle in frame pixels.
pub struct ManualRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub priority: f32,
    #[serde(default)]
    pub smoothing: SmoothingSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Region covering the bounding box of a transformed unit quad.
pub struct TransformRegion {
    /// Maps `[0,1]x[0,1]` into frame pixels.
    pub quad_transform: Affine,
    pub priority: f32,
    #[serde(default)]
    pub smoothing: SmoothingSpec,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Region following a movable item, resolved through a [`crate::TransformProvider`] at plan time.
pub struct ItemRegion {
    pub item_id: i64,
    /// Display name; not used for lookup.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item_name: String,
    pub priority: f32,
    #[serde(default)]
    pub smoothing: SmoothingSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Concentric rings around a center point: priority fades out to `inner.radius`, then
/// grows from neutral at `outer.radius` to `outer_priority` at the frame edge.
pub struct CenterFocusRegion {
    #[serde(default)]
    pub inner: RingSpec,
    #[serde(default)]
    pub outer: RingSpec,
    /// Defaults to the frame center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<CenterPoint>,
    pub priority: f32,
    #[serde(default)]
    pub outer_priority: f32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A user-authored region, before planning.
pub enum RegionDescriptor {
    /// Fixed rectangle.
    Manual(ManualRegion),
    /// Explicit unit-quad transform.
    Transform(TransformRegion),
    /// Transform looked up by item id.
    Item(ItemRegion),
    /// Inner/outer ring set.
    CenterFocus(CenterFocusRegion),
}

impl RegionDescriptor {
    /// Primary priority of the region.
    pub fn priority(&self) -> f32 {
        match self {
            Self::Manual(r) => r.priority,
            Self::Transform(r) => r.priority,
            Self::Item(r) => r.priority,
            Self::CenterFocus(r) => r.priority,
        }
    }

    /// Check that every priority is finite and within `[-1, 1]`, and transforms are finite.
    pub fn validate(&self) -> RoiResult<()> {
        validate_priority("priority", self.priority())?;
        match self {
            Self::Manual(r) => validate_priority("edge_priority", r.smoothing.edge_priority),
            Self::Transform(r) => {
                if !r.quad_transform.is_finite() {
                    return Err(RoiError::validation("quad_transform must be finite"));
                }
                validate_priority("edge_priority", r.smoothing.edge_priority)
            }
            Self::Item(r) => validate_priority("edge_priority", r.smoothing.edge_priority),
            Self::CenterFocus(r) => validate_priority("outer_priority", r.outer_priority),
        }
    }
}

fn validate_priority(field: &str, v: f32) -> RoiResult<()> {
    if !v.is_finite() || !(-1.0..=1.0).contains(&v) {
        return Err(RoiError::validation(format!(
            "{field} must be within [-1, 1], got {v}"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A region plus the caller-owned enabled flag.
pub struct RegionEntry {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    pub region: RegionDescriptor,
}

impl RegionEntry {
    pub fn enabled(region: RegionDescriptor) -> Self {
        Self {
            enabled: true,
            region,
        }
    }

    pub fn disabled(region: RegionDescriptor) -> Self {
        Self {
            enabled: false,
            region,
        }
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
#[path = "../../tests/unit/region/model.rs"]
mod tests;
