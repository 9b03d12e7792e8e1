use crate::foundation::core::{Affine, DEFAULT_MIN_BLOCK, FrameSize, MAX_RECOMMENDED_REGIONS};
use crate::foundation::math::clamp_priority;
use crate::plan::bounds::{is_degenerate_bounds, resolve_quad_bounds};
use crate::plan::rings::{build_inner_rings, build_outer_rings};
use crate::plan::smooth::smooth_region;
use crate::region::model::{CenterFocusRegion, RegionDescriptor, RegionEntry, SmoothingSpec};
use crate::region::rect::WeightedRect;
use crate::region::transform::TransformProvider;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Ordered list of weighted rectangles produced by one planning call.
///
/// Earlier entries take precedence over later, overlapping ones.
pub struct RegionPlan {
    rects: Vec<WeightedRect>,
}

impl RegionPlan {
    pub fn rects(&self) -> &[WeightedRect] {
        &self.rects
    }

    pub fn into_rects(self) -> Vec<WeightedRect> {
        self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// More rectangles than encoders are expected to honor.
    pub fn exceeds_recommended(&self) -> bool {
        self.rects.len() > MAX_RECOMMENDED_REGIONS
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedRect> {
        self.rects.iter()
    }
}

impl From<Vec<WeightedRect>> for RegionPlan {
    fn from(rects: Vec<WeightedRect>) -> Self {
        Self { rects }
    }
}

impl<'a> IntoIterator for &'a RegionPlan {
    type Item = &'a WeightedRect;
    type IntoIter = std::slice::Iter<'a, WeightedRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

/// Turns region descriptors into encoder rectangles.
///
/// The planner is stateless apart from its block size: the same inputs always produce the same
/// plan. Malformed geometry never errors; it simply contributes no rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionPlanner {
    min_block: u32,
}

impl Default for RegionPlanner {
    fn default() -> Self {
        Self {
            min_block: DEFAULT_MIN_BLOCK,
        }
    }
}

impl RegionPlanner {
    /// Planner quantizing to `min_block` pixels (at least 1).
    pub fn new(min_block: u32) -> Self {
        Self {
            min_block: min_block.max(1),
        }
    }

    pub fn min_block(&self) -> u32 {
        self.min_block
    }

    /// Plan every enabled entry of `scene`, preserving input order.
    #[tracing::instrument(skip(self, regions, transforms), fields(regions = regions.len()))]
    pub fn plan(
        &self,
        scene: &str,
        regions: &[RegionEntry],
        frame: FrameSize,
        transforms: &dyn TransformProvider,
    ) -> RegionPlan {
        let mut rects = Vec::new();
        for (index, entry) in regions.iter().enumerate() {
            if !entry.enabled {
                tracing::trace!(index, "skipping disabled region");
                continue;
            }
            let before = rects.len();
            self.plan_region(scene, &entry.region, frame, transforms, &mut rects);
            if rects.len() == before {
                tracing::trace!(index, "region contributed no rectangles");
            }
        }

        let plan = RegionPlan::from(rects);
        if plan.exceeds_recommended() {
            tracing::warn!(
                count = plan.len(),
                limit = MAX_RECOMMENDED_REGIONS,
                "region plan exceeds the recommended rectangle count"
            );
        }
        plan
    }

    /// Append the rectangles of a single descriptor to `out`.
    pub fn plan_region(
        &self,
        scene: &str,
        region: &RegionDescriptor,
        frame: FrameSize,
        transforms: &dyn TransformProvider,
        out: &mut Vec<WeightedRect>,
    ) {
        match region {
            RegionDescriptor::Manual(m) => {
                let right = u64::from(m.x) + u64::from(m.width);
                let bottom = u64::from(m.y) + u64::from(m.height);
                if right == 0 || bottom == 0 {
                    return;
                }
                let Some(rect) = WeightedRect::clamped(
                    i64::from(m.y),
                    bottom as i64,
                    i64::from(m.x),
                    right as i64,
                    f64::from(m.priority),
                ) else {
                    return;
                };
                self.emit_rect(out, rect, &m.smoothing);
            }
            RegionDescriptor::Transform(t) => {
                self.emit_quad(out, t.quad_transform, t.priority, &t.smoothing);
            }
            RegionDescriptor::Item(item) => {
                let Some(transform) = transforms.quad_transform(scene, item.item_id) else {
                    tracing::trace!(item_id = item.item_id, "item missing or hidden");
                    return;
                };
                self.emit_quad(out, transform, item.priority, &item.smoothing);
            }
            RegionDescriptor::CenterFocus(c) => self.emit_center_focus(out, c, frame),
        }
    }

    fn emit_quad(
        &self,
        out: &mut Vec<WeightedRect>,
        transform: Affine,
        priority: f32,
        smoothing: &SmoothingSpec,
    ) {
        let rect = resolve_quad_bounds(transform, clamp_priority(f64::from(priority)));
        if is_degenerate_bounds(&rect) || !rect.is_valid() {
            return;
        }
        self.emit_rect(out, rect, smoothing);
    }

    fn emit_rect(&self, out: &mut Vec<WeightedRect>, rect: WeightedRect, smoothing: &SmoothingSpec) {
        if smoothing.applies_to(rect.priority) {
            smooth_region(out, rect, smoothing, self.min_block);
        } else {
            out.push(rect);
        }
    }

    fn emit_center_focus(&self, out: &mut Vec<WeightedRect>, c: &CenterFocusRegion, frame: FrameSize) {
        build_inner_rings(out, &c.inner, c.priority, c.center, frame, self.min_block);
        build_outer_rings(out, &c.outer, c.outer_priority, frame, self.min_block);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/planner.rs"]
mod tests;
