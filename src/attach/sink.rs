use crate::foundation::error::RoiResult;
use crate::plan::planner::RegionPlan;
use crate::region::rect::{OverlapRule, WeightedRect};

/// An encoder that accepts region-of-interest rectangles.
///
/// Ordering contract: `add_roi` is called in plan order, front-most rectangle first.
pub trait RoiSink {
    /// Name used in logs.
    fn name(&self) -> &str;
    /// Drop every previously attached rectangle.
    fn clear_rois(&mut self);
    /// Whether rectangles are currently attached.
    fn has_rois(&self) -> bool;
    /// Attach one rectangle.
    fn add_roi(&mut self, roi: &WeightedRect) -> RoiResult<()>;
}

/// Outcome of [`attach_plan`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttachStats {
    /// Sinks that received the plan.
    pub attached: usize,
    /// Sinks skipped because they already carried regions.
    pub skipped: usize,
}

/// Replace the regions of every sink with `plan`.
///
/// All sinks are cleared first. Nothing is attached when `enabled` is false or the plan is
/// empty. A sink that already carries regions after clearing is assumed to be shared with an
/// earlier one (the same encoder behind two outputs) and is skipped.
#[tracing::instrument(skip(sinks, plan), fields(sinks = sinks.len(), rects = plan.len()))]
pub fn attach_plan(
    sinks: &mut [&mut dyn RoiSink],
    plan: &RegionPlan,
    enabled: bool,
) -> RoiResult<AttachStats> {
    for sink in sinks.iter_mut() {
        sink.clear_rois();
    }

    let mut stats = AttachStats::default();
    if !enabled || plan.is_empty() {
        return Ok(stats);
    }

    for sink in sinks.iter_mut() {
        if sink.has_rois() {
            stats.skipped += 1;
            continue;
        }
        tracing::debug!(encoder = sink.name(), "adding regions to encoder");
        for roi in plan {
            sink.add_roi(roi)?;
        }
        stats.attached += 1;
    }
    Ok(stats)
}

/// In-memory sink for tests and previews, resolving overlaps with an explicit rule.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRoiSink {
    name: String,
    rule: OverlapRule,
    rois: Vec<WeightedRect>,
}

impl InMemoryRoiSink {
    pub fn new(name: impl Into<String>, rule: OverlapRule) -> Self {
        Self {
            name: name.into(),
            rule,
            rois: Vec::new(),
        }
    }

    pub fn rois(&self) -> &[WeightedRect] {
        &self.rois
    }

    pub fn rule(&self) -> OverlapRule {
        self.rule
    }

    /// Effective priority at pixel `(x, y)`; uncovered pixels are neutral.
    pub fn priority_at(&self, x: u32, y: u32) -> f32 {
        self.rule.priority_at(&self.rois, x, y).unwrap_or(0.0)
    }
}

impl RoiSink for InMemoryRoiSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn clear_rois(&mut self) {
        self.rois.clear();
    }

    fn has_rois(&self) -> bool {
        !self.rois.is_empty()
    }

    fn add_roi(&mut self, roi: &WeightedRect) -> RoiResult<()> {
        self.rois.push(*roi);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/attach/sink.rs"]
mod tests;
