use crate::region::model::{SmoothingMode, SmoothingSpec};
use crate::region::rect::WeightedRect;

/// Growth past the rectangle is unbounded by its size, so outside feathering is capped here.
pub const MAX_OUTSIDE_STEPS: u32 = 64;

/// Most feather steps `mode` can produce for a `width x height` rectangle without inverting.
pub fn max_feather_steps(mode: SmoothingMode, width: u32, height: u32, min_block: u32) -> u32 {
    let min_block = min_block.max(1);
    match mode {
        SmoothingMode::None => 0,
        SmoothingMode::Inside => (width / min_block / 2).min(height / min_block / 2),
        SmoothingMode::Outside => MAX_OUTSIDE_STEPS,
        SmoothingMode::Edge => (width / min_block + 1).min(height / min_block + 1),
    }
}

/// Expand `rect` into a sequence of nested rectangles fading towards `spec.edge_priority`.
///
/// Step `s` sits `min_block * (s + offset)` pixels outside the original bounds (negative values
/// inset). Inside feathering starts fully inset, edge feathering straddles the original edges,
/// outside feathering starts on them. The first step always carries the original priority and
/// the last one `edge_priority`. With fewer than two usable steps the rectangle is emitted as is.
pub fn smooth_region(
    out: &mut Vec<WeightedRect>,
    rect: WeightedRect,
    spec: &SmoothingSpec,
    min_block: u32,
) {
    let max_steps = max_feather_steps(spec.mode, rect.width(), rect.height(), min_block);
    let steps = spec.steps.min(max_steps);

    if spec.mode == SmoothingMode::None || steps < 2 {
        out.push(rect);
        return;
    }

    let steps = i64::from(steps);
    let priority = f64::from(rect.priority);
    let interval = (priority - f64::from(spec.edge_priority)) / (steps - 1) as f64;

    let offset = match spec.mode {
        SmoothingMode::Inside => -steps + 1,
        SmoothingMode::Edge => -(steps / 2) + 1,
        SmoothingMode::Outside | SmoothingMode::None => 0,
    };
    let block = i64::from(min_block);

    for step in 0..steps {
        let grow = block * (step + offset);
        out.extend(WeightedRect::clamped(
            i64::from(rect.top) - grow,
            i64::from(rect.bottom) + grow,
            i64::from(rect.left) - grow,
            i64::from(rect.right) + grow,
            priority - interval * step as f64,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/smooth.rs"]
mod tests;
