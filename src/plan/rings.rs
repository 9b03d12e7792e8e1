//! Center-focus ring generation.

use crate::foundation::core::FrameSize;
use crate::foundation::math::clamp_coord_f64;
use crate::plan::quantize::quantize_rings;
use crate::region::model::{CenterPoint, RingSpec};
use crate::region::rect::WeightedRect;

fn push(out: &mut Vec<WeightedRect>, top: i64, bottom: i64, left: f64, right: f64, priority: f64) {
    out.extend(WeightedRect::clamped(
        top,
        bottom,
        i64::from(clamp_coord_f64(left)),
        i64::from(clamp_coord_f64(right)),
        priority,
    ));
}

/// Rings fading from `priority` at the center down towards neutral at `ring.radius`.
///
/// Ring 1 (nearest the center) keeps the full priority; each further ring loses
/// `priority / steps`. With `ring.circular` each ring is approximated by a stack of horizontal
/// slabs sampled every half block.
pub fn build_inner_rings(
    out: &mut Vec<WeightedRect>,
    ring: &RingSpec,
    priority: f32,
    center: Option<CenterPoint>,
    frame: FrameSize,
    min_block: u32,
) {
    let radius = ring.radius;
    if radius == 0
        || frame.height < radius
        || frame.width < radius
        || radius < min_block / 2
        || priority == 0.0
        || ring.steps == 0
    {
        return;
    }
    let Some(q) = quantize_rings(radius, ring.steps, min_block) else {
        return;
    };

    let priority = f64::from(priority);
    let priority_interval = priority / f64::from(q.steps);
    let aspect = if ring.aspect_correct {
        frame.aspect()
    } else {
        1.0
    };

    let (default_x, default_y) = frame.center();
    let center = center.unwrap_or(CenterPoint {
        x: default_x,
        y: default_y,
    });
    let mid_x = f64::from(center.x);
    let mid_y = i64::from(center.y);
    let interval = i64::from(q.interval);

    for i in 1..=i64::from(q.steps) {
        let ring_priority = priority - priority_interval * (i - 1) as f64;
        let reach = interval * i;

        if !ring.circular {
            let reach_x = reach as f64 * aspect;
            push(
                out,
                mid_y - reach,
                mid_y + reach,
                mid_x - reach_x,
                mid_x + reach_x,
                ring_priority,
            );
            continue;
        }

        let sample = i64::from((min_block / 2).max(1));
        let mut x_off = sample;
        let mut prev_y_off = 0;
        while x_off < reach {
            let y_off = ((reach * reach - x_off * x_off) as f64).sqrt() as i64;
            if y_off <= 0 {
                break;
            }
            // Skip slabs identical in height to the previous sample.
            if y_off != prev_y_off {
                let slab_x = x_off as f64 * aspect;
                push(
                    out,
                    mid_y - y_off,
                    mid_y + y_off,
                    mid_x - slab_x,
                    mid_x + slab_x,
                    ring_priority,
                );
                prev_y_off = y_off;
            }
            x_off += sample;
        }
    }
}

/// Rings growing from neutral at `ring.radius` inside the frame edge up to `outer_priority`
/// at the edge itself.
///
/// Emits a neutral baseline, `steps - 1` intermediate rings, and a final full-frame rectangle.
pub fn build_outer_rings(
    out: &mut Vec<WeightedRect>,
    ring: &RingSpec,
    outer_priority: f32,
    frame: FrameSize,
    min_block: u32,
) {
    let radius = ring.radius;
    if radius == 0
        || frame.height / 2 < radius
        || frame.width / 2 < radius
        || radius < min_block
        || outer_priority == 0.0
        || ring.steps == 0
    {
        return;
    }
    let Some(q) = quantize_rings(radius, ring.steps, min_block) else {
        return;
    };

    let priority = f64::from(outer_priority);
    let priority_interval = priority / f64::from(q.steps);
    let aspect = if ring.aspect_correct {
        frame.aspect()
    } else {
        1.0
    };
    let width = i64::from(frame.width);
    let height = i64::from(frame.height);
    let radius = i64::from(radius);
    let interval = i64::from(q.interval);

    let mut inset_ring = |inset: i64, p: f64| {
        let inset_x = inset as f64 * aspect;
        push(
            out,
            inset,
            height - inset,
            inset_x,
            width as f64 - inset_x,
            p,
        );
    };

    inset_ring(radius, 0.0);
    for i in 1..i64::from(q.steps) {
        inset_ring(radius - interval * i, priority_interval * i as f64);
    }

    // Always finish on the frame edges, whatever the loop above rounded to.
    out.extend(WeightedRect::clamped(0, height, 0, width, priority));
}

#[cfg(test)]
#[path = "../../tests/unit/plan/rings.rs"]
mod tests;
