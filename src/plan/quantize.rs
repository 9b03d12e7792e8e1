use crate::foundation::math::round_to_multiple;

/// Block-aligned ring spacing derived from a radius and a requested step count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingInterval {
    /// Distance between consecutive ring boundaries; always a multiple of the block size.
    pub interval: u32,
    /// Corrected number of rings, at least 1.
    pub steps: u32,
}

/// Snap `radius / steps` onto the block grid and recompute how many rings fit.
///
/// Returns `None` when any input is zero, so callers never divide by zero.
pub fn quantize_rings(radius: u32, steps: u32, min_block: u32) -> Option<RingInterval> {
    if radius == 0 || steps == 0 || min_block == 0 {
        return None;
    }

    let mut interval = radius / steps;
    let mut steps = steps;

    if interval < min_block {
        interval = min_block;
        steps = (radius / interval).max(1);
    } else if interval % min_block != 0 {
        interval = round_to_multiple(interval, min_block);
        steps = (radius.saturating_add(min_block) / interval).max(1);
    }

    Some(RingInterval { interval, steps })
}

#[cfg(test)]
#[path = "../../tests/unit/plan/quantize.rs"]
mod tests;
