use crate::foundation::core::MAX_COORD;

/// Clamp a signed pixel offset into `[0, MAX_COORD]`.
pub(crate) fn clamp_coord(v: i64) -> u32 {
    v.clamp(0, i64::from(MAX_COORD)) as u32
}

/// Truncate a float coordinate toward zero and clamp it like [`clamp_coord`].
pub(crate) fn clamp_coord_f64(v: f64) -> u32 {
    // `as` saturates and maps NaN to 0.
    clamp_coord(v as i64)
}

/// Clamp a priority into `[-1, 1]`; NaN becomes neutral.
pub(crate) fn clamp_priority(p: f64) -> f32 {
    if p.is_nan() {
        return 0.0;
    }
    (p as f32).clamp(-1.0, 1.0)
}

/// Round `v` to the nearest multiple of `m` (halves away from zero).
pub(crate) fn round_to_multiple(v: u32, m: u32) -> u32 {
    if m == 0 {
        return v;
    }
    let q = (f64::from(v) / f64::from(m)).round() as u32;
    q.saturating_mul(m)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
