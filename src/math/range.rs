/// Clamp `value` into `[-limit, limit]`
pub fn clamp_range(value: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    value.clamp(-limit, limit)
}

/// Snap `value` to exactly zero when its magnitude is below `threshold`
pub fn snap_below(value: f32, threshold: f32) -> f32 {
    if value.abs() < threshold {
        0.0
    } else {
        value
    }
}
