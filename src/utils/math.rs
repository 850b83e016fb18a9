/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed smallest difference `to - from` in degrees, in (-180, 180].
#[inline]
pub fn heading_difference(from: f64, to: f64) -> f64 {
    let diff = wrap_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// First-order approach of `current` toward `target`.
#[inline]
pub fn relax(current: f64, target: f64, gain: f64) -> f64 {
    current + (target - current) * gain
}
