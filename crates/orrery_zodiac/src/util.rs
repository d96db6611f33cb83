//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Reduces modulo 360 and adds 360 when negative. A result that rounds
/// to 360.0 is folded back to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
