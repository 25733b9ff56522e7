/// Cubic ease-in-out on \[0, 1\].
///
/// Accelerates over the first half and decelerates over the second:
/// `e(0) = 0`, `e(0.5) = 0.5`, `e(1) = 1`. Inputs outside the unit range are
/// clamped first so callers can pass raw progress values.
#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Fraction of `span` covered by `value - start`, clamped to \[0, 1\].
#[inline]
pub fn local_progress(value: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span <= 0.0 {
        return 1.0;
    }
    ((value - start) / span).clamp(0.0, 1.0)
}
