/// Map `value` from `input` to `output` linearly, saturating outside `input`.
///
/// `input` may be given in either direction. A degenerate input range (`in0 == in1`) maps every
/// value to `output.0`. NaN maps to `output.0`; infinities saturate like any other
/// out-of-range value.
pub fn lerp_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    let span = in1 - in0;
    if span == 0.0 || value.is_nan() {
        return out0;
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

/// Normalized position of `value` inside `[lo, hi]`, clamped to `[0, 1]`.
pub fn unlerp_clamped(value: f64, lo: f64, hi: f64) -> f64 {
    lerp_clamped(value, (lo, hi), (0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
