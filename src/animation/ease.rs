/// Timing curve applied to normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`, the platform's stock ease-in-out timing.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Map progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
                }
            }
            Self::EaseInOut => cubic_bezier((0.42, 0.0), (0.58, 1.0), t),
        }
    }
}

/// Solve a CSS-style cubic bezier with endpoints `(0,0)` and `(1,1)` for `x = t`.
///
/// `p1.0` and `p2.0` must lie in `[0, 1]` so x is monotonic in the curve parameter.
fn cubic_bezier(p1: (f64, f64), p2: (f64, f64), t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let coord = |a: f64, b: f64, s: f64| {
        let u = 1.0 - s;
        3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
    };

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..52 {
        let mid = 0.5 * (lo + hi);
        if coord(p1.0, p2.0, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    coord(p1.1, p2.1, 0.5 * (lo + hi))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
