use crate::{
    animation::ease::Ease,
    foundation::core::Rgba8,
    foundation::error::{GuideError, GuideResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// One keyframe of a timed animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Milliseconds since the animation started.
    pub at_ms: u64,
    /// Value at `at_ms`.
    pub value: T,
    /// Easing applied toward the next keyframe.
    pub ease: Ease,
}

impl<T> Keyframe<T> {
    /// Build a keyframe.
    pub fn new(at_ms: u64, value: T, ease: Ease) -> Self {
        Self { at_ms, value, ease }
    }
}

/// Piecewise animation over validated, time-sorted keyframes.
///
/// Before the first key the first value holds; after the last key the last value holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Validate and wrap `keys`: at least one key, sorted by `at_ms`.
    pub fn new(keys: Vec<Keyframe<T>>) -> GuideResult<Self> {
        if keys.is_empty() {
            return Err(GuideError::validation(
                "keyframes must contain at least one key",
            ));
        }
        if !keys.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(GuideError::validation("keyframes must be sorted by time"));
        }
        Ok(Self { keys })
    }

    /// Time of the last key.
    pub fn duration_ms(&self) -> u64 {
        self.keys.last().map_or(0, |k| k.at_ms)
    }

    /// Sample the value `elapsed_ms` after the animation started.
    pub fn sample(&self, elapsed_ms: u64) -> T {
        let idx = self.keys.partition_point(|k| k.at_ms <= elapsed_ms);

        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at_ms.saturating_sub(a.at_ms);
        if denom == 0 {
            return a.value.clone();
        }

        let t = ((elapsed_ms - a.at_ms) as f64) / (denom as f64);
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}

/// A timed animation: a one-shot keyframe run or an endlessly looping one.
#[derive(Clone, Debug, PartialEq)]
pub enum Anim<T> {
    /// Plays once, then holds the final value.
    Once(Keyframes<T>),
    /// Restarts `inner` every `period_ms`.
    Loop {
        /// Animation replayed on each cycle.
        inner: Keyframes<T>,
        /// Cycle length; time past `inner`'s last key holds its final value.
        period_ms: u64,
    },
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    /// Animation that always returns `value`.
    pub fn constant(value: T) -> Self {
        Self::Once(Keyframes {
            keys: vec![Keyframe::new(0, value, Ease::Linear)],
        })
    }

    /// One-shot tween from `from` to `to` over `duration_ms`.
    pub fn tween(from: T, to: T, duration_ms: u64, ease: Ease) -> GuideResult<Self> {
        if duration_ms == 0 {
            return Err(GuideError::validation("tween duration must be > 0"));
        }
        Ok(Self::Once(Keyframes::new(vec![
            Keyframe::new(0, from, ease),
            Keyframe::new(duration_ms, to, ease),
        ])?))
    }

    /// Loop `inner` with the given period, which must cover all of its keys.
    pub fn looped(inner: Keyframes<T>, period_ms: u64) -> GuideResult<Self> {
        if period_ms == 0 {
            return Err(GuideError::validation("loop period must be > 0"));
        }
        if inner.duration_ms() > period_ms {
            return Err(GuideError::validation(format!(
                "loop period {period_ms}ms is shorter than its keyframes ({}ms)",
                inner.duration_ms()
            )));
        }
        Ok(Self::Loop { inner, period_ms })
    }

    /// Total running time, `None` for loops.
    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            Self::Once(kf) => Some(kf.duration_ms()),
            Self::Loop { .. } => None,
        }
    }

    /// Return `true` once a one-shot animation has reached its final value.
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        self.duration_ms().is_some_and(|d| elapsed_ms >= d)
    }

    /// Sample the value `elapsed_ms` after the animation started.
    pub fn sample(&self, elapsed_ms: u64) -> T {
        match self {
            Self::Once(kf) => kf.sample(elapsed_ms),
            Self::Loop { inner, period_ms } => inner.sample(elapsed_ms % period_ms),
        }
    }
}

/// Two channels driven by one clock so they can never drift apart.
///
/// Both channels are always sampled at the same elapsed time and started or stopped together.
#[derive(Clone, Debug, PartialEq)]
pub struct Lockstep<A, B> {
    /// First channel.
    pub a: Anim<A>,
    /// Second channel.
    pub b: Anim<B>,
}

impl<A, B> Lockstep<A, B>
where
    A: Lerp + Clone,
    B: Lerp + Clone,
{
    /// Pair two channels; both must share the same duration (or both loop with one period).
    pub fn new(a: Anim<A>, b: Anim<B>) -> GuideResult<Self> {
        let same_shape = match (&a, &b) {
            (Anim::Once(x), Anim::Once(y)) => x.duration_ms() == y.duration_ms(),
            (Anim::Loop { period_ms: p, .. }, Anim::Loop { period_ms: q, .. }) => p == q,
            _ => false,
        };
        if !same_shape {
            return Err(GuideError::validation(
                "lockstep channels must share duration and looping",
            ));
        }
        Ok(Self { a, b })
    }

    /// Sample both channels at the same elapsed time.
    pub fn sample(&self, elapsed_ms: u64) -> (A, B) {
        (self.a.sample(elapsed_ms), self.b.sample(elapsed_ms))
    }

    /// Return `true` once both one-shot channels have finished.
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        self.a.is_finished(elapsed_ms) && self.b.is_finished(elapsed_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
