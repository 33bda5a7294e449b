//! Interpolation curves and blend combinators.
//!
//! An [`Interpolation`] maps a parameter `t` in `[0, 1]` to an interpolation factor, usually also
//! in `[0, 1]`. Curves are small `Copy` function objects that can be combined with [`Then`],
//! [`Mirror`], [`Blend`] and [`Clamped`], and applied to anything that implements [`Lerp`].
//!
//! # Examples
//!
//! ```
//! # use clg::{*, interp::*};
//! let curve = SmoothStep.then(EaseIn);
//! let pos = curve.interpolate(vec2(0.0, 0.0), vec2(10.0, 20.0), 0.5);
//! assert_eq!(pos, vec2(2.5, 5.0));
//! ```

use crate::{math, Float, Vector};

/// Linear interpolation between `from` and `to`.
///
/// # Examples
///
/// ```
/// # use clg::interp::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
/// assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
/// ```
#[inline]
pub fn lerp<T: Float>(from: T, to: T, t: T) -> T {
    from + (to - from) * t
}

/// Values that can be linearly interpolated with a factor of type `T`.
pub trait Lerp<T> {
    /// Interpolates between `self` (at `t = 0`) and `to` (at `t = 1`).
    ///
    /// `t` is not clamped, values outside of `[0, 1]` extrapolate.
    fn lerp(self, to: Self, t: T) -> Self;
}

impl Lerp<f32> for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp(self, to, t)
    }
}

impl Lerp<f64> for f64 {
    #[inline]
    fn lerp(self, to: Self, t: f64) -> Self {
        lerp(self, to, t)
    }
}

/// Element-wise interpolation.
impl<T: Float, const N: usize> Lerp<T> for Vector<T, N> {
    fn lerp(self, to: Self, t: T) -> Self {
        self.zip(to).map(|(a, b)| lerp(a, b, t))
    }
}

/// An interpolation curve.
///
/// Curves are generic over the float type they are evaluated with, so the same curve object can
/// be used with [`f32`] and [`f64`].
pub trait Interpolation {
    /// Evaluates the curve at `t`.
    fn apply<T: Float>(&self, t: T) -> T;

    /// Interpolates between `from` and `to`, using this curve to shape the factor `t`.
    fn interpolate<T: Float, V: Lerp<T>>(&self, from: V, to: V, t: T) -> V {
        from.lerp(to, self.apply(t))
    }

    /// Returns a curve that feeds the output of `self` into `next`.
    fn then<I: Interpolation>(self, next: I) -> Then<Self, I>
    where
        Self: Sized,
    {
        Then(self, next)
    }

    /// Returns a curve that evaluates `self` point-mirrored around `(0.5, 0.5)`.
    fn mirror(self) -> Mirror<Self>
    where
        Self: Sized,
    {
        Mirror(self)
    }

    /// Returns a curve that clamps its input to `[0, 1]` before evaluating `self`.
    fn clamped(self) -> Clamped<Self>
    where
        Self: Sized,
    {
        Clamped(self)
    }
}

impl<I: Interpolation + ?Sized> Interpolation for &I {
    fn apply<T: Float>(&self, t: T) -> T {
        (**self).apply(t)
    }
}

/// The identity curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear;

impl Interpolation for Linear {
    #[inline]
    fn apply<T: Float>(&self, t: T) -> T {
        t
    }
}

/// Hermite smoothstep: `3t² - 2t³`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothStep;

impl Interpolation for SmoothStep {
    fn apply<T: Float>(&self, t: T) -> T {
        t * t * (T::from_f64(3.0) - T::from_f64(2.0) * t)
    }
}

/// Ken Perlin's smootherstep: `6t⁵ - 15t⁴ + 10t³`.
///
/// Unlike [`SmoothStep`], its second derivative is also zero at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmootherStep;

impl Interpolation for SmootherStep {
    fn apply<T: Float>(&self, t: T) -> T {
        t * t * t * (t * (t * T::from_f64(6.0) - T::from_f64(15.0)) + T::from_f64(10.0))
    }
}

/// Quadratic ease-in: `t²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EaseIn;

impl Interpolation for EaseIn {
    fn apply<T: Float>(&self, t: T) -> T {
        t * t
    }
}

/// Quadratic ease-out: `1 - (1 - t)²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EaseOut;

impl Interpolation for EaseOut {
    fn apply<T: Float>(&self, t: T) -> T {
        EaseIn.mirror().apply(t)
    }
}

/// Jumps from 0 to 1 once `t` reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub threshold: f64,
}

impl Interpolation for Step {
    fn apply<T: Float>(&self, t: T) -> T {
        if t < T::from_f64(self.threshold) {
            T::ZERO
        } else {
            T::ONE
        }
    }
}

/// Applies `A`, then feeds its result into `B`.
///
/// Returned by [`Interpolation::then`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Then<A, B>(pub A, pub B);

impl<A: Interpolation, B: Interpolation> Interpolation for Then<A, B> {
    fn apply<T: Float>(&self, t: T) -> T {
        self.1.apply(self.0.apply(t))
    }
}

/// Evaluates `1 - i(1 - t)`, turning an ease-in curve into an ease-out curve and vice versa.
///
/// Returned by [`Interpolation::mirror`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror<I>(pub I);

impl<I: Interpolation> Interpolation for Mirror<I> {
    fn apply<T: Float>(&self, t: T) -> T {
        T::ONE - self.0.apply(T::ONE - t)
    }
}

/// Clamps the input to `[0, 1]` before evaluating the inner curve.
///
/// Returned by [`Interpolation::clamped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<I>(pub I);

impl<I: Interpolation> Interpolation for Clamped<I> {
    fn apply<T: Float>(&self, t: T) -> T {
        self.0.apply(math::saturate(t))
    }
}

/// Mixes the output of two curves with a fixed weight.
///
/// A `weight` of 0 yields `a`, a weight of 1 yields `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend<A, B> {
    pub a: A,
    pub b: B,
    pub weight: f64,
}

impl<A, B> Blend<A, B> {
    pub fn new(a: A, b: B, weight: f64) -> Self {
        Self { a, b, weight }
    }
}

impl<A: Interpolation, B: Interpolation> Interpolation for Blend<A, B> {
    fn apply<T: Float>(&self, t: T) -> T {
        lerp(self.a.apply(t), self.b.apply(t), T::from_f64(self.weight))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::vec3;

    use super::*;

    fn endpoints<I: Interpolation>(curve: I) {
        assert_relative_eq!(curve.apply(0.0), 0.0);
        assert_relative_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn curves_hit_endpoints() {
        endpoints(Linear);
        endpoints(SmoothStep);
        endpoints(SmootherStep);
        endpoints(EaseIn);
        endpoints(EaseOut);
        endpoints(Step { threshold: 0.5 });
        endpoints(SmoothStep.then(EaseOut));
        endpoints(EaseIn.mirror());
        endpoints(Blend::new(EaseIn, SmootherStep, 0.3));
        endpoints(&SmoothStep.clamped());
    }

    fn symmetric<I: Interpolation>(curve: I) {
        assert_relative_eq!(curve.apply(0.5), 0.5);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_abs_diff_eq!(curve.apply(t), 1.0 - curve.apply(1.0 - t), epsilon = 1e-12);
        }
    }

    #[test]
    fn symmetric_curves() {
        symmetric(Linear);
        symmetric(SmoothStep);
        symmetric(SmootherStep);
        symmetric(SmoothStep.then(SmootherStep).mirror().clamped());
    }

    #[test]
    fn ease() {
        assert_eq!(EaseIn.apply(0.5), 0.25);
        assert_eq!(EaseOut.apply(0.5), 0.75);
        assert_eq!(SmoothStep.apply(0.25f32), 0.15625);
        assert_eq!(Step { threshold: 0.5 }.apply(0.49), 0.0);
    }

    #[test]
    fn combinators() {
        let blend = Blend::new(Linear, EaseIn, 0.5);
        assert_eq!(blend.apply(0.5), 0.375);

        let chained = EaseIn.then(EaseIn);
        assert_eq!(chained.apply(0.5), 0.0625);

        let clamped = Linear.clamped();
        assert_eq!(clamped.apply(-1.0), 0.0);
        assert_eq!(clamped.apply(3.0), 1.0);
    }

    #[test]
    fn interpolate_vectors() {
        let from = vec3(0.0, 10.0, -4.0);
        let to = vec3(1.0, 20.0, 4.0);
        assert_eq!(Linear.interpolate(from, to, 0.5), vec3(0.5, 15.0, 0.0));
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(EaseIn.interpolate(2.0, 4.0, 0.5), 2.5);
    }
}
