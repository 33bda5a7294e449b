//! Scalar helpers: angle conversion and reduction, rounding, and bit twiddling.
//!
//! Angles are in radians unless a function says otherwise. The commonly used fractions of π are
//! associated constants of the [`Float`] trait (eg. [`Float::TWO_PI`]).

use crate::{Cast, Float};

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// # use approx::assert_relative_eq;
/// # use clg::math::*;
/// assert_relative_eq!(to_degrees(std::f64::consts::PI), 180.0);
/// ```
#[inline]
pub fn to_degrees<T: Float>(radians: T) -> T {
    (radians * T::from_f64(180.0)) / T::PI
}

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// # use approx::assert_relative_eq;
/// # use clg::math::*;
/// assert_relative_eq!(to_radians(180.0), std::f64::consts::PI);
/// ```
#[inline]
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Returns the clockwise rotation needed to get from the angle `from` to the angle `to`.
///
/// Both angles are expected to be in `[0, 2π)` (see [`clamp_radians`]). The result is in the same
/// range.
pub fn clockwise_distance<T: Float>(from: T, to: T) -> T {
    if from >= to {
        from - to
    } else {
        T::TWO_PI - (to - from)
    }
}

/// Clamps `value` to the range `[min, max]`.
///
/// Works with any [`PartialOrd`] type. If `value` is unordered with respect to both bounds (eg. a
/// NaN), `max` is returned.
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(clamp(5, 0, 3), 3);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp("b", "a", "c"), "b");
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value < max {
        value
    } else {
        max
    }
}

/// Clamps `value` to the unit range `[0, 1]`.
#[inline]
pub fn saturate<T: Float>(value: T) -> T {
    clamp(value, T::ZERO, T::ONE)
}

/// Reduces an angle in radians into the range `[0, 2π)`.
///
/// Angles that are already in range are returned unchanged.
///
/// # Examples
///
/// ```
/// # use approx::{assert_abs_diff_eq, assert_relative_eq};
/// # use clg::{math::*, Float};
/// assert_relative_eq!(clamp_radians(-f32::HALF_PI), f32::ONE_AND_HALF_PI);
/// assert_abs_diff_eq!(clamp_radians(5.0 * f32::PI), f32::PI, epsilon = 1e-6);
/// assert_eq!(clamp_radians(-f32::TWO_PI), 0.0);
/// ```
pub fn clamp_radians<T: Float>(radians: T) -> T {
    if radians >= T::TWO_PI {
        radians % T::TWO_PI
    } else if radians < T::ZERO {
        let wrapped = T::TWO_PI + radians % T::TWO_PI;
        // Multiples of 2π (and tiny negative angles) land exactly on the excluded upper bound.
        if wrapped >= T::TWO_PI {
            T::ZERO
        } else {
            wrapped
        }
    } else {
        radians
    }
}

/// Returns the shortest angular distance between two angles, in the range `[0, π]`.
///
/// The inputs may be any angle; they are reduced with [`clamp_radians`] first.
///
/// # Examples
///
/// ```
/// # use approx::{assert_abs_diff_eq, assert_relative_eq};
/// # use clg::{math::*, Float};
/// assert_abs_diff_eq!(abs_radial_distance(0.1, f64::TWO_PI - 0.1), 0.2, epsilon = 1e-12);
/// assert_relative_eq!(abs_radial_distance(f64::HALF_PI, -f64::HALF_PI), f64::PI);
/// ```
pub fn abs_radial_distance<T: Float>(lhs: T, rhs: T) -> T {
    let distance = (clamp_radians(lhs) - clamp_radians(rhs)).abs();
    if distance > T::PI {
        T::TWO_PI - distance
    } else {
        distance
    }
}

/// Rounds `number` to the nearest integer, rounding halfway cases away from zero.
///
/// Values outside of the range of [`i64`] saturate.
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(round_to_integer(2.5f32), 3);
/// assert_eq!(round_to_integer(-2.5f32), -3);
/// assert_eq!(round_to_integer(-2.4f64), -2);
/// ```
#[inline]
pub fn round_to_integer<T: Float + Cast<i64>>(number: T) -> i64 {
    let half = T::from_f64(0.5);
    let shifted = if number >= T::ZERO {
        number + half
    } else {
        number - half
    };
    shifted.cast()
}

/// Computes the remainder of `numerator / denominator`, with the quotient rounded to the nearest
/// integer.
///
/// Unlike the `%` operator (which truncates the quotient), the result lies in
/// `[-denominator / 2, denominator / 2]`.
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(remainder(5.0, 3.0), -1.0);
/// assert_eq!(5.0f64 % 3.0, 2.0);
/// assert_eq!(remainder(-7.0, 2.0), 1.0);
/// ```
pub fn remainder<T>(numerator: T, denominator: T) -> T
where
    T: Float + Cast<i64>,
    i64: Cast<T>,
{
    let quotient: T = round_to_integer(numerator / denominator).cast();
    numerator - quotient * denominator
}

/// Unsigned integers that can be rounded up to a power of two.
pub trait PowerOfTwo: Sized {
    /// Rounds `self` up to the nearest power of two.
    ///
    /// Powers of two are returned unchanged. Zero, as well as values larger than the largest
    /// representable power of two, wrap around to zero.
    fn round_up_to_power_of_two(self) -> Self;
}

macro_rules! power_of_two {
    ($($types:ty),+) => {
        $(
            impl PowerOfTwo for $types {
                fn round_up_to_power_of_two(self) -> Self {
                    let mut number = self.wrapping_sub(1);
                    let mut shift = 1;
                    while shift < <$types>::BITS {
                        number |= number >> shift;
                        shift *= 2;
                    }
                    number.wrapping_add(1)
                }
            }
        )+
    };
}
power_of_two!(u8, u16, u32, u64, u128, usize);

/// Rounds `number` up to the nearest power of two.
///
/// See [`PowerOfTwo::round_up_to_power_of_two`].
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(round_up_to_power_of_two(17u32), 32);
/// assert_eq!(round_up_to_power_of_two(64u32), 64);
/// assert_eq!(round_up_to_power_of_two(0u32), 0);
/// ```
#[inline]
pub fn round_up_to_power_of_two<T: PowerOfTwo>(number: T) -> T {
    number.round_up_to_power_of_two()
}

/// Types whose byte order can be reversed.
///
/// Floating-point values have the bytes of their bit pattern reversed, which is what is needed when
/// reading or writing data with a foreign endianness.
pub trait ByteSwap: Sized {
    fn byte_swap(self) -> Self;
}

macro_rules! byte_swap_int {
    ($($types:ty),+) => {
        $(
            impl ByteSwap for $types {
                #[inline]
                fn byte_swap(self) -> Self {
                    self.swap_bytes()
                }
            }
        )+
    };
}
byte_swap_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ByteSwap for f32 {
    #[inline]
    fn byte_swap(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl ByteSwap for f64 {
    #[inline]
    fn byte_swap(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Reverses the byte order of `value`.
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(byte_swap(0x11223344u32), 0x44332211);
/// assert_eq!(byte_swap(byte_swap(1.5f32)), 1.5);
/// ```
#[inline]
pub fn byte_swap<T: ByteSwap>(value: T) -> T {
    value.byte_swap()
}

/// Rounds `address` up to the next multiple of `alignment`.
///
/// # Panics
///
/// Panics if `alignment` is not a power of two.
///
/// # Examples
///
/// ```
/// # use clg::math::*;
/// assert_eq!(align_up(13, 8), 16);
/// assert_eq!(align_up(16, 8), 16);
/// ```
pub fn align_up(address: usize, alignment: usize) -> usize {
    assert!(
        alignment.is_power_of_two(),
        "alignment must be a power of two, got {alignment}"
    );
    let mask = alignment - 1;
    (address + mask) & !mask
}

/// Nudges `ptr` forward until its address is a multiple of `alignment` bytes.
///
/// The returned pointer is derived from `ptr`, it is up to the caller to make sure it still points
/// into the same allocation before dereferencing it.
///
/// # Panics
///
/// Panics if `alignment` is not a power of two.
pub fn align_pointer<T>(ptr: *const T, alignment: usize) -> *const T {
    let address = ptr as usize;
    let offset = align_up(address, alignment) - address;
    ptr.cast::<u8>().wrapping_add(offset).cast()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn degrees_radians() {
        assert_relative_eq!(to_degrees(f32::HALF_PI), 90.0);
        assert_relative_eq!(to_radians(270.0f64), f64::ONE_AND_HALF_PI);
        assert_relative_eq!(to_degrees(to_radians(33.0f64)), 33.0);
    }

    #[test]
    fn test_clockwise_distance() {
        assert_relative_eq!(clockwise_distance(1.0f32, 0.25), 0.75);
        assert_relative_eq!(clockwise_distance(0.25f32, 1.0), f32::TWO_PI - 0.75);
        assert_eq!(clockwise_distance(2.0f64, 2.0), 0.0);
    }

    #[test]
    fn test_clamp_radians() {
        for radians in [0.0, 0.5, f64::PI, f64::TWO_PI - 1e-9] {
            assert_eq!(clamp_radians(radians), radians);
        }
        assert_abs_diff_eq!(clamp_radians(f64::TWO_PI + 1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(clamp_radians(-1.0f64), f64::TWO_PI - 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            clamp_radians(-7.0 * f64::TWO_PI - 1.0),
            f64::TWO_PI - 1.0,
            epsilon = 1e-9,
        );

        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..1000 {
            let radians = (rng.f64() - 0.5) * 100.0;
            let clamped = clamp_radians(radians);
            assert!((0.0..f64::TWO_PI).contains(&clamped), "{radians} -> {clamped}");
        }
    }

    #[test]
    fn test_abs_radial_distance() {
        assert_abs_diff_eq!(abs_radial_distance(0.0f64, 1.0), 1.0);
        assert_abs_diff_eq!(abs_radial_distance(1.0f64, 0.0), 1.0);
        assert_abs_diff_eq!(abs_radial_distance(-0.5f64, 0.5), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            abs_radial_distance(f64::QUARTER_PI, f64::QUARTER_PI + 3.0 * f64::TWO_PI),
            0.0,
            epsilon = 1e-12
        );

        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let (a, b) = ((rng.f64() - 0.5) * 40.0, (rng.f64() - 0.5) * 40.0);
            let distance = abs_radial_distance(a, b);
            assert!((0.0..=f64::PI).contains(&distance));
            assert_abs_diff_eq!(distance, abs_radial_distance(b, a), epsilon = 1e-12);
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_integer(0.49f32), 0);
        assert_eq!(round_to_integer(0.5f32), 1);
        assert_eq!(round_to_integer(-0.5f64), -1);
        assert_eq!(round_to_integer(1e30f64), i64::MAX);

        assert_relative_eq!(remainder(10.0f64, 4.0), -2.0);
        assert_relative_eq!(remainder(11.0f64, 4.0), -1.0);
        assert_abs_diff_eq!(
            remainder(f32::ONE_AND_HALF_PI, f32::TWO_PI),
            -f32::HALF_PI,
            epsilon = 1e-6
        );
    }

    #[test]
    fn powers_of_two() {
        let expected = [(1u32, 1), (2, 2), (3, 4), (5, 8), (1000, 1024), (1 << 31, 1 << 31)];
        for (input, output) in expected {
            assert_eq!(round_up_to_power_of_two(input), output, "{input}");
        }
        assert_eq!(round_up_to_power_of_two(200u8), 0);
        assert_eq!(round_up_to_power_of_two(u64::MAX), 0);
        assert_eq!(round_up_to_power_of_two(3usize), 4);
    }

    #[test]
    fn swap() {
        assert_eq!(byte_swap(0x1122u16), 0x2211);
        assert_eq!(byte_swap(-2i32), 0xfeffffffu32 as i32);
        assert_eq!(byte_swap(1.0f64).to_bits(), 1.0f64.to_bits().swap_bytes());
    }

    #[test]
    fn alignment() {
        assert_eq!(align_up(0, 16), 0);
        assert_eq!(align_up(1, 16), 16);
        assert_eq!(align_up(17, 1), 17);

        let buf = [0u8; 64];
        let ptr = align_pointer(buf[1..].as_ptr(), 32);
        assert_eq!(ptr as usize % 32, 0);
        assert!(ptr as usize >= buf[1..].as_ptr() as usize);
    }

    #[test]
    #[should_panic(expected = "alignment must be a power of two")]
    fn bad_alignment() {
        align_up(5, 3);
    }
}
