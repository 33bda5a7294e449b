use std::ops;

/// Marker for the primitive numeric types that can be stored in a [`Vector`] or [`Matrix`].
///
/// This is implemented for all built-in integer and floating-point types. It is what allows a lone
/// scalar to take part in the mixture constructors ([`Vector::mix`], [`Matrix::mix`]).
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
/// [`Vector::mix`]: crate::Vector::mix
/// [`Matrix::mix`]: crate::Matrix::mix
pub trait Scalar: Copy + PartialEq + 'static {}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have an absolute value.
///
/// Unsigned integers implement this as the identity function.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unsigned integers are numbers too, so negation is *not* part of this trait. Operations that
/// need it add a [`Neg`][ops::Neg] bound (or use [`Float`]).
pub trait Number:
    Scalar
    + Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
{
}
impl<T> Number for T where
    T: Scalar
        + Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialOrd
{
}

/// Floating-point numbers ([`f32`] and [`f64`]).
///
/// Besides the arithmetic of [`Number`] and its compound assignment forms, floats provide the
/// trigonometric functions and the commonly used fractions of π.
pub trait Float:
    Number
    + ops::Neg<Output = Self>
    + ops::Rem<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + Trig
    + Sqrt
    + Abs
    + MinMax
{
    /// π.
    const PI: Self;
    /// 2π, a full turn.
    const TWO_PI: Self;
    /// π/2, a quarter turn.
    const HALF_PI: Self;
    /// 3π/2, three quarters of a turn.
    const ONE_AND_HALF_PI: Self;
    /// π/3.
    const THIRD_PI: Self;
    /// π/4.
    const QUARTER_PI: Self;

    /// Converts an [`f64`] to `Self`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Returns the integer part of `self`, rounding towards zero.
    fn trunc(self) -> Self;
}

/// Numeric conversion to `U`, with the semantics of an `as` cast.
///
/// Implemented for every pair of primitive numeric types. Float-to-integer conversions saturate,
/// integer conversions truncate or sign-extend.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! scalar {
    ($($types:ty),+) => {
        $(
            impl Scalar for $types {}
        )+
    };
}
scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! unsigned_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
}
unsigned_abs!(u8, u16, u32, u64, u128, usize);

macro_rules! cast {
    ($src:ty => $($dst:ty),+) => {
        $(
            impl Cast<$dst> for $src {
                #[inline]
                fn cast(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
    ($($src:ty),+) => {
        $(
            cast!($src => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )+
    };
}
cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! float {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;
                const TWO_PI: Self = 2.0 * std::$types::consts::PI;
                const HALF_PI: Self = std::$types::consts::FRAC_PI_2;
                const ONE_AND_HALF_PI: Self = std::$types::consts::PI + std::$types::consts::FRAC_PI_2;
                const THIRD_PI: Self = std::$types::consts::FRAC_PI_3;
                const QUARTER_PI: Self = std::$types::consts::FRAC_PI_4;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $types
                }

                #[inline]
                fn trunc(self) -> Self {
                    self.trunc()
                }
            }
        )+
    };
}
float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs() {
        assert_eq!(Abs::abs(-3i32), 3);
        assert_eq!(Abs::abs(3u8), 3);
        assert_eq!(Abs::abs(-0.5f64), 0.5);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3u32, 7), 3);
        assert_eq!(MinMax::max(-1i8, -5), -1);
        assert_eq!(MinMax::clamp(10i32, 0, 5), 5);
        assert_eq!(MinMax::clamp(f32::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn cast() {
        assert_eq!(Cast::<u8>::cast(300i32), 44);
        assert_eq!(Cast::<i32>::cast(-1.75f32), -1);
        assert_eq!(Cast::<u8>::cast(-1.0f64), 0);
        assert_eq!(Cast::<f32>::cast(255u8), 255.0);
    }

    #[test]
    fn float_consts() {
        assert_eq!(f32::TWO_PI, std::f32::consts::TAU);
        assert_eq!(f64::ONE_AND_HALF_PI, 1.5 * std::f64::consts::PI);
        assert_eq!(f64::QUARTER_PI * 4.0, std::f64::consts::PI);
    }
}
