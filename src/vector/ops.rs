//! Implementations of `std::ops`.

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Lexicographic ordering, starting at the first element.
impl<T, const N: usize> PartialOrd for Vector<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Vectors are approximately equal when all of their elements are.
impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        AbsDiffEq::abs_diff_eq(&self.0[..], &other.0[..], epsilon)
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        RelativeEq::relative_eq(&self.0[..], &other.0[..], epsilon, max_relative)
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        UlpsEq::ulps_eq(&self.0[..], &other.0[..], epsilon, max_ulps)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        array::negate(&mut self.0);
        self
    }
}

/// Generates the by-value operator in terms of the compound assignment operator, for both
/// vector and scalar right-hand sides.
macro_rules! binop {
    ($doc:literal, $scalar_doc:literal, $op:ident :: $f:ident, $assign:ident :: $assign_f:ident, $array_f:ident, $scalar_f:ident) => {
        #[doc = $doc]
        impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            #[inline]
            fn $assign_f(&mut self, rhs: Vector<T, N>) {
                array::$array_f(&mut self.0, &rhs.0);
            }
        }

        #[doc = $doc]
        impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            type Output = Self;

            #[inline]
            fn $f(mut self, rhs: Vector<T, N>) -> Self::Output {
                array::$array_f(&mut self.0, &rhs.0);
                self
            }
        }

        #[doc = $scalar_doc]
        impl<T, const N: usize> $assign<T> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            #[inline]
            fn $assign_f(&mut self, rhs: T) {
                array::$scalar_f(&mut self.0, rhs);
            }
        }

        #[doc = $scalar_doc]
        impl<T, const N: usize> $op<T> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            type Output = Self;

            #[inline]
            fn $f(mut self, rhs: T) -> Self::Output {
                array::$scalar_f(&mut self.0, rhs);
                self
            }
        }
    };
}

binop!(
    "Element-wise addition.",
    "Adds a scalar to every element.",
    Add::add, AddAssign::add_assign, add, add_scalar
);
binop!(
    "Element-wise subtraction.",
    "Subtracts a scalar from every element.",
    Sub::sub, SubAssign::sub_assign, subtract, subtract_scalar
);
binop!(
    "Element-wise (Hadamard) multiplication.",
    "Vector-Scalar multiplication (scaling).",
    Mul::mul, MulAssign::mul_assign, multiply, multiply_scalar
);
binop!(
    "Element-wise division.",
    "Vector-Scalar division (scaling).",
    Div::div, DivAssign::div_assign, divide, divide_scalar
);

macro_rules! scalar_lhs {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
