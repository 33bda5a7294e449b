//! Element-wise operations on fixed-size scalar arrays.
//!
//! These are the building blocks of [`Vector`] and [`Matrix`] arithmetic: a vector is a single
//! `[T; N]`, and a matrix is an array of such columns. They are exposed for code that works on raw
//! arrays (eg. vertex data) and wants the exact same semantics.
//!
//! In-place operations take the destination as their first argument.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

use std::{
    array,
    cmp::Ordering,
    ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign},
};

use crate::{Abs, Cast, Float, Number, Sqrt, Zero};

/// Copies `src` into the front of `dst`, and sets the remaining elements to zero.
///
/// # Panics
///
/// Panics if `src` has more than `N` elements.
///
/// # Examples
///
/// ```
/// # use clg::array;
/// let mut dst = [9; 4];
/// array::assign_from_slice(&mut dst, &[1, 2]);
/// assert_eq!(dst, [1, 2, 0, 0]);
/// ```
#[track_caller]
pub fn assign_from_slice<T: Zero + Copy, const N: usize>(dst: &mut [T; N], src: &[T]) {
    assert!(
        src.len() <= N,
        "attempt to assign {} elements to an array of length {}",
        src.len(),
        N
    );
    let (head, tail) = dst.split_at_mut(src.len());
    head.copy_from_slice(src);
    tail.fill(T::ZERO);
}

/// Sets every element of `dst` to `value`.
#[inline]
pub fn broadcast<T: Copy>(dst: &mut [T], value: T) {
    dst.fill(value);
}

/// Returns `true` if all elements of `lhs` and `rhs` are equal.
#[inline]
pub fn equal<T: PartialEq, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> bool {
    lhs.iter().zip(rhs).all(|(l, r)| l == r)
}

/// Compares two arrays lexicographically.
///
/// The result is decided by the first pair of elements where one is smaller than the other.
/// Elements that are unordered with respect to each other (NaN) are skipped, so unlike
/// [`PartialOrd::partial_cmp`] this always produces an answer.
///
/// # Examples
///
/// ```
/// # use clg::array;
/// use std::cmp::Ordering;
///
/// assert_eq!(array::compare(&[1, 2, 3], &[1, 3, 0]), Ordering::Less);
/// assert_eq!(array::compare(&[1.0, 2.0], &[1.0, 2.0]), Ordering::Equal);
/// assert_eq!(array::compare(&[f32::NAN, 2.0], &[0.0, 1.0]), Ordering::Greater);
/// ```
pub fn compare<T: PartialOrd, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> Ordering {
    for (l, r) in lhs.iter().zip(rhs) {
        if l < r {
            return Ordering::Less;
        }
        if l > r {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

/// Element-wise addition.
#[inline]
pub fn add<T: AddAssign + Copy, const N: usize>(dst: &mut [T; N], rhs: &[T; N]) {
    dst.iter_mut().zip(rhs).for_each(|(l, &r)| *l += r);
}

/// Adds `rhs` to every element.
#[inline]
pub fn add_scalar<T: AddAssign + Copy>(dst: &mut [T], rhs: T) {
    dst.iter_mut().for_each(|l| *l += rhs);
}

/// Element-wise subtraction.
#[inline]
pub fn subtract<T: SubAssign + Copy, const N: usize>(dst: &mut [T; N], rhs: &[T; N]) {
    dst.iter_mut().zip(rhs).for_each(|(l, &r)| *l -= r);
}

/// Subtracts `rhs` from every element.
#[inline]
pub fn subtract_scalar<T: SubAssign + Copy>(dst: &mut [T], rhs: T) {
    dst.iter_mut().for_each(|l| *l -= rhs);
}

/// Element-wise (Hadamard) multiplication.
#[inline]
pub fn multiply<T: MulAssign + Copy, const N: usize>(dst: &mut [T; N], rhs: &[T; N]) {
    dst.iter_mut().zip(rhs).for_each(|(l, &r)| *l *= r);
}

/// Multiplies every element by `rhs`.
#[inline]
pub fn multiply_scalar<T: MulAssign + Copy>(dst: &mut [T], rhs: T) {
    dst.iter_mut().for_each(|l| *l *= rhs);
}

/// Element-wise division.
///
/// Division by zero behaves like the scalar type does (IEEE infinities and NaN for floats, a panic
/// for integers).
#[inline]
pub fn divide<T: DivAssign + Copy, const N: usize>(dst: &mut [T; N], rhs: &[T; N]) {
    dst.iter_mut().zip(rhs).for_each(|(l, &r)| *l /= r);
}

/// Divides every element by `rhs`.
#[inline]
pub fn divide_scalar<T: DivAssign + Copy>(dst: &mut [T], rhs: T) {
    dst.iter_mut().for_each(|l| *l /= rhs);
}

/// Negates every element.
#[inline]
pub fn negate<T: Neg<Output = T> + Copy>(dst: &mut [T]) {
    dst.iter_mut().for_each(|l| *l = -*l);
}

/// Replaces every element with its absolute value.
#[inline]
pub fn abs<T: Abs + Copy>(dst: &mut [T]) {
    dst.iter_mut().for_each(|l| *l = Abs::abs(*l));
}

/// Computes the dot product of `lhs` and `rhs`.
pub fn dot<T: Number, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T {
    lhs.iter()
        .zip(rhs)
        .fold(T::ZERO, |acc, (&l, &r)| acc + l * r)
}

/// Computes the sum of the squared elements.
#[inline]
pub fn length_squared<T: Number, const N: usize>(v: &[T; N]) -> T {
    dot(v, v)
}

/// Computes the Euclidean length.
#[inline]
pub fn length<T: Number + Sqrt, const N: usize>(v: &[T; N]) -> T {
    length_squared(v).sqrt()
}

/// Scales `v` to unit length and returns its previous length.
///
/// If the length is exactly zero, `v` is left unchanged and zero is returned.
///
/// # Examples
///
/// ```
/// # use approx::assert_relative_eq;
/// # use clg::array;
/// let mut v = [3.0, 0.0, 4.0];
/// assert_eq!(array::normalize(&mut v), 5.0);
/// assert_relative_eq!(v[..], [0.6, 0.0, 0.8][..]);
///
/// let mut zero = [0.0; 3];
/// assert_eq!(array::normalize(&mut zero), 0.0);
/// assert_eq!(zero, [0.0; 3]);
/// ```
pub fn normalize<T: Number + Sqrt + MulAssign, const N: usize>(v: &mut [T; N]) -> T {
    let length = length(v);
    if length == T::ZERO {
        log::trace!("not normalizing zero-length vector");
        return length;
    }
    multiply_scalar(v, T::ONE / length);
    length
}

/// Computes the cross product of two 3-element arrays.
pub fn cross<T: Number>(lhs: &[T; 3], rhs: &[T; 3]) -> [T; 3] {
    let [a1, a2, a3] = *lhs;
    let [b1, b2, b3] = *rhs;

    #[rustfmt::skip]
    let cross = [
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ];
    cross
}

/// Rotates a 2D point clockwise around the origin.
///
/// Computes `x' = x·cos(θ) + y·sin(θ)` and `y' = -x·sin(θ) + y·cos(θ)`, which is a clockwise
/// rotation when the Y axis points up.
pub fn rotate_clockwise<T: Float>(v: &mut [T; 2], radians: T) {
    let (sin, cos) = (radians.sin(), radians.cos());
    let [x, y] = *v;
    *v = [x * cos + y * sin, -x * sin + y * cos];
}

/// Rotates a 2D point counterclockwise around the origin.
///
/// Computes `x' = x·cos(θ) - y·sin(θ)` and `y' = x·sin(θ) + y·cos(θ)`.
pub fn rotate_counter_clockwise<T: Float>(v: &mut [T; 2], radians: T) {
    let (sin, cos) = (radians.sin(), radians.cos());
    let [x, y] = *v;
    *v = [x * cos - y * sin, x * sin + y * cos];
}

/// Converts every element to the scalar type `U` (like an `as` cast).
///
/// # Examples
///
/// ```
/// # use clg::array;
/// let ints: [i32; 3] = array::cast_scalars(&[1.9f32, -0.5, 300.0]);
/// assert_eq!(ints, [1, 0, 300]);
/// ```
pub fn cast_scalars<T: Cast<U> + Copy, U, const N: usize>(src: &[T; N]) -> [U; N] {
    array::from_fn(|i| src[i].cast())
}

/// Converts an array to a different length.
///
/// The first `min(N, M)` elements are copied. Excess elements of `src` are dropped, and missing
/// ones are set to zero.
///
/// # Examples
///
/// ```
/// # use clg::array;
/// let longer: [u8; 4] = array::cast_dimensions(&[1, 2]);
/// assert_eq!(longer, [1, 2, 0, 0]);
/// let shorter: [u8; 1] = array::cast_dimensions(&longer);
/// assert_eq!(shorter, [1]);
/// ```
pub fn cast_dimensions<T: Zero + Copy, const N: usize, const M: usize>(src: &[T; N]) -> [T; M] {
    array::from_fn(|i| if i < N { src[i] } else { T::ZERO })
}
