use std::{cmp::Ordering, fmt, mem, ops::MulAssign};

use crate::{
    array,
    mix::{self, Components},
    traits::{Number, Sqrt},
    Abs, Cast, Float, MinMax, One, Zero,
};

mod named;
mod ops;

pub use named::*;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::mix`] concatenates any sequence of scalars and smaller vectors.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_slice`] copies a prefix from a slice and zero-fills the rest.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value
///   (zero for all numeric types).
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
/// - [`Vector::resize`] and [`Vector::cast`] convert between dimensions and scalar types.
///
/// Vectors always have at least one element. Constructing a `Vector<T, 0>` fails to compile:
///
/// ```compile_fail
/// # use clg::*;
/// let v = Vector::<f32, 0>::splat(1.0);
/// ```
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - Vectors with 2 to 4 dimensions have named accessors like [`Vector::x`] and [`Vector::set_x`]
///   (see the [`Point`], [`Size`], [`Rgb`] and [`Rgba`] aliases).
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = {
        let () = Self::NON_EMPTY;
        Self([T::ZERO; N])
    };
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Fails the build when a constructor is used with `N == 0`.
    const NON_EMPTY: () = assert!(N > 0, "vectors must have at least one element");

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        let () = Self::NON_EMPTY;
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`std::array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let () = Self::NON_EMPTY;
        Self(std::array::from_fn(cb))
    }

    /// Creates a vector from the components of a mixture of scalars and vectors.
    ///
    /// `components` is a tuple that is consumed from left to right: scalars contribute one
    /// element, vectors and arrays contribute all of their elements in order. The number of
    /// components must be exactly `N`, otherwise the call fails to compile.
    ///
    /// See the [`mix`][crate::mix] module for details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v: Vec4<f32> = Vector::mix((1.5, vec2(2.0, 3.0), 4.0));
    /// assert_eq!(v, vec4(1.5, 2.0, 3.0, 4.0));
    ///
    /// let rgba = Rgba8::mix((Rgb8::splat(255), 128));
    /// assert_eq!(rgba, [255, 255, 255, 128]);
    /// ```
    pub fn mix<C>(components: C) -> Self
    where
        T: Zero + Copy,
        C: Components<T>,
    {
        let mut out = Self::ZERO;
        mix::fill::<T, C, N, 1>(components, |i, c| out.0[i] = c);
        out
    }

    /// Creates a vector from a slice of at most `N` elements.
    ///
    /// The elements of `slice` are copied to the front of the vector, any remaining elements are
    /// set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has more than `N` elements. Use [`Vector::try_from_slice`] to handle
    /// oversized input gracefully.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = Vec4::from_slice(&[1, 2]);
    /// assert_eq!(v, [1, 2, 0, 0]);
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        let mut out = Self::ZERO;
        array::assign_from_slice(&mut out.0, slice);
        out
    }

    /// Creates a vector from a slice of at most `N` elements, returning an error if the slice is
    /// too long.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(Vec2::try_from_slice(&[7]).unwrap(), [7, 0]);
    /// assert!(Vec2::try_from_slice(&[7, 8, 9]).is_err());
    /// ```
    pub fn try_from_slice(slice: &[T]) -> anyhow::Result<Self>
    where
        T: Zero + Copy,
    {
        if slice.len() > N {
            anyhow::bail!(
                "cannot create a {}-element vector from a slice of {} elements",
                N,
                slice.len()
            );
        }
        Ok(Self::from_slice(slice))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!(),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Exchanges all elements with those of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mut a = vec2(1, 2);
    /// let mut b = vec2(3, 4);
    /// a.swap(&mut b);
    /// assert_eq!((a, b), (vec2(3, 4), vec2(1, 2)));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.0, &mut other.0);
    }

    /// Changes the number of dimensions of this vector.
    ///
    /// The first `min(N, M)` elements are kept, excess elements are dropped, and new elements are
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec2(1.0, 2.0);
    /// assert_eq!(v.resize::<4>(), vec4(1.0, 2.0, 0.0, 0.0));
    /// assert_eq!(v.resize::<1>(), vec1(1.0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from(array::cast_dimensions(&self.0))
    }

    /// Converts each element to the scalar type `U`, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec3(1.5f32, -2.0, 300.0).cast::<u8>();
    /// assert_eq!(v, vec3(1, 0, 255));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U> + Copy,
    {
        Vector(array::cast_scalars(&self.0))
    }

    /// Compares `self` and `other` lexicographically, skipping unordered (NaN) elements.
    ///
    /// See [`array::compare`] for details. The [`PartialOrd`] impl of [`Vector`] returns [`None`]
    /// instead when it encounters unordered elements.
    pub fn compare(&self, other: &Self) -> Ordering
    where
        T: PartialOrd,
    {
        array::compare(&self.0, &other.0)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    pub fn length_squared(&self) -> T
    where
        T: Number,
    {
        array::length_squared(&self.0)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        array::length(&self.0)
    }

    /// Scales this vector to unit length in place and returns its previous length.
    ///
    /// A zero vector is left unchanged, and 0 is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// assert_eq!(v.normalize(), 4.0);
    /// assert_eq!(v, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(&mut self) -> T
    where
        T: Number + Sqrt + MulAssign,
    {
        array::normalize(&mut self.0)
    }

    /// Returns a copy of this vector scaled to unit length.
    ///
    /// The unit vector of a zero vector is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(vec2(0.0, -2.0).unit(), vec2(0.0, -1.0));
    /// assert_eq!(Vec3f::ZERO.unit(), Vec3f::ZERO);
    /// ```
    pub fn unit(self) -> Self
    where
        T: Number + Sqrt + MulAssign,
    {
        let mut unit = self;
        unit.normalize();
        unit
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use clg::*;
    /// assert_relative_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    /// assert_relative_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
    /// assert_relative_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        array::dot(&self.0, &other.0)
    }

    /// Element-wise absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(vec3(-1, 0, 2).abs(), vec3(1, 0, 2));
    /// ```
    pub fn abs(mut self) -> Self
    where
        T: Abs + Copy,
    {
        array::abs(&mut self.0);
        self
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec3(-1, 5, 10).clamp(Vector::splat(0), Vector::splat(8));
    /// assert_eq!(v, vec3(0, 5, 8));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec1(-1.0).extend(5.0);
    /// assert_eq!(v, vec2(-1.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise around the origin.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use clg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
    /// ```
    pub fn rotate_clockwise(mut self, radians: T) -> Self
    where
        T: Float,
    {
        array::rotate_clockwise(&mut self.0, radians);
        self
    }

    /// Rotates `self` counterclockwise around the origin.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use clg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_relative_eq!(Vec2f::Y.rotate_counter_clockwise(TAU / 4.0), -Vec2f::X);
    /// assert_relative_eq!(Vec2f::X.rotate_counter_clockwise(TAU / 4.0), Vec2f::Y);
    /// ```
    pub fn rotate_counter_clockwise(mut self, radians: T) -> Self
    where
        T: Float,
    {
        array::rotate_counter_clockwise(&mut self.0, radians);
        self
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        Self(array::cross(&self.0, &other.0))
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

/// Element-wise absolute value of `v`.
#[inline]
pub fn abs<T: Abs + Copy, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.abs()
}

/// Computes the unit normal of the triangle `v0`, `v1`, `v2`.
///
/// The result is `unit(cross(v0 - v1, v1 - v2))`. For collinear points the cross product vanishes
/// and the zero vector is returned.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let n = get_surface_normal(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0));
/// assert_eq!(n, vec3(0.0, 0.0, 1.0));
///
/// let line = get_surface_normal(Vec3f::ZERO, Vec3f::X, Vec3f::X * 2.0);
/// assert_eq!(line, Vec3f::ZERO);
/// ```
pub fn get_surface_normal<T: Float>(v0: Vec3<T>, v1: Vec3<T>, v2: Vec3<T>) -> Vec3<T> {
    (v0 - v1).cross(v1 - v2).unit()
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
