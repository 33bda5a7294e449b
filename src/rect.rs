//! Axis-aligned rectangles with type-level axis and boundary policies.
//!
//! A [`Rect`] stores a location and a size. How its edges are named and whether its far edges
//! belong to it is selected through two type parameters:
//!
//! - The [`YAxis`] policy decides which edge is the *top*: [`StandardY`] puts the origin in the
//!   lower-left corner (`top = y + height`), [`InvertedY`] in the upper-left one (`top = y`).
//! - The [`Interval`] policy decides whether the right and bottom edges are part of the rectangle
//!   ([`Closed`]) or not ([`RightOpen`], the raster convention).
//!
//! Both policies are zero-sized marker types, so they only exist at compile time. Rectangles with
//! different policies are different types and cannot be compared or combined.

use std::{fmt, hash::Hash, marker::PhantomData, mem};

use crate::{vec2, Cast, MinMax, Number, Point, Size, Vector, Zero};

/// Maps the stored vertical extent of a rectangle to its `top` and `bottom` edges.
pub trait YAxis: Copy + Default + fmt::Debug + Eq + Hash + 'static {
    /// The end of the vertical extent `y..y + height` that holds the bottom edge.
    const BOTTOM: RangeEnd;

    /// Returns the `top` edge of a vertical extent starting at `y`.
    fn top<T: Number>(y: T, height: T) -> T;

    /// Returns the `bottom` edge of a vertical extent starting at `y`.
    fn bottom<T: Number>(y: T, height: T) -> T;

    /// Moves the `top` edge to `value`, keeping the bottom edge in place.
    fn set_top<T: Number>(y: &mut T, height: &mut T, value: T);

    /// Moves the `bottom` edge to `value`, keeping the top edge in place.
    fn set_bottom<T: Number>(y: &mut T, height: &mut T, value: T);
}

/// The Y axis points up and the origin is in the lower-left corner.
///
/// This is the usual orientation in vector graphics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StandardY;

/// The Y axis points down and the origin is in the upper-left corner.
///
/// This is the usual orientation for raster images and text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InvertedY;

/// Moves the edge at `start`, keeping `start + extent` in place.
fn move_start<T: Number>(start: &mut T, extent: &mut T, value: T) {
    *extent = *extent + (*start - value);
    *start = value;
}

/// Moves the edge at `start + extent`, keeping `start` in place.
fn move_end<T: Number>(start: &mut T, extent: &mut T, value: T) {
    *extent = value - *start;
}

impl YAxis for StandardY {
    const BOTTOM: RangeEnd = RangeEnd::Low;

    fn top<T: Number>(y: T, height: T) -> T {
        y + height
    }

    fn bottom<T: Number>(y: T, _: T) -> T {
        y
    }

    fn set_top<T: Number>(y: &mut T, height: &mut T, value: T) {
        move_end(y, height, value);
    }

    fn set_bottom<T: Number>(y: &mut T, height: &mut T, value: T) {
        move_start(y, height, value);
    }
}

impl YAxis for InvertedY {
    const BOTTOM: RangeEnd = RangeEnd::High;

    fn top<T: Number>(y: T, _: T) -> T {
        y
    }

    fn bottom<T: Number>(y: T, height: T) -> T {
        y + height
    }

    fn set_top<T: Number>(y: &mut T, height: &mut T, value: T) {
        move_start(y, height, value);
    }

    fn set_bottom<T: Number>(y: &mut T, height: &mut T, value: T) {
        move_end(y, height, value);
    }
}

/// One of the two ends of a coordinate range `lo..hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEnd {
    /// The end at `lo`.
    Low,
    /// The end at `hi`.
    High,
}

/// Decides whether the far end of a coordinate range belongs to it.
///
/// The far end of a horizontal range is the right edge, the far end of a vertical range is the
/// bottom edge. Which end of `lo..hi` that is depends on the [`YAxis`] policy.
pub trait Interval: Copy + Default + fmt::Debug + Eq + Hash + 'static {
    /// Returns whether `value` lies in the range `lo..hi`, whose far end is at `far`.
    fn contains<T: PartialOrd>(lo: T, hi: T, far: RangeEnd, value: T) -> bool;

    /// Returns whether two ranges share at least one coordinate.
    ///
    /// Two ranges that both exclude the same end overlap under the same condition, no matter
    /// which end that is.
    fn overlaps<T: PartialOrd>(a_lo: T, a_hi: T, b_lo: T, b_hi: T) -> bool;
}

/// Ranges include both of their ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Closed;

/// Ranges exclude their far end, like the last row and column of a raster image.
///
/// With [`StandardY`] the excluded vertical end is the bottom edge at `y`, with [`InvertedY`] it is
/// the bottom edge at `y + height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RightOpen;

impl Interval for Closed {
    fn contains<T: PartialOrd>(lo: T, hi: T, _: RangeEnd, value: T) -> bool {
        lo <= value && value <= hi
    }

    fn overlaps<T: PartialOrd>(a_lo: T, a_hi: T, b_lo: T, b_hi: T) -> bool {
        !(a_hi < b_lo || b_hi < a_lo)
    }
}

impl Interval for RightOpen {
    fn contains<T: PartialOrd>(lo: T, hi: T, far: RangeEnd, value: T) -> bool {
        match far {
            RangeEnd::Low => lo < value && value <= hi,
            RangeEnd::High => lo <= value && value < hi,
        }
    }

    fn overlaps<T: PartialOrd>(a_lo: T, a_hi: T, b_lo: T, b_hi: T) -> bool {
        !(a_hi <= b_lo || b_hi <= a_lo)
    }
}

/// A rectangle with [`f32`] coordinates, standard Y axis and closed intervals.
pub type Rectf = Rect<f32>;
/// A rectangle with [`i32`] coordinates, standard Y axis and closed intervals.
pub type Recti = Rect<i32>;

/// A rectangle in raster coordinates: the origin is at the upper-left and the far edges are
/// excluded.
pub type RasterRect<T> = Rect<T, InvertedY, RightOpen>;
/// A [`RasterRect`] with [`i32`] coordinates.
pub type RasterRecti = RasterRect<i32>;
/// A [`RasterRect`] with [`u32`] coordinates.
pub type RasterRectu = RasterRect<u32>;
/// A [`RasterRect`] with [`f32`] coordinates.
pub type RasterRectf = RasterRect<f32>;

/// An axis-aligned rectangle, described by a location and a size.
///
/// The size may be negative; such a rectangle contains no points. `Y` selects the orientation of
/// the Y axis (see [`YAxis`]), `I` whether the far edges are included (see [`Interval`]).
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let r = Rectf::new(0.0, 0.0, 10.0, 10.0);
/// assert_eq!(r.top(), 10.0);
/// assert!(r.contains(point(10.0, 10.0)));
///
/// let raster = RasterRecti::new(0, 0, 10, 10);
/// assert_eq!(raster.top(), 0);
/// assert!(!raster.contains(point(10, 10)));
/// assert!(raster.contains(point(9, 9)));
/// ```
pub struct Rect<T, Y: YAxis = StandardY, I: Interval = Closed> {
    location: Point<T>,
    size: Size<T>,
    _policy: PhantomData<fn() -> (Y, I)>,
}

/// Creates a [`Point`].
#[inline]
pub const fn point<T>(x: T, y: T) -> Point<T> {
    vec2(x, y)
}

/// Creates a [`Size`].
#[inline]
pub const fn size<T>(width: T, height: T) -> Size<T> {
    vec2(width, height)
}

impl<T, Y: YAxis, I: Interval> Rect<T, Y, I> {
    /// Creates a rectangle from its location and its size.
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self::from_location_size(point(x, y), size(width, height))
    }

    /// Creates a rectangle from a location [`Point`] and a [`Size`].
    #[inline]
    pub const fn from_location_size(location: Point<T>, size: Size<T>) -> Self {
        Self {
            location,
            size,
            _policy: PhantomData,
        }
    }

    /// Creates a rectangle at the origin with the given width and height.
    pub fn from_size(width: T, height: T) -> Self
    where
        T: Zero,
    {
        Self::new(T::ZERO, T::ZERO, width, height)
    }

    /// Creates a rectangle at the origin with the given [`Size`].
    pub fn from_size_vector(size: Size<T>) -> Self
    where
        T: Zero,
    {
        Self::from_location_size(Vector::ZERO, size)
    }

    /// Creates an empty rectangle at `location`.
    pub fn from_location(location: Point<T>) -> Self
    where
        T: Zero,
    {
        Self::from_location_size(location, Vector::ZERO)
    }

    /// Converts the coordinates to scalar type `U`, with the semantics of an `as` cast.
    ///
    /// The policies are kept.
    pub fn cast<U>(self) -> Rect<U, Y, I>
    where
        T: Cast<U> + Copy,
    {
        Rect::from_location_size(self.location.cast(), self.size.cast())
    }

    /// Returns the location of this rectangle, the corner at `(x, y)`.
    #[inline]
    pub fn location(&self) -> Point<T>
    where
        T: Copy,
    {
        self.location
    }

    /// Moves the rectangle to `location`, keeping its size.
    #[inline]
    pub fn set_location(&mut self, location: Point<T>) {
        self.location = location;
    }

    /// Returns the width and height as a [`Size`].
    #[inline]
    pub fn size(&self) -> Size<T>
    where
        T: Copy,
    {
        self.size
    }

    /// Resizes the rectangle, keeping its location.
    #[inline]
    pub fn set_size(&mut self, size: Size<T>) {
        self.size = size;
    }

    /// Returns the X coordinate of the location, which is also the left edge.
    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.location[0]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.location[0] = x;
    }

    /// Returns the Y coordinate of the location.
    ///
    /// Depending on the [`YAxis`] policy this is either the top or the bottom edge.
    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.location[1]
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.location[1] = y;
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(&self) -> T
    where
        T: Copy,
    {
        self.size[0]
    }

    /// Changes the width, moving the right edge.
    #[inline]
    pub fn set_width(&mut self, width: T) {
        self.size[0] = width;
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(&self) -> T
    where
        T: Copy,
    {
        self.size[1]
    }

    /// Changes the height, moving the edge at `y + height`.
    #[inline]
    pub fn set_height(&mut self, height: T) {
        self.size[1] = height;
    }

    /// Exchanges location and size with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.location, &mut other.location);
        mem::swap(&mut self.size, &mut other.size);
    }
}

impl<T: Number, Y: YAxis, I: Interval> Rect<T, Y, I> {
    /// Returns the X coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> T {
        self.x()
    }

    /// Moves the left edge to `value`, keeping the right edge in place.
    pub fn set_left(&mut self, value: T) {
        move_start(&mut self.location[0], &mut self.size[0], value);
    }

    /// Returns the X coordinate of the right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> T {
        self.x() + self.width()
    }

    /// Moves the right edge to `value`, keeping the left edge in place.
    pub fn set_right(&mut self, value: T) {
        move_end(&mut self.location[0], &mut self.size[0], value);
    }

    /// Returns the Y coordinate of the top edge.
    ///
    /// This is `y + height` for [`StandardY`] and `y` for [`InvertedY`].
    #[inline]
    pub fn top(&self) -> T {
        Y::top(self.y(), self.height())
    }

    /// Moves the top edge to `value`, keeping the bottom edge in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mut r = Recti::new(0, 0, 10, 10);
    /// r.set_top(4);
    /// assert_eq!(r, Recti::new(0, 0, 10, 4));
    ///
    /// let mut r = RasterRecti::new(0, 0, 10, 10);
    /// r.set_top(4);
    /// assert_eq!(r, RasterRecti::new(0, 4, 10, 6));
    /// ```
    pub fn set_top(&mut self, value: T) {
        Y::set_top(&mut self.location[1], &mut self.size[1], value);
    }

    /// Returns the Y coordinate of the bottom edge.
    ///
    /// This is `y` for [`StandardY`] and `y + height` for [`InvertedY`].
    #[inline]
    pub fn bottom(&self) -> T {
        Y::bottom(self.y(), self.height())
    }

    /// Moves the bottom edge to `value`, keeping the top edge in place.
    pub fn set_bottom(&mut self, value: T) {
        Y::set_bottom(&mut self.location[1], &mut self.size[1], value);
    }

    /// Returns whether `point` lies inside this rectangle.
    ///
    /// Points on the left and top edges are always inside. Points on the right and bottom edges
    /// are inside only with [`Closed`] intervals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let r = Rect::<i32, StandardY, RightOpen>::new(0, 0, 10, 10);
    /// assert!(r.contains(point(0, 10)));
    /// assert!(!r.contains(point(0, 0)));
    /// assert!(!r.contains(point(10, 5)));
    /// ```
    pub fn contains(&self, point: Point<T>) -> bool {
        I::contains(self.x(), self.right(), RangeEnd::High, point[0])
            && I::contains(self.y(), self.y() + self.height(), Y::BOTTOM, point[1])
    }

    /// Returns whether `self` and `other` share any point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let a = Recti::new(0, 0, 10, 10);
    /// let b = Recti::new(10, 10, 5, 5);
    /// assert!(a.overlaps(&b));
    /// assert!(!a.cast::<f32>().overlaps(&Rectf::new(10.5, 0.0, 1.0, 1.0)));
    ///
    /// let a = RasterRecti::new(0, 0, 10, 10);
    /// let b = RasterRecti::new(10, 10, 5, 5);
    /// assert!(!a.overlaps(&b));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        I::overlaps(self.x(), self.right(), other.x(), other.right())
            && I::overlaps(
                self.y(),
                self.y() + self.height(),
                other.y(),
                other.y() + other.height(),
            )
    }

    /// Returns the smallest rectangle enclosing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let u = Recti::new(0, 0, 2, 2).make_union(&Recti::new(5, -1, 1, 1));
    /// assert_eq!(u, Recti::new(0, -1, 6, 3));
    /// ```
    pub fn make_union(&self, other: &Self) -> Self
    where
        T: MinMax,
    {
        let far = |r: &Self| r.location.zip(r.size).map(|(l, s)| l + s);
        let location = self.location.min(other.location);
        let end = far(self).max(far(other));
        Self::from_location_size(location, end.zip(location).map(|(e, l)| e - l))
    }
}

/// Converts a rectangle with a standard Y axis to raster coordinates.
///
/// `client_height` is the height of the area the rectangle lives in. The rectangle's top edge
/// becomes the raster rectangle's location.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let r = Recti::new(10, 20, 30, 40);
/// let raster: RasterRecti = to_raster_rect(r, 100);
/// assert_eq!(raster, RasterRecti::new(10, 40, 30, 40));
/// assert_eq!(from_raster_rect::<i32, _>(raster, 100), r);
/// ```
pub fn to_raster_rect<U, T>(rect: Rect<T>, client_height: T) -> RasterRect<U>
where
    T: Number + Cast<U>,
{
    Rect::<T, InvertedY, RightOpen>::new(
        rect.x(),
        client_height - rect.top(),
        rect.width(),
        rect.height(),
    )
    .cast()
}

/// Converts a raster rectangle to one with a standard Y axis and closed intervals.
///
/// This is the inverse of [`to_raster_rect`] for the same `client_height`.
pub fn from_raster_rect<U, T>(rect: RasterRect<T>, client_height: T) -> Rect<U>
where
    T: Number + Cast<U>,
{
    Rect::<T>::new(
        rect.x(),
        client_height - rect.bottom(),
        rect.width(),
        rect.height(),
    )
    .cast()
}

/// An empty rectangle at the origin.
impl<T: Zero, Y: YAxis, I: Interval> Default for Rect<T, Y, I> {
    fn default() -> Self {
        Self::from_location_size(Vector::ZERO, Vector::ZERO)
    }
}

impl<T: Clone, Y: YAxis, I: Interval> Clone for Rect<T, Y, I> {
    fn clone(&self) -> Self {
        Self::from_location_size(self.location.clone(), self.size.clone())
    }
}

impl<T: Copy, Y: YAxis, I: Interval> Copy for Rect<T, Y, I> {}

impl<T: PartialEq, Y: YAxis, I: Interval> PartialEq for Rect<T, Y, I> {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.size == other.size
    }
}

impl<T: Eq, Y: YAxis, I: Interval> Eq for Rect<T, Y, I> {}

impl<T: Hash, Y: YAxis, I: Interval> Hash for Rect<T, Y, I> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.location.hash(state);
        self.size.hash(state);
    }
}

impl<T: fmt::Debug, Y: YAxis, I: Interval> fmt::Debug for Rect<T, Y, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = self.location.as_array();
        let [w, h] = self.size.as_array();
        write!(f, "Rect @ ({x:?}, {y:?}) {w:?}x{h:?}")
    }
}

#[cfg(test)]
mod tests {
    use crate::Sizef;

    use super::*;

    #[test]
    fn closed_contains_far_edges() {
        let r = Rectf::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(point(10.0, 10.0)));
        assert!(r.contains(point(0.0, 0.0)));
        assert!(!r.contains(point(10.1, 5.0)));
        assert!(!r.contains(point(5.0, -0.1)));

        let open = Rect::<f32, StandardY, RightOpen>::new(0.0, 0.0, 10.0, 10.0);
        assert!(!open.contains(point(10.0, 10.0)));
        assert!(!open.contains(point(10.0, 5.0)));
        assert!(open.contains(point(9.99, 9.99)));
    }

    #[test]
    fn right_open_excludes_bottom_edge() {
        let r = Rect::<f32, StandardY, RightOpen>::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!((r.bottom(), r.top()), (0.0, 10.0));
        assert!(r.contains(point(5.0, 10.0)));
        assert!(!r.contains(point(5.0, 0.0)));
        assert!(r.contains(point(0.0, 0.1)));
        assert!(!r.contains(r.location()));

        let raster = RasterRectf::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!((raster.top(), raster.bottom()), (0.0, 10.0));
        assert!(raster.contains(point(5.0, 0.0)));
        assert!(!raster.contains(point(5.0, 10.0)));

        // A point on the left edge at the top is inside for both axis orientations.
        assert!(r.contains(point(0.0, r.top())));
        assert!(raster.contains(point(0.0, raster.top())));

        let empty = Rect::<i32, StandardY, RightOpen>::new(0, 0, 10, 0);
        assert!(!empty.contains(point(5, 0)));
    }

    #[test]
    fn right_open_overlaps_with_standard_y() {
        let a = Rect::<i32, StandardY, RightOpen>::new(0, 0, 10, 10);
        assert!(a.overlaps(&a));
        assert!(!a.overlaps(&Rect::new(0, 10, 5, 5)));
        assert!(!a.overlaps(&Rect::new(0, -5, 5, 5)));
        assert!(a.overlaps(&Rect::new(0, 9, 5, 5)));
        assert!(!a.overlaps(&Rect::new(10, 0, 5, 5)));
    }

    #[test]
    fn contains_location() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..1000 {
            let (x, y) = (rng.i32(-100..100), rng.i32(-100..100));
            let (w, h) = (rng.i32(0..50), rng.i32(0..50));

            let closed = Recti::new(x, y, w, h);
            assert!(closed.contains(closed.location()), "{closed:?}");
            assert!(closed.contains(point(closed.right(), closed.top())), "{closed:?}");

            let raster = RasterRecti::new(x, y, w, h);
            assert_eq!(raster.contains(raster.location()), w > 0 && h > 0, "{raster:?}");
            assert!(!raster.contains(point(raster.right(), raster.bottom())), "{raster:?}");
        }
    }

    #[test]
    fn negative_size_is_empty() {
        let r = Recti::new(0, 0, -5, 5);
        assert!(!r.contains(point(-2, 2)));
        assert!(!r.contains(point(0, 2)));
        assert_eq!(r.right(), -5);
    }

    #[test]
    fn edges() {
        let r = Recti::new(1, 2, 3, 4);
        assert_eq!((r.left(), r.right(), r.bottom(), r.top()), (1, 4, 2, 6));

        let r = RasterRecti::new(1, 2, 3, 4);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (1, 4, 2, 6));
    }

    #[test]
    fn setters_keep_opposite_edge() {
        let mut r = Recti::new(0, 0, 10, 10);
        r.set_left(3);
        assert_eq!((r.left(), r.right()), (3, 10));
        r.set_right(7);
        assert_eq!((r.left(), r.right()), (3, 7));
        r.set_bottom(-2);
        assert_eq!((r.bottom(), r.top()), (-2, 10));
        r.set_top(4);
        assert_eq!((r.bottom(), r.top()), (-2, 4));
        assert_eq!(r, Recti::new(3, -2, 4, 6));

        let mut r = RasterRecti::new(0, 0, 10, 10);
        r.set_top(3);
        assert_eq!((r.top(), r.bottom()), (3, 10));
        r.set_bottom(5);
        assert_eq!((r.top(), r.bottom()), (3, 5));
        assert_eq!(r, RasterRecti::new(0, 3, 10, 2));
    }

    #[test]
    fn plain_setters() {
        let mut r = Rectf::default();
        r.set_x(1.0);
        r.set_y(2.0);
        r.set_width(3.0);
        r.set_height(4.0);
        assert_eq!(r, Rectf::new(1.0, 2.0, 3.0, 4.0));

        r.set_location(point(0.0, 0.0));
        r.set_size(size(1.0, 1.0));
        assert_eq!(r, Rectf::from_size(1.0, 1.0));
        assert_eq!(r, Rectf::from_size_vector(size(1.0, 1.0)));
        assert_eq!(Rectf::from_location(point(1.0, 2.0)).size(), Sizef::ZERO);
    }

    #[test]
    fn overlaps() {
        let a = Recti::new(0, 0, 10, 10);
        assert!(a.overlaps(&a));
        assert!(a.overlaps(&Recti::new(10, 0, 5, 5)));
        assert!(a.overlaps(&Recti::new(-5, -5, 5, 5)));
        assert!(!a.overlaps(&Recti::new(11, 0, 5, 5)));
        assert!(!a.overlaps(&Recti::new(0, 11, 5, 5)));
        assert!(a.overlaps(&Recti::new(2, 2, 2, 2)));

        let a = RasterRecti::new(0, 0, 10, 10);
        assert!(!a.overlaps(&RasterRecti::new(10, 0, 5, 5)));
        assert!(!a.overlaps(&RasterRecti::new(0, 10, 5, 5)));
        assert!(!a.overlaps(&RasterRecti::new(-5, -5, 5, 5)));
        assert!(a.overlaps(&RasterRecti::new(9, 9, 5, 5)));
    }

    #[test]
    fn union() {
        let a = Rectf::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectf::new(-1.0, 3.0, 1.0, 1.0);
        let u = a.make_union(&b);
        assert_eq!(u, Rectf::new(-1.0, 0.0, 2.0, 4.0));
        assert_eq!(b.make_union(&a), u);
        assert_eq!(a.make_union(&a), a);
    }

    #[test]
    fn swap_and_cast() {
        let mut a = Recti::new(1, 2, 3, 4);
        let mut b = Recti::new(5, 6, 7, 8);
        a.swap(&mut b);
        assert_eq!(a, Recti::new(5, 6, 7, 8));
        assert_eq!(b, Recti::new(1, 2, 3, 4));

        let f = Rectf::new(1.5, -2.5, 3.9, 4.0);
        assert_eq!(f.cast::<i32>(), Recti::new(1, -2, 3, 4));
    }

    #[test]
    fn raster_round_trip() {
        let r = Rectf::new(10.0, 20.0, 30.0, 40.0);
        let raster: RasterRectu = to_raster_rect(r, 480.0);
        assert_eq!(raster, RasterRectu::new(10, 420, 30, 40));
        assert_eq!(raster.bottom(), 460);

        let back: Rectf = from_raster_rect(raster.cast::<f32>(), 480.0);
        assert_eq!(back, r);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Recti::new(1, 2, 3, 4)), "Rect @ (1, 2) 3x4");
        assert_eq!(format!("{:?}", RasterRectf::new(0.5, 0.0, 1.0, 2.0)), "Rect @ (0.5, 0.0) 1.0x2.0");
    }
}
