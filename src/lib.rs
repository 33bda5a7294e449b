//! Fixed-dimension vectors, matrices and rectangles for graphics and geometry code.
//!
//! All types in this library are small `Copy` values whose dimensions are part of their type:
//!
//! - [`Vector<T, N>`] stores `N` elements of type `T`. Aliases like [`Vec3f`], [`Point`],
//!   [`Size`] and [`Rgba8`] name common shapes, and add named accessors and packed color
//!   conversions.
//! - [`Matrix<T, C, R>`] has `C` columns and `R` rows, stored column by column so that its raw
//!   bytes can be handed to OpenGL or Direct3D. The builders in the crate root create transform
//!   and projection matrices ([`translation_3d`], [`rotation_z`], [`perspective_fov_gl`], ...).
//! - [`Rect<T, Y, I>`] is an axis-aligned rectangle whose Y axis orientation and edge inclusivity
//!   are chosen through the marker types [`StandardY`]/[`InvertedY`] and
//!   [`Closed`]/[`RightOpen`].
//!
//! Vectors and matrices can be built from a mixture of scalars and smaller vectors (see [`mix`]).
//! The element-wise kernels shared by vectors and matrices are available for raw arrays in
//! [`array`], scalar helpers in [`math`], and interpolation curves in [`interp`].
//!
//! Vectors and matrices of floats can be compared approximately with the [`approx`] crate's
//! assertions.
//!
//! # Examples
//!
//! ```
//! # use approx::assert_relative_eq;
//! # use clg::*;
//! let model = translation_3d(vec3(1.0, 0.0, 0.0)) * rotation_z(std::f32::consts::FRAC_PI_2);
//! let p = model * vec4(1.0, 0.0, 0.0, 1.0);
//! assert_relative_eq!(p, vec4(1.0, 1.0, 0.0, 1.0));
//!
//! let m = Mat2::<i32>::mix((vec2(1, 2), 3, 4));
//! assert_eq!(m.row(0), vec2(1, 3));
//! assert_eq!(m * m, Matrix::from_columns([[7, 10], [15, 22]]));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API is significantly simpler when
//!   const generics specify all dimensions, and mismatched dimensions become type errors.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No determinants, inverses, quaternions or SIMD. Use a full linear algebra library for those;
//!   the optional `nalgebra` feature adds conversions to and from its fixed-size types.

pub mod array;
pub mod interp;
pub mod math;
pub mod mix;

mod matrix;
mod rect;
mod traits;
mod vector;

#[cfg(feature = "nalgebra")]
mod interop;

#[cfg(test)]
mod test;

pub use matrix::*;
pub use mix::Components;
pub use rect::*;
pub use traits::*;
pub use vector::*;
