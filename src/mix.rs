//! Building vectors and matrices from a mixture of scalars and smaller vectors.
//!
//! [`Vector::mix`] and [`Matrix::mix`] take a tuple whose fields are consumed from left to right.
//! A scalar contributes itself, a vector or array contributes all of its elements in order, and a
//! nested tuple contributes whatever its own fields contribute. The total number of components
//! must match the number of elements of the target exactly, which is checked at compile time.
//!
//! ```
//! # use clg::*;
//! let v: Vec4<f64> = Vector::mix((1.5, vec2(2.0, 3.0), 4.0));
//! assert_eq!(v, [1.5, 2.0, 3.0, 4.0]);
//!
//! let m = Mat2::<i32>::mix((vec2(1, 2), [3, 4]));
//! assert_eq!(m, Mat2::from_columns([vec2(1, 2), vec2(3, 4)]));
//! ```
//!
//! Supplying the wrong number of components is rejected when the constructor is instantiated:
//!
//! ```compile_fail
//! # use clg::*;
//! let v: Vec3<f32> = Vector::mix((1.0, vec3(2.0, 3.0, 4.0)));
//! ```
//!
//! [`Vector::mix`]: crate::Vector::mix
//! [`Matrix::mix`]: crate::Matrix::mix

use std::marker::PhantomData;

use crate::{Scalar, Vector};

/// Types that can contribute an ordered sequence of `T` components to a mixture constructor.
///
/// Implemented for scalars, [`Vector`]s, arrays, and tuples of up to 16 fields that implement
/// [`Components`] themselves.
pub trait Components<T> {
    /// The number of components contributed.
    const COUNT: usize;

    /// Passes every component to `sink`, from first to last.
    fn push_into<F: FnMut(T)>(self, sink: &mut F);
}

impl<T: Scalar> Components<T> for T {
    const COUNT: usize = 1;

    #[inline]
    fn push_into<F: FnMut(T)>(self, sink: &mut F) {
        sink(self);
    }
}

impl<T: Scalar, const M: usize> Components<T> for Vector<T, M> {
    const COUNT: usize = M;

    #[inline]
    fn push_into<F: FnMut(T)>(self, sink: &mut F) {
        self.into_array().into_iter().for_each(sink);
    }
}

impl<T: Scalar, const M: usize> Components<T> for [T; M] {
    const COUNT: usize = M;

    #[inline]
    fn push_into<F: FnMut(T)>(self, sink: &mut F) {
        self.into_iter().for_each(sink);
    }
}

macro_rules! tuple_components {
    ($($field:ident),+) => {
        impl<T, $($field: Components<T>),+> Components<T> for ($($field,)+) {
            const COUNT: usize = 0 $(+ <$field as Components<T>>::COUNT)+;

            #[allow(non_snake_case)]
            #[inline]
            fn push_into<F: FnMut(T)>(self, sink: &mut F) {
                let ($($field,)+) = self;
                $( $field.push_into(sink); )+
            }
        }
    };
}

tuple_components!(A);
tuple_components!(A, B);
tuple_components!(A, B, C);
tuple_components!(A, B, C, D);
tuple_components!(A, B, C, D, E);
tuple_components!(A, B, C, D, E, F0);
tuple_components!(A, B, C, D, E, F0, G);
tuple_components!(A, B, C, D, E, F0, G, H);
tuple_components!(A, B, C, D, E, F0, G, H, I);
tuple_components!(A, B, C, D, E, F0, G, H, I, J);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K, L);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K, L, M);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K, L, M, N);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K, L, M, N, O);
tuple_components!(A, B, C, D, E, F0, G, H, I, J, K, L, M, N, O, P);

/// Compile-time check that `S` supplies exactly `N * M` components.
///
/// Referencing [`ExactCount::OK`] forces evaluation of the assertion when the surrounding function
/// is monomorphized.
pub(crate) struct ExactCount<T, S, const N: usize, const M: usize>(PhantomData<fn() -> (T, S)>);

impl<T, S: Components<T>, const N: usize, const M: usize> ExactCount<T, S, N, M> {
    pub(crate) const OK: () = {
        assert!(S::COUNT <= N * M, "mixture constructor got too many components");
        assert!(S::COUNT >= N * M, "mixture constructor got too few components");
    };
}

/// Feeds the components of `source` into `sink`, which receives each component's flat index.
pub(crate) fn fill<T, S, const N: usize, const M: usize>(source: S, mut sink: impl FnMut(usize, T))
where
    S: Components<T>,
{
    let () = ExactCount::<T, S, N, M>::OK;

    let mut index = 0;
    source.push_into(&mut |component| {
        sink(index, component);
        index += 1;
    });
}
