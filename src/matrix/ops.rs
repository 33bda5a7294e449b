use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix, Vector};

impl<T, const C: usize, const R: usize> Index<(usize, usize)> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const C: usize, const R: usize> PartialEq<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, C, R>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, const C: usize, const R: usize> Eq for Matrix<T, C, R> where T: Eq {}

/// Lexicographic ordering in column-major order.
impl<T, const C: usize, const R: usize> PartialOrd for Matrix<T, C, R>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Compares the matrices column by column.
impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
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

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
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

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
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

impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

/// Element-wise operators. Matrices only support addition and subtraction element by element,
/// but every operator can take a scalar.
macro_rules! elementwise {
    ($op:ident :: $f:ident, $assign:ident :: $assign_f:ident) => {
        impl<T, const C: usize, const R: usize> $assign for Matrix<T, C, R>
        where
            T: $assign + Copy,
        {
            fn $assign_f(&mut self, rhs: Self) {
                for (l, r) in self.0.iter_mut().zip(rhs.0) {
                    l.$assign_f(r);
                }
            }
        }

        impl<T, const C: usize, const R: usize> $op for Matrix<T, C, R>
        where
            T: $assign + Copy,
        {
            type Output = Self;

            fn $f(mut self, rhs: Self) -> Self::Output {
                self.$assign_f(rhs);
                self
            }
        }
    };
}

elementwise!(Add::add, AddAssign::add_assign);
elementwise!(Sub::sub, SubAssign::sub_assign);

macro_rules! scalar {
    ($op:ident :: $f:ident, $assign:ident :: $assign_f:ident) => {
        impl<T, const C: usize, const R: usize> $assign<T> for Matrix<T, C, R>
        where
            T: $assign + Copy,
        {
            fn $assign_f(&mut self, rhs: T) {
                for column in &mut self.0 {
                    column.$assign_f(rhs);
                }
            }
        }

        impl<T, const C: usize, const R: usize> $op<T> for Matrix<T, C, R>
        where
            T: $assign + Copy,
        {
            type Output = Self;

            fn $f(mut self, rhs: T) -> Self::Output {
                self.$assign_f(rhs);
                self
            }
        }
    };
}

scalar!(Add::add, AddAssign::add_assign);
scalar!(Sub::sub, SubAssign::sub_assign);
scalar!(Mul::mul, MulAssign::mul_assign);
scalar!(Div::div, DivAssign::div_assign);

/// Matrix * Column Vector.
impl<T, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(col, row)] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// An `N`-column matrix can be multiplied with any matrix that has `N` rows.
impl<T, const N: usize, const M: usize, const P: usize> Mul<Matrix<T, P, N>> for Matrix<T, N, M>
where
    T: Number,
{
    type Output = Matrix<T, P, M>;

    fn mul(self, rhs: Matrix<T, P, N>) -> Self::Output {
        Matrix::from_fn(|col, row| {
            (0..N).fold(T::ZERO, |acc, k| acc + self[(k, row)] * rhs[(col, k)])
        })
    }
}

/// Multiplies `self` with a square matrix from the right.
impl<T, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

macro_rules! scalar_lhs {
    ($($types:ty),+) => {
        $(
            /// Scalar-Matrix multiplication (scaling).
            impl<const C: usize, const R: usize> Mul<Matrix<$types, C, R>> for $types {
                type Output = Matrix<$types, C, R>;

                #[inline]
                fn mul(self, rhs: Matrix<$types, C, R>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
