//! Conversions from and to [`nalgebra`] types.
//!
//! Both libraries store matrices in column-major order, so conversions copy the elements
//! without rearranging them.

use nalgebra::{SMatrix, SVector, Scalar as NaScalar};

use crate::{Matrix, Vector};

impl<T: NaScalar, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        SVector::from_array_storage(nalgebra::ArrayStorage([v.into_array()]))
    }
}

impl<T: NaScalar + Copy, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        let [column] = v.data.0;
        Vector::from(column)
    }
}

/// `nalgebra` names dimensions rows first, so `SMatrix<T, R, C>` corresponds to
/// `Matrix<T, C, R>`.
impl<T: NaScalar, const C: usize, const R: usize> From<Matrix<T, C, R>> for SMatrix<T, R, C> {
    fn from(m: Matrix<T, C, R>) -> Self {
        SMatrix::from_array_storage(nalgebra::ArrayStorage(m.into_columns().map(Vector::into_array)))
    }
}

impl<T: NaScalar, const C: usize, const R: usize> From<SMatrix<T, R, C>> for Matrix<T, C, R> {
    fn from(m: SMatrix<T, R, C>) -> Self {
        Matrix::from_columns(m.data.0)
    }
}
