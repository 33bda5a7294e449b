use std::{cmp::Ordering, fmt, mem};

use itertools::Itertools;

use crate::{
    mix::{self, Components},
    Cast, One, Vector, Zero,
};

mod ops;
mod transform;

pub use transform::*;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

// Named like shader languages: columns first, then rows.

/// A matrix with 2 columns and 3 rows.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 columns and 4 rows.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 columns and 2 rows.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 columns and 4 rows.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 columns and 2 rows.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 columns and 3 rows.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `C` columns and `R` rows, and element type `T`.
///
/// The elements are stored column by column, so the element in column `j` and row `i` is at
/// offset `R * j + i` of the flat storage. This is the layout OpenGL and Direct3D expect for
/// uniform data, and [`bytemuck`] can be used to get at the raw bytes.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::identity`] (also returned by [`Default`]) has 1 on its diagonal and 0 everywhere
///   else. Non-square matrices get a diagonal as long as their smallest dimension.
/// - [`Matrix::ZERO`] and [`Matrix::splat`] fill every element with the same value.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::mix`] consumes scalars and vectors from left to right, in column-major order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its column and row.
/// - [`Matrix::from_slice`] copies column-major elements from a slice and zero-fills the rest.
/// - For square matrices, [`Matrix::from_diagonal`] creates a matrix with a specified diagonal
///   and zero outside of it.
/// - Free functions like [`translation_3d`], [`rotation_z`] and [`perspective_gl`] build
///   transformation and projection matrices.
///
/// A matrix needs at least one column and one row, so this is rejected at compile time:
///
/// ```compile_fail
/// # use clg::*;
/// let m = Matrix::<f32, 3, 0>::splat(1.0);
/// ```
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`.
/// The first element of the tuple is the *column*, the second is the *row*, matching the storage
/// order. [`Matrix::row_col`] takes its arguments in mathematical order (row first) instead.
///
/// ```
/// # use clg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 1);
/// assert_eq!(*mat.row_col(0, 1), 1);
/// ```
///
/// Indexing with a single `usize` yields a reference to a whole column:
///
/// ```
/// # use clg::*;
/// let mut mat = Mat2::identity();
/// mat[1] = vec2(5, 6);
/// assert_eq!(mat[1], vec2(5, 6));
/// assert_eq!(mat.row(1), vec2(0, 6));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>([Vector<T, R>; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable for Matrix<T, C, R> {}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = {
        let () = Self::NON_EMPTY;
        Self([Vector::<T, R>::ZERO; C])
    };

    /// Returns a matrix with every element set to 0.
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal (where the column index equals the row index)
    /// and 0 everywhere else. Multiplying any vector with this matrix returns the vector
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(Mat2x3::<i32>::identity(), Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|col, row| if col == row { T::ONE } else { T::ZERO })
    }
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    const NON_EMPTY: () = assert!(
        C > 0 && R > 0,
        "matrices must have at least one column and row"
    );

    /// Creates a matrix with each element initialized to `elem`.
    ///
    /// Note that this fills the *entire* matrix, not only the diagonal.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        let () = Self::NON_EMPTY;
        Self([Vector::splat(elem); C])
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        let () = Self::NON_EMPTY;
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (column and row) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_fn(|col, row| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let () = Self::NON_EMPTY;
        Self(std::array::from_fn(|col| Vector::from_fn(|row| cb(col, row))))
    }

    /// Creates a matrix from a mixture of scalars and vectors, filling it in column-major order.
    ///
    /// The number of components must be exactly `C * R`, otherwise the call fails to compile. See
    /// the [`mix`][crate::mix] module for details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let m = Mat2::<f32>::mix((vec2(1.0, 2.0), 3.0, 4.0));
    /// assert_eq!(m[0], vec2(1.0, 2.0));
    /// assert_eq!(m[1], vec2(3.0, 4.0));
    /// ```
    pub fn mix<S>(components: S) -> Self
    where
        T: Zero + Copy,
        S: Components<T>,
    {
        let mut out = Self::ZERO;
        mix::fill::<T, S, C, R>(components, |i, c| out.0[i / R][i % R] = c);
        out
    }

    /// Creates a matrix from at most `C * R` column-major elements.
    ///
    /// Elements not covered by `slice` are set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has more than `C * R` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let m = Mat2::from_slice(&[1, 2, 3]);
    /// assert_eq!(m, Matrix::from_columns([[1, 2], [3, 0]]));
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            slice.len() <= C * R,
            "attempt to assign {} elements to a {}x{} matrix",
            slice.len(),
            C,
            R
        );
        Self::from_fn(|col, row| slice.get(R * col + row).copied().unwrap_or(T::ZERO))
    }

    /// Creates a matrix from at most `C * R` column-major elements, returning an error if the
    /// slice is too long.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert_eq!(Mat2::try_from_slice(&[1]).unwrap(), Matrix::from_columns([[1, 0], [0, 0]]));
    /// assert!(Mat2::try_from_slice(&[0; 5]).is_err());
    /// ```
    pub fn try_from_slice(slice: &[T]) -> anyhow::Result<Self>
    where
        T: Zero + Copy,
    {
        if slice.len() > C * R {
            anyhow::bail!(
                "cannot create a {}x{} matrix from a slice of {} elements",
                C,
                R,
                slice.len()
            );
        }
        Ok(Self::from_slice(slice))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|col, row| self[(row, col)])
    }

    /// Returns a reference to the element in column `col` and row `row`, or [`None`] if out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(0, 1), Some(&3));
    /// assert_eq!(mat.get(0, 2), None);
    /// ```
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.as_slice().get(row))
    }

    /// Returns a mutable reference to the element in column `col` and row `row`, or [`None`] if
    /// out of bounds.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|col| col.as_mut_slice().get_mut(row))
    }

    /// Returns a reference to the element at `row` and `col`, in mathematical argument order.
    ///
    /// This is the same element as `self[(col, row)]`.
    #[inline]
    pub fn row_col(&self, row: usize, col: usize) -> &T {
        &self[(col, row)]
    }

    /// Returns a mutable reference to the element at `row` and `col`, in mathematical argument
    /// order.
    #[inline]
    pub fn row_col_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(col, row)]
    }

    /// Returns a copy of the column with index `col`.
    ///
    /// Use `self[col]` to borrow the column instead.
    #[inline]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col]
    }

    /// Returns a copy of the row with index `row`.
    ///
    /// Rows are not contiguous in memory, so unlike columns they cannot be borrowed.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(col, row)])
    }

    /// Overwrites the row with index `row`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mut m = Mat2::identity();
    /// m.set_row(0, vec2(7, 8));
    /// assert_eq!(m, Matrix::from_rows([[7, 8], [0, 1]]));
    /// ```
    pub fn set_row(&mut self, row: usize, value: Vector<T, C>) {
        for (column, elem) in self.0.iter_mut().zip(value) {
            column[row] = elem;
        }
    }

    /// Returns the columns of this matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Returns mutable references to the columns of this matrix.
    #[inline]
    pub fn columns_mut(&mut self) -> &mut [Vector<T, R>; C] {
        &mut self.0
    }

    /// Converts this matrix into an array of its columns.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Returns an iterator over all elements, in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let m = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.iter().copied().collect::<Vec<_>>(), [1, 3, 2, 4]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flat_map(|column| column.iter())
    }

    /// Returns an iterator over mutable references to all elements, in column-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.0.iter_mut().flat_map(|column| column.iter_mut())
    }

    /// Exchanges all elements with those of `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.0, &mut other.0);
    }

    /// Returns whether the matrix has as many columns as rows.
    #[inline]
    pub const fn is_square(&self) -> bool {
        C == R
    }

    /// Returns whether the matrix has a single row.
    #[inline]
    pub const fn is_row_matrix(&self) -> bool {
        R == 1
    }

    /// Returns whether the matrix has a single column.
    #[inline]
    pub const fn is_column_matrix(&self) -> bool {
        C == 1
    }

    /// Returns whether every element for which `pred(col, row)` holds is exactly zero.
    fn zero_where(&self, pred: impl Fn(usize, usize) -> bool) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0.iter().enumerate().all(|(col, column)| {
            column
                .iter()
                .enumerate()
                .all(|(row, elem)| !pred(col, row) || *elem == T::ZERO)
        })
    }

    /// Returns whether the matrix is square and every element outside of its diagonal is exactly
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// assert!(Mat3f::identity().is_diagonal());
    /// assert!(!Mat2x3::<f32>::identity().is_diagonal());
    /// ```
    pub fn is_diagonal(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.is_square() && self.zero_where(|col, row| col != row)
    }

    /// Returns whether the matrix is square and every element below its diagonal is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 3],
    /// ]);
    /// assert!(m.is_upper_triangular());
    /// assert!(!m.is_lower_triangular());
    /// assert!(m.is_triangular());
    /// ```
    pub fn is_upper_triangular(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.is_square() && self.zero_where(|col, row| row > col)
    }

    /// Returns whether the matrix is square and every element above its diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.is_square() && self.zero_where(|col, row| row < col)
    }

    /// Returns whether the matrix is upper or lower triangular.
    pub fn is_triangular(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Compares `self` and `other` lexicographically in column-major order, skipping unordered
    /// (NaN) elements.
    pub fn compare(&self, other: &Self) -> Ordering
    where
        T: PartialOrd,
    {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.compare(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Converts each element to the scalar type `U`, with the semantics of an `as` cast.
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        T: Cast<U> + Copy,
    {
        Matrix(self.0.map(Vector::cast))
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// The overlapping block of columns and rows is copied. All other elements are taken from the
    /// [identity matrix](Matrix::identity), so growing a transform keeps it a valid transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let larger = mat.resize::<3, 3>();
    /// assert_eq!(larger, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2>
    where
        T: Zero + One + Copy,
    {
        let mut out = Matrix::identity();
        for (col, column) in self.0.into_iter().enumerate().take(C2) {
            for (row, elem) in column.into_iter().enumerate().take(R2) {
                out[(col, row)] = elem;
            }
        }
        out
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|col, row| if col == row { diag[col] } else { T::ZERO })
    }
}

/// The identity matrix.
impl<T, const C: usize, const R: usize> Default for Matrix<T, C, R>
where
    T: Zero + One,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, const C: usize, const R: usize> IntoIterator for Matrix<T, C, R> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Vector<T, R>, C>>;

    /// Consumes the matrix, yielding its elements in column-major order.
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().flatten()
    }
}

/// Converts `matrix` to scalar type `U`, with the semantics of an `as` cast.
#[inline]
pub fn cast_scalars<U, T: Cast<U> + Copy, const C: usize, const R: usize>(
    matrix: Matrix<T, C, R>,
) -> Matrix<U, C, R> {
    matrix.cast()
}

/// Changes the dimensions of `matrix`, filling new cells from the identity matrix.
///
/// See [`Matrix::resize`].
#[inline]
pub fn cast_dimensions<const C2: usize, const R2: usize, T, const C: usize, const R: usize>(
    matrix: Matrix<T, C, R>,
) -> Matrix<T, C2, R2>
where
    T: Zero + One + Copy,
{
    matrix.resize()
}

/// Turns a vector into a matrix with a single column.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let m = cast_column_matrix(vec3(1, 2, 3));
/// assert!(m.is_column_matrix());
/// assert_eq!(m * vec1(2), vec3(2, 4, 6));
/// ```
#[inline]
pub fn cast_column_matrix<T, const N: usize>(vector: Vector<T, N>) -> Matrix<T, 1, N> {
    Matrix([vector])
}

/// Turns a vector into a matrix with a single row.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let row = cast_row_matrix(vec3(1, 2, 3));
/// let col = cast_column_matrix(vec3(4, 5, 6));
/// assert_eq!(row * col, Matrix::from_columns([[32]]));
/// ```
#[inline]
pub fn cast_row_matrix<T, const N: usize>(vector: Vector<T, N>) -> Matrix<T, N, 1> {
    Matrix(vector.into_array().map(|elem| Vector::from([elem])))
}

impl<T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize, const R: usize>(
            &'a Matrix<T, C, R>,
            usize,
        );
        impl<'a, T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for FormatRow<'a, T, C, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(col, self.1)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Prints one row per line.
///
/// Format options (width, precision) apply to every element.
///
/// ```
/// # use clg::*;
/// let m = Matrix::from_rows([[1.0, -2.5], [0.25, 4.0]]);
/// assert_eq!(format!("{m:5.2}"), "[  1.00, -2.50 ]\n[  0.25,  4.00 ]");
/// ```
impl<T: fmt::Display, const C: usize, const R: usize> fmt::Display for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            if row != 0 {
                writeln!(f)?;
            }
            let elems = self.0.iter().map(|column| &column[row]);
            write!(f, "[ ")?;
            fmt::Display::fmt(&elems.format(", "), f)?;
            write!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, Mat2x3, Vec3};

    use super::*;

    fn random_matrix<const C: usize, const R: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, C, R> {
        Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
    }

    #[test]
    fn storage_is_column_major() {
        let m = Mat2x3::from_fn(|col, row| col * 10 + row);
        assert_eq!(m.into_iter().collect::<Vec<_>>(), [0, 1, 2, 10, 11, 12]);
        assert_eq!(bytemuck::cast::<_, [u32; 6]>(m.cast::<u32>()), [0, 1, 2, 10, 11, 12]);
        assert_eq!(m[1], vec3(10, 11, 12));
        assert_eq!(m.row(2), vec2(2, 12));
        assert_eq!(m[(1, 2)], *m.row_col(2, 1));
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert!(mat.is_diagonal());
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(format!("{}", mat), "[ 0, 1 ]\n[ 2, 3 ]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::default()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::splat(7).iter().filter(|&&e| e == 7).count(), 9);
    }

    #[rustfmt::skip]
    #[test]
    fn resize_fills_from_identity() {
        let mat = Matrix::from_rows([
            [5, 6],
            [7, 8],
        ]);

        let larger: Mat4<i32> = cast_dimensions(mat);
        assert_eq!(larger, Matrix::from_rows([
            [5, 6, 0, 0],
            [7, 8, 0, 0],
            [0, 0, 1, 0],
            [0, 0, 0, 1],
        ]));
        assert_eq!(cast_dimensions::<2, 2, _, 4, 4>(larger), mat);

        let wide = mat.resize::<3, 2>();
        assert_eq!(wide, Matrix::from_rows([
            [5, 6, 0],
            [7, 8, 0],
        ]));
    }

    #[test]
    fn predicates() {
        let m = Mat3::<i32>::identity();
        assert!(m.is_square());
        assert!(m.is_diagonal());
        assert!(m.is_upper_triangular());
        assert!(m.is_lower_triangular());

        let mut lower = m;
        lower[(0, 2)] = 5;
        assert!(!lower.is_diagonal());
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());
        assert!(lower.is_triangular());

        let mut neither = lower;
        neither[(2, 0)] = 5;
        assert!(!neither.is_triangular());

        let wide = Mat3x2::<i32>::identity();
        assert!(!wide.is_square());
        assert!(!wide.is_diagonal());
        assert!(!wide.is_triangular());

        assert!(cast_row_matrix(vec3(1, 2, 3)).is_row_matrix());
        assert!(cast_column_matrix(vec3(1, 2, 3)).is_column_matrix());
    }

    #[test]
    fn triangular_requires_square() {
        // Zero below the main diagonal, but 2 columns and 3 rows.
        #[rustfmt::skip]
        let tall = Mat2x3::from_rows([
            [1, 2],
            [0, 3],
            [0, 0],
        ]);
        assert!(!tall.is_upper_triangular());
        assert!(!tall.is_lower_triangular());
        assert!(!tall.is_triangular());

        // Zero above the main diagonal, but 3 columns and 2 rows.
        #[rustfmt::skip]
        let wide = Mat3x2::from_rows([
            [1, 0, 0],
            [2, 3, 0],
        ]);
        assert!(!wide.is_lower_triangular());
        assert!(!wide.is_upper_triangular());
        assert!(!Mat3x2::<i32>::ZERO.is_triangular());
        assert!(!Mat3x2::<i32>::ZERO.is_diagonal());

        assert!(Mat3::<i32>::ZERO.is_upper_triangular());
        assert!(Mat3::<i32>::ZERO.is_lower_triangular());
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat2::from_slice(&[1, 2, 3, 4]);
        assert_eq!(a * a, Mat2::from_slice(&[7, 10, 15, 22]));

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(*c.row_col(0, 1), a.row_col(0, 0) * b.row_col(0, 1) + a.row_col(0, 1) * b.row_col(1, 1));
        assert_eq!(*c.row_col(2, 2), a.row_col(2, 0) * b.row_col(0, 2) + a.row_col(2, 1) * b.row_col(1, 2));
    }

    #[test]
    fn identity_law() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..50 {
            let m: Matrix<f64, 3, 4> = random_matrix(&mut rng);
            assert_eq!(m * Mat3::identity(), m);
            assert_eq!(Mat4::identity() * m, m);
        }
    }

    #[test]
    fn transpose_involution() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..50 {
            let m: Matrix<f64, 2, 4> = random_matrix(&mut rng);
            assert_eq!(m.transpose().transpose(), m);
            assert_eq!(m.transpose().row(1), m.column(1));
        }
    }

    #[test]
    fn matches_nalgebra() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..50 {
            let a: Matrix<f64, 3, 2> = random_matrix(&mut rng);
            let b: Matrix<f64, 4, 3> = random_matrix(&mut rng);
            let v: Vec3<f64> = Vector::from_fn(|_| rng.f64());

            let na = nalgebra::SMatrix::<f64, 2, 3>::from_column_slice(bytemuck::cast_slice(&[a]));
            let nb = nalgebra::SMatrix::<f64, 3, 4>::from_column_slice(bytemuck::cast_slice(&[b]));
            let nv = nalgebra::SVector::<f64, 3>::from_column_slice(v.as_slice());

            assert_abs_diff_eq!(a * b, Matrix::from_slice((na * nb).as_slice()), epsilon = 1e-9);
            assert_abs_diff_eq!(a * v, Vector::from_slice((na * nv).as_slice()), epsilon = 1e-9);
            assert_eq!(a.transpose(), Matrix::from_slice(na.transpose().as_slice()));
        }
    }

    #[test]
    fn swap_and_ordering() {
        let mut a = Mat2::splat(1);
        let mut b = Mat2::identity();
        a.swap(&mut b);
        assert_eq!(a, Mat2::identity());
        assert_eq!(b, Mat2::splat(1));

        assert!(a < b);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(-a, a * -1);
    }

    #[test]
    fn slices() {
        assert_eq!(Mat2::<u8>::from_slice(&[]), Mat2::ZERO);
        assert_eq!(Mat2::<f32>::mix((1.0, 2.0, 3.0, 4.0)), Mat2::from_slice(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    #[should_panic(expected = "attempt to assign 5 elements to a 2x2 matrix")]
    fn oversized_slice() {
        Mat2::from_slice(&[0; 5]);
    }

    #[test]
    fn fallible_slices() {
        let m = Mat2x3::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m, Mat2x3::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(Mat2::try_from_slice(&[7]).unwrap(), Matrix::from_columns([[7, 0], [0, 0]]));

        let err = Mat2x3::try_from_slice(&[0; 7]).unwrap_err();
        assert_eq!(err.to_string(), "cannot create a 2x3 matrix from a slice of 7 elements");
    }

    #[test]
    fn scalar_ops() {
        let mut m = Mat2::splat(2.0);
        assert_eq!(m + 1.0, Mat2::splat(3.0));
        assert_eq!(m - 1.0, Mat2::splat(1.0));
        assert_eq!(m * 2.0, Mat2::splat(4.0));
        assert_eq!(m / 2.0, Mat2::splat(1.0));
        m *= 3.0;
        m /= 6.0;
        m += Mat2::identity();
        m -= Mat2::splat(1.0);
        assert_eq!(m, Mat2::identity());

        let mut r = Mat2f::identity();
        r *= Mat2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(r.row(0), vec2(0.0, 1.0));
    }
}
