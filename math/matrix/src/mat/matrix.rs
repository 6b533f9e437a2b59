use std::fmt;
use std::marker::PhantomData;

use crate::*;

struct Dimension<const H: usize, const W: usize>;

impl<const H: usize, const W: usize> Dimension<H, W> {
  const NON_EMPTY: () = assert!(H > 0 && W > 0, "matrix dimensions must be positive");
}

/// A `H x W` matrix owning (or sharing, after [`Matrix::transpose`]) a flat buffer of `H * W`
/// elements laid out by `O`.
///
/// `H` and `W` are always the logical dimensions. The transposed flag only changes which formula
/// maps a logical pair into the buffer.
pub struct Matrix<T, const H: usize, const W: usize, O: DenseOrder = RowMajor> {
  pub(crate) buffer: DenseBuffer<T>,
  pub(crate) transposed: bool,
  order: PhantomData<O>,
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Matrix<T, H, W, O> {
  pub(crate) fn from_parts(buffer: DenseBuffer<T>, transposed: bool) -> Self {
    let () = Dimension::<H, W>::NON_EMPTY;
    Self {
      buffer,
      transposed,
      order: PhantomData,
    }
  }

  pub fn zeros() -> Self {
    Self::filled(T::zero())
  }

  pub fn filled(value: T) -> Self {
    Self::from_parts(DenseBuffer::filled(H * W, value), false)
  }

  /// Values are taken in storage order. Anything past `H * W` values is dropped, missing
  /// values stay zero.
  pub fn from_raw(values: impl IntoIterator<Item = T>) -> Self {
    let matrix = Self::zeros();
    {
      let mut data = matrix.buffer.borrow_mut();
      data
        .iter_mut()
        .zip(values)
        .for_each(|(slot, value)| *slot = value);
    }
    matrix
  }

  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    let matrix = Self::zeros();
    {
      let mut data = matrix.buffer.borrow_mut();
      for row in 0..H {
        for column in 0..W {
          data[O::convert_to_index(H, W, row, column, false)] = f(row, column);
        }
      }
    }
    matrix
  }

  pub fn from_rows(rows: [[T; W]; H]) -> Self {
    Self::from_fn(|row, column| rows[row][column])
  }

  pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
    let width = rows.iter().map(Vec::len).find(|&len| len != W).unwrap_or(W);
    if rows.len() != H || width != W {
      return Err(MatrixError::IncompatibleDimensions {
        expected: (H, W),
        found: (rows.len(), width),
      });
    }
    Ok(Self::from_fn(|row, column| rows[row][column]))
  }

  pub fn to_rows(&self) -> Vec<Vec<T>> {
    (0..H)
      .map(|row| (0..W).map(|c| self.read_element(row, c)).collect())
      .collect()
  }

  /// Zero copy transpose: the result shares this matrix's buffer with the flag inverted, so a
  /// write through either one is seen by both. Use [`Matrix::transposed_copy`] for an
  /// independent result.
  #[must_use]
  pub fn transpose(&self) -> Matrix<T, W, H, O> {
    Matrix::from_parts(self.buffer.share(), !self.transposed)
  }

  #[must_use]
  pub fn transposed_copy(&self) -> Matrix<T, W, H, O> {
    Matrix::from_parts(self.buffer.deep_copy(), !self.transposed)
  }

  /// If another matrix aliases this buffer, as the source or result of a transpose does.
  pub fn is_sharing_storage(&self) -> bool {
    self.buffer.is_shared()
  }

  /// Stop sharing the buffer with any other matrix.
  pub fn detach(&mut self) {
    self.buffer.detach()
  }

  /// A copy of the physical buffer in storage order.
  pub fn data(&self) -> Vec<T> {
    self.buffer.to_vec()
  }

  /// Replace the element at (row, column) with `f` applied to it.
  #[track_caller]
  pub fn update_element(&mut self, row: usize, column: usize, f: impl FnOnce(T) -> T) {
    let index = self.convert_to_index(row, column);
    self.buffer.update(index, f)
  }

  #[track_caller]
  pub fn convert_to_index(&self, row: usize, column: usize) -> usize {
    ensure(self.check_pair(row, column));
    O::convert_to_index(H, W, row, column, self.transposed)
  }

  /// Re-lay the elements out in `NO`, logical entries unchanged.
  pub fn change_order<NO: DenseOrder>(&self) -> Matrix<T, H, W, NO> {
    if O::KIND == NO::KIND {
      log::trace!("change_order within {:?}, copying the buffer as is", O::KIND);
      return Matrix::from_parts(self.buffer.deep_copy(), self.transposed);
    }
    Matrix::from_fn(|row, column| self.read_element(row, column))
  }

  pub fn map<X: Element>(&self, f: impl FnMut(T) -> X) -> Matrix<X, H, W, O> {
    let data: Box<[X]> = self.buffer.to_vec().into_iter().map(f).collect();
    Matrix::from_parts(DenseBuffer::from_boxed(data), self.transposed)
  }
}

impl<T, const H: usize, const W: usize, O> Matrix<T, H, W, O>
where
  T: Element + bytemuck::Pod,
  O: DenseOrder,
{
  /// Borrow the physical buffer as bytes, for uploading to a GPU buffer and the like.
  pub fn with_raw_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
    let data = self.buffer.to_vec();
    f(bytemuck::cast_slice::<T, u8>(&data))
  }
}

/// Single index addressing for column vectors.
impl<T: Element, const N: usize, O: DenseOrder> Matrix<T, N, 1, O> {
  /// The linear index of a column vector is its row in every order and transposed state.
  #[track_caller]
  pub fn get(&self, index: usize) -> T {
    self.element(index, 0)
  }

  #[track_caller]
  pub fn set(&mut self, index: usize, value: T) {
    self.set_element(index, 0, value)
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Grid for Matrix<T, H, W, O> {
  type Element = T;
  type Order = O;

  fn height(&self) -> usize {
    H
  }
  fn width(&self) -> usize {
    W
  }
  fn is_transposed(&self) -> bool {
    self.transposed
  }

  #[inline]
  fn read_element(&self, row: usize, column: usize) -> T {
    self
      .buffer
      .get(O::convert_to_index(H, W, row, column, self.transposed))
  }

  #[track_caller]
  fn element_at(&self, index: usize) -> T {
    ensure(self.check_index(index));
    self.buffer.get(index)
  }

  fn try_element_at(&self, index: usize) -> Result<T, MatrixError> {
    self.check_index(index)?;
    Ok(self.buffer.get(index))
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> GridMut for Matrix<T, H, W, O> {
  #[inline]
  fn write_element(&mut self, row: usize, column: usize, value: T) {
    self.buffer.set(
      O::convert_to_index(H, W, row, column, self.transposed),
      value,
    )
  }

  #[track_caller]
  fn set_element_at(&mut self, index: usize, value: T) {
    ensure(self.check_index(index));
    self.buffer.set(index, value)
  }

  fn try_set_element_at(&mut self, index: usize, value: T) -> Result<(), MatrixError> {
    self.check_index(index)?;
    self.buffer.set(index, value);
    Ok(())
  }
}

impl<T: Element, const N: usize, O: DenseOrder> SquareGrid for Matrix<T, N, N, O> {}

/// Deep copy, the clone never aliases its source.
impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Clone for Matrix<T, H, W, O> {
  fn clone(&self) -> Self {
    Self::from_parts(self.buffer.deep_copy(), self.transposed)
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Default for Matrix<T, H, W, O> {
  fn default() -> Self {
    Self::zeros()
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> From<[[T; W]; H]>
  for Matrix<T, H, W, O>
{
  fn from(rows: [[T; W]; H]) -> Self {
    Self::from_rows(rows)
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> FromIterator<T>
  for Matrix<T, H, W, O>
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_raw(iter)
  }
}

impl<T, const H: usize, const W: usize, O, O2> PartialEq<Matrix<T, H, W, O2>> for Matrix<T, H, W, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  fn eq(&self, other: &Matrix<T, H, W, O2>) -> bool {
    if O::KIND == O2::KIND
      && self.buffer.ptr_eq(&other.buffer)
      && self.transposed == other.transposed
    {
      return true;
    }
    grid_eq(self, other)
  }
}

impl<T, const H: usize, const W: usize, O> fmt::Debug for Matrix<T, H, W, O>
where
  T: Element + fmt::Debug,
  O: DenseOrder,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Matrix")
      .field("rows", &self.to_rows())
      .field("order", &O::KIND)
      .field("transposed", &self.transposed)
      .finish()
  }
}

impl<T, const H: usize, const W: usize, O> fmt::Display for Matrix<T, H, W, O>
where
  T: Element + fmt::Display,
  O: DenseOrder,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_grid(self, f)
  }
}
