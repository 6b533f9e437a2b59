use std::fmt::Debug;
use std::marker::PhantomData;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrderKind {
  RowMajor,
  ColumnMajor,
}

/// Maps a logical (row, column) pair to the position in a flat buffer.
///
/// The transposed flag is orthogonal to the order: a transposed row major matrix is addressed
/// with the column major formula and the other way round, so toggling the flag never moves data.
pub trait StorageOrder: Copy + Default + Debug + 'static {
  const KIND: OrderKind;

  /// `height` and `width` are the logical dimensions of the addressed matrix.
  fn convert_to_index(
    height: usize,
    width: usize,
    row: usize,
    column: usize,
    transposed: bool,
  ) -> usize;

  #[inline]
  fn is_row_major() -> bool {
    Self::KIND == OrderKind::RowMajor
  }

  #[inline]
  fn is_column_major() -> bool {
    Self::KIND == OrderKind::ColumnMajor
  }

  /// If consecutive flat indices walk along a row in the given state.
  #[inline]
  fn is_row_contiguous(transposed: bool) -> bool {
    Self::is_row_major() != transposed
  }

  /// The inverse of [`StorageOrder::convert_to_index`].
  #[inline]
  fn index_to_pair(height: usize, width: usize, index: usize, transposed: bool) -> (usize, usize) {
    if Self::is_row_contiguous(transposed) {
      (index / width, index % width)
    } else {
      (index % height, index / height)
    }
  }
}

mod sealed {
  pub trait Sealed {}
}

/// Orders a matrix may own its buffer in. Composed orders such as [`CofactorOrder`] are not
/// dense, which keeps them out of `Matrix` and `change_order` at the type level.
pub trait DenseOrder: StorageOrder + sealed::Sealed {}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl sealed::Sealed for RowMajor {}
impl DenseOrder for RowMajor {}
impl StorageOrder for RowMajor {
  const KIND: OrderKind = OrderKind::RowMajor;

  #[inline]
  fn convert_to_index(
    height: usize,
    width: usize,
    row: usize,
    column: usize,
    transposed: bool,
  ) -> usize {
    if transposed {
      row + column * height
    } else {
      column + row * width
    }
  }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl sealed::Sealed for ColumnMajor {}
impl DenseOrder for ColumnMajor {}
impl StorageOrder for ColumnMajor {
  const KIND: OrderKind = OrderKind::ColumnMajor;

  #[inline]
  fn convert_to_index(
    height: usize,
    width: usize,
    row: usize,
    column: usize,
    transposed: bool,
  ) -> usize {
    if transposed {
      column + row * width
    } else {
      row + column * height
    }
  }
}

/// Addresses a window of a parent matrix: view local coordinates are shifted by the window
/// origin, then the base order is applied with the parent's dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CofactorOrder<O>(PhantomData<O>);

impl<O: StorageOrder> CofactorOrder<O> {
  #[inline]
  pub fn convert_to_index_with_offset(
    parent_height: usize,
    parent_width: usize,
    row: usize,
    column: usize,
    transposed: bool,
    row_src: usize,
    column_src: usize,
  ) -> usize {
    O::convert_to_index(
      parent_height,
      parent_width,
      row + row_src,
      column + column_src,
      transposed,
    )
  }
}

impl<O: StorageOrder> StorageOrder for CofactorOrder<O> {
  const KIND: OrderKind = O::KIND;

  #[inline]
  fn convert_to_index(
    height: usize,
    width: usize,
    row: usize,
    column: usize,
    transposed: bool,
  ) -> usize {
    Self::convert_to_index_with_offset(height, width, row, column, transposed, 0, 0)
  }
}

#[test]
fn row_major_formula() {
  assert_eq!(RowMajor::convert_to_index(2, 3, 1, 2, false), 5);
  assert_eq!(RowMajor::convert_to_index(2, 3, 0, 1, false), 1);
  // a transposed row major 3x2 reads its 2x3 source column by column
  assert_eq!(RowMajor::convert_to_index(3, 2, 1, 0, true), 1);
  assert_eq!(RowMajor::convert_to_index(3, 2, 2, 1, true), 5);
}

#[test]
fn column_major_formula() {
  assert_eq!(ColumnMajor::convert_to_index(2, 3, 1, 2, false), 5);
  assert_eq!(ColumnMajor::convert_to_index(2, 3, 1, 0, false), 1);
  assert_eq!(ColumnMajor::convert_to_index(3, 2, 0, 1, true), 1);
}

#[test]
fn index_to_pair_inverts_every_layout() {
  fn check<O: StorageOrder>(height: usize, width: usize, transposed: bool) {
    for row in 0..height {
      for column in 0..width {
        let index = O::convert_to_index(height, width, row, column, transposed);
        assert!(index < height * width);
        assert_eq!(
          O::index_to_pair(height, width, index, transposed),
          (row, column)
        );
      }
    }
  }
  for transposed in [false, true] {
    check::<RowMajor>(3, 4, transposed);
    check::<ColumnMajor>(3, 4, transposed);
    check::<CofactorOrder<RowMajor>>(2, 5, transposed);
  }
}

#[test]
fn cofactor_order_shifts_into_parent_space() {
  let index =
    CofactorOrder::<RowMajor>::convert_to_index_with_offset(4, 4, 0, 0, false, 1, 2);
  assert_eq!(index, 6);
  let index =
    CofactorOrder::<ColumnMajor>::convert_to_index_with_offset(4, 4, 1, 0, false, 1, 2);
  assert_eq!(index, 10);
  assert_eq!(CofactorOrder::<ColumnMajor>::KIND, OrderKind::ColumnMajor);
}
