use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::*;

bitflags::bitflags! {
  /// How two grids are joined.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct MergeMode: u8 {
    /// Side by side: equal heights, the right operand's columns follow the left's.
    const ROW = 1;
    /// Stacked: equal widths, the right operand's rows follow the left's.
    const COL = 2;
    /// Copy both operands into a new owning matrix.
    const MEG = 4;
    const ROW_MEG = Self::ROW.bits() | Self::MEG.bits();
    const COL_MEG = Self::COL.bits() | Self::MEG.bits();
  }
}

/// The (height, width) of the joined grid.
fn merged_shape<A, B>(mode: MergeMode, left: &A, right: &B) -> Result<(usize, usize), MatrixError>
where
  A: Grid + ?Sized,
  B: Grid + ?Sized,
{
  let axis = mode.difference(MergeMode::MEG);
  if axis == MergeMode::ROW {
    if left.height() != right.height() {
      return Err(MatrixError::IncompatibleDimensions {
        expected: (left.height(), right.width()),
        found: (right.height(), right.width()),
      });
    }
    Ok((left.height(), left.width() + right.width()))
  } else if axis == MergeMode::COL {
    if left.width() != right.width() {
      return Err(MatrixError::IncompatibleDimensions {
        expected: (right.height(), left.width()),
        found: (right.height(), right.width()),
      });
    }
    Ok((left.height() + right.height(), left.width()))
  } else {
    Err(MatrixError::InvalidMergeMode(mode))
  }
}

/// A non owning join of two grids. Every access is routed to the operand the coordinate falls
/// in, writes go to that operand.
pub struct MergeProxy<L, R, NO = RowMajor> {
  mode: MergeMode,
  shape: (usize, usize),
  left: L,
  right: R,
  order: PhantomData<NO>,
}

impl<L, R, NO> MergeProxy<L, R, NO>
where
  L: Deref,
  R: Deref,
  L::Target: Grid,
  R::Target: Grid<Element = <L::Target as Grid>::Element>,
  NO: DenseOrder,
{
  /// `mode` must be exactly [`MergeMode::ROW`] or [`MergeMode::COL`], materializing modes go
  /// through [`merge_materialized`].
  pub fn new(mode: MergeMode, left: L, right: R) -> Result<Self, MatrixError> {
    if mode.contains(MergeMode::MEG) {
      return Err(MatrixError::InvalidMergeMode(mode));
    }
    let shape = merged_shape(mode, &*left, &*right)?;
    Ok(Self {
      mode,
      shape,
      left,
      right,
      order: PhantomData,
    })
  }

  pub fn mode(&self) -> MergeMode {
    self.mode
  }

  pub fn left(&self) -> &L::Target {
    &self.left
  }

  pub fn right(&self) -> &R::Target {
    &self.right
  }

  pub fn materialize<const H: usize, const W: usize>(
    &self,
  ) -> Result<Matrix<<L::Target as Grid>::Element, H, W, NO>, MatrixError> {
    collect_matrix(self)
  }

  /// Which operand holds the merged (row, column), and where inside it.
  fn route(&self, row: usize, column: usize) -> (bool, usize, usize) {
    if self.mode.contains(MergeMode::ROW) {
      let split = self.left.width();
      if column < split {
        (true, row, column)
      } else {
        (false, row, column - split)
      }
    } else {
      let split = self.left.height();
      if row < split {
        (true, row, column)
      } else {
        (false, row - split, column)
      }
    }
  }
}

pub fn merge_rows<'a, T, const H: usize, const LW: usize, const RW: usize, O1, O2>(
  left: &'a Matrix<T, H, LW, O1>,
  right: &'a Matrix<T, H, RW, O2>,
) -> MergeProxy<&'a Matrix<T, H, LW, O1>, &'a Matrix<T, H, RW, O2>>
where
  T: Element,
  O1: DenseOrder,
  O2: DenseOrder,
{
  MergeProxy {
    mode: MergeMode::ROW,
    shape: (H, LW + RW),
    left,
    right,
    order: PhantomData,
  }
}

pub fn merge_columns<'a, T, const LH: usize, const RH: usize, const W: usize, O1, O2>(
  left: &'a Matrix<T, LH, W, O1>,
  right: &'a Matrix<T, RH, W, O2>,
) -> MergeProxy<&'a Matrix<T, LH, W, O1>, &'a Matrix<T, RH, W, O2>>
where
  T: Element,
  O1: DenseOrder,
  O2: DenseOrder,
{
  MergeProxy {
    mode: MergeMode::COL,
    shape: (LH + RH, W),
    left,
    right,
    order: PhantomData,
  }
}

impl<L, R, NO> Grid for MergeProxy<L, R, NO>
where
  L: Deref,
  R: Deref,
  L::Target: Grid,
  R::Target: Grid<Element = <L::Target as Grid>::Element>,
  NO: DenseOrder,
{
  type Element = <L::Target as Grid>::Element;
  type Order = NO;

  fn height(&self) -> usize {
    self.shape.0
  }
  fn width(&self) -> usize {
    self.shape.1
  }
  fn is_transposed(&self) -> bool {
    false
  }
  fn read_element(&self, row: usize, column: usize) -> Self::Element {
    match self.route(row, column) {
      (true, row, column) => self.left.read_element(row, column),
      (false, row, column) => self.right.read_element(row, column),
    }
  }
}

impl<L, R, NO> GridMut for MergeProxy<L, R, NO>
where
  L: DerefMut,
  R: DerefMut,
  L::Target: GridMut,
  R::Target: GridMut<Element = <L::Target as Grid>::Element>,
  NO: DenseOrder,
{
  fn write_element(&mut self, row: usize, column: usize, value: Self::Element) {
    match self.route(row, column) {
      (true, row, column) => self.left.write_element(row, column, value),
      (false, row, column) => self.right.write_element(row, column, value),
    }
  }
}

impl<L, R, NO> fmt::Display for MergeProxy<L, R, NO>
where
  L: Deref,
  R: Deref,
  L::Target: Grid,
  R::Target: Grid<Element = <L::Target as Grid>::Element>,
  <L::Target as Grid>::Element: fmt::Display,
  NO: DenseOrder,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_grid(self, f)
  }
}

/// Block copy: the left operand at the origin, the right one after it along the merged axis.
fn copy_blocks<A, B, const H: usize, const W: usize, NO>(
  mode: MergeMode,
  left: &A,
  right: &B,
) -> Matrix<A::Element, H, W, NO>
where
  A: Grid + ?Sized,
  B: Grid<Element = A::Element> + ?Sized,
  NO: DenseOrder,
{
  log::trace!("materializing a {mode:?} merge into a {H}x{W} matrix");
  let mut merged = Matrix::zeros();
  for row in 0..left.height() {
    for column in 0..left.width() {
      merged.set_element(row, column, left.read_element(row, column));
    }
  }
  let (row_offset, column_offset) = if mode.contains(MergeMode::ROW) {
    (0, left.width())
  } else {
    (left.height(), 0)
  };
  for row in 0..right.height() {
    for column in 0..right.width() {
      let value = right.read_element(row, column);
      merged.set_element(row + row_offset, column + column_offset, value);
    }
  }
  merged
}

/// Join two grids into a new `H x W` matrix laid out in `NO`. `mode` must be
/// [`MergeMode::ROW_MEG`] or [`MergeMode::COL_MEG`].
pub fn merge_materialized<A, B, const H: usize, const W: usize, NO>(
  mode: MergeMode,
  left: &A,
  right: &B,
) -> Result<Matrix<A::Element, H, W, NO>, MatrixError>
where
  A: Grid + ?Sized,
  B: Grid<Element = A::Element> + ?Sized,
  NO: DenseOrder,
{
  if !mode.contains(MergeMode::MEG) {
    return Err(MatrixError::InvalidMergeMode(mode));
  }
  let shape = merged_shape(mode, left, right)?;
  if shape != (H, W) {
    return Err(MatrixError::IncompatibleDimensions {
      expected: (H, W),
      found: shape,
    });
  }
  Ok(copy_blocks(mode, left, right))
}

struct MergedExtent<const L: usize, const R: usize, const M: usize>;

impl<const L: usize, const R: usize, const M: usize> MergedExtent<L, R, M> {
  const SUMS: () = assert!(L + R == M, "merged extent must be the sum of both operands");
}

pub fn merge_rows_materialized<
  T,
  const H: usize,
  const LW: usize,
  const RW: usize,
  const W: usize,
  O1,
  O2,
  NO,
>(
  left: &Matrix<T, H, LW, O1>,
  right: &Matrix<T, H, RW, O2>,
) -> Matrix<T, H, W, NO>
where
  T: Element,
  O1: DenseOrder,
  O2: DenseOrder,
  NO: DenseOrder,
{
  let () = MergedExtent::<LW, RW, W>::SUMS;
  copy_blocks(MergeMode::ROW_MEG, left, right)
}

pub fn merge_columns_materialized<
  T,
  const LH: usize,
  const RH: usize,
  const H: usize,
  const W: usize,
  O1,
  O2,
  NO,
>(
  left: &Matrix<T, LH, W, O1>,
  right: &Matrix<T, RH, W, O2>,
) -> Matrix<T, H, W, NO>
where
  T: Element,
  O1: DenseOrder,
  O2: DenseOrder,
  NO: DenseOrder,
{
  let () = MergedExtent::<LH, RH, H>::SUMS;
  copy_blocks(MergeMode::COL_MEG, left, right)
}
