use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::*;

struct CofactorBounds<const N: usize, const R: usize, const C: usize>;

impl<const N: usize, const R: usize, const C: usize> CofactorBounds<N, R, C> {
  const EXCLUDED_INSIDE: () = assert!(
    R < N && C < N,
    "cofactor excludes a row or column outside the matrix"
  );
}

/// The minor of a square parent with one row and one column removed.
///
/// Local (row, column) skips over the excluded pair: `row` if it is before the excluded row,
/// `row + 1` otherwise, and the same for columns.
pub struct Cofactor<P> {
  parent: P,
  row: usize,
  column: usize,
}

#[inline]
fn skip(index: usize, excluded: usize) -> usize {
  if index < excluded {
    index
  } else {
    index + 1
  }
}

impl<P> Cofactor<P>
where
  P: Deref,
  P::Target: Grid,
{
  pub fn new(parent: P, row: usize, column: usize) -> Result<Self, MatrixError> {
    let (height, width) = (parent.height(), parent.width());
    if height != width {
      return Err(MatrixError::NotSquare { height, width });
    }
    parent.check_pair(row, column)?;
    Ok(Self::excluding(parent, row, column))
  }

  /// Caller guarantees a square parent and an in bounds pair.
  pub(crate) fn excluding(parent: P, row: usize, column: usize) -> Self {
    Self {
      parent,
      row,
      column,
    }
  }

  /// The excluded (row, column) of the parent.
  pub fn excluded(&self) -> (usize, usize) {
    (self.row, self.column)
  }

  pub fn parent(&self) -> &P::Target {
    &self.parent
  }

  pub fn into_parent(self) -> P {
    self.parent
  }
}

impl<T: Element, const N: usize, O: DenseOrder> Matrix<T, N, N, O> {
  pub fn cofactor<const R: usize, const C: usize>(&self) -> Cofactor<&Self> {
    let () = CofactorBounds::<N, R, C>::EXCLUDED_INSIDE;
    Cofactor::excluding(self, R, C)
  }

  pub fn cofactor_mut<const R: usize, const C: usize>(&mut self) -> Cofactor<&mut Self> {
    let () = CofactorBounds::<N, R, C>::EXCLUDED_INSIDE;
    Cofactor::excluding(self, R, C)
  }
}

impl<P> Grid for Cofactor<P>
where
  P: Deref,
  P::Target: Grid,
{
  type Element = <P::Target as Grid>::Element;
  type Order = CofactorOrder<<P::Target as Grid>::Order>;

  fn height(&self) -> usize {
    self.parent.height() - 1
  }
  fn width(&self) -> usize {
    self.parent.width() - 1
  }
  fn is_transposed(&self) -> bool {
    self.parent.is_transposed()
  }
  fn read_element(&self, row: usize, column: usize) -> Self::Element {
    self
      .parent
      .read_element(skip(row, self.row), skip(column, self.column))
  }
}

impl<P> GridMut for Cofactor<P>
where
  P: DerefMut,
  P::Target: GridMut,
{
  fn write_element(&mut self, row: usize, column: usize, value: Self::Element) {
    let (row, column) = (skip(row, self.row), skip(column, self.column));
    self.parent.write_element(row, column, value)
  }
}

impl<P> SquareGrid for Cofactor<P>
where
  P: Deref,
  P::Target: SquareGrid,
{
}

impl<P> fmt::Display for Cofactor<P>
where
  P: Deref,
  P::Target: Grid,
  <P::Target as Grid>::Element: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_grid(self, f)
  }
}
