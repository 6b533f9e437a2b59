use std::fmt;

use crate::*;

/// Column width used by `Display` when the formatter does not carry one.
pub const DEFAULT_DISPLAY_WIDTH: usize = 5;

/// Anything addressable as a `height x width` grid of elements.
///
/// Implemented by owning matrices, scalars and every view over them, this is the only interface
/// the determinant and adjoint algorithms need. Linear indices are interpreted in the grid's own
/// geometry through [`Grid::Order`] and the current transposed flag.
pub trait Grid {
  type Element: Element;
  type Order: StorageOrder;

  fn height(&self) -> usize;
  fn width(&self) -> usize;
  fn is_transposed(&self) -> bool;

  /// Read a validated (row, column) pair.
  fn read_element(&self, row: usize, column: usize) -> Self::Element;

  fn len(&self) -> usize {
    self.height() * self.width()
  }

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Exactly one dimension is 1, the other is larger.
  fn is_vector(&self) -> bool {
    let (height, width) = (self.height(), self.width());
    (height == 1) != (width == 1)
  }

  fn is_square(&self) -> bool {
    self.height() == self.width() && self.height() > 1
  }

  fn is_scalar(&self) -> bool {
    self.height() == 1 && self.width() == 1
  }

  fn check_pair(&self, row: usize, column: usize) -> Result<(), MatrixError> {
    if row < self.height() && column < self.width() {
      Ok(())
    } else {
      Err(MatrixError::OutOfBounds {
        row,
        column,
        height: self.height(),
        width: self.width(),
      })
    }
  }

  fn check_index(&self, index: usize) -> Result<(), MatrixError> {
    if index < self.len() {
      Ok(())
    } else {
      Err(MatrixError::IndexOutOfBounds {
        index,
        len: self.len(),
      })
    }
  }

  fn index_to_pair(&self, index: usize) -> (usize, usize) {
    Self::Order::index_to_pair(self.height(), self.width(), index, self.is_transposed())
  }

  /// # Panics
  /// If the pair is out of bounds.
  #[track_caller]
  fn element(&self, row: usize, column: usize) -> Self::Element {
    ensure(self.check_pair(row, column));
    self.read_element(row, column)
  }

  #[track_caller]
  fn element_at(&self, index: usize) -> Self::Element {
    ensure(self.check_index(index));
    let (row, column) = self.index_to_pair(index);
    self.read_element(row, column)
  }

  fn try_element(&self, row: usize, column: usize) -> Result<Self::Element, MatrixError> {
    self.check_pair(row, column)?;
    Ok(self.read_element(row, column))
  }

  fn try_element_at(&self, index: usize) -> Result<Self::Element, MatrixError> {
    self.check_index(index)?;
    let (row, column) = self.index_to_pair(index);
    Ok(self.read_element(row, column))
  }
}

pub trait GridMut: Grid {
  /// Write a validated (row, column) pair.
  fn write_element(&mut self, row: usize, column: usize, value: Self::Element);

  #[track_caller]
  fn set_element(&mut self, row: usize, column: usize, value: Self::Element) {
    ensure(self.check_pair(row, column));
    self.write_element(row, column, value)
  }

  #[track_caller]
  fn set_element_at(&mut self, index: usize, value: Self::Element) {
    ensure(self.check_index(index));
    let (row, column) = self.index_to_pair(index);
    self.write_element(row, column, value)
  }

  fn try_set_element(
    &mut self,
    row: usize,
    column: usize,
    value: Self::Element,
  ) -> Result<(), MatrixError> {
    self.check_pair(row, column)?;
    self.write_element(row, column, value);
    Ok(())
  }

  fn try_set_element_at(&mut self, index: usize, value: Self::Element) -> Result<(), MatrixError> {
    self.check_index(index)?;
    let (row, column) = self.index_to_pair(index);
    self.write_element(row, column, value);
    Ok(())
  }
}

/// Grids known to be square from their type.
pub trait SquareGrid: Grid {}

impl<G: Grid + ?Sized> Grid for &G {
  type Element = G::Element;
  type Order = G::Order;

  fn height(&self) -> usize {
    (**self).height()
  }
  fn width(&self) -> usize {
    (**self).width()
  }
  fn is_transposed(&self) -> bool {
    (**self).is_transposed()
  }
  fn read_element(&self, row: usize, column: usize) -> Self::Element {
    (**self).read_element(row, column)
  }
}

impl<G: SquareGrid + ?Sized> SquareGrid for &G {}

/// Logical equality: same shape and the same element at every (row, column).
pub fn grid_eq<A, B>(a: &A, b: &B) -> bool
where
  A: Grid + ?Sized,
  B: Grid<Element = A::Element> + ?Sized,
{
  if a.height() != b.height() || a.width() != b.width() {
    return false;
  }
  for row in 0..a.height() {
    for column in 0..a.width() {
      if a.read_element(row, column) != b.read_element(row, column) {
        return false;
      }
    }
  }
  true
}

/// Copy any grid into an owning matrix of the requested shape and order.
pub fn collect_matrix<G, const H: usize, const W: usize, O>(
  grid: &G,
) -> Result<Matrix<G::Element, H, W, O>, MatrixError>
where
  G: Grid + ?Sized,
  O: DenseOrder,
{
  if grid.height() != H || grid.width() != W {
    return Err(MatrixError::IncompatibleDimensions {
      expected: (H, W),
      found: (grid.height(), grid.width()),
    });
  }
  Ok(Matrix::from_fn(|row, column| grid.read_element(row, column)))
}

/// Render one line per logical row: `| e1 e2 ... en     |`, elements right aligned.
pub fn fmt_grid<G>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
  G: Grid + ?Sized,
  G::Element: fmt::Display,
{
  let width = f.width().unwrap_or(DEFAULT_DISPLAY_WIDTH);
  for row in 0..grid.height() {
    write!(f, "| ")?;
    for column in 0..grid.width() {
      write!(f, "{:>width$} ", grid.read_element(row, column))?;
    }
    writeln!(f, "    |")?;
  }
  Ok(())
}
