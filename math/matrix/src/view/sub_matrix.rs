use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::*;

struct SubMatrixBounds<
  const H: usize,
  const W: usize,
  const RS: usize,
  const RD: usize,
  const CS: usize,
  const CD: usize,
>;

impl<
    const H: usize,
    const W: usize,
    const RS: usize,
    const RD: usize,
    const CS: usize,
    const CD: usize,
  > SubMatrixBounds<H, W, RS, RD, CS, CD>
{
  const INSIDE_PARENT: () = assert!(
    RD <= H && CD <= W,
    "sub matrix window exceeds the parent matrix"
  );
}

/// The `[RS, RD) x [CS, CD)` window of a parent grid. Local (row, column) is parent
/// (row + RS, column + CS), writes land in the parent's buffer.
pub struct SubMatrix<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize> {
  parent: P,
}

impl<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize>
  SubMatrix<P, RS, RD, CS, CD>
{
  const NON_EMPTY: () = assert!(RS < RD && CS < CD, "sub matrix window is empty");
}

impl<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize>
  SubMatrix<P, RS, RD, CS, CD>
where
  P: Deref,
  P::Target: Grid,
{
  /// Window over a parent whose size is only known at runtime.
  pub fn new(parent: P) -> Result<Self, MatrixError> {
    let () = Self::NON_EMPTY;
    parent.check_pair(RD - 1, CD - 1)?;
    Ok(Self { parent })
  }

  pub fn parent(&self) -> &P::Target {
    &self.parent
  }

  pub fn into_parent(self) -> P {
    self.parent
  }

  fn parent_index(&self, row: usize, column: usize) -> usize {
    let parent = &*self.parent;
    CofactorOrder::<<P::Target as Grid>::Order>::convert_to_index_with_offset(
      parent.height(),
      parent.width(),
      row,
      column,
      parent.is_transposed(),
      RS,
      CS,
    )
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Matrix<T, H, W, O> {
  pub fn sub_matrix<const RS: usize, const RD: usize, const CS: usize, const CD: usize>(
    &self,
  ) -> SubMatrix<&Self, RS, RD, CS, CD> {
    let () = SubMatrixBounds::<H, W, RS, RD, CS, CD>::INSIDE_PARENT;
    let () = SubMatrix::<&Self, RS, RD, CS, CD>::NON_EMPTY;
    SubMatrix { parent: self }
  }

  pub fn sub_matrix_mut<const RS: usize, const RD: usize, const CS: usize, const CD: usize>(
    &mut self,
  ) -> SubMatrix<&mut Self, RS, RD, CS, CD> {
    let () = SubMatrixBounds::<H, W, RS, RD, CS, CD>::INSIDE_PARENT;
    let () = SubMatrix::<&mut Self, RS, RD, CS, CD>::NON_EMPTY;
    SubMatrix { parent: self }
  }
}

impl<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize> Grid
  for SubMatrix<P, RS, RD, CS, CD>
where
  P: Deref,
  P::Target: Grid,
{
  type Element = <P::Target as Grid>::Element;
  type Order = CofactorOrder<<P::Target as Grid>::Order>;

  fn height(&self) -> usize {
    RD - RS
  }
  fn width(&self) -> usize {
    CD - CS
  }
  fn is_transposed(&self) -> bool {
    self.parent.is_transposed()
  }
  fn read_element(&self, row: usize, column: usize) -> Self::Element {
    self.parent.element_at(self.parent_index(row, column))
  }
}

impl<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize> GridMut
  for SubMatrix<P, RS, RD, CS, CD>
where
  P: DerefMut,
  P::Target: GridMut,
{
  fn write_element(&mut self, row: usize, column: usize, value: Self::Element) {
    let index = self.parent_index(row, column);
    self.parent.set_element_at(index, value)
  }
}

impl<P, const RS: usize, const RD: usize, const CS: usize, const CD: usize> fmt::Display
  for SubMatrix<P, RS, RD, CS, CD>
where
  P: Deref,
  P::Target: Grid,
  <P::Target as Grid>::Element: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_grid(self, f)
  }
}
