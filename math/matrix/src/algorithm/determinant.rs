use num_traits::{One, Zero};

use crate::*;

const LARGE_EXPANSION: usize = 9;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Determinant<T>(T);

impl<T: Copy> Determinant<T> {
  pub fn value(&self) -> T {
    self.0
  }

  pub fn into_value(self) -> T {
    self.0
  }
}

/// Leibniz expansion, `sum over p of sign(p) * prod_i m[i][p[i]]`.
///
/// Exponential in the size, meant for the small fixed sizes this crate deals with. The empty
/// grid has determinant one.
fn leibniz<G: Grid + ?Sized>(grid: &G) -> G::Element {
  let n = grid.height();
  if n > LARGE_EXPANSION {
    log::warn!(
      "determinant of a {n}x{n} grid expands {} permutations",
      factorial(n)
    );
  }

  Permutations::new(n).fold(G::Element::zero(), |acc, permutation| {
    let product = permutation
      .indices
      .iter()
      .enumerate()
      .fold(G::Element::one(), |product, (row, &column)| {
        product * grid.read_element(row, column)
      });
    if permutation.is_even() {
      acc + product
    } else {
      acc - product
    }
  })
}

pub fn determinant<G: SquareGrid + ?Sized>(grid: &G) -> Determinant<G::Element> {
  Determinant(leibniz(grid))
}

/// For grids only known to be square at runtime, such as a cofactor of a cofactor.
pub fn try_determinant<G: Grid + ?Sized>(grid: &G) -> Result<Determinant<G::Element>, MatrixError> {
  let (height, width) = (grid.height(), grid.width());
  if height != width {
    return Err(MatrixError::NotSquare { height, width });
  }
  Ok(Determinant(leibniz(grid)))
}
