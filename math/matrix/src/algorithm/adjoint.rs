use num_traits::Zero;

use crate::*;

fn signed<T: Element>(exponent: usize, value: T) -> T {
  if exponent % 2 == 0 {
    value
  } else {
    T::zero() - value
  }
}

/// `(-1)^(row + column) * det(cofactor(row, column))`.
pub fn algebraic_cofactor<G: SquareGrid + ?Sized>(
  square: &G,
  row: usize,
  column: usize,
) -> Result<G::Element, MatrixError> {
  let minor = Cofactor::new(square, row, column)?;
  Ok(signed(row + column, determinant(&minor).into_value()))
}

/// The adjugate. The entry at (row, column) is the algebraic cofactor of (column, row).
pub fn adjoint_matrix<T: Element, const N: usize, O: DenseOrder>(
  square: &Matrix<T, N, N, O>,
) -> Matrix<T, N, N, O> {
  Matrix::from_fn(|row, column| {
    let minor = Cofactor::excluding(square, column, row);
    signed(row + column, determinant(&minor).into_value())
  })
}

pub fn is_invertible<G: SquareGrid + ?Sized>(square: &G) -> bool {
  determinant(square).into_value() != G::Element::zero()
}

pub trait SquareMatrix: SquareGrid + Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn det(&self) -> Self::Element {
    determinant(self).into_value()
  }

  #[must_use]
  fn adjoint(&self) -> Self;

  fn is_invertible(&self) -> bool {
    is_invertible(self)
  }

  /// `adjoint / det`, `None` when singular. Integer elements truncate.
  #[must_use]
  fn inverse(&self) -> Option<Self>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or_else(Self::identity)
  }
}

impl<T: Element, const N: usize, O: DenseOrder> SquareMatrix for Matrix<T, N, N, O> {
  fn identity() -> Self {
    IdentityMatrix::new().into_inner()
  }

  fn adjoint(&self) -> Self {
    adjoint_matrix(self)
  }

  fn inverse(&self) -> Option<Self> {
    let det = self.det();
    if det == T::zero() {
      return None;
    }
    Some(adjoint_matrix(self) / det)
  }
}

impl<T: Element> SquareMatrix for Scalar<T> {
  fn identity() -> Self {
    Scalar(T::one())
  }

  fn det(&self) -> T {
    self.0
  }

  fn adjoint(&self) -> Self {
    Scalar(T::one())
  }

  fn inverse(&self) -> Option<Self> {
    if self.0 == T::zero() {
      return None;
    }
    Some(Scalar(T::one() / self.0))
  }
}
