use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::*;

/// A square matrix built as the identity. After construction it is an ordinary matrix and may be
/// mutated freely.
pub struct IdentityMatrix<T, const N: usize, O: DenseOrder = RowMajor>(Matrix<T, N, N, O>);

impl<T: Element, const N: usize, O: DenseOrder> IdentityMatrix<T, N, O> {
  pub fn new() -> Self {
    Self(Matrix::from_fn(|row, column| {
      if row == column {
        T::one()
      } else {
        T::zero()
      }
    }))
  }

  pub fn into_inner(self) -> Matrix<T, N, N, O> {
    self.0
  }
}

impl<T: Element, const N: usize, O: DenseOrder> Default for IdentityMatrix<T, N, O> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Element, const N: usize, O: DenseOrder> Clone for IdentityMatrix<T, N, O> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: Element + fmt::Debug, const N: usize, O: DenseOrder> fmt::Debug
  for IdentityMatrix<T, N, O>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IdentityMatrix").field(&self.0).finish()
  }
}

impl<T, const N: usize, O: DenseOrder> Deref for IdentityMatrix<T, N, O> {
  type Target = Matrix<T, N, N, O>;
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T, const N: usize, O: DenseOrder> DerefMut for IdentityMatrix<T, N, O> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl<T, const N: usize, O: DenseOrder> From<IdentityMatrix<T, N, O>> for Matrix<T, N, N, O> {
  fn from(identity: IdentityMatrix<T, N, O>) -> Self {
    identity.0
  }
}
