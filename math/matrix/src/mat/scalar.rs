use std::fmt;
use std::ops::{
  Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::*;

/// A 1x1 matrix holding its element inline.
///
/// Arithmetic mirrors the element type: `Scalar<T> + Scalar<T>` and `Scalar<T> + T` both yield a
/// bare `T`.
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Hash)]
pub struct Scalar<T>(pub T);

impl<T: Element> Scalar<T> {
  pub fn new(value: T) -> Self {
    Self(value)
  }

  pub fn value(&self) -> T {
    self.0
  }

  /// A 1x1 transposes to itself, handed back as the bare element.
  pub fn transpose(self) -> T {
    self.0
  }
}

impl<T> From<T> for Scalar<T> {
  fn from(value: T) -> Self {
    Self(value)
  }
}

impl<T> Deref for Scalar<T> {
  type Target = T;
  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T> DerefMut for Scalar<T> {
  fn deref_mut(&mut self) -> &mut T {
    &mut self.0
  }
}

impl<T: PartialEq> PartialEq<T> for Scalar<T> {
  fn eq(&self, other: &T) -> bool {
    self.0 == *other
  }
}

impl<T: fmt::Display> fmt::Display for Scalar<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl<T: Element> Grid for Scalar<T> {
  type Element = T;
  type Order = RowMajor;

  fn height(&self) -> usize {
    1
  }
  fn width(&self) -> usize {
    1
  }
  fn is_transposed(&self) -> bool {
    false
  }
  fn read_element(&self, _: usize, _: usize) -> T {
    self.0
  }
}

impl<T: Element> GridMut for Scalar<T> {
  fn write_element(&mut self, _: usize, _: usize, value: T) {
    self.0 = value;
  }
}

impl<T: Element> SquareGrid for Scalar<T> {}

macro_rules! impl_scalar_arithmetic {
  ($($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident);*) => {
    $(
      impl<T: Element> $Op for Scalar<T> {
        type Output = T;
        fn $op(self, rhs: Self) -> T {
          self.0.$op(rhs.0)
        }
      }

      impl<T: Element> $Op<T> for Scalar<T> {
        type Output = T;
        fn $op(self, rhs: T) -> T {
          self.0.$op(rhs)
        }
      }

      impl<T: Element> $OpAssign for Scalar<T> {
        fn $op_assign(&mut self, rhs: Self) {
          self.0.$op_assign(rhs.0)
        }
      }

      impl<T: Element> $OpAssign<T> for Scalar<T> {
        fn $op_assign(&mut self, rhs: T) {
          self.0.$op_assign(rhs)
        }
      }
    )*
  };
}

impl_scalar_arithmetic!(
  Add, add, AddAssign, add_assign;
  Sub, sub, SubAssign, sub_assign;
  Mul, mul, MulAssign, mul_assign;
  Div, div, DivAssign, div_assign
);

impl<T: Element + Neg<Output = T>> Neg for Scalar<T> {
  type Output = T;
  fn neg(self) -> T {
    -self.0
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Mul<Matrix<T, H, W, O>>
  for Scalar<T>
{
  type Output = Matrix<T, H, W, O>;
  fn mul(self, matrix: Matrix<T, H, W, O>) -> Self::Output {
    matrix * self.0
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Mul<&Matrix<T, H, W, O>>
  for Scalar<T>
{
  type Output = Matrix<T, H, W, O>;
  fn mul(self, matrix: &Matrix<T, H, W, O>) -> Self::Output {
    matrix * self.0
  }
}

macro_rules! impl_scalar_conversions {
  ($($S:ty),*) => {
    $(
      impl From<Scalar<$S>> for $S {
        fn from(scalar: Scalar<$S>) -> $S {
          scalar.0
        }
      }
    )*
  };
}

impl_scalar_conversions!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);
