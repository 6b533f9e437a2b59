use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::*;

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> Matrix<T, H, W, O> {
  /// Logical element wise `self[r][c] = op(self[r][c], rhs[r][c])`.
  fn zip_assign<O2: DenseOrder>(&mut self, rhs: &Matrix<T, H, W, O2>, op: impl Fn(&mut T, T)) {
    if self.buffer.ptr_eq(&rhs.buffer) {
      log::trace!("right hand side aliases the assigned buffer, operating on a snapshot");
      let snapshot = rhs.clone();
      return self.zip_assign(&snapshot, op);
    }

    let mut data = self.buffer.borrow_mut();
    if O::KIND == O2::KIND && self.transposed == rhs.transposed {
      let other = rhs.buffer.borrow();
      data
        .iter_mut()
        .zip(other.iter())
        .for_each(|(a, &b)| op(a, b));
      return;
    }
    for row in 0..H {
      for column in 0..W {
        let index = O::convert_to_index(H, W, row, column, self.transposed);
        op(&mut data[index], rhs.read_element(row, column));
      }
    }
  }

  fn apply(&mut self, op: impl Fn(&mut T)) {
    self.buffer.borrow_mut().iter_mut().for_each(op)
  }
}

impl<T, const H: usize, const W: usize, O, O2> AddAssign<&Matrix<T, H, W, O2>>
  for Matrix<T, H, W, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  fn add_assign(&mut self, rhs: &Matrix<T, H, W, O2>) {
    self.zip_assign(rhs, |a, b| *a += b)
  }
}

impl<T, const H: usize, const W: usize, O, O2> SubAssign<&Matrix<T, H, W, O2>>
  for Matrix<T, H, W, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  fn sub_assign(&mut self, rhs: &Matrix<T, H, W, O2>) {
    self.zip_assign(rhs, |a, b| *a -= b)
  }
}

impl<T, const H: usize, const W: usize, O, O2> AddAssign<Matrix<T, H, W, O2>>
  for Matrix<T, H, W, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  fn add_assign(&mut self, rhs: Matrix<T, H, W, O2>) {
    *self += &rhs
  }
}

impl<T, const H: usize, const W: usize, O, O2> SubAssign<Matrix<T, H, W, O2>>
  for Matrix<T, H, W, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  fn sub_assign(&mut self, rhs: Matrix<T, H, W, O2>) {
    *self -= &rhs
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> MulAssign<T>
  for Matrix<T, H, W, O>
{
  fn mul_assign(&mut self, scalar: T) {
    self.apply(|v| *v *= scalar)
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> DivAssign<T>
  for Matrix<T, H, W, O>
{
  fn div_assign(&mut self, scalar: T) {
    self.apply(|v| *v /= scalar)
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> MulAssign<Scalar<T>>
  for Matrix<T, H, W, O>
{
  fn mul_assign(&mut self, scalar: Scalar<T>) {
    *self *= scalar.0
  }
}

impl<T: Element, const H: usize, const W: usize, O: DenseOrder> DivAssign<Scalar<T>>
  for Matrix<T, H, W, O>
{
  fn div_assign(&mut self, scalar: Scalar<T>) {
    *self /= scalar.0
  }
}

/// Binary operators between matrices, for the by-value and by-ref permutations. The result takes
/// the left operand's order and is computed on a buffer nobody else sees.
macro_rules! impl_matrix_binary_operator {
  ($Op:ident, $op:ident, $op_assign:tt) => {
    impl<T, const H: usize, const W: usize, O, O2> $Op<Matrix<T, H, W, O2>> for Matrix<T, H, W, O>
    where
      T: Element,
      O: DenseOrder,
      O2: DenseOrder,
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(mut self, rhs: Matrix<T, H, W, O2>) -> Self::Output {
        self.detach();
        self $op_assign &rhs;
        self
      }
    }

    impl<T, const H: usize, const W: usize, O, O2> $Op<&Matrix<T, H, W, O2>> for Matrix<T, H, W, O>
    where
      T: Element,
      O: DenseOrder,
      O2: DenseOrder,
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(mut self, rhs: &Matrix<T, H, W, O2>) -> Self::Output {
        self.detach();
        self $op_assign rhs;
        self
      }
    }

    impl<T, const H: usize, const W: usize, O, O2> $Op<Matrix<T, H, W, O2>> for &Matrix<T, H, W, O>
    where
      T: Element,
      O: DenseOrder,
      O2: DenseOrder,
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(self, rhs: Matrix<T, H, W, O2>) -> Self::Output {
        let mut result = self.clone();
        result $op_assign &rhs;
        result
      }
    }

    impl<T, const H: usize, const W: usize, O, O2> $Op<&Matrix<T, H, W, O2>> for &Matrix<T, H, W, O>
    where
      T: Element,
      O: DenseOrder,
      O2: DenseOrder,
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(self, rhs: &Matrix<T, H, W, O2>) -> Self::Output {
        let mut result = self.clone();
        result $op_assign rhs;
        result
      }
    }
  };
}

impl_matrix_binary_operator!(Add, add, +=);
impl_matrix_binary_operator!(Sub, sub, -=);

/// `matrix op scalar` where the scalar is a bare element or a [`Scalar`].
macro_rules! impl_matrix_scalar_operator {
  ($Op:ident, $op:ident, $op_assign:tt) => {
    impl<T: Element, const H: usize, const W: usize, O: DenseOrder> $Op<T> for Matrix<T, H, W, O> {
      type Output = Matrix<T, H, W, O>;
      fn $op(mut self, scalar: T) -> Self::Output {
        self.detach();
        self $op_assign scalar;
        self
      }
    }

    impl<T: Element, const H: usize, const W: usize, O: DenseOrder> $Op<T> for &Matrix<T, H, W, O> {
      type Output = Matrix<T, H, W, O>;
      fn $op(self, scalar: T) -> Self::Output {
        let mut result = self.clone();
        result $op_assign scalar;
        result
      }
    }

    impl<T: Element, const H: usize, const W: usize, O: DenseOrder> $Op<Scalar<T>>
      for Matrix<T, H, W, O>
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(self, scalar: Scalar<T>) -> Self::Output {
        self.$op(scalar.0)
      }
    }

    impl<T: Element, const H: usize, const W: usize, O: DenseOrder> $Op<Scalar<T>>
      for &Matrix<T, H, W, O>
    {
      type Output = Matrix<T, H, W, O>;
      fn $op(self, scalar: Scalar<T>) -> Self::Output {
        self.$op(scalar.0)
      }
    }
  };
}

impl_matrix_scalar_operator!(Mul, mul, *=);
impl_matrix_scalar_operator!(Div, div, /=);

impl<T, const H: usize, const W: usize, O> Neg for Matrix<T, H, W, O>
where
  T: Element + Neg<Output = T>,
  O: DenseOrder,
{
  type Output = Matrix<T, H, W, O>;
  fn neg(self) -> Self::Output {
    self.map(|v| -v)
  }
}

impl<T, const H: usize, const W: usize, O> Neg for &Matrix<T, H, W, O>
where
  T: Element + Neg<Output = T>,
  O: DenseOrder,
{
  type Output = Matrix<T, H, W, O>;
  fn neg(self) -> Self::Output {
    self.map(|v| -v)
  }
}

/// `element * matrix`, one impl per primitive since the element is a foreign type.
macro_rules! impl_scalar_ops {
  ($($S:ty),*) => {
    $(
      impl<const H: usize, const W: usize, O: DenseOrder> Mul<Matrix<$S, H, W, O>> for $S {
        type Output = Matrix<$S, H, W, O>;
        fn mul(self, matrix: Matrix<$S, H, W, O>) -> Self::Output {
          matrix * self
        }
      }

      impl<const H: usize, const W: usize, O: DenseOrder> Mul<&Matrix<$S, H, W, O>> for $S {
        type Output = Matrix<$S, H, W, O>;
        fn mul(self, matrix: &Matrix<$S, H, W, O>) -> Self::Output {
          matrix * self
        }
      }
    )*
  };
}

impl_scalar_ops!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);
