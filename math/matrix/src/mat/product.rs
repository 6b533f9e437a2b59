use std::ops::Mul;

use crate::*;

/// Textbook triple loop, `C[i][j] = sum_k A[i][k] * B[k][j]`.
pub fn naive_product<T, A, B, const M: usize, const N: usize, O>(
  a: &A,
  b: &B,
) -> Result<Matrix<T, M, N, O>, MatrixError>
where
  T: Element,
  A: Grid<Element = T> + ?Sized,
  B: Grid<Element = T> + ?Sized,
  O: DenseOrder,
{
  if a.width() != b.height() {
    return Err(MatrixError::IncompatibleDimensions {
      expected: (a.width(), b.width()),
      found: (b.height(), b.width()),
    });
  }
  if a.height() != M || b.width() != N {
    return Err(MatrixError::IncompatibleDimensions {
      expected: (M, N),
      found: (a.height(), b.width()),
    });
  }
  Ok(Matrix::from_fn(|i, j| {
    (0..a.width()).fold(T::zero(), |acc, k| {
      acc + a.read_element(i, k) * b.read_element(k, j)
    })
  }))
}

fn check_square<G: Grid + ?Sized>(grid: &G, n: usize) {
  ensure(if grid.height() == n && grid.width() == n {
    Ok(())
  } else {
    Err(MatrixError::IncompatibleDimensions {
      expected: (n, n),
      found: (grid.height(), grid.width()),
    })
  })
}

/// # Panics
/// If either operand is not 2x2.
#[track_caller]
pub fn product_2x2<T, A, B>(a: &A, b: &B) -> [[T; 2]; 2]
where
  T: Element,
  A: Grid<Element = T> + ?Sized,
  B: Grid<Element = T> + ?Sized,
{
  check_square(a, 2);
  check_square(b, 2);
  let a = |r, c| a.read_element(r, c);
  let b = |r, c| b.read_element(r, c);

  #[rustfmt::skip]
  let product = [
    [a(0, 0) * b(0, 0) + a(0, 1) * b(1, 0), a(0, 0) * b(0, 1) + a(0, 1) * b(1, 1)],
    [a(1, 0) * b(0, 0) + a(1, 1) * b(1, 0), a(1, 0) * b(0, 1) + a(1, 1) * b(1, 1)],
  ];
  product
}

/// # Panics
/// If either operand is not 3x3.
#[track_caller]
pub fn product_3x3<T, A, B>(a: &A, b: &B) -> [[T; 3]; 3]
where
  T: Element,
  A: Grid<Element = T> + ?Sized,
  B: Grid<Element = T> + ?Sized,
{
  check_square(a, 3);
  check_square(b, 3);
  let (a1, a2, a3) = (a.read_element(0, 0), a.read_element(0, 1), a.read_element(0, 2));
  let (b1, b2, b3) = (a.read_element(1, 0), a.read_element(1, 1), a.read_element(1, 2));
  let (c1, c2, c3) = (a.read_element(2, 0), a.read_element(2, 1), a.read_element(2, 2));

  let (x1, x2, x3) = (b.read_element(0, 0), b.read_element(0, 1), b.read_element(0, 2));
  let (y1, y2, y3) = (b.read_element(1, 0), b.read_element(1, 1), b.read_element(1, 2));
  let (z1, z2, z3) = (b.read_element(2, 0), b.read_element(2, 1), b.read_element(2, 2));

  [
    [
      a1 * x1 + a2 * y1 + a3 * z1,
      a1 * x2 + a2 * y2 + a3 * z2,
      a1 * x3 + a2 * y3 + a3 * z3,
    ],
    [
      b1 * x1 + b2 * y1 + b3 * z1,
      b1 * x2 + b2 * y2 + b3 * z2,
      b1 * x3 + b2 * y3 + b3 * z3,
    ],
    [
      c1 * x1 + c2 * y1 + c3 * z1,
      c1 * x2 + c2 * y2 + c3 * z2,
      c1 * x3 + c2 * y3 + c3 * z3,
    ],
  ]
}

/// # Panics
/// If either operand is not 4x4.
#[track_caller]
pub fn product_4x4<T, A, B>(a: &A, b: &B) -> [[T; 4]; 4]
where
  T: Element,
  A: Grid<Element = T> + ?Sized,
  B: Grid<Element = T> + ?Sized,
{
  check_square(a, 4);
  check_square(b, 4);
  let a = |r, c| a.read_element(r, c);
  let b = |r, c| b.read_element(r, c);
  let cell = |r, c| a(r, 0) * b(0, c) + a(r, 1) * b(1, c) + a(r, 2) * b(2, c) + a(r, 3) * b(3, c);

  #[rustfmt::skip]
  let product = [
    [cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)],
    [cell(1, 0), cell(1, 1), cell(1, 2), cell(1, 3)],
    [cell(2, 0), cell(2, 1), cell(2, 2), cell(2, 3)],
    [cell(3, 0), cell(3, 1), cell(3, 2), cell(3, 3)],
  ];
  product
}

impl<T: Element, const N: usize, O: DenseOrder> Matrix<T, N, N, O> {
  /// The closed form product for 2x2, 3x3 and 4x4 operands, `None` for other sizes.
  pub fn mul_unrolled<O2: DenseOrder>(&self, rhs: &Matrix<T, N, N, O2>) -> Option<Self> {
    match N {
      2 => {
        let product = product_2x2(self, rhs);
        Some(Self::from_fn(|r, c| product[r][c]))
      }
      3 => {
        let product = product_3x3(self, rhs);
        Some(Self::from_fn(|r, c| product[r][c]))
      }
      4 => {
        let product = product_4x4(self, rhs);
        Some(Self::from_fn(|r, c| product[r][c]))
      }
      _ => None,
    }
  }
}

fn multiply<T, const M: usize, const P: usize, const N: usize, O, O2>(
  a: &Matrix<T, M, P, O>,
  b: &Matrix<T, P, N, O2>,
) -> Matrix<T, M, N, O>
where
  T: Element,
  O: DenseOrder,
  O2: DenseOrder,
{
  match (M, P, N) {
    (2, 2, 2) => {
      let product = product_2x2(a, b);
      Matrix::from_fn(|r, c| product[r][c])
    }
    (3, 3, 3) => {
      let product = product_3x3(a, b);
      Matrix::from_fn(|r, c| product[r][c])
    }
    (4, 4, 4) => {
      let product = product_4x4(a, b);
      Matrix::from_fn(|r, c| product[r][c])
    }
    _ => Matrix::from_fn(|i, j| {
      (0..P).fold(T::zero(), |acc, k| {
        acc + a.read_element(i, k) * b.read_element(k, j)
      })
    }),
  }
}

macro_rules! impl_matrix_product {
  ($($Lhs:ty, $Rhs:ty);*) => {
    $(
      impl<'a, T, const M: usize, const P: usize, const N: usize, O, O2> Mul<$Rhs> for $Lhs
      where
        T: Element,
        O: DenseOrder,
        O2: DenseOrder,
      {
        type Output = Matrix<T, M, N, O>;
        fn mul(self, rhs: $Rhs) -> Self::Output {
          multiply::<T, M, P, N, O, O2>(&self, &rhs)
        }
      }
    )*
  };
}

impl_matrix_product!(
  Matrix<T, M, P, O>, Matrix<T, P, N, O2>;
  Matrix<T, M, P, O>, &'a Matrix<T, P, N, O2>;
  &'a Matrix<T, M, P, O>, Matrix<T, P, N, O2>;
  &'a Matrix<T, M, P, O>, &'a Matrix<T, P, N, O2>
);
