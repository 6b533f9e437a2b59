use crate::*;

#[test]
fn permutations_in_lexicographic_order_with_sign() {
  let all: Vec<_> = Permutations::new(3)
    .map(|p| (p.indices.to_vec(), p.is_even()))
    .collect();
  assert_eq!(
    all,
    vec![
      (vec![0, 1, 2], true),
      (vec![0, 2, 1], false),
      (vec![1, 0, 2], false),
      (vec![1, 2, 0], true),
      (vec![2, 0, 1], true),
      (vec![2, 1, 0], false),
    ]
  );
}

#[test]
fn permutation_counts() {
  for n in 0..7 {
    assert_eq!(Permutations::new(n).count(), factorial(n));
  }
  let empty: Vec<_> = Permutations::new(0).collect();
  assert_eq!(empty.len(), 1);
  assert!(empty[0].indices.is_empty() && empty[0].is_even());

  let even = Permutations::new(5).filter(Permutation::is_even).count();
  assert_eq!(even, 60);
}

#[test]
fn factorial_saturates() {
  assert_eq!(factorial(0), 1);
  assert_eq!(factorial(5), 120);
  assert_eq!(factorial(100), usize::MAX);
}

#[test]
fn determinant_of_known_matrix() {
  let m = Matrix3i::from_rows([[3, 4, 9], [7, 6, 5], [0, 1, 2]]);
  assert_eq!(determinant(&m).value(), 28);
  assert_eq!(m.det(), 28);
  assert_eq!(determinant(&m.transpose()).into_value(), 28);
  assert_eq!(determinant(&m.change_order::<ColumnMajor>()).value(), 28);
}

#[test]
fn determinant_of_identity_is_one() {
  assert_eq!(IdentityMatrix::<f64, 1>::new().det(), 1.);
  assert_eq!(IdentityMatrix::<f64, 2>::new().det(), 1.);
  assert_eq!(IdentityMatrix::<f64, 3>::new().det(), 1.);
  assert_eq!(IdentityMatrix::<f64, 4>::new().det(), 1.);
  assert_eq!(IdentityMatrix::<i32, 6, ColumnMajor>::new().det(), 1);
}

#[test]
fn determinant_of_scalar_and_runtime_square() {
  assert_eq!(determinant(&Scalar(5)).value(), 5);
  assert_eq!(Scalar(5).det(), 5);
  assert_eq!(
    try_determinant(&Matrix::<i32, 2, 3>::zeros()),
    Err(MatrixError::NotSquare {
      height: 2,
      width: 3
    })
  );
  let m = Matrix2i::from_rows([[1, 2], [3, 4]]);
  assert_eq!(try_determinant(&m), Ok(determinant(&m)));
}

#[test]
fn algebraic_cofactor_sign() {
  let m = Matrix3i::from_rows([[3, 4, 9], [7, 6, 5], [0, 1, 2]]);
  assert_eq!(algebraic_cofactor(&m, 0, 0), Ok(7));
  assert_eq!(algebraic_cofactor(&m, 0, 1), Ok(-14));
  assert_eq!(algebraic_cofactor(&m, 2, 1), Ok(-(3 * 5 - 9 * 7)));
  assert!(algebraic_cofactor(&m, 3, 0).is_err());

  // expansion along the first row reproduces the determinant
  let expanded: i32 = (0..3)
    .map(|c| m.element(0, c) * algebraic_cofactor(&m, 0, c).unwrap())
    .sum();
  assert_eq!(expanded, 28);
}

#[test]
fn adjoint_places_cofactors_transposed() {
  let m = Matrix2i::from_rows([[1, 2], [3, 4]]);
  assert_eq!(m.adjoint().to_rows(), vec![vec![4, -2], vec![-3, 1]]);

  let m = Matrix3i::from_rows([[3, 4, 9], [7, 6, 5], [0, 1, 2]]);
  let adjoint = adjoint_matrix(&m);
  for row in 0..3 {
    for column in 0..3 {
      assert_eq!(
        adjoint.element(row, column),
        algebraic_cofactor(&m, column, row).unwrap()
      );
    }
  }
  assert_eq!(&m * &adjoint, Matrix3i::identity() * 28);
}

#[test]
fn adjoint_of_identity_is_identity() {
  let identity = Matrix4d::identity();
  assert_eq!(identity.adjoint(), identity);
  assert_eq!(
    Matrix::<i32, 1, 1>::identity().adjoint(),
    Matrix::<i32, 1, 1>::identity()
  );
  assert_eq!(Scalar(3).adjoint(), Scalar(1));
}

#[test]
fn invertibility_follows_determinant() {
  let singular = Matrix3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
  let regular = Matrix3i::from_rows([[3, 4, 9], [7, 6, 5], [0, 1, 2]]);
  for m in [&singular, &regular] {
    assert_eq!(is_invertible(m), m.det() != 0);
    assert_eq!(m.is_invertible(), m.det() != 0);
  }
  assert!(!singular.is_invertible());
  assert!(regular.is_invertible());
  assert!(singular.inverse().is_none());
  assert_eq!(singular.inverse_or_identity(), Matrix3i::identity());
}

#[test]
fn inverse_is_adjoint_over_determinant() {
  let m = Matrix2d::from_rows([[4., 7.], [2., 6.]]);
  let inverse = m.inverse().unwrap();
  let product = &m * &inverse;
  let identity = Matrix2d::identity();
  for row in 0..2 {
    for column in 0..2 {
      let error = product.element(row, column) - identity.element(row, column);
      assert!(error.abs() < 1e-12);
    }
  }

  assert_eq!(Scalar(4.).inverse(), Some(Scalar(0.25)));
  assert_eq!(Scalar(0.).inverse(), None);
  assert_eq!(Scalar(0.).inverse_or_identity(), Scalar(1.));
}
