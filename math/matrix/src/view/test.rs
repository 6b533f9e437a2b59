use crate::*;

fn upper_triangular() -> Matrix4i {
  #[rustfmt::skip]
  let m = Matrix4i::from_raw([
    1, 2, 3, 4,
    0, 1, 2, 3,
    0, 0, 1, 2,
    0, 0, 0, 1,
  ]);
  m
}

#[test]
fn cofactor_skips_the_excluded_pair() {
  let m = upper_triangular();
  let minor = m.cofactor::<0, 0>();
  assert_eq!(minor.height(), 3);
  assert_eq!(minor.excluded(), (0, 0));
  let expected = Matrix3i::from_rows([[1, 2, 3], [0, 1, 2], [0, 0, 1]]);
  assert!(grid_eq(&minor, &expected));
  let collected: Matrix3i = collect_matrix(&minor).unwrap();
  assert_eq!(collected, expected);

  let minor = m.cofactor::<1, 2>();
  assert_eq!(minor.element(0, 2), 4);
  assert_eq!(minor.element(1, 1), 0);
  assert_eq!(minor.element(2, 2), 1);
}

#[test]
fn cofactor_follows_the_parent_transposition() {
  let m = Matrix3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
  let t = m.transpose();
  let minor = t.cofactor::<0, 1>();
  assert!(minor.is_transposed());
  assert!(grid_eq(&minor, &Matrix2i::from_rows([[2, 8], [3, 9]])));
}

#[test]
fn cofactor_linear_index_uses_its_own_geometry() {
  let m = Matrix3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
  let minor = m.cofactor::<1, 1>();
  assert_eq!(minor.len(), 4);
  assert_eq!(minor.element_at(1), 3);
  assert_eq!(minor.element_at(2), 7);
  assert!(minor.try_element_at(4).is_err());
}

#[test]
fn runtime_cofactor_checks() {
  let m = Matrix3i::zeros();
  assert_eq!(
    Cofactor::new(&m, 3, 0).err(),
    Some(MatrixError::OutOfBounds {
      row: 3,
      column: 0,
      height: 3,
      width: 3
    })
  );
  let rect = Matrix::<i32, 2, 3>::zeros();
  assert_eq!(
    Cofactor::new(&rect, 0, 0).err(),
    Some(MatrixError::NotSquare {
      height: 2,
      width: 3
    })
  );
}

#[test]
fn cofactor_of_cofactor() {
  let m = upper_triangular();
  let outer = m.cofactor::<0, 0>();
  let inner = Cofactor::new(&outer, 2, 2).unwrap();
  assert!(grid_eq(&inner, &Matrix2i::from_rows([[1, 2], [0, 1]])));
  assert_eq!(determinant(&inner).value(), 1);
}

#[test]
fn writes_through_cofactor() {
  let mut m = Matrix3i::zeros();
  {
    let mut minor = m.cofactor_mut::<1, 1>();
    minor.set_element(1, 0, 70);
    minor.set_element_at(1, 30);
  }
  assert_eq!(m.element(2, 0), 70);
  assert_eq!(m.element(0, 2), 30);
}

#[test]
fn sub_matrix_window() {
  let m = Matrix::<i32, 3, 4>::from_fn(|r, c| (r * 10 + c) as i32);
  let window = m.sub_matrix::<1, 3, 1, 4>();
  assert_eq!((window.height(), window.width()), (2, 3));
  assert!(grid_eq(
    &window,
    &Matrix::<i32, 2, 3>::from_rows([[11, 12, 13], [21, 22, 23]])
  ));
  assert_eq!(window.element_at(4), 22);
  assert_eq!(window.index_to_pair(4), (1, 1));
}

#[test]
fn sub_matrix_of_transposed_parent() {
  let m = Matrix::<i32, 3, 4>::from_fn(|r, c| (r * 10 + c) as i32);
  let t = m.transpose();
  let window = t.sub_matrix::<0, 2, 1, 3>();
  assert!(window.is_transposed());
  assert!(grid_eq(&window, &Matrix2i::from_rows([[10, 20], [11, 21]])));
}

#[test]
fn sub_matrix_writes_land_in_parent() {
  let mut m = Matrix::<i32, 3, 4, ColumnMajor>::zeros();
  {
    let mut window = m.sub_matrix_mut::<1, 3, 2, 4>();
    window.set_element(0, 1, -1);
    window.try_set_element(1, 0, 5).unwrap();
    assert!(window.try_set_element(2, 0, 5).is_err());
  }
  assert_eq!(m.element(1, 3), -1);
  assert_eq!(m.element(2, 2), 5);
}

#[test]
fn runtime_sub_matrix_bounds() {
  let m = Matrix::<i32, 3, 4>::zeros();
  assert!(SubMatrix::<_, 0, 2, 0, 4>::new(&m).is_ok());
  assert_eq!(
    SubMatrix::<_, 0, 2, 0, 5>::new(&m).err(),
    Some(MatrixError::OutOfBounds {
      row: 1,
      column: 4,
      height: 3,
      width: 4
    })
  );
}

#[test]
fn view_display() {
  let m = upper_triangular();
  assert_eq!(
    m.sub_matrix::<2, 4, 2, 4>().to_string(),
    "|     1     2     |\n|     0     1     |\n"
  );
}

#[test]
fn merge_proxy_routes_accesses() {
  let a = Matrix2i::from_rows([[1, 2], [3, 4]]);
  let b = Matrix::<i32, 2, 1, ColumnMajor>::from_rows([[5], [6]]);
  let wide = merge_rows(&a, &b);
  assert_eq!((wide.height(), wide.width()), (2, 3));
  assert_eq!(wide.mode(), MergeMode::ROW);
  assert_eq!(wide.element(1, 2), 6);
  assert_eq!(
    wide.materialize::<2, 3>(),
    Ok(Matrix::<i32, 2, 3>::from_rows([[1, 2, 5], [3, 4, 6]]))
  );

  let c = Matrix::<i32, 1, 2>::from_rows([[7, 8]]);
  let tall = merge_columns(&a, &c);
  assert_eq!(tall.element(2, 1), 8);
  assert_eq!(tall.element(1, 0), 3);
  assert!(tall.materialize::<2, 3>().is_err());
}

#[test]
fn merge_proxy_validation() {
  let a = Matrix2i::zeros();
  let b = Matrix::<i32, 2, 1>::zeros();
  assert!(MergeProxy::<_, _, RowMajor>::new(MergeMode::ROW, &a, &b).is_ok());
  assert_eq!(
    MergeProxy::<_, _, RowMajor>::new(MergeMode::COL, &a, &b).err(),
    Some(MatrixError::IncompatibleDimensions {
      expected: (2, 2),
      found: (2, 1)
    })
  );
  assert_eq!(
    MergeProxy::<_, _, RowMajor>::new(MergeMode::ROW_MEG, &a, &b).err(),
    Some(MatrixError::InvalidMergeMode(MergeMode::ROW_MEG))
  );
  assert_eq!(
    MergeProxy::<_, _, RowMajor>::new(MergeMode::ROW | MergeMode::COL, &a, &b).err(),
    Some(MatrixError::InvalidMergeMode(MergeMode::ROW | MergeMode::COL))
  );
}

#[test]
fn merge_proxy_writes_to_the_owning_operand() {
  let mut a = Matrix2i::zeros();
  let mut b = Matrix::<i32, 2, 1>::zeros();
  {
    let mut proxy: MergeProxy<_, _> = MergeProxy::new(MergeMode::ROW, &mut a, &mut b).unwrap();
    proxy.set_element(0, 2, 50);
    proxy.set_element(1, 1, 9);
  }
  assert_eq!(b.element(0, 0), 50);
  assert_eq!(a.element(1, 1), 9);
}

#[test]
fn materialized_merge() {
  let a = Matrix2i::from_rows([[1, 2], [3, 4]]);
  let b = Matrix::<i32, 2, 1, ColumnMajor>::from_rows([[5], [6]]);
  let c = Matrix::<i32, 1, 2>::from_rows([[7, 8]]);

  let stacked: Matrix<i32, 3, 2, ColumnMajor> =
    merge_materialized(MergeMode::COL_MEG, &a, &c).unwrap();
  assert_eq!(stacked.to_rows(), vec![vec![1, 2], vec![3, 4], vec![7, 8]]);
  assert_eq!(&*stacked.data(), &[1, 3, 7, 2, 4, 8]);

  let wide: Matrix<i32, 2, 3> = merge_materialized(MergeMode::ROW_MEG, &a, &b).unwrap();
  assert_eq!(wide.to_rows(), vec![vec![1, 2, 5], vec![3, 4, 6]]);

  let proxy_mode: Result<Matrix<i32, 2, 3>, _> = merge_materialized(MergeMode::ROW, &a, &b);
  assert_eq!(
    proxy_mode,
    Err(MatrixError::InvalidMergeMode(MergeMode::ROW))
  );

  let wrong_shape: Result<Matrix<i32, 2, 4>, _> = merge_materialized(MergeMode::ROW_MEG, &a, &b);
  assert_eq!(
    wrong_shape,
    Err(MatrixError::IncompatibleDimensions {
      expected: (2, 4),
      found: (2, 3)
    })
  );
}

#[test]
fn typed_materialized_merge() {
  let a = Matrix2i::from_rows([[1, 2], [3, 4]]);
  let b = Matrix::<i32, 2, 1>::from_rows([[5], [6]]).transpose();
  let wide: Matrix<i32, 2, 3> = merge_rows_materialized(&a, &b.transpose());
  assert_eq!(wide.to_rows(), vec![vec![1, 2, 5], vec![3, 4, 6]]);

  let tall: Matrix<i32, 3, 2> = merge_columns_materialized(&a, &b);
  assert_eq!(tall.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}
