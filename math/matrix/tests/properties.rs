use cgmath::SquareMatrix as _;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rendiation_matrix::*;

const ROUNDS: usize = 64;

fn random_matrix<const H: usize, const W: usize, O: DenseOrder>(
  rng: &mut StdRng,
) -> Matrix<i64, H, W, O> {
  Matrix::from_fn(|_, _| rng.gen_range(-20..20))
}

fn unrolled_agrees_with_naive<const N: usize, O: DenseOrder>(rng: &mut StdRng) {
  for _ in 0..ROUNDS {
    let a = random_matrix::<N, N, O>(rng);
    let b = random_matrix::<N, N, O>(rng);
    let naive: Matrix<i64, N, N, O> = naive_product(&a, &b).unwrap();
    assert_eq!(a.mul_unrolled(&b), Some(naive.clone()));
    assert_eq!(&a * &b, naive);

    let t = b.transpose();
    assert_eq!(a.mul_unrolled(&t), Some(naive_product(&a, &t).unwrap()));
    let mixed = b.change_order::<ColumnMajor>();
    assert_eq!(a.mul_unrolled(&mixed), Some(naive));
  }
}

#[test]
fn unrolled_product_matches_triple_loop() {
  let mut rng = StdRng::seed_from_u64(7);
  unrolled_agrees_with_naive::<2, RowMajor>(&mut rng);
  unrolled_agrees_with_naive::<3, RowMajor>(&mut rng);
  unrolled_agrees_with_naive::<4, RowMajor>(&mut rng);
  unrolled_agrees_with_naive::<2, ColumnMajor>(&mut rng);
  unrolled_agrees_with_naive::<3, ColumnMajor>(&mut rng);
  unrolled_agrees_with_naive::<4, ColumnMajor>(&mut rng);
}

fn transpose_reinterprets<O: DenseOrder>(rng: &mut StdRng) {
  for _ in 0..ROUNDS {
    let m = random_matrix::<3, 5, O>(rng);
    let t = m.transpose();
    for row in 0..3 {
      for column in 0..5 {
        assert_eq!(t.element(column, row), m.element(row, column));
      }
    }
    assert_eq!(t.transpose(), m);
    assert_eq!(t.transposed_copy().to_rows(), m.to_rows());
    assert_eq!(t.data(), m.data());
  }
}

#[test]
fn transpose_is_an_index_reinterpretation() {
  let mut rng = StdRng::seed_from_u64(11);
  transpose_reinterprets::<RowMajor>(&mut rng);
  transpose_reinterprets::<ColumnMajor>(&mut rng);
}

#[test]
fn change_order_round_trip() {
  let mut rng = StdRng::seed_from_u64(13);
  for _ in 0..ROUNDS {
    let m = random_matrix::<4, 3, RowMajor>(&mut rng);
    assert_eq!(m.change_order::<RowMajor>(), m);
    let there = m.change_order::<ColumnMajor>();
    assert_eq!(there, m);
    assert_eq!(there.change_order::<RowMajor>(), m);

    let t = m.transpose();
    let round_trip = t.change_order::<ColumnMajor>().change_order::<RowMajor>();
    assert_eq!(round_trip, t);
  }
}

#[test]
fn invertible_exactly_when_determinant_is_non_zero() {
  let mut rng = StdRng::seed_from_u64(17);
  for _ in 0..ROUNDS {
    let m = Matrix::<i64, 3, 3>::from_fn(|_, _| rng.gen_range(-2..3));
    assert_eq!(is_invertible(&m), m.det() != 0);
    assert_eq!(&m * &m.adjoint(), Matrix::<i64, 3, 3>::identity() * m.det());
  }
}

#[test]
fn serde_round_trip() {
  let mut rng = StdRng::seed_from_u64(19);
  for _ in 0..ROUNDS {
    let m = random_matrix::<2, 3, ColumnMajor>(&mut rng).transpose();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix<i64, 3, 2> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
  }
}

fn to_cgmath(m: &Matrix4d) -> cgmath::Matrix4<f64> {
  let c = m.change_order::<ColumnMajor>();
  let d = c.data();
  #[rustfmt::skip]
  let result = cgmath::Matrix4::new(
    d[0], d[1], d[2], d[3],
    d[4], d[5], d[6], d[7],
    d[8], d[9], d[10], d[11],
    d[12], d[13], d[14], d[15],
  );
  result
}

#[test]
fn agrees_with_cgmath() {
  let mut rng = StdRng::seed_from_u64(23);
  for _ in 0..ROUNDS {
    let a = Matrix4d::from_fn(|_, _| rng.gen_range(-5..6) as f64);
    let b = Matrix4d::from_fn(|_, _| rng.gen_range(-5..6) as f64);
    let (ca, cb) = (to_cgmath(&a), to_cgmath(&b));

    assert_eq!(a.det(), ca.determinant());

    let product = &a * &b;
    let expected = ca * cb;
    for row in 0..4 {
      for column in 0..4 {
        assert_eq!(product.element(row, column), expected[column][row]);
      }
    }
  }
}
