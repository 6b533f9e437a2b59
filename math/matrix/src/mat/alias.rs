use crate::*;

pub type MatrixQ<T, const N: usize, O = RowMajor> = Matrix<T, N, N, O>;
/// Column vector.
pub type Vector<T, const N: usize, O = RowMajor> = Matrix<T, N, 1, O>;
pub type RowVector<T, const N: usize, O = RowMajor> = Matrix<T, 1, N, O>;

macro_rules! sized_aliases {
  ($($n:literal),*) => {
    paste::paste! {
      $(
        pub type [<Matrix $n i>] = Matrix<i32, $n, $n>;
        pub type [<Matrix $n f>] = Matrix<f32, $n, $n>;
        pub type [<Matrix $n d>] = Matrix<f64, $n, $n>;
        pub type [<Vector $n i>] = Vector<i32, $n>;
        pub type [<Vector $n f>] = Vector<f32, $n>;
        pub type [<Vector $n d>] = Vector<f64, $n>;
      )*
    }
  };
}

sized_aliases!(2, 3, 4);
