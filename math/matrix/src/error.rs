use crate::MergeMode;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
  #[error("element ({row}, {column}) is out of bounds of a {height}x{width} matrix")]
  OutOfBounds {
    row: usize,
    column: usize,
    height: usize,
    width: usize,
  },
  #[error("linear index {index} is out of bounds of {len} elements")]
  IndexOutOfBounds { index: usize, len: usize },
  #[error("matrix dimensions do not agree, expect {expected:?}, found {found:?}")]
  IncompatibleDimensions {
    expected: (usize, usize),
    found: (usize, usize),
  },
  #[error("a square matrix is required, found {height}x{width}")]
  NotSquare { height: usize, width: usize },
  #[error("merge mode {0:?} is not valid here")]
  InvalidMergeMode(MergeMode),
}

/// Panic with the error message, the way slice indexing does.
#[track_caller]
pub(crate) fn ensure(checked: Result<(), MatrixError>) {
  if let Err(err) = checked {
    panic!("{err}")
  }
}
