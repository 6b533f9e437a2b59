mod cofactor;
mod merge;
mod sub_matrix;

pub use cofactor::*;
pub use merge::*;
pub use sub_matrix::*;

#[cfg(test)]
mod test;
