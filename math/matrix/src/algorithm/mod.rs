mod adjoint;
mod determinant;
mod permutation;

pub use adjoint::*;
pub use determinant::*;
pub use permutation::*;

#[cfg(test)]
mod test;
