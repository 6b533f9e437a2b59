mod alias;
mod identity;
mod matrix;
mod ops;
mod product;
mod scalar;
mod serialize;

pub use alias::*;
pub use identity::*;
pub use matrix::*;
pub use product::*;
pub use scalar::*;
