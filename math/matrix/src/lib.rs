//! Compile time sized matrices.
//!
//! A [`Matrix`] owns a flat buffer interpreted through a [`StorageOrder`] and a per instance
//! transposed flag. Transposing only flips the flag and shares the buffer, so the result aliases
//! its source. [`SubMatrix`], [`Cofactor`] and [`MergeProxy`] borrow their parents instead of
//! copying, and everything addressable implements [`Grid`], which is what the determinant and
//! adjoint algorithms consume.

mod algorithm;
mod element;
mod error;
mod grid;
mod mat;
mod order;
mod storage;
mod view;

pub use algorithm::*;
pub use element::*;
pub use error::*;
pub use grid::*;
pub use mat::*;
pub use order::*;
pub use storage::*;
pub use view::*;
