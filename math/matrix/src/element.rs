use num_traits::{Num, NumAssignOps};

/// The numeric requirement of every container in this crate: copyable, with zero, one, the four
/// arithmetic operators and their compound assignment forms.
///
/// Division follows the element's own semantic, integers truncate and floats follow IEEE.
pub trait Element: Copy + Num + NumAssignOps {}

impl<T: Copy + Num + NumAssignOps> Element for T {}
