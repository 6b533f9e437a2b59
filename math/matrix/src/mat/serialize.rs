use serde::{Deserialize, Serialize};

use crate::*;

/// Serialized as logical rows, so the wire form does not depend on order or transposed state.
impl<T, const H: usize, const W: usize, O> Serialize for Matrix<T, H, W, O>
where
  T: Element + Serialize,
  O: DenseOrder,
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.to_rows().serialize(serializer)
  }
}

impl<'de, T, const H: usize, const W: usize, O> Deserialize<'de> for Matrix<T, H, W, O>
where
  T: Element + Deserialize<'de>,
  O: DenseOrder,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
    Self::try_from_rows(rows).map_err(serde::de::Error::custom)
  }
}
