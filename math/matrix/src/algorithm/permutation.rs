use smallvec::SmallVec;

pub type PermutationIndices = SmallVec<[usize; 8]>;

/// One arrangement of `0..n` and how many swaps produced it from the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
  pub indices: PermutationIndices,
  pub transpositions: usize,
}

impl Permutation {
  pub fn is_even(&self) -> bool {
    self.transpositions % 2 == 0
  }
}

/// All `n!` permutations of `0..n` in lexicographic order, starting from the identity.
///
/// Each step is the standard next permutation: swap the pivot with its successor, then reverse
/// the descending suffix. Every swap is counted, so the parity of
/// [`Permutation::transpositions`] is the sign of the permutation.
pub struct Permutations {
  next: Option<Permutation>,
}

impl Permutations {
  pub fn new(n: usize) -> Self {
    Self {
      next: Some(Permutation {
        indices: (0..n).collect(),
        transpositions: 0,
      }),
    }
  }
}

fn advance(current: &Permutation) -> Option<Permutation> {
  let indices = &current.indices;
  let pivot = (0..indices.len().saturating_sub(1))
    .rev()
    .find(|&i| indices[i] < indices[i + 1])?;
  let successor = (pivot + 1..indices.len())
    .rev()
    .find(|&j| indices[j] > indices[pivot])?;

  let mut indices = indices.clone();
  indices.swap(pivot, successor);
  let suffix = &mut indices[pivot + 1..];
  let swaps = suffix.len() / 2;
  suffix.reverse();

  Some(Permutation {
    indices,
    transpositions: current.transpositions + 1 + swaps,
  })
}

impl Iterator for Permutations {
  type Item = Permutation;

  fn next(&mut self) -> Option<Permutation> {
    let current = self.next.take()?;
    self.next = advance(&current);
    Some(current)
  }
}

/// `n!`, saturating at `usize::MAX`.
pub fn factorial(n: usize) -> usize {
  (1..=n).fold(1usize, |acc, i| acc.saturating_mul(i))
}
