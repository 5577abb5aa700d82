use rand::Rng;
use rand::seq::SliceRandom;

/// How a slice is permuted between two sortedness checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ShuffleStrategy {
    /// Swap every position with an index drawn from the whole slice.
    ///
    /// **This shuffle is biased.** It makes `n` draws of `n` choices each, so
    /// its `n^n` equally likely outcomes cannot spread evenly over the `n!`
    /// permutations. Every permutation is still reachable, which is all the
    /// driver loop needs. See [`shuffle_naive`].
    #[default]
    Naive,
    /// Unbiased Fisher-Yates shuffle over a shrinking range.
    FisherYates,
}

impl ShuffleStrategy {
    /// Permutes `items` in place.
    pub fn shuffle<T, R: Rng + ?Sized>(self, items: &mut [T], rng: &mut R) {
        match self {
            ShuffleStrategy::Naive => shuffle_naive(items, rng),
            ShuffleStrategy::FisherYates => items.shuffle(rng),
        }
    }
}

/// For each position `i`, swaps `items[i]` with `items[j]` where `j` is drawn
/// uniformly from `0..items.len()`.
///
/// Biased, see [`ShuffleStrategy::Naive`]. Do not reuse where a uniform
/// permutation matters.
pub fn shuffle_naive<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    for i in 0..len {
        let j = rng.gen_range(0..len);
        items.swap(i, j);
    }
}
