//! Core of the shuffle-until-sorted algorithm, better known as BogoSort.
//!
//! The crate is split into three small pieces:
//!
//! * [`is_sorted`] and [`SortState`] decide whether a slice is in
//!   non-decreasing order;
//! * [`ShuffleStrategy`] permutes a slice in place using a caller-provided
//!   random number generator;
//! * [`bogo_sort`] drives the two until the slice happens to be sorted, or
//!   until an optional shuffle limit from [`SortOptions`] is reached.
//!
//! The randomness source is always passed in explicitly, so a seeded
//! generator makes every run reproducible:
//!
//! ```
//! use bogosort_core::{SortOptions, bogo_sort};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut values = [5, 3, 2, 4, 1];
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = bogo_sort(&mut values, &mut rng, &SortOptions::default()).unwrap();
//!
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! assert!(report.shuffles > 0);
//! ```

mod shuffle;
mod sort;
mod sorted;

pub use shuffle::{ShuffleStrategy, shuffle_naive};
pub use sort::{SortOptions, SortReport, bogo_sort};
pub use sorted::{SortState, is_sorted};

/// Ways in which [`bogo_sort`] can give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The slice was still unsorted after the configured number of shuffles.
    ///
    /// The slice is left in its last shuffled order, which is still a
    /// permutation of the input.
    #[error("sequence still unsorted after {limit} shuffle(s)")]
    ShuffleLimitExceeded { limit: u64 },
}



#[cfg(test)]
mod test_sort;
