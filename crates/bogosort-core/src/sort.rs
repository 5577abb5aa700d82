use rand::Rng;
use tracing::{debug, trace};

use crate::{ShuffleStrategy, SortError, SortState};

/// Knobs for [`bogo_sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// The shuffle applied while the slice is unsorted.
    pub strategy: ShuffleStrategy,
    /// Give up after this many shuffles. `None` shuffles for as long as it
    /// takes.
    pub max_shuffles: Option<u64>,
}

/// What a successful [`bogo_sort`] call cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of shuffles applied. Zero if the input was already sorted.
    pub shuffles: u64,
    /// Adjacent-pair comparisons made by all sortedness checks.
    pub comparisons: u64,
}

/// Shuffles `items` in place until it is in non-decreasing order.
///
/// The sortedness check runs first, so an already sorted slice is returned
/// untouched. Without a shuffle limit the loop terminates with probability 1
/// but its expected length grows super-exponentially with `items.len()`.
///
/// # Errors
///
/// [`SortError::ShuffleLimitExceeded`] when `options.max_shuffles` is set and
/// the slice is still unsorted after that many shuffles.
pub fn bogo_sort<T: PartialOrd, R: Rng + ?Sized>(
    items: &mut [T],
    rng: &mut R,
    options: &SortOptions,
) -> Result<SortReport, SortError> {
    let mut report = SortReport::default();

    loop {
        let (state, comparisons) = SortState::evaluate(items);
        report.comparisons += comparisons;

        match state {
            SortState::Sorted => {
                debug!(
                    len = items.len(),
                    shuffles = report.shuffles,
                    comparisons = report.comparisons,
                    "sequence sorted"
                );
                return Ok(report);
            }
            SortState::Unsorted => {
                if let Some(limit) =
                    options.max_shuffles.filter(|&limit| report.shuffles >= limit)
                {
                    debug!(len = items.len(), limit, "shuffle limit reached");
                    return Err(SortError::ShuffleLimitExceeded { limit });
                }
                options.strategy.shuffle(items, rng);
                report.shuffles += 1;
                trace!(shuffle = report.shuffles, "shuffled");
            }
        }
    }
}
