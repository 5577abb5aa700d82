use std::cmp::Ordering;

/// Whether a sequence is currently in non-decreasing order.
///
/// These are the two states of the [`bogo_sort`](crate::bogo_sort) driver:
/// it starts in whichever state the input is in and shuffles until it
/// reaches [`SortState::Sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    Unsorted,
    Sorted,
}

impl SortState {
    /// Classifies `items`.
    pub fn of<T: PartialOrd>(items: &[T]) -> Self {
        Self::evaluate(items).0
    }

    /// Classifies `items`, also returning the number of adjacent pairs that
    /// were compared. The scan stops at the first descent.
    pub fn evaluate<T: PartialOrd>(items: &[T]) -> (Self, u64) {
        let mut comparisons = 0;
        for pair in items.windows(2) {
            comparisons += 1;
            match pair[0].partial_cmp(&pair[1]) {
                Some(Ordering::Less | Ordering::Equal) => {}
                // Incomparable pairs (e.g. NaN) never satisfy `a <= b`.
                Some(Ordering::Greater) | None => return (SortState::Unsorted, comparisons),
            }
        }
        (SortState::Sorted, comparisons)
    }

    pub fn is_sorted(self) -> bool {
        self == SortState::Sorted
    }
}

/// Returns `true` iff every element is less than or equal to its successor.
///
/// Empty and single-element slices are trivially sorted.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    SortState::of(items).is_sorted()
}
