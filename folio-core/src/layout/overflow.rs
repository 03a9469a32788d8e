//! Overflow partitioner: splits an ordered list into a visible prefix and a
//! hidden suffix for a given capacity.

use serde::Serialize;

/// Result of splitting a list at a visible capacity.
///
/// `visible` followed by `hidden` always reproduces the input order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<T> {
    pub visible: Vec<T>,
    pub hidden: Vec<T>,
    /// True when the input was longer than the capacity, i.e. a "more"
    /// affordance is needed.
    pub overflowed: bool,
}

impl<T> Partition<T> {
    /// Total number of items across both buckets.
    pub fn len(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.hidden.is_empty()
    }

    /// Reassemble the original ordered list.
    pub fn into_items(self) -> Vec<T> {
        let mut items = self.visible;
        items.extend(self.hidden);
        items
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            visible: Vec::new(),
            hidden: Vec::new(),
            overflowed: false,
        }
    }
}

/// Split `items` into at most `max_visible` leading items and the remainder.
///
/// Never reorders; a list that fits is returned whole with an empty `hidden`.
pub fn partition<T: Clone>(items: &[T], max_visible: usize) -> Partition<T> {
    if items.len() <= max_visible {
        return Partition {
            visible: items.to_vec(),
            hidden: Vec::new(),
            overflowed: false,
        };
    }

    let (visible, hidden) = items.split_at(max_visible);
    Partition {
        visible: visible.to_vec(),
        hidden: hidden.to_vec(),
        overflowed: true,
    }
}

/// Same as [`partition`], for callers holding a signed capacity. Negative
/// capacities are clamped to zero.
pub fn partition_signed<T: Clone>(
    items: &[T],
    max_visible: i64,
) -> Partition<T> {
    let capacity = usize::try_from(max_visible.max(0)).unwrap_or(usize::MAX);
    partition(items, capacity)
}
