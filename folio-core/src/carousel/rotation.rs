//! RotationController: the single active index over an ordered list

use serde::Serialize;

/// Snapshot of the controller, as handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RotationState {
    pub active_index: usize,
    pub item_count: usize,
}

/// Owns which item of an ordered list is currently displayed.
///
/// Invariant: `active_index < item_count` whenever `item_count > 0`. With no
/// items the controller is inert and every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationController {
    active_index: usize,
    item_count: usize,
}

impl RotationController {
    pub fn new(item_count: usize) -> Self {
        Self {
            active_index: 0,
            item_count,
        }
    }

    /// Raw active index. Meaningless (always 0) while inert.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Active index, or `None` when there is nothing to show.
    pub fn current(&self) -> Option<usize> {
        (!self.is_inert()).then_some(self.active_index)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_inert(&self) -> bool {
        self.item_count == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    pub fn state(&self) -> RotationState {
        RotationState {
            active_index: self.active_index,
            item_count: self.item_count,
        }
    }

    pub fn next(&mut self) {
        if self.is_inert() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.item_count;
    }

    pub fn previous(&mut self) {
        if self.is_inert() {
            return;
        }
        self.active_index =
            (self.active_index + self.item_count - 1) % self.item_count;
    }

    /// Timer-driven advance. Same transition as [`next`](Self::next).
    pub fn tick(&mut self) {
        self.next();
    }

    /// Keep the index valid after the caller swapped in a different list.
    /// Resets to the first item only when the old index no longer exists.
    pub fn on_items_changed(&mut self, new_count: usize) {
        self.item_count = new_count;
        if self.active_index >= new_count {
            self.active_index = 0;
        }
    }
}
