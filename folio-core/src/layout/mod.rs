//! Floating dock layout.
//!
//! The dock is rendered twice from the same link list: an inline bar on wide
//! screens (compact capacity) and a vertical menu on narrow screens (expanded
//! capacity). Both use [`partition`] to decide what goes behind "More".

pub mod dock;
pub mod overflow;

pub use dock::{
    DockAction, DockContext, DockLayout, DockLink, DockThresholds, build_dock,
    dock_links,
};
pub use overflow::{Partition, partition, partition_signed};
