//! Carousel: items + rotation state + the autoplay timer that drives it.
//!
//! Timer phase is independent of manual navigation: `next()`/`previous()`
//! never reschedule the timer, so an automatic advance can land shortly after
//! a click. The timer is only restarted when autoplay is toggled or the item
//! count changes.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::autoplay::{
    AutoplaySettings, AutoplayTick, AutoplayTimer, TICK_BUFFER,
};
use super::rotation::{RotationController, RotationState};
use super::tilt::item_tilt;

/// Stacking order given to the active slide.
pub const ACTIVE_Z_INDEX: usize = 40;

/// Items shown in a carousel expose a stable identity used for keys and tilt.
pub trait CarouselItem {
    fn key(&self) -> &str;
}

/// Presentation attributes for one slide in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub index: usize,
    pub active: bool,
    /// Rotation in degrees; the active slide is always upright.
    pub rotate: i32,
    pub z_index: usize,
}

#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    rotation: RotationController,
    settings: AutoplaySettings,
    timer: Option<AutoplayTimer>,
    next_generation: u64,
    tick_tx: mpsc::Sender<AutoplayTick>,
    tick_rx: mpsc::Receiver<AutoplayTick>,
}

impl<T> Carousel<T> {
    /// Create a carousel showing the first item. When autoplay is enabled
    /// and there is more than one item, the timer starts immediately.
    pub fn new(items: Vec<T>, settings: AutoplaySettings) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel(TICK_BUFFER);
        let mut carousel = Self {
            rotation: RotationController::new(items.len()),
            items,
            settings,
            timer: None,
            next_generation: 0,
            tick_tx,
            tick_rx,
        };
        carousel.sync_timer();
        carousel
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.rotation.active_index()
    }

    pub fn active(&self) -> Option<&T> {
        self.rotation.current().and_then(|i| self.items.get(i))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.rotation.is_active(index)
    }

    pub fn state(&self) -> RotationState {
        self.rotation.state()
    }

    pub fn settings(&self) -> AutoplaySettings {
        self.settings
    }

    /// True while a timer is armed.
    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) {
        self.rotation.next();
        trace!(active = self.rotation.active_index(), "carousel next");
    }

    pub fn previous(&mut self) {
        self.rotation.previous();
        trace!(active = self.rotation.active_index(), "carousel previous");
    }

    /// Replace the item list. The active index survives when it is still in
    /// range; the timer is restarted if the item count changed.
    pub fn set_items(&mut self, items: Vec<T>) {
        let previous_len = self.items.len();
        self.items = items;
        self.rotation.on_items_changed(self.items.len());
        if previous_len != self.items.len() {
            self.restart_timer();
        }
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.settings.enabled == enabled {
            return;
        }
        self.settings.enabled = enabled;
        self.restart_timer();
    }

    /// Wait for the next autoplay tick and apply it.
    ///
    /// Returns the new active index, or `None` immediately when no timer is
    /// armed.
    pub async fn wait_tick(&mut self) -> Option<usize> {
        self.timer.as_ref()?;
        loop {
            let tick = self.tick_rx.recv().await?;
            if self.accept(tick) {
                return Some(self.rotation.active_index());
            }
        }
    }

    /// Apply the tick already delivered, if any, without waiting. Returns how
    /// many advanced the carousel; at most one fires between polls.
    pub fn apply_pending_ticks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(tick) = self.tick_rx.try_recv() {
            if self.accept(tick) {
                applied += 1;
            }
        }
        applied
    }

    fn accept(&mut self, tick: AutoplayTick) -> bool {
        let current = self.timer.as_ref().map(AutoplayTimer::generation);
        if current != Some(tick.generation) {
            trace!(generation = tick.generation, "dropping stale autoplay tick");
            return false;
        }
        self.rotation.tick();
        true
    }

    fn should_autoplay(&self) -> bool {
        self.settings.enabled && self.items.len() > 1
    }

    fn restart_timer(&mut self) {
        self.timer = None;
        // A queued tick from the old timer would hold the only buffer slot.
        while self.tick_rx.try_recv().is_ok() {}
        self.sync_timer();
    }

    fn sync_timer(&mut self) {
        if !self.should_autoplay() {
            if self.timer.take().is_some() {
                debug!(items = self.items.len(), "carousel autoplay released");
            }
            return;
        }
        if self.timer.is_some() {
            return;
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        self.timer = AutoplayTimer::spawn(
            generation,
            self.settings.interval,
            self.tick_tx.clone(),
        );
    }
}

impl<T: CarouselItem> Carousel<T> {
    /// Stacking and tilt for every slide, in list order.
    pub fn slides(&self) -> Vec<Slide> {
        let count = self.items.len();
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let active = self.rotation.is_active(index);
                Slide {
                    index,
                    active,
                    rotate: if active { 0 } else { item_tilt(item.key(), index) },
                    z_index: if active {
                        ACTIVE_Z_INDEX
                    } else {
                        count + 2 - index
                    },
                }
            })
            .collect()
    }
}
