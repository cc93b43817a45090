//! Meal picker state: active category and slot, food list cache, playback.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use super::playback::{Candidates, Playback, DISPLAY_INTERVAL};
use super::source::FoodSource;
use super::tease::tease_for;
use crate::models::{FoodMenu, MealSlot, MealSlots, PickerObserver};

/// Picks what to eat
///
/// Owns the food list cache (one entry per category, loaded on first use and
/// kept for the picker's lifetime), the active category and meal slot, and
/// the display loop. Everything it wants shown goes to the observer.
pub struct MealPicker {
    source: Arc<dyn FoodSource>,
    observer: Arc<dyn PickerObserver>,
    slots: MealSlots,
    slot_index: usize,
    category: String,
    pools: HashMap<String, FoodMenu>,
    candidates: watch::Sender<Candidates>,
    playback: Option<Playback>,
    // Start requests since the last category or slot change
    session_requests: u32,
    interval: Duration,
}

impl MealPicker {
    pub fn new(
        source: Arc<dyn FoodSource>,
        observer: Arc<dyn PickerObserver>,
        slots: MealSlots,
        category: impl Into<String>,
    ) -> Self {
        let (candidates, _) = watch::channel(Candidates::from(Vec::new()));
        Self {
            source,
            observer,
            slots,
            slot_index: 0,
            category: category.into(),
            pools: HashMap::new(),
            candidates,
            playback: None,
            session_requests: 0,
            interval: DISPLAY_INTERVAL,
        }
    }

    /// Preselect a meal slot (wrapped into range)
    pub fn with_slot_index(mut self, index: usize) -> Self {
        if !self.slots.is_empty() {
            self.slot_index = index % self.slots.len();
        }
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn slot(&self) -> &MealSlot {
        self.slots.get(self.slot_index)
    }

    #[allow(dead_code)]
    pub fn session_requests(&self) -> u32 {
        self.session_requests
    }

    /// Dishes the display loop currently draws from
    pub fn candidates(&self) -> Candidates {
        self.candidates.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.playback.as_ref().is_some_and(Playback::is_running)
    }

    /// Load the candidate list for the current category and slot
    pub async fn refresh(&mut self) {
        let category = self.category.clone();
        let slot = self.slot().name;
        let items = self.resolve_candidate_pool(&category, slot).await;
        self.candidates.send_replace(items.into());
    }

    /// Switch category, starting a new session
    ///
    /// A running display loop keeps going and draws from the new list.
    pub async fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.session_requests = 0;
        info!(category = %self.category, "category selected");
        self.refresh().await;
    }

    /// Move to the next meal slot, wrapping around, starting a new session
    ///
    /// Ignored while the display loop is running.
    pub async fn advance_meal_slot(&mut self) {
        if self.is_running() {
            debug!("meal slot change ignored while running");
            return;
        }
        self.slot_index = self.slots.next_index(self.slot_index);
        self.session_requests = 0;
        let label = self.slot().label;
        info!(slot = self.slot().name, "meal slot changed");
        self.refresh().await;
        self.observer.on_slot_changed(label);
    }

    /// Start the display loop
    ///
    /// Counts towards the session's teases. With nothing to pick from, reports
    /// an empty pool and stays stopped.
    pub fn start(&mut self) {
        if self.is_running() {
            warn!("start requested while already running");
            return;
        }

        self.session_requests += 1;
        if let Some(message) = tease_for(self.session_requests) {
            self.observer.on_session_tease(message);
        }

        if self.candidates.borrow().is_empty() {
            info!(category = %self.category, slot = self.slot().name, "nothing to pick from");
            self.playback = None;
            self.observer.on_empty_pool();
            return;
        }

        debug!(requests = self.session_requests, "display loop started");
        self.playback = Some(Playback::spawn(
            self.candidates.subscribe(),
            Arc::clone(&self.observer),
            self.interval,
        ));
    }

    /// Stop the display loop; stopping a stopped picker does nothing
    pub fn stop(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.cancel();
            debug!("display loop stopped");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Dishes for a category's meal slot, loading the category on first use
    ///
    /// A failed load is logged and yields an empty list; it is not cached, so
    /// the next call tries again.
    #[instrument(skip(self))]
    pub async fn resolve_candidate_pool(&mut self, category: &str, slot: &str) -> Vec<String> {
        if let Some(menu) = self.pools.get(category) {
            return menu.items(slot).to_vec();
        }

        match self.source.fetch(category).await {
            Ok(menu) => {
                let menu = menu.deduplicated();
                if menu.is_empty() {
                    warn!("food list has no dishes");
                }
                debug!(slots = menu.slot_count(), "food list loaded");
                let items = menu.items(slot).to_vec();
                self.pools.insert(category.to_string(), menu);
                items
            }
            Err(e) => {
                warn!(error = %e, "failed to load food list");
                Vec::new()
            }
        }
    }
}
