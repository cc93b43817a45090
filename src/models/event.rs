//! Render events emitted by the meal picker
//!
//! The picker never draws anything itself. It reports what happened through a
//! [`PickerObserver`]; front-ends either implement the trait directly or take
//! the events from a channel.

use tokio::sync::mpsc::UnboundedSender;

/// Something the picker wants shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A dish was drawn by the display loop
    ItemSelected(String),
    /// Nothing to draw from; the loop stopped itself
    EmptyPool,
    /// One-shot message for repeated requests
    SessionTease(&'static str),
    /// The active meal slot changed
    SlotChanged(&'static str),
}

/// Receiver of picker render events
pub trait PickerObserver: Send + Sync {
    fn on_item_selected(&self, item: &str);
    fn on_empty_pool(&self);
    fn on_session_tease(&self, message: &'static str);
    fn on_slot_changed(&self, label: &'static str);
}

// A closed channel just means the front-end is gone
impl PickerObserver for UnboundedSender<PickerEvent> {
    fn on_item_selected(&self, item: &str) {
        let _ = self.send(PickerEvent::ItemSelected(item.to_string()));
    }

    fn on_empty_pool(&self) {
        let _ = self.send(PickerEvent::EmptyPool);
    }

    fn on_session_tease(&self, message: &'static str) {
        let _ = self.send(PickerEvent::SessionTease(message));
    }

    fn on_slot_changed(&self, label: &'static str) {
        let _ = self.send(PickerEvent::SlotChanged(label));
    }
}
