//! Data models for eatwhat
//!
//! This module contains the core data structures:
//! - Food lists loaded from `<category>.json`
//! - Meal slots and the schedules they form
//! - Render events emitted by the picker
//! - Enums for front-end state

pub mod enums;
pub mod event;
pub mod menu;
pub mod slots;

// Re-exports for convenient access
pub use enums::HeadlinePhase;
pub use event::{PickerEvent, PickerObserver};
pub use menu::FoodMenu;
pub use slots::{MealSlot, MealSlots};
