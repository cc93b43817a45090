//! The meal picker core.
//!
//! - `state`: `MealPicker`, category/slot tracking and the food list cache
//! - `source`: where food lists come from (directory or HTTP)
//! - `playback`: the cancellable random display loop
//! - `tease`: messages for repeated requests

mod playback;
mod source;
mod state;
mod tease;

pub use playback::DISPLAY_INTERVAL;
pub use source::{validate_category, DirSource, FoodSource, HttpSource};
pub use state::MealPicker;
