//! UI module for eatwhat
//!
//! This module contains rendering functions for the TUI: the category bar,
//! the headline with its start/stop button, floating dishes and teases.

mod categories;
mod headline;
mod helpers;
mod render;
mod sprinkles;

pub use render::render_app;
pub use sprinkles::Sprinkle;
