//! CLI argument parsing and settings for eatwhat.

mod args;
mod settings;

pub use args::{parse_args, CliConfig, FoodLocation, VERSION};
pub use settings::CategorySettings;
