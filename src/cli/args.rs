//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use super::settings::{default_food_dir, CategorySettings, Settings};
use crate::models::MealSlots;
use crate::picker::{validate_category, DISPLAY_INTERVAL};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Can't decide what to eat? Let the terminal pick for you.
#[derive(Debug, Parser)]
#[command(name = "eatwhat", version = VERSION)]
#[command(after_help = "Examples:\n  \
    eatwhat                                # Use ./eatwhat.json or the defaults\n  \
    eatwhat -c ios --breakfast             # Start on the ios list, three meals a day\n  \
    eatwhat --food-url https://host/food   # Fetch <category>.json over HTTP")]
pub struct CliArgs {
    /// Category to start with (must be listed in the settings)
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,

    /// Directory containing <category>.json food lists
    #[arg(long, value_name = "DIR", env = "EATWHAT_FOOD_DIR")]
    pub food_dir: Option<PathBuf>,

    /// Base URL serving <category>.json food lists
    #[arg(long, value_name = "URL", env = "EATWHAT_FOOD_URL", conflicts_with = "food_dir")]
    pub food_url: Option<String>,

    /// Track breakfast as well as lunch and dinner
    #[arg(short, long)]
    pub breakfast: bool,

    /// Delay between drawn dishes in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Settings file (default: ./eatwhat.json, then ~/.config/eatwhat/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file (default: <data dir>/eatwhat/eatwhat.log)
    #[arg(long, value_name = "FILE", env = "EATWHAT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Where food lists are fetched from
#[derive(Debug, Clone, PartialEq)]
pub enum FoodLocation {
    Dir(PathBuf),
    Url(String),
}

/// Configuration resolved from CLI arguments and the settings file
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub categories: Vec<CategorySettings>,
    pub initial_category: usize,
    pub slots: MealSlots,
    pub food: FoodLocation,
    pub interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Merge CLI arguments over settings; CLI values win
    pub fn resolve(args: CliArgs, settings: Settings) -> Result<Self> {
        let wanted = args
            .category
            .as_deref()
            .or(settings.default_category.as_deref());
        let initial_category = match wanted {
            Some(name) => {
                validate_category(name)?;
                match settings.category_index(name) {
                    Some(index) => index,
                    None => bail!(
                        "unknown category `{}` (configured: {})",
                        name,
                        settings
                            .categories
                            .iter()
                            .map(|c| c.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                }
            }
            None => 0,
        };

        let food = if let Some(url) = args.food_url {
            FoodLocation::Url(url)
        } else if let Some(dir) = args.food_dir {
            FoodLocation::Dir(dir)
        } else if let Some(url) = settings.food_url {
            FoodLocation::Url(url)
        } else if let Some(dir) = settings.food_dir {
            FoodLocation::Dir(dir)
        } else {
            FoodLocation::Dir(default_food_dir())
        };

        let interval = match args.interval_ms.or(settings.interval_ms) {
            Some(0) => bail!("interval must be at least 1 ms"),
            Some(ms) => Duration::from_millis(ms),
            None => DISPLAY_INTERVAL,
        };

        Ok(Self {
            categories: settings.categories,
            initial_category,
            slots: MealSlots::with_breakfast(args.breakfast || settings.breakfast),
            food,
            interval,
            log_file: args.log_file,
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    let settings = Settings::discover(args.config.as_deref()).context("failed to load settings")?;
    CliConfig::resolve(args, settings)
}
