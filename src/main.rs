use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Timelike;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::time::MissedTickBehavior;
use tracing::info;

mod app;
mod cli;
mod logging;
mod models;
mod picker;
mod theme;
mod ui;
mod utils;

use crate::app::App;
use crate::cli::FoodLocation;
use crate::picker::{DirSource, FoodSource, HttpSource, MealPicker};

/// Redraw rate of the UI
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = cli::parse_args()?;
    let log_path = logging::init_tracing(config.log_file.as_deref())?;
    info!(log = %log_path.display(), version = cli::VERSION, "eatwhat starting");

    let source: Arc<dyn FoodSource> = match &config.food {
        FoodLocation::Dir(dir) => {
            info!(dir = %dir.display(), "reading food lists from directory");
            Arc::new(DirSource::new(dir))
        }
        FoodLocation::Url(url) => {
            info!(%url, "fetching food lists over HTTP");
            Arc::new(HttpSource::new(url.as_str()).context("failed to build HTTP client")?)
        }
    };

    let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
    let slot_index = config.slots.index_for_hour(chrono::Local::now().hour());
    let category = config.categories[config.initial_category].name.clone();
    let picker = MealPicker::new(source, Arc::new(events_tx), config.slots.clone(), category)
        .with_slot_index(slot_index)
        .with_interval(config.interval);

    let mut app = App::new(config, picker, events_rx);
    app.load().await;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("eatwhat exiting");
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Yields to the display loop between frames
        frames.tick().await;
        let now = Instant::now();

        app.drain_events(now);
        app.on_tick(now);
        if let Some(title) = app.take_window_title() {
            io::stdout().execute(SetTitle(title))?;
        }

        terminal.draw(|frame| ui::render_app(frame, app, now))?;

        // Handle input without blocking the runtime
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
