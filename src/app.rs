//! Application state and core logic for the eatwhat TUI.
//!
//! This module contains the `App` struct which holds the picker and all state
//! for the interactive terminal UI: the headline, floating dishes, teases and
//! the category bar.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::cli::{CategorySettings, CliConfig};
use crate::models::{HeadlinePhase, PickerEvent};
use crate::picker::MealPicker;
use crate::ui::Sprinkle;
use crate::utils::collapse_whitespace;

/// How long a floating dish stays on screen
pub const SPRINKLE_LIFETIME: Duration = Duration::from_millis(1000);
/// Upper bound on floating dishes kept at once
pub const MAX_SPRINKLES: usize = 80;
/// How long a tease stays on screen
pub const TEASE_LIFETIME: Duration = Duration::from_secs(3);
/// How long the "press t" tip shows after a meal change
pub const TIP_LIFETIME: Duration = Duration::from_secs(4);
/// Animation tick length (for pulsing colours)
const ANIMATION_STEP: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub picker: MealPicker,
    events: UnboundedReceiver<PickerEvent>,
    pub categories: Vec<CategorySettings>,
    pub selected_category: usize,
    // Headline state
    pub phase: HeadlinePhase,
    pub dish: Option<String>,
    // Decorations
    pub sprinkles: Vec<Sprinkle>,
    pub tease: Option<(&'static str, Instant)>,
    pub tip_until: Option<Instant>,
    rng: StdRng,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    // Window title to apply on the next frame
    pending_title: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: CliConfig, picker: MealPicker, events: UnboundedReceiver<PickerEvent>) -> Self {
        Self {
            picker,
            events,
            categories: config.categories,
            selected_category: config.initial_category,
            phase: HeadlinePhase::default(),
            dish: None,
            sprinkles: Vec::new(),
            tease: None,
            tip_until: None,
            rng: StdRng::from_os_rng(),
            animation_tick: 0,
            last_animation_update: Instant::now(),
            pending_title: None,
            should_quit: false,
        }
    }

    /// Load the food list for the initial category and slot
    pub async fn load(&mut self) {
        self.picker.refresh().await;
        info!(
            category = self.picker.category(),
            slot = self.picker.slot().name,
            dishes = self.picker.candidates().len(),
            "initial food list loaded"
        );
        self.tip_until = Some(Instant::now() + TIP_LIFETIME);
    }

    /// Text of the dish slot in the headline
    pub fn what(&self) -> &str {
        match (self.phase, &self.dish) {
            (HeadlinePhase::NoOptions, _) => "nothing to pick",
            (_, Some(dish)) => dish,
            (_, None) => "what",
        }
    }

    /// Full headline as plain text
    pub fn headline(&self) -> String {
        format!(
            "Today for {}, eat {}{}",
            self.picker.slot().label,
            self.what(),
            self.phase.punctuation()
        )
    }

    pub fn tip_visible(&self, now: Instant) -> bool {
        self.tip_until.is_some_and(|until| now < until)
    }

    /// Window title set after the last stop, if not yet applied
    pub fn take_window_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// Apply everything the picker reported since the last frame
    pub fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_picker_event(event, now);
        }
    }

    pub fn handle_picker_event(&mut self, event: PickerEvent, now: Instant) {
        match event {
            PickerEvent::ItemSelected(item) => {
                // Late items from a loop that was just stopped
                if self.phase != HeadlinePhase::Rolling {
                    return;
                }
                self.spawn_sprinkle(&item, now);
                self.dish = Some(item);
            }
            PickerEvent::EmptyPool => {
                self.phase = HeadlinePhase::NoOptions;
                self.dish = None;
            }
            PickerEvent::SessionTease(message) => {
                self.tease = Some((message, now));
            }
            PickerEvent::SlotChanged(label) => {
                debug!(label, "headline reset for new meal");
                self.reset_headline();
                self.tip_until = Some(now + TIP_LIFETIME);
            }
        }
    }

    fn reset_headline(&mut self) {
        self.phase = HeadlinePhase::Asking;
        self.dish = None;
    }

    fn spawn_sprinkle(&mut self, text: &str, now: Instant) {
        if self.sprinkles.len() >= MAX_SPRINKLES {
            self.sprinkles.remove(0);
        }
        let sprinkle = Sprinkle {
            text: text.to_string(),
            x: self.rng.random_range(0.0..1.0),
            y: self.rng.random_range(0.0..1.0),
            opacity: self.rng.random_range(0.3..0.7),
            bold: self.rng.random_bool(0.3),
            born: now,
        };
        self.sprinkles.push(sprinkle);
    }

    /// Expire decorations and advance the animation clock
    pub fn on_tick(&mut self, now: Instant) {
        self.sprinkles
            .retain(|s| now.saturating_duration_since(s.born) < SPRINKLE_LIFETIME);
        if self
            .tease
            .is_some_and(|(_, shown)| now.saturating_duration_since(shown) >= TEASE_LIFETIME)
        {
            self.tease = None;
        }
        if !self.tip_visible(now) {
            self.tip_until = None;
        }
        if now.saturating_duration_since(self.last_animation_update) >= ANIMATION_STEP {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    /// Start or stop the display loop
    pub fn toggle_playback(&mut self, now: Instant) {
        let was_running = self.picker.is_running();
        if was_running {
            // Show whatever was drawn last before freezing the headline
            self.drain_events(now);
        } else {
            self.reset_headline();
            self.phase = HeadlinePhase::Rolling;
        }

        self.picker.toggle();

        if was_running {
            self.phase = HeadlinePhase::Picked;
            self.pending_title = Some(format!(
                "What to eat | {}",
                collapse_whitespace(&self.headline())
            ));
        } else {
            // An empty pool is reported synchronously
            self.drain_events(now);
        }
    }

    /// Select a category; re-selecting the active one reloads a failed list
    pub async fn select_category(&mut self, index: usize) {
        let Some(category) = self.categories.get(index) else {
            return;
        };
        let name = category.name.clone();
        self.selected_category = index;
        self.picker.set_category(name).await;
    }

    pub async fn next_category(&mut self) {
        let next = (self.selected_category + 1) % self.categories.len();
        self.select_category(next).await;
    }

    pub async fn previous_category(&mut self) {
        let len = self.categories.len();
        let previous = (self.selected_category + len - 1) % len;
        self.select_category(previous).await;
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_playback(now),
            KeyCode::Char('t') => {
                self.picker.advance_meal_slot().await;
                self.drain_events(now);
            }
            KeyCode::Right | KeyCode::Tab => self.next_category().await,
            KeyCode::Left | KeyCode::BackTab => self.previous_category().await,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_category(index).await;
            }
            _ => {}
        }
    }

    /// Stop the display loop before the terminal is torn down
    pub fn shutdown(&mut self) {
        self.picker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FoodLocation;
    use crate::models::MealSlots;
    use crate::picker::DirSource;
    use std::io::Write;
    use std::sync::Arc;

    fn category(name: &str) -> CategorySettings {
        CategorySettings {
            name: name.to_string(),
            label: None,
            color: None,
        }
    }

    fn write_food_file(dir: &tempfile::TempDir, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    /// App over a temp food directory; slot index 1 = dinner
    async fn test_app(dir: &tempfile::TempDir) -> App {
        let config = CliConfig {
            categories: vec![category("x"), category("y")],
            initial_category: 0,
            slots: MealSlots::two_meals(),
            food: FoodLocation::Dir(dir.path().to_path_buf()),
            interval: Duration::from_millis(60),
            log_file: None,
        };
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let picker = MealPicker::new(
            Arc::new(DirSource::new(dir.path())),
            Arc::new(tx),
            config.slots.clone(),
            "x",
        )
        .with_slot_index(1);
        let mut app = App::new(config, picker, rx);
        app.load().await;
        app
    }

    fn food_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_food_file(&dir, "x.json", r#"{"lunch": ["Noodles"], "dinner": ["Hotpot", "Hotpot"]}"#);
        write_food_file(&dir, "y.json", r#"{"lunch": ["Salad"]}"#);
        dir
    }

    #[tokio::test]
    async fn test_initial_headline() {
        let dir = food_dir();
        let app = test_app(&dir).await;
        assert_eq!(app.headline(), "Today for dinner, eat what?");
        assert_eq!(app.phase.button_label(), "Start");
        assert!(app.tip_visible(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_roll_and_stop() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        let now = Instant::now();

        app.toggle_playback(now);
        assert!(app.picker.is_running());
        assert_eq!(app.phase, HeadlinePhase::Rolling);

        tokio::time::sleep(Duration::from_millis(130)).await;
        app.drain_events(now);
        assert_eq!(app.dish.as_deref(), Some("Hotpot"));
        assert!(!app.sprinkles.is_empty());

        app.toggle_playback(now);
        assert!(!app.picker.is_running());
        assert_eq!(app.phase, HeadlinePhase::Picked);
        assert_eq!(app.headline(), "Today for dinner, eat Hotpot!");
        assert_eq!(
            app.take_window_title().as_deref(),
            Some("What to eat | Today for dinner, eat Hotpot!")
        );
        assert_eq!(app.take_window_title(), None);
        assert_eq!(app.phase.button_label(), "Another one");
    }

    #[tokio::test]
    async fn test_empty_pool_headline() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        app.select_category(1).await;

        app.toggle_playback(Instant::now());
        assert!(!app.picker.is_running());
        assert_eq!(app.phase, HeadlinePhase::NoOptions);
        assert_eq!(app.headline(), "Today for dinner, eat nothing to pick QAQ");
    }

    #[tokio::test]
    async fn test_late_items_after_stop_are_ignored() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        let now = Instant::now();
        app.phase = HeadlinePhase::Picked;
        app.dish = Some("Hotpot".into());

        app.handle_picker_event(PickerEvent::ItemSelected("Noodles".into()), now);
        assert_eq!(app.dish.as_deref(), Some("Hotpot"));
        assert!(app.sprinkles.is_empty());
    }

    #[tokio::test]
    async fn test_slot_change_resets_headline() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        let now = Instant::now();
        app.phase = HeadlinePhase::Picked;
        app.dish = Some("Hotpot".into());
        app.tip_until = None;

        app.handle_key(KeyEvent::from(KeyCode::Char('t'))).await;
        assert_eq!(app.picker.slot().name, "lunch");
        assert_eq!(app.phase, HeadlinePhase::Asking);
        assert_eq!(app.headline(), "Today for lunch, eat what?");
        assert!(app.tip_visible(now));
    }

    #[tokio::test]
    async fn test_decorations_expire() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        let now = Instant::now();
        app.phase = HeadlinePhase::Rolling;
        app.handle_picker_event(PickerEvent::ItemSelected("Hotpot".into()), now);
        app.handle_picker_event(PickerEvent::SessionTease("hey"), now);
        assert_eq!(app.sprinkles.len(), 1);
        assert!(app.tease.is_some());

        app.on_tick(now + SPRINKLE_LIFETIME);
        assert!(app.sprinkles.is_empty());
        assert!(app.tease.is_some());

        app.on_tick(now + TEASE_LIFETIME);
        assert!(app.tease.is_none());

        app.on_tick(now + TIP_LIFETIME + Duration::from_secs(1));
        assert!(app.tip_until.is_none());
    }

    #[tokio::test]
    async fn test_sprinkles_are_capped() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;
        let now = Instant::now();
        app.phase = HeadlinePhase::Rolling;
        for i in 0..(MAX_SPRINKLES + 10) {
            app.handle_picker_event(PickerEvent::ItemSelected(format!("dish {i}")), now);
        }
        assert_eq!(app.sprinkles.len(), MAX_SPRINKLES);
        assert_eq!(app.sprinkles.last().unwrap().text, format!("dish {}", MAX_SPRINKLES + 9));
    }

    #[tokio::test]
    async fn test_category_keys() {
        let dir = food_dir();
        let mut app = test_app(&dir).await;

        app.handle_key(KeyEvent::from(KeyCode::Right)).await;
        assert_eq!(app.selected_category, 1);
        assert_eq!(app.picker.category(), "y");

        app.handle_key(KeyEvent::from(KeyCode::Right)).await;
        assert_eq!(app.selected_category, 0);

        app.handle_key(KeyEvent::from(KeyCode::Char('2'))).await;
        assert_eq!(app.picker.category(), "y");

        app.handle_key(KeyEvent::from(KeyCode::Char('9'))).await;
        assert_eq!(app.selected_category, 1);

        app.handle_key(KeyEvent::from(KeyCode::Left)).await;
        assert_eq!(app.picker.category(), "x");

        app.handle_key(KeyEvent::from(KeyCode::Char('q'))).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_reselecting_category_retries_failed_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir).await;
        assert!(app.picker.candidates().is_empty());

        write_food_file(&dir, "x.json", r#"{"dinner": ["Hotpot"]}"#);
        app.handle_key(KeyEvent::from(KeyCode::Char('1'))).await;
        assert_eq!(app.selected_category, 0);
        assert_eq!(&app.picker.candidates()[..], ["Hotpot".to_string()]);
    }
}
