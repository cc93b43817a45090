//! The display loop: a cancellable task that keeps drawing random dishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::PickerObserver;

/// Delay between two drawn dishes
pub const DISPLAY_INTERVAL: Duration = Duration::from_millis(60);

/// Candidate list shared between the picker and its display loop
pub type Candidates = Arc<[String]>;

/// Pick one item uniformly at random (with replacement)
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [String]) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.random_range(0..items.len())].as_str())
}

/// A running display loop
///
/// Each tick draws one dish, reports it, then sleeps for the interval. The
/// running flag is checked before every tick; [`Playback::cancel`] clears it
/// and aborts the pending sleep.
pub struct Playback {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Playback {
    /// Spawn the loop on the current tokio runtime
    pub fn spawn(
        candidates: watch::Receiver<Candidates>,
        observer: Arc<dyn PickerObserver>,
        interval: Duration,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = tokio::spawn(async move {
            let mut rng = StdRng::from_os_rng();
            let mut ticks: u64 = 0;
            while flag.load(Ordering::Acquire) {
                let item = {
                    let pool = candidates.borrow();
                    pick(&mut rng, &pool).map(str::to_owned)
                };
                match item {
                    Some(item) => observer.on_item_selected(&item),
                    None => {
                        // Pool went empty under us (category switched)
                        flag.store(false, Ordering::Release);
                        observer.on_empty_pool();
                        break;
                    }
                }
                ticks += 1;
                tokio::time::sleep(interval).await;
            }
            tracing::debug!(ticks, "display loop finished");
        });

        Self { running, handle }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the loop before its next tick
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Release);
        self.handle.abort();
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.cancel();
    }
}
