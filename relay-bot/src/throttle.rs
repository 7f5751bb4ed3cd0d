//! Leading-edge throttle for streaming progress.
//!
//! Fires on the first event, then drops every event until `window` has elapsed since that firing.
//! Dropped events are not queued or replayed.

use std::time::Duration;
use tokio::time::Instant;

/// Default window between progress edits of the placeholder message.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone)]
pub struct LeadingThrottle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl LeadingThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns true (and starts a new window) if an event at `now` may fire.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let open = match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.window,
        };
        if open {
            self.last_fired = Some(now);
        }
        open
    }
}

impl Default for LeadingThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}
