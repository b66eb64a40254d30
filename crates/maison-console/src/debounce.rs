//! Keystroke debouncing for search input.
//!
//! Time is passed in explicitly so the behavior is deterministic under
//! test; the host shell calls [`Debouncer::poll`] from its tick loop.

use std::time::{Duration, Instant};

/// Coalesces rapid text input into one committed value.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Default debounce window for search input.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

    /// Creates a debouncer with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
        }
    }

    /// Records new input, restarting the window.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(text.into());
        self.deadline = Some(now + self.window);
    }

    /// Returns whether input is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the committed value once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drops any pending input without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_after_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.input("sof", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(300)),
            Some("sof".to_owned()),
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn rapid_keystrokes_coalesce_into_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.input("s", start);
        debouncer.input("so", start + Duration::from_millis(100));
        debouncer.input("sofa", start + Duration::from_millis(200));

        // The first deadline has passed but was superseded.
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("sofa".to_owned()),
        );
    }

    #[test]
    fn cancel_discards_pending_input() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.input("sofa", start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}
