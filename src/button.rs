//! Debounced button reader with hold and auto-repeat classification.
//!
//! Provides [`DebouncedButton`] which turns a noisy raw pin level into a
//! stable logical state and a stream of [`ButtonEvent`]s. The caller polls
//! it at a fixed cadence with the raw level and the current instant; the
//! reader never touches hardware or a clock itself.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::{ButtonEvent, ButtonTiming};

/// Debounce state machine for a single physical button.
///
/// Raw samples are grouped into runs of identical readings. A new level is
/// committed only when a run reaches the configured threshold, so any bounce
/// shorter than the threshold is absorbed without a state change. Once the
/// committed level is pressed, the reader tracks hold and auto-repeat timing
/// against the instants supplied by the caller.
///
/// Poll instants must be non-decreasing; this is the caller's contract and
/// is checked with a debug assertion.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct DebouncedButton<I: TimeInstant> {
    timing: ButtonTiming<I::Duration>,
    raw: bool,
    stable: bool,
    run: u8,
    pressed_at: Option<I>,
    held_at: Option<I>,
    last_repeat: Option<I>,
    last_poll: Option<I>,
}

impl<I: TimeInstant> DebouncedButton<I> {
    /// Creates a new reader in the released state.
    pub fn new(timing: ButtonTiming<I::Duration>) -> Self {
        Self {
            timing,
            raw: false,
            stable: false,
            run: 0,
            pressed_at: None,
            held_at: None,
            last_repeat: None,
            last_poll: None,
        }
    }

    /// Feeds one raw sample into the state machine.
    ///
    /// Call at a fixed cadence (the original unit polls every 5 ms, see
    /// [`DEFAULT_POLL_INTERVAL_MS`](crate::DEFAULT_POLL_INTERVAL_MS)).
    /// At most one event is produced per poll; a press/release commit takes
    /// priority over hold and repeat timing.
    ///
    /// # Returns
    /// * `ButtonEvent::Pressed` / `Released` - on the poll where the
    ///   threshold-reaching sample commits a new stable level
    /// * `ButtonEvent::Held` - once per press, on the first poll at least
    ///   `timing.held` after the press commit
    /// * `ButtonEvent::RepeatTick` - after `Held`, first at
    ///   `timing.repeat_delay`, then every `timing.repeat_interval`
    /// * `ButtonEvent::None` - no transition this poll
    pub fn poll(&mut self, raw: bool, now: I) -> ButtonEvent {
        if let Some(prev) = self.last_poll {
            debug_assert!(
                now.checked_duration_since(prev).is_some(),
                "poll instants must be non-decreasing"
            );
        }
        self.last_poll = Some(now);

        if raw != self.raw {
            self.raw = raw;
            self.run = 1;
        } else {
            self.run = self.run.saturating_add(1);
        }

        if self.run >= self.timing.threshold && self.raw != self.stable {
            self.stable = self.raw;
            self.held_at = None;
            self.last_repeat = None;

            return if self.stable {
                self.pressed_at = Some(now);
                ButtonEvent::Pressed
            } else {
                self.pressed_at = None;
                ButtonEvent::Released
            };
        }

        // Hold and repeat run off the committed level, so raw bounce while
        // pressed only restarts the run counter above.
        if self.stable {
            match self.held_at {
                None => {
                    if let Some(pressed_at) = self.pressed_at {
                        let down = now.duration_since(pressed_at);
                        if down.as_millis() >= self.timing.held.as_millis() {
                            self.held_at = Some(now);
                            return ButtonEvent::Held;
                        }
                    }
                }
                Some(held_at) => {
                    let (since, interval) = match self.last_repeat {
                        None => (held_at, self.timing.repeat_delay),
                        Some(last) => (last, self.timing.repeat_interval),
                    };

                    if now.duration_since(since).as_millis() >= interval.as_millis() {
                        self.last_repeat = Some(now);
                        return ButtonEvent::RepeatTick;
                    }
                }
            }
        }

        ButtonEvent::None
    }

    /// Returns the current debounced level (true while pressed).
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Returns the timing configuration this reader was created with.
    pub fn timing(&self) -> &ButtonTiming<I::Duration> {
        &self.timing
    }
}
