//! Core types for button and measurement configuration.

use crate::time::TimeDuration;
use crate::{
    DEFAULT_DEBOUNCE_THRESHOLD, DEFAULT_HELD_MS, DEFAULT_REPEAT_DELAY_MS,
    DEFAULT_REPEAT_INTERVAL_MS,
};

/// The classified outcome of one button poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// No state or timing transition occurred this poll.
    None,

    /// The debounced level committed to pressed.
    Pressed,

    /// The debounced level committed to released.
    Released,

    /// The button has been held down long enough to count as a hold.
    /// Emitted once per press.
    Held,

    /// Auto-repeat tick while the button stays held.
    RepeatTick,
}

/// Debounce and button-feel timing for a single button.
///
/// `threshold` is the number of consecutive identical raw samples required
/// before the debounced level commits. The remaining fields shape the
/// hold/auto-repeat behavior: `held` is measured from the press commit,
/// `repeat_delay` from the [`Held`](ButtonEvent::Held) transition, and
/// `repeat_interval` from the previous [`RepeatTick`](ButtonEvent::RepeatTick).
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
#[derive(Debug, Clone, Copy)]
pub struct ButtonTiming<D: TimeDuration> {
    /// Consecutive identical raw samples required to commit a new level.
    pub threshold: u8,

    /// How long the button must stay pressed before `Held` fires.
    pub held: D,

    /// Delay between the `Held` transition and the first `RepeatTick`.
    pub repeat_delay: D,

    /// Interval between subsequent `RepeatTick`s.
    pub repeat_interval: D,
}

impl<D: TimeDuration> Default for ButtonTiming<D> {
    /// Button feel of the original charger unit: commit after 5 matching
    /// samples, hold after 300 ms, first repeat 500 ms later, then every
    /// 300 ms.
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DEBOUNCE_THRESHOLD,
            held: D::from_millis(DEFAULT_HELD_MS),
            repeat_delay: D::from_millis(DEFAULT_REPEAT_DELAY_MS),
            repeat_interval: D::from_millis(DEFAULT_REPEAT_INTERVAL_MS),
        }
    }
}

/// Which scaling law a measurement channel applies to its raw average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Pack voltage behind a resistor divider.
    Voltage,

    /// Hall-sensor current centered on half the sensor supply.
    Current,
}
