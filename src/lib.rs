#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedButton`**: Turns a bouncing raw pin level into a stable state and classified events
//! - **`ButtonEvent`**: What one poll produced (`Pressed`, `Released`, `Held`, `RepeatTick`, `None`)
//! - **`ButtonTiming`**: Debounce threshold and hold/auto-repeat feel for one button
//! - **`InputPanel`**: Coordinates several buttons behind a single per-tick poll
//! - **`ButtonPin`**: Trait to implement for your button hardware
//! - **`AnalogCalibration`**: Validated conversion constants for one analog front end
//! - **`MeasurementChannel`**: Applies a voltage or current scaling law each measurement cycle
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! All scaling arithmetic uses `f32`; raw ADC averages come in as the
//! arithmetic mean your sampling loop produced, and readings come out in
//! volts or amps according to the channel's calibration.

pub mod button;
pub mod measure;
pub mod panel;
pub mod time;
pub mod types;

pub use button::DebouncedButton;
pub use measure::{
    AnalogCalibration, CalibrationBuilder, CalibrationError, MeasurementChannel, MeasurementSample,
};
pub use panel::{ButtonId, ButtonPin, InputPanel, PanelError};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonEvent, ButtonTiming, ChannelKind};

/// Consecutive identical raw samples required to commit a level change.
pub const DEFAULT_DEBOUNCE_THRESHOLD: u8 = 5;

/// Cadence at which buttons expect to be polled, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5;

/// How long a press must last before it counts as held, in milliseconds.
pub const DEFAULT_HELD_MS: u64 = 300;

/// Delay from the held transition to the first auto-repeat, in milliseconds.
pub const DEFAULT_REPEAT_DELAY_MS: u64 = 500;

/// Interval between subsequent auto-repeats, in milliseconds.
pub const DEFAULT_REPEAT_INTERVAL_MS: u64 = 300;

/// Cadence at which readings are recomputed for the display, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;
