use crate::button::DebouncedButton;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonEvent, ButtonTiming};
use heapless::Vec;

/// Trait for abstracting button hardware.
///
/// Implement this for your input pins (GPIO, port expander, shift register,
/// etc.) so the panel can sample them. Return the *logical* level: handle
/// active-low wiring and pull-ups inside the implementation. The panel takes
/// care of debouncing, so the raw reading may bounce freely.
pub trait ButtonPin {
    /// Samples the pin, returning true while the button is physically down.
    fn is_pressed(&mut self) -> bool;
}

/// An identifier for a button within an input panel.
///
/// A simple wrapper around `usize` that provides type safety for button
/// identifiers. Users pick IDs when adding buttons to a panel and use them
/// to query state and to tell the returned events apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Errors that can occur during panel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// The specified button ID does not exist in the panel.
    InvalidButtonId(ButtonId),

    /// Attempted to add a button with an ID that already exists.
    DuplicateButtonId(ButtonId),

    /// The button ID exceeds the panel's capacity.
    ButtonIdOutOfBounds { id: ButtonId, capacity: usize },
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in panel", id.0)
            }
            PanelError::DuplicateButtonId(id) => {
                write!(f, "button ID {} already exists in panel", id.0)
            }
            PanelError::ButtonIdOutOfBounds { id, capacity } => {
                write!(f, "button ID {} exceeds panel capacity of {}", id.0, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}

struct Slot<P, I: TimeInstant> {
    pin: P,
    button: DebouncedButton<I>,
}

/// Manages a set of debounced buttons behind a single per-tick poll.
///
/// Owns each button's pin and debounce state and samples all of them with
/// one shared time source, so every button in a tick sees the same instant.
/// Each button is identified by a user-specified [`ButtonId`].
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin implementation type (must be the same for all buttons)
/// * `T` - Time source implementation type
/// * `MAX_BUTTONS` - Maximum number of buttons this panel can hold
pub struct InputPanel<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>, const MAX_BUTTONS: usize>
{
    slots: [Option<Slot<P, I>>; MAX_BUTTONS],
    time_source: &'t T,
}

impl<'t, I, P, T, const MAX_BUTTONS: usize> InputPanel<'t, I, P, T, MAX_BUTTONS>
where
    I: TimeInstant,
    P: ButtonPin,
    T: TimeSource<I>,
{
    /// Creates a new empty panel.
    ///
    /// # Arguments
    /// * `time_source` - Reference to the time source shared by all buttons
    pub fn new(time_source: &'t T) -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Adds a button to the panel with the specified ID.
    ///
    /// The pin is moved into a new debounced reader stored in the panel.
    ///
    /// # Errors
    /// * `DuplicateButtonId` - A button with this ID already exists
    /// * `ButtonIdOutOfBounds` - The ID exceeds the panel's capacity
    pub fn add_button(
        &mut self,
        id: ButtonId,
        pin: P,
        timing: ButtonTiming<I::Duration>,
    ) -> Result<(), PanelError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(PanelError::ButtonIdOutOfBounds {
                id,
                capacity: MAX_BUTTONS,
            });
        }

        if self.slots[idx].is_some() {
            return Err(PanelError::DuplicateButtonId(id));
        }

        self.slots[idx] = Some(Slot {
            pin,
            button: DebouncedButton::new(timing),
        });
        Ok(())
    }

    /// Samples every pin and advances every debouncer by one tick.
    ///
    /// Reads the time source once so all buttons share the same instant,
    /// then returns the events produced this tick in button-ID order.
    /// Quiet buttons contribute nothing; the vector is empty on a tick with
    /// no transitions.
    pub fn poll_all(&mut self) -> Vec<(ButtonId, ButtonEvent), MAX_BUTTONS> {
        let now = self.time_source.now();
        let mut events = Vec::new();

        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let Some(slot) = slot {
                let raw = slot.pin.is_pressed();
                let event = slot.button.poll(raw, now);
                if event != ButtonEvent::None {
                    // Capacity MAX_BUTTONS always fits one event per button.
                    let _ = events.push((ButtonId(idx), event));
                }
            }
        }

        events
    }

    /// Returns the debounced level of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn is_pressed(&self, id: ButtonId) -> Result<bool, PanelError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(PanelError::InvalidButtonId(id));
        }

        let slot = self.slots[idx]
            .as_ref()
            .ok_or(PanelError::InvalidButtonId(id))?;

        Ok(slot.button.is_pressed())
    }

    /// Returns the number of buttons currently in the panel.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the panel contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the panel contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        let idx = id.0;
        idx < MAX_BUTTONS && self.slots[idx].is_some()
    }
}
