//! Edge detection between two consecutive ticks.
//!
//! padstate does not keep per-button history. Edges are derived on demand by comparing
//! the current [`GamepadState`] with the previous one:
//!
//! | query | definition |
//! | --- | --- |
//! | held | `current` |
//! | pressed (rising edge) | `current && !previous` |
//! | released (falling edge) | `!current && previous` |
//!
//! All digital inputs take part, including L2/R2 which are derived from the triggers.
//!
//! ## Reconnects
//! A disconnected tick is an ordinary all-released state. A button that is already
//! down on the first tick after a reconnect therefore reports a rising edge.
//!
//! # Example
//! ```
//! use padstate::{DigitalInput, Edges, GamepadState};
//!
//! let previous = GamepadState { connected: true, ..GamepadState::default() };
//! let current = GamepadState { button_start: true, ..previous };
//!
//! let edges = Edges::new(&current, &previous);
//! assert!(edges.is_pressed(DigitalInput::Start));
//! assert!(edges.is_held(DigitalInput::Start));
//! assert!(!edges.is_released(DigitalInput::Start));
//! ```

use crate::state::{DigitalInput, GamepadState};
use std::fmt;

/// Direction of a digital transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Released → held.
    Pressed,
    /// Held → released.
    Released,
}

/// One digital input changing state between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeEvent {
    pub input: DigitalInput,
    pub kind: EdgeKind,
}

impl fmt::Display for EdgeEvent {
    /// `"L2+"` for a press, `"L2-"` for a release.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            EdgeKind::Pressed => '+',
            EdgeKind::Released => '-',
        };
        write!(f, "{}{}", self.input.label(), sign)
    }
}

/// Edge queries over a `(current, previous)` pair of snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Edges<'a> {
    current: &'a GamepadState,
    previous: &'a GamepadState,
}

impl<'a> Edges<'a> {
    pub fn new(current: &'a GamepadState, previous: &'a GamepadState) -> Self {
        Self { current, previous }
    }

    #[inline]
    pub fn current(&self) -> &'a GamepadState {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> &'a GamepadState {
        self.previous
    }

    /// The input is down this tick.
    #[inline]
    pub fn is_held(&self, input: DigitalInput) -> bool {
        self.current.button(input)
    }

    /// The input went down this tick.
    #[inline]
    pub fn is_pressed(&self, input: DigitalInput) -> bool {
        self.current.button(input) && !self.previous.button(input)
    }

    /// The input came up this tick.
    #[inline]
    pub fn is_released(&self, input: DigitalInput) -> bool {
        !self.current.button(input) && self.previous.button(input)
    }

    /// Transition of `input`, if any.
    pub fn edge(&self, input: DigitalInput) -> Option<EdgeKind> {
        match (self.previous.button(input), self.current.button(input)) {
            (false, true) => Some(EdgeKind::Pressed),
            (true, false) => Some(EdgeKind::Released),
            _ => None,
        }
    }

    /// Inputs with a rising edge, in [`DigitalInput::ALL`] order.
    pub fn pressed(&self) -> impl Iterator<Item = DigitalInput> + 'a {
        let edges = *self;
        DigitalInput::ALL
            .into_iter()
            .filter(move |&input| edges.is_pressed(input))
    }

    /// Inputs with a falling edge, in [`DigitalInput::ALL`] order.
    pub fn released(&self) -> impl Iterator<Item = DigitalInput> + 'a {
        let edges = *self;
        DigitalInput::ALL
            .into_iter()
            .filter(move |&input| edges.is_released(input))
    }

    /// All presses followed by all releases.
    pub fn events(&self) -> Vec<EdgeEvent> {
        let pressed = self.pressed().map(|input| EdgeEvent {
            input,
            kind: EdgeKind::Pressed,
        });
        let released = self.released().map(|input| EdgeEvent {
            input,
            kind: EdgeKind::Released,
        });
        pressed.chain(released).collect()
    }
}
