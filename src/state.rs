//! Normalized per-tick controller state.
//!
//! [`GamepadState`] is a value type: the normalizer builds a fresh one every tick and
//! nothing mutates it afterwards. Digital inputs are addressed uniformly through
//! [`DigitalInput`], which is also what the edge detector works on.
//!
//! # Ranges
//! - Stick axes are deadzone-shaped and lie in `[-1.0, 1.0]`.
//! - Trigger axes lie in `[0.0, 1.0]`.
//! - L2/R2 are not stored. They are read off the trigger axes with a strict
//!   `> 0.5` threshold every time they are queried.

use crate::sample::RawAxes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trigger axis value above which L2/R2 count as held.
pub const TRIGGER_BUTTON_THRESHOLD: f32 = 0.5;

/// Every digital input of a gamepad.
///
/// Face buttons are named by position (Down/Right/Left/Up) rather than by label,
/// since the labels differ between vendors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DigitalInput {
    /// Bottom face button (A on Xbox, Cross on PlayStation, B on Nintendo).
    FaceDown,
    /// Right face button.
    FaceRight,
    /// Left face button.
    FaceLeft,
    /// Top face button.
    FaceUp,
    L1,
    R1,
    /// Derived from the left trigger axis.
    L2,
    /// Derived from the right trigger axis.
    R2,
    L3,
    R3,
    Start,
    Select,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    /// Vendor button (Home/PS/Guide).
    Extra1,
    /// Vendor button (Capture/Touchpad).
    Extra2,
}

impl DigitalInput {
    /// All digital inputs, in reporting order.
    pub const ALL: [DigitalInput; 18] = [
        DigitalInput::FaceDown,
        DigitalInput::FaceRight,
        DigitalInput::FaceLeft,
        DigitalInput::FaceUp,
        DigitalInput::L1,
        DigitalInput::R1,
        DigitalInput::L2,
        DigitalInput::R2,
        DigitalInput::L3,
        DigitalInput::R3,
        DigitalInput::Start,
        DigitalInput::Select,
        DigitalInput::DpadUp,
        DigitalInput::DpadDown,
        DigitalInput::DpadLeft,
        DigitalInput::DpadRight,
        DigitalInput::Extra1,
        DigitalInput::Extra2,
    ];

    /// Short label for compact displays.
    ///
    /// Face buttons use the Nintendo layout (top = X, left = Y, right = A, bottom = B).
    pub fn label(self) -> &'static str {
        match self {
            DigitalInput::FaceDown => "B",
            DigitalInput::FaceRight => "A",
            DigitalInput::FaceLeft => "Y",
            DigitalInput::FaceUp => "X",
            DigitalInput::L1 => "L1",
            DigitalInput::R1 => "R1",
            DigitalInput::L2 => "L2",
            DigitalInput::R2 => "R2",
            DigitalInput::L3 => "L3",
            DigitalInput::R3 => "R3",
            DigitalInput::Start => "STA",
            DigitalInput::Select => "SEL",
            DigitalInput::DpadUp => "U",
            DigitalInput::DpadDown => "D",
            DigitalInput::DpadLeft => "L",
            DigitalInput::DpadRight => "R",
            DigitalInput::Extra1 => "EX1",
            DigitalInput::Extra2 => "EX2",
        }
    }

    /// Returns `true` for L2/R2, which are synthesized from trigger axes.
    #[inline]
    pub fn is_derived(self) -> bool {
        matches!(self, DigitalInput::L2 | DigitalInput::R2)
    }
}

impl fmt::Display for DigitalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized state of one controller for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GamepadState {
    pub connected: bool,

    pub left_stick_x: f32,
    pub left_stick_y: f32,
    pub right_stick_x: f32,
    pub right_stick_y: f32,

    pub trigger_l: f32,
    pub trigger_r: f32,

    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,

    pub button_down: bool,
    pub button_right: bool,
    pub button_left: bool,
    pub button_up: bool,

    pub button_l1: bool,
    pub button_r1: bool,
    pub button_l3: bool,
    pub button_r3: bool,

    pub button_start: bool,
    pub button_select: bool,

    pub button_extra1: bool,
    pub button_extra2: bool,

    /// Unscaled axis readings, for debugging.
    pub raw_axes: RawAxes,
    /// Raw button mask, for debugging.
    pub raw_buttons: u32,
    /// Raw POV value, for debugging.
    pub raw_pov: i32,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl GamepadState {
    /// The state of a controller that is not there: everything neutral.
    pub const fn disconnected() -> Self {
        Self {
            connected: false,
            left_stick_x: 0.0,
            left_stick_y: 0.0,
            right_stick_x: 0.0,
            right_stick_y: 0.0,
            trigger_l: 0.0,
            trigger_r: 0.0,
            dpad_up: false,
            dpad_down: false,
            dpad_left: false,
            dpad_right: false,
            button_down: false,
            button_right: false,
            button_left: false,
            button_up: false,
            button_l1: false,
            button_r1: false,
            button_l3: false,
            button_r3: false,
            button_start: false,
            button_select: false,
            button_extra1: false,
            button_extra2: false,
            raw_axes: RawAxes::zeroed(),
            raw_buttons: 0,
            raw_pov: -1,
        }
    }

    /// L2 as a button: left trigger past half travel.
    #[inline]
    pub fn button_l2(&self) -> bool {
        self.trigger_l > TRIGGER_BUTTON_THRESHOLD
    }

    /// R2 as a button: right trigger past half travel.
    #[inline]
    pub fn button_r2(&self) -> bool {
        self.trigger_r > TRIGGER_BUTTON_THRESHOLD
    }

    /// Reads any digital input.
    pub fn button(&self, input: DigitalInput) -> bool {
        match input {
            DigitalInput::FaceDown => self.button_down,
            DigitalInput::FaceRight => self.button_right,
            DigitalInput::FaceLeft => self.button_left,
            DigitalInput::FaceUp => self.button_up,
            DigitalInput::L1 => self.button_l1,
            DigitalInput::R1 => self.button_r1,
            DigitalInput::L2 => self.button_l2(),
            DigitalInput::R2 => self.button_r2(),
            DigitalInput::L3 => self.button_l3,
            DigitalInput::R3 => self.button_r3,
            DigitalInput::Start => self.button_start,
            DigitalInput::Select => self.button_select,
            DigitalInput::DpadUp => self.dpad_up,
            DigitalInput::DpadDown => self.dpad_down,
            DigitalInput::DpadLeft => self.dpad_left,
            DigitalInput::DpadRight => self.dpad_right,
            DigitalInput::Extra1 => self.button_extra1,
            DigitalInput::Extra2 => self.button_extra2,
        }
    }

    /// Iterates the digital inputs currently held.
    pub fn held(&self) -> impl Iterator<Item = DigitalInput> + '_ {
        DigitalInput::ALL
            .into_iter()
            .filter(move |&input| self.button(input))
    }

    /// Returns `true` if any digital input, dpad included, is held.
    pub fn is_any_button_pressed(&self) -> bool {
        self.held().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disconnected_and_neutral() {
        let s = GamepadState::disconnected();
        assert!(!s.connected);
        assert!(!s.is_any_button_pressed());
        assert_eq!(s.left_stick_x, 0.0);
        assert_eq!(s.trigger_r, 0.0);
        assert_eq!(s.raw_pov, -1);
    }

    #[test]
    fn trigger_buttons_use_strict_threshold() {
        let s = GamepadState {
            trigger_l: 0.5,
            trigger_r: 0.5001,
            ..GamepadState::default()
        };
        assert!(!s.button_l2());
        assert!(s.button_r2());
        assert!(!s.button(DigitalInput::L2));
        assert!(s.button(DigitalInput::R2));
    }

    #[test]
    fn any_button_includes_dpad_and_triggers() {
        let s = GamepadState {
            dpad_left: true,
            ..GamepadState::default()
        };
        assert!(s.is_any_button_pressed());

        let s = GamepadState {
            trigger_l: 0.9,
            ..GamepadState::default()
        };
        assert!(s.is_any_button_pressed());
        assert_eq!(s.held().collect::<Vec<_>>(), vec![DigitalInput::L2]);
    }

    #[test]
    fn all_inputs_have_distinct_labels() {
        let mut labels: Vec<_> = DigitalInput::ALL.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), DigitalInput::ALL.len());
    }

    #[test]
    fn only_l2_r2_are_derived() {
        let derived: Vec<_> = DigitalInput::ALL
            .into_iter()
            .filter(|i| i.is_derived())
            .collect();
        assert_eq!(derived, vec![DigitalInput::L2, DigitalInput::R2]);
    }
}
