//! Raw per-tick readings handed over by the acquisition layer.
//!
//! A [`RawSample`] is what a platform joystick API reports for one poll, before any
//! scaling: unsigned-ish integer axes (nominally `0..=65535`), a button bitmask and a
//! POV/hat angle in hundredths of a degree.
//!
//! ## Value conventions
//! - **Axes:** `0..=65535`, centered at `32767` for sticks. A value of `-1` is what most
//!   joystick APIs hand back for "no reading"; it is passed through untouched.
//! - **Buttons:** bit *i* of [`RawSample::buttons`] is raw button *i*.
//! - **POV:** `0..=35900`, clockwise from up. Anything else (typically [`POV_CENTERED`]
//!   or `-1`) means the hat is neutral.
//!
//! Samples are not validated here. Out-of-range values flow through the normalizer's
//! formulas and are clamped into the output ranges there.

use serde::{Deserialize, Serialize};

/// Raw axis center reported by a resting stick.
pub const AXIS_CENTER: i32 = 32767;

/// Largest raw axis value.
pub const AXIS_MAX: i32 = 65535;

/// Largest valid POV reading (359.00 degrees).
pub const POV_MAX: i32 = 35900;

/// POV value joystick APIs report for a centered hat.
pub const POV_CENTERED: i32 = 65535;

/// Raw integer axis readings for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAxes {
    pub left_x: i32,
    pub left_y: i32,
    pub right_x: i32,
    pub right_y: i32,
    /// Z axis: the left trigger, or both triggers on a combined-axis device.
    pub trigger_primary: i32,
    /// V axis: the right trigger. `None` when the device has no such axis.
    pub trigger_secondary: Option<i32>,
}

impl RawAxes {
    /// All sticks at rest and the primary trigger at its combined-axis center.
    pub const fn centered() -> Self {
        Self {
            left_x: AXIS_CENTER,
            left_y: AXIS_CENTER,
            right_x: AXIS_CENTER,
            right_y: AXIS_CENTER,
            trigger_primary: AXIS_CENTER,
            trigger_secondary: None,
        }
    }

    /// Every axis reading zero.
    pub const fn zeroed() -> Self {
        Self {
            left_x: 0,
            left_y: 0,
            right_x: 0,
            right_y: 0,
            trigger_primary: 0,
            trigger_secondary: None,
        }
    }
}

impl Default for RawAxes {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// One raw reading of a controller, produced once per polling tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    /// Whether this tick's acquisition succeeded.
    pub connected: bool,
    pub axes: RawAxes,
    /// Raw button bitmask; bit *i* = button *i*.
    pub buttons: u32,
    /// POV angle in hundredths of a degree, or a neutral sentinel.
    pub pov: i32,
}

impl RawSample {
    /// A failed acquisition.
    pub const fn disconnected() -> Self {
        Self {
            connected: false,
            axes: RawAxes {
                left_x: -1,
                left_y: -1,
                right_x: -1,
                right_y: -1,
                trigger_primary: -1,
                trigger_secondary: None,
            },
            buttons: 0,
            pov: -1,
        }
    }

    /// A connected controller with everything at rest.
    pub const fn neutral() -> Self {
        Self {
            connected: true,
            axes: RawAxes::centered(),
            buttons: 0,
            pov: POV_CENTERED,
        }
    }

    pub fn with_axes(mut self, axes: RawAxes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_buttons(mut self, buttons: u32) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_pov(mut self, pov: i32) -> Self {
        self.pov = pov;
        self
    }

    /// Returns `true` if [`pov`](Self::pov) is inside `0..=35900`.
    #[inline]
    pub fn pov_active(&self) -> bool {
        (0..=POV_MAX).contains(&self.pov)
    }
}

impl Default for RawSample {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_sample_has_centered_hat() {
        let s = RawSample::neutral();
        assert!(s.connected);
        assert!(!s.pov_active());
        assert_eq!(s.axes.left_x, AXIS_CENTER);
    }

    #[test]
    fn pov_sentinels_are_inactive() {
        assert!(!RawSample::neutral().with_pov(-1).pov_active());
        assert!(!RawSample::neutral().with_pov(36000).pov_active());
        assert!(RawSample::neutral().with_pov(0).pov_active());
        assert!(RawSample::neutral().with_pov(POV_MAX).pov_active());
    }

    #[test]
    fn builders_only_touch_their_field() {
        let s = RawSample::neutral().with_buttons(0x80).with_pov(9000);
        assert_eq!(s.buttons, 0x80);
        assert_eq!(s.pov, 9000);
        assert_eq!(s.axes, RawAxes::centered());
    }
}
