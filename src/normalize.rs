//! Raw sample → [`GamepadState`] normalization.
//!
//! [`normalize`] is a pure function: the same sample and capabilities always yield the
//! same state, and nothing is cached between calls.
//!
//! ## Pipeline
//! 1. Disconnected samples short-circuit to [`GamepadState::disconnected`].
//! 2. Sticks: `(v - 32767) / 32767`, clamped to `[-1, 1]`, then [`apply_deadzone`].
//! 3. Triggers: [`split_triggers`] picks the dual-axis or combined-axis decoding from
//!    [`DeviceCapabilities::trigger_policy`].
//! 4. POV: [`decode_pov`] into four overlapping 90° windows.
//! 5. Buttons: [`unpack_buttons`] by fixed bit position.
//!
//! L2/R2 are not computed here; [`GamepadState`] derives them from the trigger axes.

use crate::capabilities::{DeviceCapabilities, TriggerPolicy};
use crate::sample::{RawSample, AXIS_CENTER, AXIS_MAX};
use crate::settings::NormalizeSettings;
use crate::state::GamepadState;

/// Button bit positions in the raw mask.
pub mod button_bits {
    pub const DOWN: u32 = 0;
    pub const RIGHT: u32 = 1;
    pub const LEFT: u32 = 2;
    pub const UP: u32 = 3;
    pub const L1: u32 = 4;
    pub const R1: u32 = 5;
    pub const SELECT: u32 = 6;
    pub const START: u32 = 7;
    pub const L3: u32 = 8;
    pub const R3: u32 = 9;
    pub const EXTRA1: u32 = 10;
    pub const EXTRA2: u32 = 11;
}

/// Normalizes one sample with the default settings.
pub fn normalize(sample: &RawSample, caps: &DeviceCapabilities) -> GamepadState {
    normalize_with(sample, caps, &NormalizeSettings::default())
}

/// Normalizes one sample.
///
/// Out-of-range settings are clamped with [`NormalizeSettings::sanitized`] first, so the
/// output ranges hold for any settings value.
pub fn normalize_with(
    sample: &RawSample,
    caps: &DeviceCapabilities,
    settings: &NormalizeSettings,
) -> GamepadState {
    if !sample.connected {
        return GamepadState::disconnected();
    }

    let settings = settings.sanitized();
    let axes = &sample.axes;
    let dz = settings.stick_deadzone;
    let (trigger_l, trigger_r) = split_triggers(sample, caps.trigger_policy(), &settings);
    let dpad = decode_pov(sample);

    let mut state = GamepadState {
        connected: true,
        left_stick_x: apply_deadzone(scale_stick(axes.left_x), dz),
        left_stick_y: apply_deadzone(scale_stick(axes.left_y), dz),
        right_stick_x: apply_deadzone(scale_stick(axes.right_x), dz),
        right_stick_y: apply_deadzone(scale_stick(axes.right_y), dz),
        trigger_l,
        trigger_r,
        dpad_up: dpad.up,
        dpad_down: dpad.down,
        dpad_left: dpad.left,
        dpad_right: dpad.right,
        raw_axes: *axes,
        raw_buttons: sample.buttons,
        raw_pov: sample.pov,
        ..GamepadState::disconnected()
    };
    unpack_buttons(sample.buttons, &mut state);
    state
}

/// Maps a raw stick reading to `[-1, 1]` around the 32767 center.
///
/// Raw 65535 lands just past 1.0 and is clamped back.
#[inline]
pub fn scale_stick(raw: i32) -> f32 {
    let v = (raw as f32 - AXIS_CENTER as f32) / AXIS_CENTER as f32;
    v.clamp(-1.0, 1.0)
}

/// Zeroes values inside `deadzone` and rescales the rest to span the full range again.
///
/// `deadzone` must lie in `[0, 1)`.
///
/// `|x| == deadzone` is outside the deadzone and maps to 0 through the rescale.
#[inline]
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < deadzone {
        return 0.0;
    }
    let sign = if value > 0.0 { 1.0 } else { -1.0 };
    sign * (magnitude - deadzone) / (1.0 - deadzone)
}

/// Decodes `(trigger_l, trigger_r)` in `[0, 1]` under the given policy.
pub fn split_triggers(
    sample: &RawSample,
    policy: TriggerPolicy,
    settings: &NormalizeSettings,
) -> (f32, f32) {
    let primary = sample.axes.trigger_primary;
    match policy {
        TriggerPolicy::DualAxis => {
            let secondary = sample.axes.trigger_secondary.unwrap_or(0);
            (scale_trigger(primary), scale_trigger(secondary))
        }
        TriggerPolicy::CombinedAxis => {
            split_combined_trigger(primary, settings.trigger_center, settings.trigger_deadzone)
        }
    }
}

#[inline]
fn scale_trigger(raw: i32) -> f32 {
    (raw as f32 / AXIS_MAX as f32).clamp(0.0, 1.0)
}

/// Splits one shared trigger axis around `center`.
///
/// Above the band is L2, below it is R2; at most one side is ever non-zero.
pub fn split_combined_trigger(raw: i32, center: i32, deadzone: i32) -> (f32, f32) {
    let (raw, center, deadzone) = (i64::from(raw), i64::from(center), i64::from(deadzone));
    if raw > center + deadzone {
        let l = (raw - center) as f32 / (i64::from(AXIS_MAX) - center) as f32;
        (l.clamp(0.0, 1.0), 0.0)
    } else if raw < center - deadzone {
        let r = (center - raw) as f32 / center as f32;
        (0.0, r.clamp(0.0, 1.0))
    } else {
        (0.0, 0.0)
    }
}

/// Directions reported by the hat for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dpad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Classifies the POV reading of `sample` into the four dpad directions.
///
/// The windows are 90° wide and inclusive at both ends, so exactly 45°, 135°, 225°
/// and 315° report two neighbouring directions. Inactive readings are neutral.
pub fn decode_pov(sample: &RawSample) -> Dpad {
    if !sample.pov_active() {
        return Dpad::default();
    }

    let angle = sample.pov / 100;
    Dpad {
        up: angle >= 315 || angle <= 45,
        right: (45..=135).contains(&angle),
        down: (135..=225).contains(&angle),
        left: (225..=315).contains(&angle),
    }
}

/// Copies the twelve mapped button bits into `state`. Higher bits are ignored.
pub fn unpack_buttons(mask: u32, state: &mut GamepadState) {
    let bit = |n: u32| mask & (1 << n) != 0;

    state.button_down = bit(button_bits::DOWN);
    state.button_right = bit(button_bits::RIGHT);
    state.button_left = bit(button_bits::LEFT);
    state.button_up = bit(button_bits::UP);
    state.button_l1 = bit(button_bits::L1);
    state.button_r1 = bit(button_bits::R1);
    state.button_select = bit(button_bits::SELECT);
    state.button_start = bit(button_bits::START);
    state.button_l3 = bit(button_bits::L3);
    state.button_r3 = bit(button_bits::R3);
    state.button_extra1 = bit(button_bits::EXTRA1);
    state.button_extra2 = bit(button_bits::EXTRA2);
}
