//! Device capability snapshot.
//!
//! [`DeviceCapabilities`] is queried once when a controller is (re)acquired and cached by
//! the [`GamepadSession`](crate::session::GamepadSession) until the controller goes away.
//!
//! # Conventions
//! - Only [`has_secondary_trigger_axis`](DeviceCapabilities::has_secondary_trigger_axis)
//!   affects normalization. Everything else is descriptive, for UI display and logging.
//! - Axis letters follow the classic joystick naming: X/Y left stick, Z primary trigger,
//!   R/U right stick, V secondary trigger.
//!
//! # Example
//! ```
//! use padstate::{DeviceCapabilities, TriggerPolicy};
//!
//! let caps = DeviceCapabilities::dual_trigger("Wireless Gamepad");
//! assert_eq!(caps.trigger_policy(), TriggerPolicy::DualAxis);
//! assert_eq!(caps.product_name.as_str(), "Wireless Gamepad");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the two analog triggers are wired on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerPolicy {
    /// L2 on the primary axis, R2 on the secondary axis.
    DualAxis,
    /// Both triggers share the primary axis, split around its center.
    CombinedAxis,
}

/// Product name with the length limit of the joystick capability record.
///
/// Names are cut at the first NUL and then to at most [`ProductName::MAX_CHARS`]
/// characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub const MAX_CHARS: usize = 31;

    pub fn new(name: &str) -> Self {
        let name = name.split('\0').next().unwrap_or_default();
        Self(name.chars().take(Self::MAX_CHARS).collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ProductName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProductName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reported logical range of one raw axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: u32,
    pub max: u32,
}

impl AxisRange {
    /// The usual `0..=65535` range.
    pub const FULL: AxisRange = AxisRange { min: 0, max: 65535 };
}

/// Ranges for the six classic joystick axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    pub r: AxisRange,
    pub u: AxisRange,
    pub v: AxisRange,
}

/// Capabilities of the acquired controller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// `true` when L2/R2 are reported on two independent axes (Z and V).
    ///
    /// `false` means both triggers share the Z axis.
    pub has_secondary_trigger_axis: bool,

    /// Manufacturer ID, if the driver reports one.
    pub manufacturer_id: u16,

    /// Product ID, if the driver reports one.
    pub product_id: u16,

    /// Human-readable product name from the driver.
    pub product_name: ProductName,

    /// Number of axes the device exposes.
    pub num_axes: u32,

    /// Number of buttons the device exposes.
    pub num_buttons: u32,

    /// Whether the device has a POV hat. At most one hat is ever read.
    pub has_pov: bool,

    /// Z axis present (primary trigger axis).
    pub has_z: bool,

    /// R axis present (right stick X).
    pub has_r: bool,

    /// U axis present (right stick Y).
    pub has_u: bool,

    /// Logical ranges of the raw axes.
    pub ranges: AxisRanges,
}

impl DeviceCapabilities {
    /// A typical XInput-style pad: separate trigger axes, 6 axes, POV present.
    pub fn dual_trigger(name: &str) -> Self {
        Self {
            has_secondary_trigger_axis: true,
            product_name: ProductName::new(name),
            num_axes: 6,
            num_buttons: 12,
            has_pov: true,
            has_z: true,
            has_r: true,
            has_u: true,
            ranges: AxisRanges {
                x: AxisRange::FULL,
                y: AxisRange::FULL,
                z: AxisRange::FULL,
                r: AxisRange::FULL,
                u: AxisRange::FULL,
                v: AxisRange::FULL,
            },
            ..Self::default()
        }
    }

    /// A typical DirectInput-style pad: both triggers on the Z axis, no V axis.
    pub fn combined_trigger(name: &str) -> Self {
        let base = Self::dual_trigger(name);
        Self {
            has_secondary_trigger_axis: false,
            num_axes: 5,
            ranges: AxisRanges {
                v: AxisRange::default(),
                ..base.ranges
            },
            ..base
        }
    }

    /// Trigger decoding policy selected by [`has_secondary_trigger_axis`](Self::has_secondary_trigger_axis).
    #[inline]
    pub fn trigger_policy(&self) -> TriggerPolicy {
        if self.has_secondary_trigger_axis {
            TriggerPolicy::DualAxis
        } else {
            TriggerPolicy::CombinedAxis
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_name_is_truncated_to_31_chars() {
        let long = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let name = ProductName::new(long);
        assert_eq!(name.as_str().chars().count(), ProductName::MAX_CHARS);
        assert_eq!(name.as_str(), &long[..31]);
    }

    #[test]
    fn product_name_stops_at_nul() {
        assert_eq!(ProductName::new("Pad\0garbage").as_str(), "Pad");
    }

    #[test]
    fn product_name_counts_chars_not_bytes() {
        let name = ProductName::new(&"ゲーム".repeat(20));
        assert_eq!(name.as_str().chars().count(), 31);
    }

    #[test]
    fn policy_follows_secondary_axis_flag() {
        assert_eq!(
            DeviceCapabilities::dual_trigger("a").trigger_policy(),
            TriggerPolicy::DualAxis
        );
        assert_eq!(
            DeviceCapabilities::combined_trigger("b").trigger_policy(),
            TriggerPolicy::CombinedAxis
        );
        assert_eq!(
            DeviceCapabilities::default().trigger_policy(),
            TriggerPolicy::CombinedAxis
        );
    }

    #[test]
    fn combined_trigger_pad_has_no_v_range() {
        let caps = DeviceCapabilities::combined_trigger("pad");
        assert_eq!(caps.ranges.v, AxisRange::default());
        assert_eq!(caps.ranges.z, AxisRange::FULL);
        assert_eq!(caps.num_axes, 5);
        assert!(caps.has_z && caps.has_r && caps.has_u);
    }

    #[test]
    fn axis_flags_do_not_change_policy() {
        let caps = DeviceCapabilities {
            has_z: false,
            has_r: false,
            has_u: false,
            ..DeviceCapabilities::dual_trigger("pad")
        };
        assert_eq!(caps.trigger_policy(), TriggerPolicy::DualAxis);
    }
}
