//! Tunables for the normalizer.
//!
//! The defaults reproduce the stock behavior exactly: a 15% per-axis stick deadzone
//! and a ±1000 band around 32767 on combined trigger axes. Settings are plain TOML:
//!
//! ```toml
//! stick_deadzone = 0.2
//! trigger_center = 32767
//! trigger_deadzone = 1500
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::error::ConfigError;
use crate::sample::{AXIS_CENTER, AXIS_MAX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use tracing::debug;

/// Default stick deadzone, as a fraction of full deflection.
pub const DEFAULT_STICK_DEADZONE: f32 = 0.15;

/// Default half-width of the neutral band on a combined trigger axis.
pub const DEFAULT_TRIGGER_DEADZONE: i32 = 1000;

/// Largest `f32` below 1.0.
const MAX_STICK_DEADZONE: f32 = 1.0 - f32::EPSILON / 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    /// Stick deadzone in `[0, 1)`.
    pub stick_deadzone: f32,
    /// Raw value of a released combined trigger axis.
    pub trigger_center: i32,
    /// Half-width of the neutral band around `trigger_center`.
    pub trigger_deadzone: i32,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            stick_deadzone: DEFAULT_STICK_DEADZONE,
            trigger_center: AXIS_CENTER,
            trigger_deadzone: DEFAULT_TRIGGER_DEADZONE,
        }
    }
}

impl NormalizeSettings {
    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "loaded normalizer settings");
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every field against its legal range and reports the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.stick_deadzone) {
            return Err(ConfigError::InvalidValue {
                field: "stick_deadzone",
                value: self.stick_deadzone.to_string(),
                expected: "a fraction in [0, 1)",
            });
        }
        if self.trigger_center <= 0 || self.trigger_center >= AXIS_MAX {
            return Err(ConfigError::InvalidValue {
                field: "trigger_center",
                value: self.trigger_center.to_string(),
                expected: "a raw axis value strictly between 0 and 65535",
            });
        }
        if self.trigger_deadzone < 0 || self.trigger_deadzone >= self.trigger_center {
            return Err(ConfigError::InvalidValue {
                field: "trigger_deadzone",
                value: self.trigger_deadzone.to_string(),
                expected: "a non-negative value below trigger_center",
            });
        }
        Ok(())
    }

    /// Copy with every field forced into its legal range.
    ///
    /// Valid settings come back unchanged. A NaN stick deadzone falls back to the default.
    pub fn sanitized(&self) -> Self {
        let stick_deadzone = if self.stick_deadzone.is_nan() {
            DEFAULT_STICK_DEADZONE
        } else {
            self.stick_deadzone.clamp(0.0, MAX_STICK_DEADZONE)
        };
        let trigger_center = self.trigger_center.clamp(1, AXIS_MAX - 1);
        let trigger_deadzone = self.trigger_deadzone.clamp(0, trigger_center - 1);
        Self {
            stick_deadzone,
            trigger_center,
            trigger_deadzone,
        }
    }
}
