//! Error types.
//!
//! Normalization and edge detection cannot fail; a missing controller is reported
//! through [`GamepadState::connected`](crate::state::GamepadState::connected). The only
//! fallible surface is loading [`NormalizeSettings`](crate::settings::NormalizeSettings).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for `{field}`: {value} ({expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
