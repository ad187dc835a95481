//! padstate: gamepad state normalization for a single polled controller.
//!
//! Turns raw joystick readings (integer axes, a button mask, a POV angle) into a stable
//! [`GamepadState`] and derives press/release edges by comparing consecutive ticks.
//!
//! ```text
//! SampleSource ──► RawSample ──► normalize ──► GamepadState ──► Edges
//!  (acquisition)                 (pure)        (current/previous)
//! ```
//!
//! Polling hardware, rendering and pacing the loop are left to the caller. The
//! [`GamepadSession`] bundles the per-controller state a polling loop needs to carry.

pub mod backends;
pub mod capabilities;
pub mod device;
pub mod error;
pub mod event;
pub mod normalize;
pub mod sample;
pub mod session;
pub mod settings;
pub mod state;

pub use capabilities::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use normalize::{normalize, normalize_with};
pub use sample::*;
pub use session::*;
pub use settings::*;
pub use state::*;
