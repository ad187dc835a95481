//! Acquisition seam.
//!
//! padstate does not talk to hardware. Whatever does (a platform joystick API, a
//! network feed, a replay file) implements [`SampleSource`] and hands over one
//! [`RawSample`] per tick.

use crate::capabilities::DeviceCapabilities;
use crate::sample::RawSample;
use std::fmt;

/// Platform slot of an acquired controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub u32);

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A controller found by [`SampleSource::acquire`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acquired {
    pub id: ControllerId,
    pub caps: DeviceCapabilities,
}

/// Supplier of raw samples.
pub trait SampleSource {
    /// Looks for a usable controller. `None` if nothing is plugged in.
    fn acquire(&mut self) -> Option<Acquired>;

    /// Reads one tick from `id`.
    ///
    /// A lost controller is reported with `connected == false`, not as an error.
    fn sample(&mut self, id: ControllerId) -> RawSample;
}
