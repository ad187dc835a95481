//! Sample sources shipped with padstate.
//!
//! Implementations of [`SampleSource`](crate::device::SampleSource). Platform joystick
//! backends live outside this crate; the only source provided here is the scripted
//! [`VirtualPad`](virtual_input::VirtualPad).

pub mod virtual_input;
