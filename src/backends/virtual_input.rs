//! Scripted in-memory controller.
//!
//! [`VirtualPad`] plays back queued [`RawSample`]s through the [`SampleSource`] seam,
//! which makes it handy for tests, demos and replaying recorded input.

use crate::capabilities::DeviceCapabilities;
use crate::device::{Acquired, ControllerId, SampleSource};
use crate::sample::RawSample;
use std::collections::VecDeque;

pub struct VirtualPad {
    id: ControllerId,
    caps: DeviceCapabilities,
    plugged: bool,
    frames: VecDeque<RawSample>,
    last: RawSample,
}

impl VirtualPad {
    /// A plugged-in pad in slot 0 reporting a neutral sample until fed.
    pub fn new(caps: DeviceCapabilities) -> Self {
        Self {
            id: ControllerId(0),
            caps,
            plugged: true,
            frames: VecDeque::new(),
            last: RawSample::neutral(),
        }
    }

    pub fn with_id(mut self, id: ControllerId) -> Self {
        self.id = id;
        self
    }

    /// Queues one frame. Frames are consumed one per [`sample`](SampleSource::sample).
    pub fn push(&mut self, sample: RawSample) {
        self.frames.push_back(sample);
    }

    pub fn extend(&mut self, samples: impl IntoIterator<Item = RawSample>) {
        self.frames.extend(samples);
    }

    /// Simulates pulling the cable. Queued frames are kept for after [`plug`](Self::plug).
    pub fn unplug(&mut self) {
        self.plugged = false;
    }

    pub fn plug(&mut self) {
        self.plugged = true;
    }

    #[inline]
    pub fn is_plugged(&self) -> bool {
        self.plugged
    }

    /// Frames still waiting to be sampled.
    #[inline]
    pub fn pending(&self) -> usize {
        self.frames.len()
    }
}

impl SampleSource for VirtualPad {
    fn acquire(&mut self) -> Option<Acquired> {
        self.plugged.then(|| Acquired {
            id: self.id,
            caps: self.caps.clone(),
        })
    }

    fn sample(&mut self, id: ControllerId) -> RawSample {
        if !self.plugged || id != self.id {
            return RawSample::disconnected();
        }
        if let Some(next) = self.frames.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_frames_then_repeats_last() {
        let mut pad = VirtualPad::new(DeviceCapabilities::default());
        pad.push(RawSample::neutral().with_buttons(1));
        pad.push(RawSample::neutral().with_buttons(2));

        let id = pad.acquire().unwrap().id;
        assert_eq!(pad.sample(id).buttons, 1);
        assert_eq!(pad.sample(id).buttons, 2);
        assert_eq!(pad.sample(id).buttons, 2);
        assert_eq!(pad.pending(), 0);
    }

    #[test]
    fn unplugged_pad_cannot_be_acquired() {
        let mut pad = VirtualPad::new(DeviceCapabilities::default());
        pad.unplug();
        assert!(pad.acquire().is_none());
        assert!(!pad.sample(ControllerId(0)).connected);

        pad.plug();
        assert!(pad.acquire().is_some());
    }

    #[test]
    fn wrong_slot_reads_disconnected() {
        let mut pad = VirtualPad::new(DeviceCapabilities::default()).with_id(ControllerId(3));
        pad.push(RawSample::neutral().with_buttons(1));
        assert!(!pad.sample(ControllerId(0)).connected);
        assert_eq!(pad.pending(), 1);
        assert_eq!(pad.sample(ControllerId(3)).buttons, 1);
    }
}
