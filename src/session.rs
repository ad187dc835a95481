//! Caller-owned controller session.
//!
//! [`GamepadSession`] holds everything that has to survive between ticks: the acquired
//! controller and its capabilities, the active settings, and the current/previous
//! state pair the edge detector compares. It is a plain value; put it wherever the
//! polling loop lives.
//!
//! # Tick contract
//! Each [`update`](GamepadSession::update) or [`poll`](GamepadSession::poll) call:
//! 1. moves the current state into the previous slot,
//! 2. normalizes exactly one sample into the new current state.
//!
//! Query [`edges`](GamepadSession::edges) after the tick, as many times as needed.
//!
//! # Example
//! ```
//! use padstate::backends::virtual_input::VirtualPad;
//! use padstate::{DeviceCapabilities, DigitalInput, GamepadSession, RawSample};
//!
//! let mut pad = VirtualPad::new(DeviceCapabilities::dual_trigger("Virtual Pad"));
//! let mut session = GamepadSession::default();
//!
//! pad.push(RawSample::neutral());
//! session.poll(&mut pad);
//!
//! pad.push(RawSample::neutral().with_buttons(1 << 7));
//! session.poll(&mut pad);
//! assert!(session.edges().is_pressed(DigitalInput::Start));
//! ```

use crate::capabilities::DeviceCapabilities;
use crate::device::{Acquired, ControllerId, SampleSource};
use crate::event::Edges;
use crate::normalize::normalize_with;
use crate::sample::RawSample;
use crate::settings::NormalizeSettings;
use crate::state::GamepadState;
use tracing::{debug, info, trace, warn};

#[derive(Clone, Debug, Default)]
pub struct GamepadSession {
    settings: NormalizeSettings,
    controller: Option<Acquired>,
    current: GamepadState,
    previous: GamepadState,
}

impl GamepadSession {
    /// Out-of-range settings are accepted and clamped at normalization time.
    pub fn new(settings: NormalizeSettings) -> Self {
        warn_if_invalid(&settings);
        Self {
            settings,
            ..Self::default()
        }
    }

    #[inline]
    pub fn settings(&self) -> &NormalizeSettings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next tick.
    pub fn set_settings(&mut self, settings: NormalizeSettings) {
        warn_if_invalid(&settings);
        self.settings = settings;
    }

    /// Slot of the acquired controller, if any.
    pub fn controller_id(&self) -> Option<ControllerId> {
        self.controller.as_ref().map(|c| c.id)
    }

    /// Capabilities cached at acquisition, if any.
    pub fn capabilities(&self) -> Option<&DeviceCapabilities> {
        self.controller.as_ref().map(|c| &c.caps)
    }

    #[inline]
    pub fn current(&self) -> &GamepadState {
        &self.current
    }

    #[inline]
    pub fn previous(&self) -> &GamepadState {
        &self.previous
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.current.connected
    }

    /// Edge queries for the last tick.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.current, &self.previous)
    }

    /// Caches a freshly acquired controller and its capabilities.
    pub fn acquire(&mut self, acquired: Acquired) {
        info!(
            id = %acquired.id,
            name = %acquired.caps.product_name,
            axes = acquired.caps.num_axes,
            buttons = acquired.caps.num_buttons,
            triggers = ?acquired.caps.trigger_policy(),
            "controller acquired"
        );
        self.controller = Some(acquired);
    }

    /// Runs one tick on an already-read sample.
    ///
    /// Without an acquired controller the default capabilities apply (combined
    /// trigger axis). A disconnected sample drops the cached controller.
    pub fn update(&mut self, sample: &RawSample) -> &GamepadState {
        self.previous = self.current;

        if !sample.connected {
            if let Some(lost) = self.controller.take() {
                info!(id = %lost.id, name = %lost.caps.product_name, "controller lost");
            }
            self.current = GamepadState::disconnected();
            trace!(connected = false, "tick");
            return &self.current;
        }

        let default_caps = DeviceCapabilities::default();
        let caps = self
            .controller
            .as_ref()
            .map(|c| &c.caps)
            .unwrap_or(&default_caps);
        self.current = normalize_with(sample, caps, &self.settings);
        trace!(
            connected = true,
            buttons = format_args!("{:#06x}", sample.buttons),
            pov = sample.pov,
            "tick"
        );
        &self.current
    }

    /// Runs one full tick against `source`: acquire if needed, sample, normalize.
    pub fn poll<S: SampleSource + ?Sized>(&mut self, source: &mut S) -> &GamepadState {
        if self.controller.is_none() {
            match source.acquire() {
                Some(acquired) => self.acquire(acquired),
                None => return self.update(&RawSample::disconnected()),
            }
        }

        let sample = match self.controller_id() {
            Some(id) => source.sample(id),
            None => RawSample::disconnected(),
        };
        self.update(&sample)
    }

    /// Logs every edge of the last tick at debug level.
    pub fn log_edges(&self) {
        for event in self.edges().events() {
            debug!(%event, "edge");
        }
    }

    /// Forgets the controller and both snapshots.
    pub fn reset(&mut self) {
        self.controller = None;
        self.current = GamepadState::disconnected();
        self.previous = GamepadState::disconnected();
    }
}

fn warn_if_invalid(settings: &NormalizeSettings) {
    if let Err(err) = settings.validate() {
        warn!(%err, "normalizer settings out of range, clamping");
    }
}
