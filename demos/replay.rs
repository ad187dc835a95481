//! Replays a short scripted session through a `VirtualPad` and logs what the
//! normalizer and edge detector make of it.
//!
//! `cargo run --example replay`. Logs at DEBUG level and reads `padstate.toml`
//! from the working directory when present.

use padstate::backends::virtual_input::VirtualPad;
use padstate::normalize::button_bits;
use padstate::{DeviceCapabilities, GamepadSession, NormalizeSettings, RawAxes, RawSample};
use tracing::Level;

fn main() -> Result<(), padstate::ConfigError> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let settings = NormalizeSettings::load("padstate.toml")?;
    let mut session = GamepadSession::new(settings);
    let mut pad = VirtualPad::new(DeviceCapabilities::combined_trigger("DirectInput Gamepad"));

    let start = 1 << button_bits::START;
    pad.extend([
        RawSample::neutral(),
        RawSample::neutral().with_buttons(start).with_pov(4500),
        RawSample::neutral().with_axes(RawAxes {
            left_x: 65535,
            trigger_primary: 60000,
            ..RawAxes::centered()
        }),
        RawSample::neutral().with_axes(RawAxes {
            trigger_primary: 2000,
            ..RawAxes::centered()
        }),
    ]);

    for tick in 0..6 {
        if tick == 4 {
            pad.unplug();
        }
        if tick == 5 {
            pad.plug();
            pad.push(RawSample::neutral().with_buttons(start));
        }

        let state = *session.poll(&mut pad);
        println!(
            "tick {tick}: connected={} LX={:+.2} L2={:.2} R2={:.2} held=[{}]",
            state.connected,
            state.left_stick_x,
            state.trigger_l,
            state.trigger_r,
            state
                .held()
                .map(|i| i.label())
                .collect::<Vec<_>>()
                .join(" ")
        );
        session.log_edges();
    }

    Ok(())
}
