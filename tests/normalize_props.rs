use padstate::normalize::{apply_deadzone, decode_pov, scale_stick, split_combined_trigger};
use padstate::{
    normalize, normalize_with, DeviceCapabilities, DigitalInput, GamepadState, NormalizeSettings,
    RawAxes, RawSample,
};
use proptest::prelude::*;

fn raw_axis() -> impl Strategy<Value = i32> {
    0..=65535i32
}

fn raw_sample() -> impl Strategy<Value = RawSample> {
    (
        any::<bool>(),
        [raw_axis(), raw_axis(), raw_axis(), raw_axis(), raw_axis()],
        proptest::option::of(raw_axis()),
        any::<u32>(),
        prop_oneof![0..=35900i32, Just(65535), Just(-1)],
    )
        .prop_map(|(connected, a, secondary, buttons, pov)| RawSample {
            connected,
            axes: RawAxes {
                left_x: a[0],
                left_y: a[1],
                right_x: a[2],
                right_y: a[3],
                trigger_primary: a[4],
                trigger_secondary: secondary,
            },
            buttons,
            pov,
        })
}

fn caps() -> impl Strategy<Value = DeviceCapabilities> {
    any::<bool>().prop_map(|dual| {
        if dual {
            DeviceCapabilities::dual_trigger("prop")
        } else {
            DeviceCapabilities::combined_trigger("prop")
        }
    })
}

fn in_stick_range(v: f32) -> bool {
    (-1.0..=1.0).contains(&v)
}

fn in_trigger_range(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

proptest! {
    #[test]
    fn stick_values_stay_in_range(raw in raw_axis()) {
        let v = apply_deadzone(scale_stick(raw), 0.15);
        prop_assert!(in_stick_range(v), "{raw} -> {v}");
    }

    #[test]
    fn deadzone_band_maps_to_exact_zero(offset in -4915i32..=4915) {
        // 4915 / 32767 < 0.15
        let v = apply_deadzone(scale_stick(32767 + offset), 0.15);
        prop_assert_eq!(v, 0.0);
    }

    #[test]
    fn deadzone_preserves_sign_and_order(a in -1.0f32..=1.0, b in -1.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (slo, shi) = (apply_deadzone(lo, 0.15), apply_deadzone(hi, 0.15));
        prop_assert!(slo <= shi);
        prop_assert!(apply_deadzone(a, 0.15) * a >= 0.0);
    }

    #[test]
    fn combined_triggers_are_exclusive(raw in raw_axis()) {
        let (l, r) = split_combined_trigger(raw, 32767, 1000);
        prop_assert_eq!(l * r, 0.0);
        prop_assert!(in_trigger_range(l) && in_trigger_range(r));
    }

    #[test]
    fn out_of_range_input_does_not_panic(raw in any::<i32>(), pov in any::<i32>()) {
        let (l, r) = split_combined_trigger(raw, 32767, 1000);
        prop_assert!(in_trigger_range(l) && in_trigger_range(r));
        prop_assert!(in_stick_range(apply_deadzone(scale_stick(raw), 0.15)));
        let d = decode_pov(&RawSample::neutral().with_pov(pov));
        prop_assert!(!(d.up && d.down) && !(d.left && d.right));
    }

    #[test]
    fn normalized_state_respects_invariants(sample in raw_sample(), caps in caps()) {
        let s = normalize(&sample, &caps);

        for v in [s.left_stick_x, s.left_stick_y, s.right_stick_x, s.right_stick_y] {
            prop_assert!(in_stick_range(v));
        }
        prop_assert!(in_trigger_range(s.trigger_l));
        prop_assert!(in_trigger_range(s.trigger_r));

        prop_assert_eq!(s.button(DigitalInput::L2), s.trigger_l > 0.5);
        prop_assert_eq!(s.button(DigitalInput::R2), s.trigger_r > 0.5);

        prop_assert!(!(s.dpad_up && s.dpad_down));
        prop_assert!(!(s.dpad_left && s.dpad_right));
        let active = [s.dpad_up, s.dpad_down, s.dpad_left, s.dpad_right]
            .iter()
            .filter(|&&d| d)
            .count();
        prop_assert!(active <= 2);

        if !caps.has_secondary_trigger_axis {
            prop_assert_eq!(s.trigger_l * s.trigger_r, 0.0);
        }
        if !sample.connected {
            prop_assert_eq!(s, GamepadState::disconnected());
        }
    }

    #[test]
    fn normalize_is_deterministic(sample in raw_sample(), caps in caps()) {
        prop_assert_eq!(normalize(&sample, &caps), normalize(&sample, &caps));
    }

    #[test]
    fn any_settings_keep_outputs_in_range(
        sample in raw_sample(),
        caps in caps(),
        stick_deadzone in prop_oneof![-2.0f32..2.0, Just(1.0f32), Just(f32::NAN)],
        trigger_center in any::<i32>(),
        trigger_deadzone in any::<i32>(),
    ) {
        let settings = NormalizeSettings { stick_deadzone, trigger_center, trigger_deadzone };
        let s = normalize_with(&sample, &caps, &settings);
        for v in [s.left_stick_x, s.left_stick_y, s.right_stick_x, s.right_stick_y] {
            prop_assert!(in_stick_range(v), "{settings:?} -> {v}");
        }
        prop_assert!(in_trigger_range(s.trigger_l));
        prop_assert!(in_trigger_range(s.trigger_r));
    }

    #[test]
    fn default_settings_match_plain_normalize(sample in raw_sample(), caps in caps()) {
        prop_assert_eq!(
            normalize_with(&sample, &caps, &NormalizeSettings::default()),
            normalize(&sample, &caps)
        );
    }
}
