// Hex parsing, hue shifting, and the closeness blend.

use glam::Vec3;
use viz_core::color::{from_hex, parse_hex, particle_color, shift_hue, ColorParseError, HOT_PINK};

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(parse_hex("#ff69b4").unwrap(), HOT_PINK);
    assert_eq!(parse_hex("00ffff").unwrap(), Vec3::new(0.0, 1.0, 1.0));
    assert_eq!(parse_hex("#000000").unwrap(), Vec3::ZERO);
    assert_eq!(parse_hex("#FFFFFF").unwrap(), Vec3::ONE);
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#ff", "#ff69b", "#ff69b4a", "zzzzzz", "#gggggg", "+000ff", "#-000ff"] {
        assert!(
            matches!(parse_hex(bad), Err(ColorParseError::Malformed(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn hue_shift_rotates_around_the_wheel() {
    let red = from_hex(0xff0000);
    // Half a turn from red is cyan.
    let cyan = shift_hue(red, 0.5);
    assert!((cyan - Vec3::new(0.0, 1.0, 1.0)).abs().max_element() < 1e-5);
    // A full turn comes back home.
    let back = shift_hue(red, 1.0);
    assert!((back - red).abs().max_element() < 1e-5);
    // Zero shift is exactly the identity.
    assert_eq!(shift_hue(red, 0.0), red);
}

#[test]
fn closeness_zero_blends_fully_to_the_hot_color() {
    let base = from_hex(0x00ffff);
    // Hue shift applies first, but a full blend lands exactly on hot.
    let color = particle_color(base, HOT_PINK, Some(200), Some(0.0));
    assert_eq!(color, HOT_PINK);
}

#[test]
fn distant_hands_leave_the_hue_shifted_color_alone() {
    let base = from_hex(0x00ffff);
    let shifted = shift_hue(base, (200.0 / 255.0) * 0.2);
    for closeness in [1.0, 1.2, 5.0] {
        let color = particle_color(base, HOT_PINK, Some(200), Some(closeness));
        assert_eq!(color, shifted, "closeness {closeness} should not blend");
    }
}

#[test]
fn intermediate_closeness_blends_per_channel() {
    let base = from_hex(0x0000ff);
    let color = particle_color(base, HOT_PINK, None, Some(0.5));
    let expected = base + (HOT_PINK - base) * 0.5;
    assert!((color - expected).abs().max_element() < 1e-6);
}

#[test]
fn silent_bins_and_no_hands_pass_the_base_through() {
    let base = from_hex(0x00ffff);
    assert_eq!(particle_color(base, HOT_PINK, None, None), base);
    assert_eq!(particle_color(base, HOT_PINK, Some(0), None), base);
}
