/*
    litcolor

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    tests/color.rs
*/
mod common;

use litcolor::{codec, prelude::*};
use strum::IntoEnumIterator;

#[test]
fn test_rgb565_round_trip_through_color() {
    common::init();
    for word in (0..=u16::MAX).step_by(7) {
        let color = LitColor::from_rgb565(word);
        assert_eq!(color.rgb565(), word);
        let [r, g, b, _] = color.ints();
        assert_eq!(LitColor::rgb(r, g, b).rgb565(), word);
        common::assert_synchronized(&color);
    }
}

#[test]
fn test_rgb5a3_round_trip_through_color() {
    common::init();
    for word in (0..=u16::MAX).step_by(5) {
        let color = LitColor::from_rgb5a3(word);
        assert_eq!(color.rgb5a3(), word);
        assert_eq!(color.uses_alpha(), word & 0x8000 == 0);
        common::assert_synchronized(&color);
    }
}

#[test]
fn test_packed_words_agree() {
    common::init();
    let color = LitColor::rgba(0x84, 0x82, 0x84, 0xFF);
    assert_eq!(color.rgba32(), 0x8482_84FF);
    assert_eq!(color.rgb888(), 0x84_82_84);
    assert_eq!(color.rgb565(), 0x8410);
    // 4-bit fields with alpha: a=7 r=8 g=8 b=8
    assert_eq!(color.rgb5a3(), 0x7888);

    let opaque = LitColor::rgb(0x84, 0x82, 0x84);
    assert_eq!(opaque.rgb5a3(), 0xC210);
}

#[test]
fn test_int_constructor_validity() {
    common::init();
    let color = LitColor::from_ints([256, 0, 0, 255], true);
    assert!(!color.source_was_valid());
    assert_eq!(color.channel_int(Channel::Red), 255);

    // unused alpha is not validated
    let color = LitColor::from_ints([1, 2, 3, -40], false);
    assert!(color.source_was_valid());
    assert_eq!(color.channel_int(Channel::Alpha), 0);
}

#[test]
fn test_float_channels_within_range() {
    common::init();
    let color = LitColor::from_ints([-100, 500, 128, 1000], true);
    for channel in Channel::iter() {
        let f = color.channel_float(channel);
        assert!((0.0..=1.0).contains(&f), "{} channel out of range: {}", channel, f);
    }
}

#[test]
fn test_channel_setters() {
    common::init();
    let mut color: LitColor = "#000000".parse().unwrap();
    color.set_channel_int(Channel::Red, 0xFF);
    assert_eq!(color.rgba32(), 0xFF00_00FF);
    assert_eq!(color.rgb565(), 0xF800);
    assert_eq!(color.rgb5a3(), 0xFC00);
    common::assert_synchronized(&color);

    color.set_channel_float(Channel::Blue, 0.5);
    assert_eq!(color.channel_int(Channel::Blue), 127);
    assert_eq!(color.rgba32(), 0xFF00_7FFF);
    assert!(color.source_was_valid());

    color.set_channel_int(Channel::Green, -1);
    assert!(!color.source_was_valid());
    assert_eq!(color.channel_int(Channel::Green), 0);
}

#[test]
fn test_select_format_alpha_table() {
    common::init();
    let mut color = LitColor::new();
    for format in ColorFormat::iter() {
        color.select_format(format, true);
        assert_eq!(color.format(), format);
        let expected = matches!(format, ColorFormat::Rgba8888 | ColorFormat::RgbaF | ColorFormat::Rgb5A3);
        assert_eq!(color.uses_alpha(), expected, "alpha usage for {}", format);
    }
}

#[test]
fn test_standalone_conversions() {
    common::init();
    assert_eq!(codec::rgb565_to_rgb888(0xF800), 0xFF0000);
    assert_eq!(codec::rgbf_to_rgb888(0.0, 1.0, 0.0), 0x00FF00);
    assert_eq!(codec::rgbaf_to_rgba8888(0.0, 0.0, 1.0, 0.5), 0x0000FF7F);
    assert_eq!(codec::rgb5a3_to_rgba8888(0x7000), 0x000000FF);
    assert_eq!(codec::rgb5a3_to_rgb888(0xFFFF), 0xFFFFFF);

    // one-shot conversions agree with a full color value
    for word in [0x0000u16, 0x1234, 0x8000, 0xABCD, 0xFFFF] {
        let color = LitColor::from_rgb5a3(word);
        assert_eq!(codec::rgb5a3_to_rgba8888(word), color.rgba32());
        assert_eq!(codec::rgb5a3_to_rgb888(word), color.rgb888());
        assert_eq!(codec::rgb565_to_rgb888(word), LitColor::from_rgb565(word).rgb888());
    }
}

#[test]
fn test_buffer_length() {
    common::init();
    assert_eq!(
        LitColor::from_float_buffer(&[0.5, 0.5], false),
        Err(LitColorError::BufferLength { expected: 3, found: 2 })
    );
    let color = LitColor::from_float_buffer(&[0.0, 0.5, 1.0], false).unwrap();
    assert_eq!(color.ints(), [0, 127, 255, 255]);
    assert_eq!(color.format(), ColorFormat::RgbF);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_as_literal() {
    common::init();
    let color: LitColor = "@3F00".parse().unwrap();
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, "\"@3F00\"");

    let decoded: LitColor = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.rgb5a3(), 0x3F00);
    assert!(decoded.uses_alpha());
    assert!(serde_json::from_str::<LitColor>("\"1.0,0.0\"").is_err());
}
