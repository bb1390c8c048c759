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

    tests/parse.rs
*/
mod common;

use litcolor::prelude::*;

#[test]
fn test_parse_rgb888() {
    common::init();
    let color: LitColor = "#FF0000".parse().unwrap();
    assert_eq!(color.ints(), [255, 0, 0, 255]);
    assert!(!color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::Rgb888);
    assert!(color.source_was_valid());
    common::assert_synchronized(&color);
}

#[test]
fn test_parse_rgb565() {
    common::init();
    let color: LitColor = "#F800".parse().unwrap();
    assert_eq!(color.channel_int(Channel::Red), 255);
    assert_eq!(color.channel_int(Channel::Green), 0);
    assert_eq!(color.channel_int(Channel::Blue), 0);
    assert_eq!(color.rgb565(), 0xF800);
    assert!(!color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::Rgb565);
    common::assert_synchronized(&color);

    // short literals are the low digits of the word
    let color: LitColor = "#1F".parse().unwrap();
    assert_eq!(color.rgb565(), 0x001F);
    assert_eq!(color.ints(), [0, 0, 255, 255]);
}

#[test]
fn test_parse_rgba8888() {
    common::init();
    let color: LitColor = "#11223344".parse().unwrap();
    assert_eq!(color.ints(), [0x11, 0x22, 0x33, 0x44]);
    assert!(color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::Rgba8888);

    // seven digits are still a 32-bit word
    let color: LitColor = "#1223344".parse().unwrap();
    assert_eq!(color.rgba32(), 0x0122_3344);
    assert!(color.uses_alpha());
}

#[test]
fn test_parse_rgb5a3() {
    common::init();
    let color: LitColor = "@F800".parse().unwrap();
    assert!(!color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::Rgb5A3);
    assert_eq!(color.rgb5a3(), 0xF800);
    // red is 0b11110 in bits 14-10, which expands to 0xF7
    assert_eq!(color.ints(), [0xF7, 0x00, 0x00, 0xFF]);

    let color: LitColor = "@FC00".parse().unwrap();
    assert!(!color.uses_alpha());
    assert_eq!(color.ints(), [0xFF, 0x00, 0x00, 0xFF]);
    common::assert_synchronized(&color);

    let color: LitColor = "@0F00".parse().unwrap();
    assert!(color.uses_alpha());
    assert_eq!(color.ints(), [0xFF, 0x00, 0x00, 0x00]);
    common::assert_synchronized(&color);

    assert!("@12345".parse::<LitColor>().is_err());
    assert!("@".parse::<LitColor>().is_err());
}

#[test]
fn test_parse_floats() {
    common::init();
    let color: LitColor = "1.0,0.0,0.0,1.0".parse().unwrap();
    assert!(color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::RgbaF);
    assert_eq!(color.channel_int(Channel::Red), 255);
    common::assert_synchronized(&color);

    let color: LitColor = "0.5, 0.25, 1".parse().unwrap();
    assert!(!color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::RgbF);
    assert_eq!(color.channel_float(Channel::Alpha), 1.0);
    assert_eq!(color.ints(), [127, 63, 255, 255]);
}

#[test]
fn test_parse_floats_ignores_extra_tokens() {
    common::init();
    let color: LitColor = "1.0,0.0,0.0,1.0,0.5".parse().unwrap();
    assert!(color.uses_alpha());
    assert_eq!(color.format(), ColorFormat::RgbaF);
    assert_eq!(color.ints(), [255, 0, 0, 255]);
    assert!(color.source_was_valid());
}

#[test]
fn test_parse_out_of_range_floats_clamp() {
    common::init();
    let color: LitColor = "2.0,-1.0,0.5".parse().unwrap();
    assert!(!color.source_was_valid());
    assert_eq!(color.ints(), [255, 0, 127, 255]);
    assert_eq!(color.channel_float(Channel::Red), 1.0);
}

#[test]
fn test_parse_empty_is_default() {
    common::init();
    let color: LitColor = "".parse().unwrap();
    assert_eq!(color.rgba32(), 0);
    assert!(color.source_was_valid());
}

#[test]
fn test_parse_errors() {
    common::init();
    for literal in ["1.0,0.0", "1.0", "1.0,abc,0.0", "1.0,,0.0", "0,0,0,0,x", "#", "#XYZ", "#123456789", "red"] {
        match literal.parse::<LitColor>() {
            Err(LitColorError::ParseError(msg)) => println!("'{}' rejected: {}", literal, msg),
            other => panic!("'{}' should fail to parse, got {:?}", literal, other),
        }
    }
}
