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

    src/codec/mod.rs
*/

//! The `codec` module implements the pure pack/unpack functions between the representations a
//! [LitColor](crate::LitColor) holds:
//! * 8-bit integer channels and normalized float channels ([channel])
//! * the 32-bit `R:G:B:A` word ([rgba32])
//! * the 16-bit RGB565 word ([rgb565])
//! * the 16-bit dual-mode RGB5A3 word ([rgb5a3])
//!
//! Packing truncates each channel to the top N bits of its field. Expansion widens the field
//! back to 8 bits by bit replication, so that packing an expanded value reproduces the original
//! word.
//!
//! The free functions in this module perform one-shot conversions without constructing a
//! full color value. 24-bit results are returned as `0x00RRGGBB`, 32-bit results as
//! `0xRRGGBBAA`.

pub mod channel;
pub mod rgb565;
pub mod rgb5a3;
pub mod rgba32;

pub use channel::{clamp_float, clamp_int, float_from_int, int_from_float};
pub use rgb565::{int_from_rgb565, rgb565_from_int};
pub use rgb5a3::{int_from_rgb5a3, rgb5a3_from_int, rgb5a3_has_alpha};
pub use rgba32::{int_from_rgba32, rgb888_from_rgba32, rgba32_from_int};

/// Convert an RGB565 word to a 24-bit `0x00RRGGBB` value.
pub fn rgb565_to_rgb888(rgb565: u16) -> u32 {
    let [r, g, b] = int_from_rgb565(rgb565);
    rgb888_from_rgba32(rgba32_from_int(r, g, b, 0xFF))
}

/// Convert float red, green and blue channels to a 24-bit `0x00RRGGBB` value.
/// Channels are clamped to [0.0, 1.0] first.
pub fn rgbf_to_rgb888(r: f32, g: f32, b: f32) -> u32 {
    rgb888_from_rgba32(rgbaf_to_rgba8888(r, g, b, 1.0))
}

/// Convert float red, green, blue and alpha channels to a 32-bit `0xRRGGBBAA` value.
/// Channels are clamped to [0.0, 1.0] first.
pub fn rgbaf_to_rgba8888(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let [r, g, b, a] = [r, g, b, a].map(|c| int_from_float(clamp_float(c)));
    rgba32_from_int(r, g, b, a)
}

/// Convert an RGB5A3 word to a 32-bit `0xRRGGBBAA` value.
/// Words in the no-alpha layout produce an alpha of 0xFF.
pub fn rgb5a3_to_rgba8888(rgb5a3: u16) -> u32 {
    let ([r, g, b, a], _) = int_from_rgb5a3(rgb5a3);
    rgba32_from_int(r, g, b, a)
}

/// Convert an RGB5A3 word to a 24-bit `0x00RRGGBB` value, discarding any alpha.
pub fn rgb5a3_to_rgb888(rgb5a3: u16) -> u32 {
    rgb888_from_rgba32(rgb5a3_to_rgba8888(rgb5a3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_to_rgb888() {
        assert_eq!(rgb565_to_rgb888(0xF800), 0xFF0000);
        assert_eq!(rgb565_to_rgb888(0x07E0), 0x00FF00);
        assert_eq!(rgb565_to_rgb888(0xFFFF), 0xFFFFFF);
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(rgbf_to_rgb888(1.0, 0.0, 1.0), 0xFF00FF);
        assert_eq!(rgbaf_to_rgba8888(1.0, 0.5, 0.0, 1.0), 0xFF7F00FF);
        // out of range channels are clamped
        assert_eq!(rgbaf_to_rgba8888(2.0, -1.0, 0.0, 0.0), 0xFF000000);
    }

    #[test]
    fn test_rgb5a3_conversions() {
        assert_eq!(rgb5a3_to_rgba8888(0xFC00), 0xFF0000FF);
        assert_eq!(rgb5a3_to_rgba8888(0x0F00), 0xFF000000);
        assert_eq!(rgb5a3_to_rgb888(0x0F00), 0xFF0000);
        assert_eq!(rgb5a3_to_rgb888(0x801F), 0x0000FF);
    }
}
