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

    src/codec/rgb5a3.rs

    Packing and expansion of the dual-mode 16-bit RGB5A3 format.

    Bit 15 selects the layout:
     * bit 15 set:   no-alpha mode, red(14-10) green(9-5) blue(4-0), 5 bits each.
     * bit 15 clear: alpha mode, alpha(14-12) red(11-8) green(7-4) blue(3-0).
*/
use crate::codec::rgb565::expand_5;

pub const RGB5A3_OPAQUE_BIT: u16 = 0x8000;

/// Widen a 3-bit field to 8 bits.
/// Note: the low bits differ from the textbook `(v << 5) | (v << 2) | (v >> 1)` replication.
/// The top three bits are always `v`.
#[inline]
pub(crate) fn expand_3(v: u16) -> u8 {
    ((v << 5) | ((v & 6) << 2) | v) as u8
}

/// Widen a 4-bit field to 8 bits.
#[inline]
pub(crate) fn expand_4(v: u16) -> u8 {
    ((v << 4) | v) as u8
}

/// Returns true if the RGB5A3 word uses the alpha-bearing layout (bit 15 clear).
#[inline]
pub fn rgb5a3_has_alpha(rgb5a3: u16) -> bool {
    rgb5a3 & RGB5A3_OPAQUE_BIT == 0
}

/// Pack 8-bit channels into RGB5A3.
/// When `wants_alpha` is set the word uses the 3-4-4-4 alpha layout, otherwise the 5-5-5 layout
/// with bit 15 set and alpha discarded.
#[inline]
pub fn rgb5a3_from_int(r: u8, g: u8, b: u8, a: u8, wants_alpha: bool) -> u16 {
    if wants_alpha {
        let a = (a as u16 >> 5) & 0x07;
        let r = (r as u16 >> 4) & 0x0F;
        let g = (g as u16 >> 4) & 0x0F;
        let b = (b as u16 >> 4) & 0x0F;
        (a << 12) | (r << 8) | (g << 4) | b
    }
    else {
        let r = (r as u16 >> 3) & 0x1F;
        let g = (g as u16 >> 3) & 0x1F;
        let b = (b as u16 >> 3) & 0x1F;
        RGB5A3_OPAQUE_BIT | (r << 10) | (g << 5) | b
    }
}

/// Expand an RGB5A3 word into 8-bit red, green, blue and alpha channels.
/// # Returns:
/// A tuple of the channels and a flag that is true if the word carried alpha. Words in the
/// no-alpha layout expand to an alpha of 0xFF.
#[inline]
pub fn int_from_rgb5a3(rgb5a3: u16) -> ([u8; 4], bool) {
    if rgb5a3_has_alpha(rgb5a3) {
        let a = (rgb5a3 >> 12) & 0x07;
        let r = (rgb5a3 >> 8) & 0x0F;
        let g = (rgb5a3 >> 4) & 0x0F;
        let b = rgb5a3 & 0x0F;
        ([expand_4(r), expand_4(g), expand_4(b), expand_3(a)], true)
    }
    else {
        let r = (rgb5a3 >> 10) & 0x1F;
        let g = (rgb5a3 >> 5) & 0x1F;
        let b = rgb5a3 & 0x1F;
        ([expand_5(r), expand_5(g), expand_5(b), 0xFF], false)
    }
}
