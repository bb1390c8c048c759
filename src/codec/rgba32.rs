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

    src/codec/rgba32.rs

    Packing of 8-bit channels into the 32-bit R:G:B:A word (red in the most significant byte).
*/

pub const RGB_MASK: u32 = 0xFFFF_FF00;

#[inline]
pub fn rgba32_from_int(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) | (b as u32) << 8 | (g as u32) << 16 | (r as u32) << 24
}

#[inline]
pub fn int_from_rgba32(rgba: u32) -> [u8; 4] {
    [(rgba >> 24) as u8, (rgba >> 16) as u8, (rgba >> 8) as u8, rgba as u8]
}

/// Pack a 24-bit `0x00RRGGBB` word into an RGBA word with the given alpha.
#[inline]
pub fn rgba32_from_rgb888(rgb: u32, a: u8) -> u32 {
    (rgb << 8) | a as u32
}

/// Drop the alpha byte, returning the 24-bit `0x00RRGGBB` word.
#[inline]
pub fn rgb888_from_rgba32(rgba: u32) -> u32 {
    rgba >> 8
}
