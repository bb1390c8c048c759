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

    src/codec/rgb565.rs

    Packing and expansion of the 16-bit RGB565 format.
    Layout: red(15-11) green(10-5) blue(4-0). Alpha is not represented.
*/

const RED_MASK_565: u16 = 0b1111_1000_0000_0000;
const GREEN_MASK_565: u16 = 0b0000_0111_1110_0000;
const BLUE_MASK_565: u16 = 0b0000_0000_0001_1111;

/// Widen a 5-bit field to 8 bits by replicating its high bits into the low bits.
#[inline]
pub(crate) fn expand_5(v: u16) -> u8 {
    ((v << 3) | (v >> 2)) as u8
}

/// Widen a 6-bit field to 8 bits by replicating its high bits into the low bits.
#[inline]
pub(crate) fn expand_6(v: u16) -> u8 {
    ((v << 2) | (v >> 4)) as u8
}

/// Pack 8-bit channels into RGB565 by keeping the top 5/6/5 bits of each channel.
#[inline]
pub fn rgb565_from_int(r: u8, g: u8, b: u8) -> u16 {
    let r = (r as u16 >> 3) & 0x1F;
    let g = (g as u16 >> 2) & 0x3F;
    let b = (b as u16 >> 3) & 0x1F;
    (r << 11) | (g << 5) | b
}

/// Expand an RGB565 word into 8-bit red, green and blue channels.
#[inline]
pub fn int_from_rgb565(rgb565: u16) -> [u8; 3] {
    let r = (rgb565 & RED_MASK_565) >> 11;
    let g = (rgb565 & GREEN_MASK_565) >> 5;
    let b = rgb565 & BLUE_MASK_565;
    [expand_5(r), expand_6(g), expand_5(b)]
}
