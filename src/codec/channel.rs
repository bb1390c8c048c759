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

    src/codec/channel.rs

    Conversions between 8-bit integer channels and normalized float channels,
    range clamping, and the saturating per-channel arithmetic used by operators.
*/
use crate::types::Channel;

pub const CHANNEL_MAX: i32 = 0xFF;

/// Clamp an integer channel value into the range [0, 255].
#[inline]
pub fn clamp_int(value: i32) -> u8 {
    value.clamp(0, CHANNEL_MAX) as u8
}

/// Clamp a float channel value into the range [0.0, 1.0]. NaN clamps to 0.0.
#[inline]
pub fn clamp_float(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    }
    else {
        value.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn int_in_range(value: i32) -> bool {
    (0..=CHANNEL_MAX).contains(&value)
}

#[inline]
pub fn float_in_range(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Convert a float channel to an integer channel by truncation: `floor(f * 255)`.
///
/// Values outside [0.0, 1.0] saturate at the ends of the integer range, NaN becomes 0.
#[inline]
pub fn int_from_float(value: f32) -> u8 {
    (value * 255.0).floor() as u8
}

/// Convert an integer channel to a float channel: `i / 255`.
#[inline]
pub fn float_from_int(value: u8) -> f32 {
    value as f32 / 255.0
}

pub fn ints_from_floats(floats: &[f32; 4]) -> [u8; 4] {
    floats.map(int_from_float)
}

pub fn floats_from_ints(ints: &[u8; 4]) -> [f32; 4] {
    ints.map(float_from_int)
}

/// Validate the channels of a source buffer. Alpha is only checked when `with_alpha` is set.
pub fn ints_valid(channels: &[i32; 4], with_alpha: bool) -> bool {
    channels
        .iter()
        .enumerate()
        .all(|(i, &c)| (!with_alpha && i == usize::from(Channel::Alpha)) || int_in_range(c))
}

/// Validate the channels of a float source buffer. Alpha is only checked when `with_alpha` is set.
pub fn floats_valid(channels: &[f32; 4], with_alpha: bool) -> bool {
    channels
        .iter()
        .enumerate()
        .all(|(i, &c)| (!with_alpha && i == usize::from(Channel::Alpha)) || float_in_range(c))
}

/// Saturating addition. Only the upper bound is clamped.
#[inline]
pub fn add_saturate(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating subtraction. Clamps at 0, never wraps.
#[inline]
pub fn sub_saturate(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Saturating multiplication of the raw channel values, clamped at 255.
/// This is not a normalized blend: `mul_saturate(16, 16) == 255`.
#[inline]
pub fn mul_saturate(a: u8, b: u8) -> u8 {
    a.saturating_mul(b)
}

/// Plain integer division. Returns None for a zero divisor.
#[inline]
pub fn div_checked(a: u8, b: u8) -> Option<u8> {
    a.checked_div(b)
}
