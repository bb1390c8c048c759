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

    src/ops.rs

    Arithmetic, bitwise and comparison operators for LitColor.

    Each operation has one canonical implementation on LitColor taking any ColorOperand.
    The std::ops traits delegate to those implementations.
*/
use crate::{
    codec::{
        channel::{add_saturate, div_checked, mul_saturate, sub_saturate},
        rgba32::RGB_MASK,
    },
    Channel,
    LitColor,
    LitColorError,
};
use std::{
    cmp::Ordering,
    ops::{
        Add,
        AddAssign,
        BitAnd,
        BitAndAssign,
        BitOr,
        BitOrAssign,
        BitXor,
        BitXorAssign,
        Div,
        DivAssign,
        Mul,
        MulAssign,
        Not,
        Sub,
        SubAssign,
    },
};
use strum::IntoEnumIterator;

/// A value that may appear as the right hand side of a [LitColor] operation.
///
/// * `u32` is a packed `0xRRGGBBAA` word, with alpha meaningful.
/// * `[u8; 3]`, `[i32; 3]` and `[f32; 3]` are R, G, B channel buffers, opaque with alpha unused.
/// * `[u8; 4]`, `[i32; 4]` and `[f32; 4]` are R, G, B, A channel buffers.
///
/// Integer buffers use the range 0 to 255 and float buffers the range 0.0 to 1.0. Out of range
/// values are clamped.
pub trait ColorOperand {
    fn to_color(&self) -> LitColor;
}

impl ColorOperand for LitColor {
    fn to_color(&self) -> LitColor {
        *self
    }
}

impl ColorOperand for &LitColor {
    fn to_color(&self) -> LitColor {
        **self
    }
}

impl ColorOperand for u32 {
    fn to_color(&self) -> LitColor {
        LitColor::from_rgba32(*self, true)
    }
}

impl ColorOperand for [u8; 3] {
    fn to_color(&self) -> LitColor {
        LitColor::rgb(self[0], self[1], self[2])
    }
}

impl ColorOperand for [u8; 4] {
    fn to_color(&self) -> LitColor {
        LitColor::rgba(self[0], self[1], self[2], self[3])
    }
}

impl ColorOperand for [i32; 3] {
    fn to_color(&self) -> LitColor {
        LitColor::from_ints([self[0], self[1], self[2], 0xFF], false)
    }
}

impl ColorOperand for [i32; 4] {
    fn to_color(&self) -> LitColor {
        LitColor::from_ints(*self, true)
    }
}

impl ColorOperand for [f32; 3] {
    fn to_color(&self) -> LitColor {
        LitColor::from_floats([self[0], self[1], self[2], 1.0], false)
    }
}

impl ColorOperand for [f32; 4] {
    fn to_color(&self) -> LitColor {
        LitColor::from_floats(*self, true)
    }
}

impl LitColor {
    /// Apply `op` to each integer channel pair. The result takes the alpha usage, format tag and
    /// source validity of `other`, the right hand operand.
    fn zip_ints(&self, other: &LitColor, op: impl Fn(u8, u8) -> u8) -> LitColor {
        let lhs = self.ints();
        let rhs = other.ints();
        let ints = [0, 1, 2, 3].map(|i| op(lhs[i], rhs[i]));
        let mut result = LitColor::from_valid_ints(ints, other.uses_alpha(), other.format());
        result.set_source_valid(other.source_was_valid());
        result
    }

    /// Apply `op` with a scalar to the red, green and blue float channels, and to alpha if alpha is
    /// meaningful. Float results are not clamped; integer channels saturate when the float result
    /// falls outside 0.0 to 1.0.
    fn map_floats(&self, scalar: f32, op: impl Fn(f32, f32) -> f32) -> LitColor {
        let mut floats = self.floats();
        for channel in Channel::iter() {
            if channel == Channel::Alpha && !self.uses_alpha() {
                continue;
            }
            let idx = usize::from(channel);
            floats[idx] = op(floats[idx], scalar);
        }
        LitColor::from_unclamped_floats(floats, self.uses_alpha(), self.format())
    }

    /// The number of float channels that take part in ordering against `other`: alpha is
    /// compared only when both colors consider it meaningful.
    fn ordered_channels(&self, other: &LitColor) -> usize {
        if self.uses_alpha() && other.uses_alpha() {
            4
        }
        else {
            3
        }
    }

    fn all_channels(&self, other: &LitColor, pred: impl Fn(f32, f32) -> bool) -> bool {
        let lhs = self.floats();
        let rhs = other.floats();
        (0..self.ordered_channels(other)).all(|i| pred(lhs[i], rhs[i]))
    }

    /// Per-channel saturating addition of the integer channels.
    pub fn saturating_add(&self, rhs: impl ColorOperand) -> LitColor {
        self.zip_ints(&rhs.to_color(), add_saturate)
    }

    /// Per-channel saturating subtraction of the integer channels. Channels stop at 0.
    pub fn saturating_sub(&self, rhs: impl ColorOperand) -> LitColor {
        self.zip_ints(&rhs.to_color(), sub_saturate)
    }

    /// Per-channel product of the raw integer channels, clamped at 255.
    /// This is not a normalized blend: 16 * 16 saturates to 255.
    pub fn saturating_mul(&self, rhs: impl ColorOperand) -> LitColor {
        self.zip_ints(&rhs.to_color(), mul_saturate)
    }

    /// Per-channel integer division of all four channels.
    /// # Returns:
    /// [LitColorError::DivideByZero] naming the first channel of `rhs` that is zero.
    pub fn checked_div(&self, rhs: impl ColorOperand) -> Result<LitColor, LitColorError> {
        let divisor = rhs.to_color();
        if let Some(channel) = Channel::iter().find(|&c| divisor.channel_int(c) == 0) {
            log::debug!("LitColor::checked_div(): {} channel of divisor is zero", channel);
            return Err(LitColorError::DivideByZero(channel));
        }
        Ok(self.zip_ints(&divisor, |a, b| div_checked(a, b).unwrap_or(0)))
    }

    /// Divide in place. On error this color is left unchanged.
    pub fn try_div_assign(&mut self, rhs: impl ColorOperand) -> Result<(), LitColorError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Add a scalar to the float channels. See [LitColor::mul_scalar] for range behavior.
    pub fn add_scalar(&self, scalar: f32) -> LitColor {
        self.map_floats(scalar, |c, s| c + s)
    }

    /// Subtract a scalar from the float channels. See [LitColor::mul_scalar] for range behavior.
    pub fn sub_scalar(&self, scalar: f32) -> LitColor {
        self.map_floats(scalar, |c, s| c - s)
    }

    /// Multiply the red, green and blue float channels, and alpha if meaningful, by a scalar.
    ///
    /// The float channels are not clamped and may leave the range 0.0 to 1.0. The integer
    /// channels and packed words are then derived by truncation, which saturates: a float
    /// channel of 1.5 reads back as integer 255, a negative one as 0, and NaN as 0. Such a
    /// result reports [LitColor::source_was_valid] as false.
    pub fn mul_scalar(&self, scalar: f32) -> LitColor {
        self.map_floats(scalar, |c, s| c * s)
    }

    /// Divide the float channels by a scalar. Division by 0.0 yields infinite or NaN float
    /// channels. See [LitColor::mul_scalar] for range behavior.
    pub fn div_scalar(&self, scalar: f32) -> LitColor {
        self.map_floats(scalar, |c, s| c / s)
    }

    /// Compare the packed 32-bit words. If either color does not consider alpha meaningful, the
    /// alpha byte is ignored on both sides.
    pub fn equals(&self, rhs: impl ColorOperand) -> bool {
        let other = rhs.to_color();
        if self.uses_alpha() && other.uses_alpha() {
            self.rgba32() == other.rgba32()
        }
        else {
            (self.rgba32() & RGB_MASK) == (other.rgba32() & RGB_MASK)
        }
    }

    /// True if every compared float channel is strictly less than the corresponding channel of
    /// `rhs`. Alpha is compared only if both colors consider it meaningful.
    pub fn less_than(&self, rhs: impl ColorOperand) -> bool {
        self.all_channels(&rhs.to_color(), |a, b| a < b)
    }

    /// True if every compared float channel is less than or equal to the corresponding channel
    /// of `rhs`.
    pub fn less_or_equal(&self, rhs: impl ColorOperand) -> bool {
        self.all_channels(&rhs.to_color(), |a, b| a <= b)
    }

    /// Defined as `!self.less_or_equal(rhs)`, not as a component-wise comparison.
    /// Two colors with mixed channel ordering are each greater than the other.
    pub fn greater_than(&self, rhs: impl ColorOperand) -> bool {
        !self.less_or_equal(rhs)
    }

    /// Defined as `!self.less_than(rhs)`, not as a component-wise comparison.
    pub fn greater_or_equal(&self, rhs: impl ColorOperand) -> bool {
        !self.less_than(rhs)
    }

    /// Component-wise partial order over the compared float channels.
    /// # Returns:
    /// `Less` or `Greater` if every channel is strictly less or strictly greater, `Equal` if every
    /// channel is equal, and None otherwise.
    pub fn compare(&self, rhs: impl ColorOperand) -> Option<Ordering> {
        let other = rhs.to_color();
        if self.all_channels(&other, |a, b| a == b) {
            Some(Ordering::Equal)
        }
        else if self.all_channels(&other, |a, b| a < b) {
            Some(Ordering::Less)
        }
        else if self.all_channels(&other, |a, b| a > b) {
            Some(Ordering::Greater)
        }
        else {
            None
        }
    }
}

impl Not for LitColor {
    type Output = LitColor;

    fn not(self) -> LitColor {
        LitColor::from_rgba32(!self.rgba32(), true)
    }
}

macro_rules! impl_color_ops {
    ($($rhs:ty),+ $(,)?) => {
        $(
            impl Add<$rhs> for LitColor {
                type Output = LitColor;
                fn add(self, rhs: $rhs) -> LitColor {
                    self.saturating_add(rhs)
                }
            }
            impl AddAssign<$rhs> for LitColor {
                fn add_assign(&mut self, rhs: $rhs) {
                    *self = self.saturating_add(rhs);
                }
            }
            impl Sub<$rhs> for LitColor {
                type Output = LitColor;
                fn sub(self, rhs: $rhs) -> LitColor {
                    self.saturating_sub(rhs)
                }
            }
            impl SubAssign<$rhs> for LitColor {
                fn sub_assign(&mut self, rhs: $rhs) {
                    *self = self.saturating_sub(rhs);
                }
            }
            impl Mul<$rhs> for LitColor {
                type Output = LitColor;
                fn mul(self, rhs: $rhs) -> LitColor {
                    self.saturating_mul(rhs)
                }
            }
            impl MulAssign<$rhs> for LitColor {
                fn mul_assign(&mut self, rhs: $rhs) {
                    *self = self.saturating_mul(rhs);
                }
            }
            /// Integer division can fail, so the output is a `Result`.
            impl Div<$rhs> for LitColor {
                type Output = Result<LitColor, LitColorError>;
                fn div(self, rhs: $rhs) -> Self::Output {
                    self.checked_div(rhs)
                }
            }
            impl BitAnd<$rhs> for LitColor {
                type Output = LitColor;
                fn bitand(self, rhs: $rhs) -> LitColor {
                    LitColor::from_rgba32(self.rgba32() & rhs.to_color().rgba32(), true)
                }
            }
            impl BitAndAssign<$rhs> for LitColor {
                fn bitand_assign(&mut self, rhs: $rhs) {
                    *self = *self & rhs;
                }
            }
            impl BitOr<$rhs> for LitColor {
                type Output = LitColor;
                fn bitor(self, rhs: $rhs) -> LitColor {
                    LitColor::from_rgba32(self.rgba32() | rhs.to_color().rgba32(), true)
                }
            }
            impl BitOrAssign<$rhs> for LitColor {
                fn bitor_assign(&mut self, rhs: $rhs) {
                    *self = *self | rhs;
                }
            }
            impl BitXor<$rhs> for LitColor {
                type Output = LitColor;
                fn bitxor(self, rhs: $rhs) -> LitColor {
                    LitColor::from_rgba32(self.rgba32() ^ rhs.to_color().rgba32(), true)
                }
            }
            impl BitXorAssign<$rhs> for LitColor {
                fn bitxor_assign(&mut self, rhs: $rhs) {
                    *self = *self ^ rhs;
                }
            }
            impl PartialEq<$rhs> for LitColor {
                fn eq(&self, other: &$rhs) -> bool {
                    self.equals(other.to_color())
                }
            }
        )+
    };
}

impl_color_ops!(LitColor, u32, [u8; 3], [u8; 4], [i32; 3], [i32; 4], [f32; 3], [f32; 4]);

macro_rules! impl_scalar_ops {
    ($($op:ident, $method:ident, $assign_op:ident, $assign_method:ident => $target:ident);+ $(;)?) => {
        $(
            impl $op<f32> for LitColor {
                type Output = LitColor;
                fn $method(self, scalar: f32) -> LitColor {
                    self.$target(scalar)
                }
            }
            impl $assign_op<f32> for LitColor {
                fn $assign_method(&mut self, scalar: f32) {
                    *self = self.$target(scalar);
                }
            }
        )+
    };
}

impl_scalar_ops!(
    Add, add, AddAssign, add_assign => add_scalar;
    Sub, sub, SubAssign, sub_assign => sub_scalar;
    Mul, mul, MulAssign, mul_assign => mul_scalar;
    Div, div, DivAssign, div_assign => div_scalar;
);
