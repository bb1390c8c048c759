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

    src/color.rs

    Defines the LitColor value: one logical color held in every supported representation.
*/
use crate::{
    codec::{
        channel::{
            clamp_float,
            clamp_int,
            float_from_int,
            float_in_range,
            floats_from_ints,
            floats_valid,
            int_from_float,
            int_in_range,
            ints_from_floats,
            ints_valid,
        },
        int_from_rgb565,
        int_from_rgb5a3,
        int_from_rgba32,
        rgb565_from_int,
        rgb5a3_from_int,
        rgb888_from_rgba32,
        rgba32::rgba32_from_rgb888,
        rgba32_from_int,
    },
    Channel,
    ColorFormat,
    LitColorError,
};

/// The representation that drives a resynchronization. Every other representation is
/// regenerated from it.
#[derive(Copy, Clone, Debug)]
enum Source {
    Ints,
    Floats,
    Rgba32,
    Rgb565,
    Rgb5A3,
}

/// A [LitColor] is a single logical color expressed simultaneously as:
/// * four 8-bit integer channels (red, green, blue, alpha)
/// * four float channels, nominally in the range 0.0 to 1.0
/// * a 32-bit `0xRRGGBBAA` word
/// * a 16-bit RGB565 word
/// * a 16-bit RGB5A3 word, whose layout is chosen by whether alpha is meaningful
///
/// A [LitColor] also tracks whether its alpha channel is meaningful, a [ColorFormat] hint
/// describing the representation that last defined it, and whether the values it was last
/// constructed or assigned from were all within range. Out of range values are clamped and do
/// not produce errors.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct LitColor {
    ints: [u8; 4],
    floats: [f32; 4],
    rgba32: u32,
    rgb565: u16,
    rgb5a3: u16,
    use_alpha: bool,
    format: ColorFormat,
    source_valid: bool,
}

impl Default for LitColor {
    /// All channels zero, alpha meaningful, RGBA8888 format.
    fn default() -> Self {
        let mut color = LitColor {
            ints: [0; 4],
            floats: [0.0; 4],
            rgba32: 0,
            rgb565: 0,
            rgb5a3: 0,
            use_alpha: true,
            format: ColorFormat::Rgba8888,
            source_valid: true,
        };
        color.resync(Source::Ints);
        color
    }
}

impl LitColor {
    /// Create a new, all-zero [LitColor].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an opaque [LitColor] from 8-bit red, green and blue channels. Alpha is unused.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_valid_ints([r, g, b, 0xFF], false, ColorFormat::Rgb888)
    }

    /// Create a [LitColor] from 8-bit red, green, blue and alpha channels.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_valid_ints([r, g, b, a], true, ColorFormat::Rgba8888)
    }

    /// Create a [LitColor] from a 32-bit `0xRRGGBBAA` word.
    /// The format tag is RGBA8888 if `use_alpha` is set, otherwise RGB888.
    pub fn from_rgba32(rgba32: u32, use_alpha: bool) -> Self {
        let mut color = LitColor {
            rgba32,
            use_alpha,
            format: if use_alpha {
                ColorFormat::Rgba8888
            }
            else {
                ColorFormat::Rgb888
            },
            ..LitColor::default()
        };
        color.resync(Source::Rgba32);
        color
    }

    /// Create an opaque [LitColor] from a 24-bit `0x00RRGGBB` word. Alpha is unused.
    pub fn from_rgb888(rgb888: u32) -> Self {
        Self::from_rgba32(rgba32_from_rgb888(rgb888 & 0x00FF_FFFF, 0xFF), false)
    }

    /// Create a [LitColor] from an RGB565 word. Alpha is unused and set to 0xFF.
    pub fn from_rgb565(rgb565: u16) -> Self {
        let mut color = LitColor {
            rgb565,
            use_alpha: false,
            format: ColorFormat::Rgb565,
            ..LitColor::default()
        };
        color.resync(Source::Rgb565);
        color
    }

    /// Create a [LitColor] from an RGB5A3 word. Bit 15 of the word determines whether alpha
    /// is meaningful.
    pub fn from_rgb5a3(rgb5a3: u16) -> Self {
        let mut color = LitColor {
            rgb5a3,
            format: ColorFormat::Rgb5A3,
            ..LitColor::default()
        };
        color.resync(Source::Rgb5A3);
        color
    }

    /// Create a [LitColor] from a 16-bit packed word in the specified format.
    /// # Returns:
    /// None if `format` is not one of the 16-bit formats (RGB565 or RGB5A3).
    pub fn from_packed16(word: u16, format: ColorFormat) -> Option<Self> {
        if !format.is_packed16() {
            return None;
        }
        match format {
            ColorFormat::Rgb5A3 => Some(Self::from_rgb5a3(word)),
            _ => Some(Self::from_rgb565(word)),
        }
    }

    /// Create a [LitColor] from integer channels in the range 0 to 255.
    /// Out of range channels are clamped, and [LitColor::source_was_valid] reports false.
    /// `use_alpha` controls whether alpha is meaningful, and therefore whether the RGB5A3 word
    /// is packed in its alpha layout. Alpha is not validated when it is unused.
    pub fn from_ints(channels: [i32; 4], use_alpha: bool) -> Self {
        let source_valid = ints_valid(&channels, use_alpha);
        if !source_valid {
            log::debug!("LitColor::from_ints(): clamping out of range channels {:?}", channels);
        }
        let format = if use_alpha {
            ColorFormat::Rgba8888
        }
        else {
            ColorFormat::Rgb888
        };
        let mut color = Self::from_valid_ints(channels.map(clamp_int), use_alpha, format);
        color.source_valid = source_valid;
        color
    }

    /// Create a [LitColor] from float channels in the range 0.0 to 1.0.
    /// Out of range channels are clamped, and [LitColor::source_was_valid] reports false.
    pub fn from_floats(channels: [f32; 4], use_alpha: bool) -> Self {
        let source_valid = floats_valid(&channels, use_alpha);
        if !source_valid {
            log::debug!("LitColor::from_floats(): clamping out of range channels {:?}", channels);
        }
        let mut color = LitColor {
            floats: channels.map(clamp_float),
            use_alpha,
            format: if use_alpha {
                ColorFormat::RgbaF
            }
            else {
                ColorFormat::RgbF
            },
            ..LitColor::default()
        };
        color.resync(Source::Floats);
        color.source_valid = source_valid;
        color
    }

    /// Create a [LitColor] from a buffer of integer channels read positionally as R, G, B and,
    /// if `contains_alpha` is set, A. Without alpha the color is opaque and alpha is unused.
    /// Elements beyond those read are ignored.
    pub fn from_int_buffer(buffer: &[i32], contains_alpha: bool) -> Result<Self, LitColorError> {
        let channels = read_channels(buffer, contains_alpha, 0xFF)?;
        Ok(Self::from_ints(channels, contains_alpha))
    }

    /// Create a [LitColor] from a buffer of float channels read positionally as R, G, B and,
    /// if `contains_alpha` is set, A. Without alpha the color is opaque and alpha is unused.
    /// Elements beyond those read are ignored.
    pub fn from_float_buffer(buffer: &[f32], contains_alpha: bool) -> Result<Self, LitColorError> {
        let channels = read_channels(buffer, contains_alpha, 1.0)?;
        Ok(Self::from_floats(channels, contains_alpha))
    }

    /// Construct from integer channels that are already known to be in range.
    pub(crate) fn from_valid_ints(ints: [u8; 4], use_alpha: bool, format: ColorFormat) -> Self {
        let mut color = LitColor {
            ints,
            use_alpha,
            format,
            ..LitColor::default()
        };
        color.resync(Source::Ints);
        color
    }

    /// Construct from float channels without clamping them. The integer channels are derived by
    /// truncation and saturate at 0 and 255 for out of range floats.
    pub(crate) fn from_unclamped_floats(floats: [f32; 4], use_alpha: bool, format: ColorFormat) -> Self {
        let mut color = LitColor {
            floats,
            use_alpha,
            format,
            ..LitColor::default()
        };
        color.resync(Source::Floats);
        color.source_valid = floats_valid(&floats, use_alpha);
        color
    }

    pub(crate) fn set_source_valid(&mut self, source_valid: bool) {
        self.source_valid = source_valid;
    }

    /// Regenerate every representation from `source`.
    fn resync(&mut self, source: Source) {
        match source {
            Source::Ints => {
                self.floats = floats_from_ints(&self.ints);
                self.pack_words();
            }
            Source::Floats => {
                self.ints = ints_from_floats(&self.floats);
                self.pack_words();
            }
            Source::Rgba32 => {
                self.ints = int_from_rgba32(self.rgba32);
                self.floats = floats_from_ints(&self.ints);
                self.pack_words();
            }
            Source::Rgb565 => {
                let [r, g, b] = int_from_rgb565(self.rgb565);
                self.ints = [r, g, b, 0xFF];
                self.floats = floats_from_ints(&self.ints);
                self.pack_words();
            }
            Source::Rgb5A3 => {
                let (ints, has_alpha) = int_from_rgb5a3(self.rgb5a3);
                self.ints = ints;
                self.use_alpha = has_alpha;
                self.floats = floats_from_ints(&self.ints);
                self.pack_words();
            }
        }
    }

    /// Regenerate the packed words from the integer channels.
    fn pack_words(&mut self) {
        let [r, g, b, a] = self.ints;
        self.rgba32 = rgba32_from_int(r, g, b, a);
        self.rgb565 = rgb565_from_int(r, g, b);
        self.rgb5a3 = rgb5a3_from_int(r, g, b, a, self.use_alpha);
    }

    /// Replace this color's value with a 32-bit `0xRRGGBBAA` word.
    /// Alpha usage and the format tag are left unchanged.
    pub fn assign_rgba32(&mut self, rgba32: u32) {
        self.rgba32 = rgba32;
        self.source_valid = true;
        self.resync(Source::Rgba32);
    }

    /// Replace this color's value with a buffer of integer channels. Alpha is read from the
    /// buffer only if alpha is currently meaningful, otherwise it becomes 0xFF.
    /// On error the color is left unchanged.
    pub fn assign_int_buffer(&mut self, buffer: &[i32]) -> Result<(), LitColorError> {
        let channels = read_channels(buffer, self.use_alpha, 0xFF)?;
        self.source_valid = ints_valid(&channels, self.use_alpha);
        self.ints = channels.map(clamp_int);
        self.resync(Source::Ints);
        Ok(())
    }

    /// Replace this color's value with a buffer of float channels. Alpha is read from the
    /// buffer only if alpha is currently meaningful, otherwise it becomes 1.0.
    /// On error the color is left unchanged.
    pub fn assign_float_buffer(&mut self, buffer: &[f32]) -> Result<(), LitColorError> {
        let channels = read_channels(buffer, self.use_alpha, 1.0)?;
        self.source_valid = floats_valid(&channels, self.use_alpha);
        self.floats = channels.map(clamp_float);
        self.resync(Source::Floats);
        Ok(())
    }

    /// Return the integer value of a single channel.
    #[inline]
    pub fn channel_int(&self, channel: Channel) -> u8 {
        self.ints[usize::from(channel)]
    }

    /// Return the float value of a single channel.
    #[inline]
    pub fn channel_float(&self, channel: Channel) -> f32 {
        self.floats[usize::from(channel)]
    }

    /// Set a single channel from an integer value. The value is clamped to 0..=255, the
    /// channel's float value is recomputed and all packed words are regenerated.
    /// [LitColor::source_was_valid] reflects whether `value` was in range.
    pub fn set_channel_int(&mut self, channel: Channel, value: i32) {
        self.source_valid = int_in_range(value);
        if !self.source_valid {
            log::debug!("LitColor::set_channel_int(): clamping {} value {}", channel, value);
        }
        let idx = usize::from(channel);
        self.ints[idx] = clamp_int(value);
        self.floats[idx] = float_from_int(self.ints[idx]);
        self.pack_words();
    }

    /// Set a single channel from a float value. The value is clamped to 0.0..=1.0, the
    /// channel's integer value is recomputed and all packed words are regenerated.
    /// [LitColor::source_was_valid] reflects whether `value` was in range.
    pub fn set_channel_float(&mut self, channel: Channel, value: f32) {
        self.source_valid = float_in_range(value);
        if !self.source_valid {
            log::debug!("LitColor::set_channel_float(): clamping {} value {}", channel, value);
        }
        let idx = usize::from(channel);
        self.floats[idx] = clamp_float(value);
        self.ints[idx] = int_from_float(self.floats[idx]);
        self.pack_words();
    }

    /// Return all four integer channels in R, G, B, A order.
    #[inline]
    pub fn ints(&self) -> [u8; 4] {
        self.ints
    }

    /// Return all four float channels in R, G, B, A order.
    #[inline]
    pub fn floats(&self) -> [f32; 4] {
        self.floats
    }

    /// Return the 32-bit `0xRRGGBBAA` word.
    #[inline]
    pub fn rgba32(&self) -> u32 {
        self.rgba32
    }

    /// Return the 24-bit `0x00RRGGBB` word.
    #[inline]
    pub fn rgb888(&self) -> u32 {
        rgb888_from_rgba32(self.rgba32)
    }

    #[inline]
    pub fn rgb565(&self) -> u16 {
        self.rgb565
    }

    #[inline]
    pub fn rgb5a3(&self) -> u16 {
        self.rgb5a3
    }

    /// Return whether alpha participates in comparisons and in the RGB5A3 layout.
    #[inline]
    pub fn uses_alpha(&self) -> bool {
        self.use_alpha
    }

    /// Set whether alpha is meaningful. This does not repack the RGB5A3 word; it is
    /// regenerated by the next setter or assignment.
    pub fn set_use_alpha(&mut self, use_alpha: bool) {
        self.use_alpha = use_alpha;
    }

    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Select the format tag. Alpha usage is updated from the format: RGBA8888 and RGBAF
    /// enable it; RGB888, RGBF and RGB565 disable it; RGB5A3 takes `rgb5a3_alpha`.
    /// The packed words are not regenerated.
    pub fn select_format(&mut self, format: ColorFormat, rgb5a3_alpha: bool) {
        self.format = format;
        self.use_alpha = format.alpha_meaningful(rgb5a3_alpha);
    }

    /// Re-express this color through the representation of `format`, quantizing it to that
    /// representation's precision. Converting to RGB5A3 uses the alpha layout if `rgb5a3_alpha`
    /// is set.
    pub fn convert_to(&self, format: ColorFormat, rgb5a3_alpha: bool) -> LitColor {
        let [r, g, b, a] = self.ints;
        match format {
            ColorFormat::Rgb888 => LitColor::from_rgb888(self.rgb888()),
            ColorFormat::Rgba8888 => LitColor::from_rgba32(self.rgba32, true),
            ColorFormat::RgbF => LitColor::from_floats(self.floats, false),
            ColorFormat::RgbaF => LitColor::from_floats(self.floats, true),
            ColorFormat::Rgb565 => LitColor::from_rgb565(self.rgb565),
            ColorFormat::Rgb5A3 => LitColor::from_rgb5a3(rgb5a3_from_int(r, g, b, a, rgb5a3_alpha)),
        }
    }

    /// Return true if every channel supplied by the most recent construction or assignment was
    /// within range before clamping.
    #[inline]
    pub fn source_was_valid(&self) -> bool {
        self.source_valid
    }
}

/// Read 3 or 4 channels from the front of `buffer`, substituting `opaque` for a missing alpha.
fn read_channels<T: Copy>(buffer: &[T], contains_alpha: bool, opaque: T) -> Result<[T; 4], LitColorError> {
    let expected = if contains_alpha { 4 } else { 3 };
    if buffer.len() < expected {
        return Err(LitColorError::BufferLength {
            expected,
            found: buffer.len(),
        });
    }
    let alpha = if contains_alpha { buffer[3] } else { opaque };
    Ok([buffer[0], buffer[1], buffer[2], alpha])
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assert_synchronized(color: &LitColor) {
        let [r, g, b, a] = color.ints();
        assert_eq!(color.rgba32(), rgba32_from_int(r, g, b, a));
        assert_eq!(color.rgb565(), rgb565_from_int(r, g, b));
        assert_eq!(color.rgb5a3(), rgb5a3_from_int(r, g, b, a, color.uses_alpha()));
    }

    #[test]
    fn test_default() {
        let color = LitColor::default();
        assert_eq!(color.ints(), [0, 0, 0, 0]);
        assert_eq!(color.floats(), [0.0; 4]);
        assert_eq!(color.rgba32(), 0);
        assert!(color.source_was_valid());
        assert_synchronized(&color);
    }

    #[test]
    fn test_from_rgba32() {
        let color = LitColor::from_rgba32(0xFF80_4020, true);
        assert_eq!(color.ints(), [0xFF, 0x80, 0x40, 0x20]);
        assert_eq!(color.format(), ColorFormat::Rgba8888);
        assert_eq!(color.channel_float(Channel::Red), 1.0);
        assert_synchronized(&color);

        let color = LitColor::from_rgba32(0xFF80_4020, false);
        assert_eq!(color.format(), ColorFormat::Rgb888);
        assert!(!color.uses_alpha());
        assert_synchronized(&color);
    }

    #[test]
    fn test_from_rgb565() {
        let color = LitColor::from_rgb565(0xF800);
        assert_eq!(color.ints(), [255, 0, 0, 255]);
        assert_eq!(color.rgb565(), 0xF800);
        assert!(!color.uses_alpha());
        assert_eq!(color.format(), ColorFormat::Rgb565);
        assert_synchronized(&color);
    }

    #[test]
    fn test_from_rgb5a3_sets_alpha_usage() {
        let opaque = LitColor::from_rgb5a3(0xF800);
        assert!(!opaque.uses_alpha());
        assert_eq!(opaque.rgb5a3(), 0xF800);

        let translucent = LitColor::from_rgb5a3(0x3F00);
        assert!(translucent.uses_alpha());
        assert_eq!(translucent.rgb5a3(), 0x3F00);
        assert_eq!(translucent.ints(), [255, 0, 0, 0x6B]);
        assert_synchronized(&translucent);
    }

    #[test]
    fn test_from_packed16() {
        assert!(LitColor::from_packed16(0x1234, ColorFormat::Rgb565).is_some());
        assert!(LitColor::from_packed16(0x1234, ColorFormat::Rgb5A3).is_some());
        assert!(LitColor::from_packed16(0x1234, ColorFormat::RgbF).is_none());
    }

    #[test]
    fn test_from_ints_clamps() {
        let color = LitColor::from_ints([300, -5, 128, 255], true);
        assert_eq!(color.ints(), [255, 0, 128, 255]);
        assert!(!color.source_was_valid());
        assert_synchronized(&color);

        let color = LitColor::from_ints([1, 2, 3, 4], true);
        assert!(color.source_was_valid());
    }

    #[test]
    fn test_from_floats_truncates() {
        let color = LitColor::from_floats([0.5, 1.0, 0.0, 1.0], false);
        assert_eq!(color.ints(), [127, 255, 0, 255]);
        assert_eq!(color.channel_float(Channel::Red), 0.5);
        assert_eq!(color.format(), ColorFormat::RgbF);
        assert!(color.source_was_valid());

        let color = LitColor::from_floats([1.5, 0.0, 0.0, 1.0], true);
        assert_eq!(color.channel_float(Channel::Red), 1.0);
        assert!(!color.source_was_valid());
    }

    #[test]
    fn test_buffers() {
        let color = LitColor::from_int_buffer(&[10, 20, 30], false).unwrap();
        assert_eq!(color.ints(), [10, 20, 30, 255]);
        assert!(!color.uses_alpha());

        let color = LitColor::from_float_buffer(&[0.0, 0.0, 1.0, 0.0, 9.0], true).unwrap();
        assert_eq!(color.ints(), [0, 0, 255, 0]);
        assert!(color.uses_alpha());

        assert_eq!(
            LitColor::from_int_buffer(&[1, 2, 3], true),
            Err(LitColorError::BufferLength { expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_setters_resynchronize() {
        let mut color = LitColor::rgba(0, 0, 0, 255);
        for channel in Channel::iter() {
            color.set_channel_int(channel, 0x80);
            assert_eq!(color.channel_int(channel), 0x80);
            assert_eq!(color.channel_float(channel), 0x80 as f32 / 255.0);
            assert_synchronized(&color);
        }
        assert_eq!(color.rgba32(), 0x8080_8080);

        color.set_channel_float(Channel::Green, 2.0);
        assert_eq!(color.channel_int(Channel::Green), 255);
        assert_eq!(color.channel_float(Channel::Green), 1.0);
        assert!(!color.source_was_valid());
        assert_synchronized(&color);

        color.set_channel_int(Channel::Blue, 7);
        assert!(color.source_was_valid());
    }

    #[test]
    fn test_select_format_does_not_repack() {
        let mut color = LitColor::rgb(255, 0, 0);
        let rgb5a3 = color.rgb5a3();
        color.select_format(ColorFormat::RgbaF, false);
        assert!(color.uses_alpha());
        assert_eq!(color.rgb5a3(), rgb5a3);

        color.select_format(ColorFormat::Rgb5A3, false);
        assert!(!color.uses_alpha());
        color.select_format(ColorFormat::Rgb5A3, true);
        assert!(color.uses_alpha());

        // setters regenerate the 16-bit word with the new alpha usage
        color.set_channel_int(Channel::Red, 255);
        assert_eq!(color.rgb5a3(), 0x7F00);
    }

    #[test]
    fn test_convert_to() {
        let color = LitColor::rgba(0x87, 0x43, 0x21, 0x99);
        let rgb565 = color.convert_to(ColorFormat::Rgb565, false);
        assert_eq!(rgb565.format(), ColorFormat::Rgb565);
        assert_eq!(rgb565.ints(), [0x84, 0x41, 0x21, 0xFF]);

        let rgb5a3 = color.convert_to(ColorFormat::Rgb5A3, true);
        assert!(rgb5a3.uses_alpha());
        assert_eq!(rgb5a3.ints(), [0x88, 0x44, 0x22, 0x94]);

        let rgb888 = color.convert_to(ColorFormat::Rgb888, false);
        assert_eq!(rgb888.rgba32(), 0x8743_21FF);
        assert!(!rgb888.uses_alpha());
    }

    #[test]
    fn test_assignment() {
        let mut color = LitColor::rgb(1, 2, 3);
        color.assign_rgba32(0x1020_3040);
        assert_eq!(color.ints(), [0x10, 0x20, 0x30, 0x40]);
        assert!(!color.uses_alpha());
        assert_synchronized(&color);

        assert!(color.assign_int_buffer(&[1, 2]).is_err());
        assert_eq!(color.rgba32(), 0x1020_3040);

        color.assign_int_buffer(&[1, 2, 300]).unwrap();
        assert_eq!(color.ints(), [1, 2, 255, 255]);
        assert!(!color.source_was_valid());
    }
}
