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

    src/types/format.rs
*/
use crate::LitColorError;
use std::{
    fmt,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// A hint describing which representation last defined a [LitColor](crate::LitColor).
///
/// The format tag is informational. It selects how a color is written back out as a literal,
/// and implies whether alpha is meaningful, but it never changes how the codec packs a value.
#[repr(usize)]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    #[doc = "24-bit RGB, 8 bits per channel, no alpha."]
    Rgb888 = 0,
    #[default]
    #[doc = "32-bit RGBA, 8 bits per channel."]
    Rgba8888 = 1,
    #[doc = "Float RGB channels in the range 0.0 to 1.0, no alpha."]
    RgbF = 2,
    #[doc = "Float RGBA channels in the range 0.0 to 1.0."]
    RgbaF = 3,
    #[doc = "16-bit 5-6-5 RGB, no alpha."]
    Rgb565 = 4,
    #[doc = "16-bit dual-mode format: 5-5-5 RGB, or 3-bit alpha with 4-4-4 RGB."]
    Rgb5A3 = 5,
}

impl ColorFormat {
    /// Return whether alpha is meaningful for this format.
    /// RGB5A3 carries alpha only in one of its two layouts, so the caller supplies the answer
    /// for that format in `rgb5a3_alpha`.
    pub fn alpha_meaningful(&self, rgb5a3_alpha: bool) -> bool {
        use ColorFormat::*;
        match self {
            Rgba8888 | RgbaF => true,
            Rgb888 | RgbF | Rgb565 => false,
            Rgb5A3 => rgb5a3_alpha,
        }
    }

    /// Return true if this format is expressed as float channels.
    pub fn is_float(&self) -> bool {
        matches!(self, ColorFormat::RgbF | ColorFormat::RgbaF)
    }

    /// Return true if this format is one of the 16-bit packed formats.
    pub fn is_packed16(&self) -> bool {
        matches!(self, ColorFormat::Rgb565 | ColorFormat::Rgb5A3)
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use ColorFormat::*;
        match self {
            Rgb888 => write!(f, "RGB888"),
            Rgba8888 => write!(f, "RGBA8888"),
            RgbF => write!(f, "RGBF"),
            RgbaF => write!(f, "RGBAF"),
            Rgb565 => write!(f, "RGB565"),
            Rgb5A3 => write!(f, "RGB5A3"),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = LitColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        use ColorFormat::*;
        match input.to_lowercase().as_str() {
            "rgb888" => Ok(Rgb888),
            "rgba8888" => Ok(Rgba8888),
            "rgbf" => Ok(RgbF),
            "rgbaf" => Ok(RgbaF),
            "rgb565" => Ok(Rgb565),
            "rgb5a3" => Ok(Rgb5A3),
            _ => Err(LitColorError::ParseError(format!(
                "unknown color format '{}'; expected one of rgb888, rgba8888, rgbf, rgbaf, rgb565, rgb5a3",
                input
            ))),
        }
    }
}
