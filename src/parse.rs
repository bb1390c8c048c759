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

    src/parse.rs

    Parsing of textual color literals, and formatting of a LitColor as a literal.
*/

//! Color literals are a single token in one of the following forms:
//! * an empty string, for the default color.
//! * `#` followed by hex digits. Exactly 6 digits are 24-bit RGB with alpha unused;
//!   1 to 4 digits are a 16-bit RGB565 word; any other count is a 32-bit RGBA word.
//! * `@` followed by 1 to 4 hex digits, a 16-bit RGB5A3 word.
//! * 3 or more comma-separated float channels: `r,g,b` with alpha unused, or `r,g,b,a`.
//!   Channels after alpha are ignored.

use crate::{ColorFormat, LitColor, LitColorError};
use std::{
    fmt,
    fmt::{Display, Formatter},
    str::FromStr,
};

fn parse_error(msg: impl Into<String>) -> LitColorError {
    LitColorError::ParseError(msg.into())
}

/// Validate that `digits` is a non-empty string of hex digits.
fn check_hex<'a>(digits: &'a str, expression: &str) -> Result<&'a str, LitColorError> {
    if digits.is_empty() {
        return Err(parse_error(format!("'{}' has no hex digits", expression)));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(parse_error(format!("'{}' contains non-hex characters", expression)));
    }
    Ok(digits)
}

fn parse_hash_hex(digits: &str, expression: &str) -> Result<LitColor, LitColorError> {
    let digits = check_hex(digits, expression)?;
    match digits.len() {
        6 => {
            log::trace!("parse_hash_hex(): '{}' as RGB888", expression);
            let rgb = u32::from_str_radix(digits, 16).map_err(|e| parse_error(format!("'{}': {}", expression, e)))?;
            Ok(LitColor::from_rgb888(rgb))
        }
        1..=4 => {
            log::trace!("parse_hash_hex(): '{}' as RGB565", expression);
            let word = u16::from_str_radix(digits, 16).map_err(|e| parse_error(format!("'{}': {}", expression, e)))?;
            Ok(LitColor::from_rgb565(word))
        }
        _ => {
            log::trace!("parse_hash_hex(): '{}' as RGBA8888", expression);
            let word = u32::from_str_radix(digits, 16)
                .map_err(|_| parse_error(format!("'{}' does not fit in a 32-bit RGBA word", expression)))?;
            Ok(LitColor::from_rgba32(word, true))
        }
    }
}

fn parse_at_hex(digits: &str, expression: &str) -> Result<LitColor, LitColorError> {
    let digits = check_hex(digits, expression)?;
    log::trace!("parse_at_hex(): '{}' as RGB5A3", expression);
    let word = u16::from_str_radix(digits, 16)
        .map_err(|_| parse_error(format!("'{}' does not fit in a 16-bit RGB5A3 word", expression)))?;
    Ok(LitColor::from_rgb5a3(word))
}

fn parse_float_list(expression: &str) -> Result<LitColor, LitColorError> {
    let channels = expression
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f32>()
                .map_err(|_| parse_error(format!("'{}' is not a valid channel value in '{}'", token, expression)))
        })
        .collect::<Result<Vec<f32>, LitColorError>>()?;

    match channels[..] {
        [r, g, b] => {
            log::trace!("parse_float_list(): '{}' as RGBF", expression);
            Ok(LitColor::from_floats([r, g, b, 1.0], false))
        }
        [r, g, b, a, ref extra @ ..] => {
            log::trace!("parse_float_list(): '{}' as RGBAF", expression);
            if !extra.is_empty() {
                log::debug!("parse_float_list(): ignoring {} channels after alpha in '{}'", extra.len(), expression);
            }
            Ok(LitColor::from_floats([r, g, b, a], true))
        }
        _ => Err(parse_error(format!(
            "'{}' has {} channels; expected at least 3",
            expression,
            channels.len()
        ))),
    }
}

impl FromStr for LitColor {
    type Err = LitColorError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        if expression.is_empty() {
            return Ok(LitColor::default());
        }
        if let Some(digits) = expression.strip_prefix('#') {
            return parse_hash_hex(digits, expression);
        }
        if let Some(digits) = expression.strip_prefix('@') {
            return parse_at_hex(digits, expression);
        }
        parse_float_list(expression)
    }
}

/// Format a [LitColor] as the literal matching its format tag. Hex literals parse back to the
/// same value.
impl Display for LitColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.floats();
        match self.format() {
            ColorFormat::Rgb888 => write!(f, "#{:06X}", self.rgb888()),
            ColorFormat::Rgba8888 => write!(f, "#{:08X}", self.rgba32()),
            ColorFormat::Rgb565 => write!(f, "#{:04X}", self.rgb565()),
            ColorFormat::Rgb5A3 => write!(f, "@{:04X}", self.rgb5a3()),
            ColorFormat::RgbF => write!(f, "{},{},{}", r, g, b),
            ColorFormat::RgbaF => write!(f, "{},{},{},{}", r, g, b, a),
        }
    }
}

impl From<LitColor> for String {
    fn from(color: LitColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for LitColor {
    type Error = LitColorError;

    fn try_from(expression: String) -> Result<Self, Self::Error> {
        expression.parse()
    }
}

impl TryFrom<&str> for LitColor {
    type Error = LitColorError;

    fn try_from(expression: &str) -> Result<Self, Self::Error> {
        expression.parse()
    }
}
