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
*/

//! # litcolor
//!
//! litcolor provides [LitColor], a single logical color that is simultaneously available as
//! 8-bit integer channels, normalized float channels, a packed 32-bit RGBA word, a packed
//! 16-bit RGB565 word and a packed 16-bit dual-mode RGB5A3 word.
//!
//! Every constructor and setter runs the [codec] to regenerate all representations from the
//! one that was supplied, so a [LitColor] is never observed in a partially synchronized state.
//!
//! Colors may be parsed from a textual literal:
//! * `#RRGGBB` - 24-bit RGB, alpha unused
//! * `#X` to `#XXXX` - a 16-bit RGB565 word
//! * `#RRGGBBAA` - 32-bit RGBA
//! * `@XXXX` - a 16-bit RGB5A3 word
//! * `r,g,b` or `r,g,b,a` - float channels
//!
//! ```
//! use litcolor::prelude::*;
//!
//! let color: LitColor = "#FF0000".parse().unwrap();
//! assert_eq!(color.channel_int(Channel::Red), 255);
//! assert_eq!(color.rgb565(), 0xF800);
//! assert!(!color.uses_alpha());
//! ```

pub mod codec;
mod color;
mod ops;
mod parse;
pub mod prelude;
pub mod types;

use thiserror::Error;

pub use crate::color::LitColor;
pub use crate::ops::ColorOperand;
pub use crate::types::{Channel, ColorFormat};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LitColorError {
    #[error("Failed to parse color: {0}")]
    ParseError(String),
    #[error("Division by zero in the {0} channel")]
    DivideByZero(Channel),
    #[error("Channel buffer too short: expected {expected} values, found {found}")]
    BufferLength { expected: usize, found: usize },
}
