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

    crates/litcolor_tool/src/convert/mod.rs

    Implements the 'convert' command.
*/
use crate::{args::GlobalOptions, parse_literal};
use anyhow::Error;
use litcolor::ColorFormat;

pub mod args;

pub(crate) fn run(global: &GlobalOptions, params: &args::ConvertParams) -> Result<(), Error> {
    let color = parse_literal(&params.literal)?;

    if params.alpha && params.to != ColorFormat::Rgb5A3 {
        global.loud(|| eprintln!("Warning: --alpha only applies to RGB5A3 output, ignoring"));
    }

    let converted = color.convert_to(params.to, params.alpha);
    log::debug!(
        "convert::run(): {} ({}) -> {} ({})",
        color,
        color.format(),
        converted,
        converted.format()
    );

    global.loud(|| println!("{} -> {}", params.literal, params.to));
    println!("{}", converted);

    Ok(())
}
