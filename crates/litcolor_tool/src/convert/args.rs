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

    crates/litcolor_tool/src/convert/args.rs
*/
use crate::args::*;
use bpaf::{construct, long, Parser};
use litcolor::ColorFormat;

#[derive(Clone, Debug)]
pub(crate) struct ConvertParams {
    pub(crate) to: ColorFormat,
    pub(crate) alpha: bool,
    pub(crate) literal: String,
}

fn to_parser() -> impl Parser<ColorFormat> {
    long("to")
        .argument::<ColorFormat>("FORMAT")
        .help("Target format: RGB888, RGBA8888, RGBF, RGBAF, RGB565 or RGB5A3")
}

fn alpha_parser() -> impl Parser<bool> {
    long("alpha")
        .switch()
        .help("Encode RGB5A3 in its alpha (3-4-4-4) mode")
}

pub(crate) fn convert_parser() -> impl Parser<ConvertParams> {
    let to = to_parser();
    let alpha = alpha_parser();
    let literal = literal_parser();

    construct!(ConvertParams { to, alpha, literal })
}
