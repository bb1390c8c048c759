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

    crates/litcolor_tool/src/info/mod.rs

    Implements the 'info' command, printing every representation of a color.
*/
use crate::{args::GlobalOptions, parse_literal};
use anyhow::Error;
use litcolor::prelude::*;
use strum::IntoEnumIterator;

pub mod args;

pub(crate) fn run(global: &GlobalOptions, params: &args::InfoParams) -> Result<(), Error> {
    let color = parse_literal(&params.literal)?;
    log::debug!("info::run(): parsed '{}' as {:?}", params.literal, color);

    if !color.source_was_valid() {
        global.loud(|| eprintln!("Warning: '{}' contained out of range channels, which were clamped", params.literal));
    }

    if params.float_only {
        for channel in Channel::iter() {
            println!("{:<6} {}", channel.to_string(), color.channel_float(channel));
        }
        return Ok(());
    }

    println!("Color literal info:");
    println!("{}", "-".repeat(79));
    println!("Literal:    {}", color);
    println!("Format:     {}", color.format());
    println!("Uses alpha: {}", color.uses_alpha());
    println!("RGBA8888:   #{:08X}", color.rgba32());
    println!("RGB888:     #{:06X}", color.rgb888());
    println!("RGB565:     #{:04X}", color.rgb565());
    println!("RGB5A3:     @{:04X}", color.rgb5a3());
    println!();
    println!("Channels:");
    println!("{}", "-".repeat(79));
    for channel in Channel::iter() {
        let int = color.channel_int(channel);
        println!("{:<6} {:02X} - {:>3} - {}", channel.to_string(), int, int, color.channel_float(channel));
    }

    Ok(())
}
