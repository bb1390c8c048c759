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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use litcolor::prelude::*;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an opaque color with alpha unused from float channels.
pub fn rgbf(r: f32, g: f32, b: f32) -> LitColor {
    LitColor::from_floats([r, g, b, 1.0], false)
}

/// Assert that every packed representation of `color` agrees with its integer channels.
pub fn assert_synchronized(color: &LitColor) {
    use litcolor::codec::{rgb565_from_int, rgb5a3_from_int, rgba32_from_int};

    let [r, g, b, a] = color.ints();
    assert_eq!(color.rgba32(), rgba32_from_int(r, g, b, a), "rgba32 out of sync");
    assert_eq!(color.rgb565(), rgb565_from_int(r, g, b), "rgb565 out of sync");
    assert_eq!(
        color.rgb5a3(),
        rgb5a3_from_int(r, g, b, a, color.uses_alpha()),
        "rgb5a3 out of sync"
    );
    for (i, &int) in color.ints().iter().enumerate() {
        if color.format().is_float() {
            assert_eq!(litcolor::codec::int_from_float(color.floats()[i]), int, "int/float out of sync");
        }
        else {
            assert_eq!(litcolor::codec::float_from_int(int), color.floats()[i], "float/int out of sync");
        }
    }
}
