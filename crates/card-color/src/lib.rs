// SPDX-License-Identifier: MIT
//
// card-color — color values for cardkit.
//
// The leaf of the workspace: an 8-bit sRGB color value with strict hex
// parsing, the `"r, g, b"` triplet notation used by the palette table, and
// the WCAG 2.1 channel linearization that the contrast calculator builds on.
// No color-space conversions beyond that; the palette engine only ever
// reasons about luminance.

pub mod color;

pub use color::{ColorError, Rgb, srgb_to_linear};
