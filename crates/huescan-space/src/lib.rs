// SPDX-License-Identifier: MIT
//
// huescan-space: the color space math behind huescan.
//
// Every function in this crate is pure, and every conversion can be
// called on its own given only its input record. The extraction crate
// builds on three entry points:
//
//   Rgb8      8-bit sRGB with optional alpha, range-checked at construction
//   Srgb      gamma-encoded RGB in [0, 1], the hub every other space hangs off
//   Oklch     the perceptual space that keeps its own canonical form
//
// Conversion graph:
//
//   Hsl ──┐                     ┌─ Xyz ↔ Lab ↔ Lch
//   Hwb ──┼─ Srgb ↔ LinearRgb ──┤
//   Rgb8 ─┘                     └─ Oklab ↔ Oklch
//
// Inverse transforms that land back in RGB clamp to [0, 1]. Matrix round
// trips overshoot by a few ulps and out-of-gamut LAB/OKLCH values overshoot
// by a lot; both are expected and neither is an error.

// Single-character variable names (r, g, b, l, c, h, a, s, w) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod math;
pub mod rgb;
pub mod space;

pub use error::RangeError;
pub use math::normalize_hue;
pub use rgb::Rgb8;
pub use space::{Hsl, Hwb, Lab, Lch, LinearRgb, Oklab, Oklch, Srgb, Xyz};
