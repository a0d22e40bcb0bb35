// SPDX-License-Identifier: MIT
//
// Scalar and matrix building blocks shared by the value records in
// `space.rs`. Constants for the sRGB/XYZ matrices are the standard
// D65 primaries; the OKLAB matrices are Björn Ottosson's.
//
// Reference: https://bottosson.github.io/posts/oklab/

/// A 3×3 row-major transform matrix.
pub type Matrix = [[f64; 3]; 3];

/// Multiply a 3×3 matrix with a 3-element column vector.
#[inline]
#[must_use]
pub fn multiply(matrix: &Matrix, vector: [f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// ─── sRGB Transfer Function ─────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear-light component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055f64.mul_add(v.powf(1.0 / 2.4), -0.055)
    }
}

// ─── Matrices ───────────────────────────────────────────────────────────────

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const LINEAR_SRGB_TO_XYZ: Matrix = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const XYZ_TO_LINEAR_SRGB: Matrix = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const LINEAR_SRGB_TO_LMS: Matrix = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const LMS_TO_OKLAB: Matrix = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const OKLAB_TO_LMS: Matrix = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const LMS_TO_LINEAR_SRGB: Matrix = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

// ─── CIE LAB Companding ─────────────────────────────────────────────────────

/// D65 reference white.
pub const D65_WHITE: [f64; 3] = [0.950_47, 1.0, 1.088_83];

const DELTA: f64 = 6.0 / 29.0;

/// The CIE `f(t)` used on the way from XYZ to LAB.
#[inline]
#[must_use]
pub fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse of [`lab_f`].
#[inline]
#[must_use]
pub fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

// ─── Hue ────────────────────────────────────────────────────────────────────

/// CIE LAB chroma below which a color counts as gray.
///
/// The D65 white point and the XYZ matrix disagree in the fifth digit, so
/// 8-bit grays land up to 0.015 away from the neutral axis. The closest
/// non-gray 8-bit color sits above 0.27.
pub const LAB_ACHROMATIC_EPSILON: f64 = 0.05;

/// OKLAB chroma below which a color counts as gray.
///
/// 8-bit grays stay under 1e-7; the closest non-gray 8-bit color sits
/// above 1e-3.
pub const OKLAB_ACHROMATIC_EPSILON: f64 = 1e-4;

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // A tiny negative remainder rounds up to exactly 360 after the add.
    if h >= 360.0 { 0.0 } else { h }
}

/// Cartesian `(a, b)` to polar `(chroma, hue°)`.
///
/// A chroma under `epsilon` is treated as gray: both chroma and hue come
/// back as 0, so rounding noise never shows up as a hue.
#[inline]
#[must_use]
pub fn to_polar(a: f64, b: f64, epsilon: f64) -> (f64, f64) {
    let c = a.hypot(b);
    if c < epsilon {
        (0.0, 0.0)
    } else {
        (c, normalize_hue(b.atan2(a).to_degrees()))
    }
}

/// Polar `(chroma, hue°)` to Cartesian `(a, b)`.
#[inline]
#[must_use]
pub fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// The max-channel hue formula shared by HSL, HWB, and the swatch orderer.
///
/// Inputs are gamma-encoded channels in [0, 1]. Grays have hue 0.
#[must_use]
pub fn rgb_hue(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= 0.0 {
        return 0.0;
    }

    #[allow(clippy::float_cmp)]
    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    normalize_hue(sector * 60.0)
}
