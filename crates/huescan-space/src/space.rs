// SPDX-License-Identifier: MIT
//
// Value records for every color space huescan speaks, and the pure
// transforms between them.
//
// All records are transient: they are built at the start of a conversion
// chain and dropped at its end. Component domains:
//
//   Srgb, LinearRgb   r, g, b in [0, 1] (may overshoot before clamping)
//   Xyz               D65, Y = 1 for white
//   Lab               L in [0, 100], a/b unbounded
//   Lch               L in [0, 100], C >= 0, H in [0, 360)
//   Oklab             L in [0, 1], a/b unbounded
//   Oklch             L in [0, 1], C >= 0, H in [0, 360)
//   Hsl               H in [0, 360), s/l in [0, 1]
//   Hwb               H in [0, 360), w/b in [0, 1]

use crate::math::{
    D65_WHITE, LAB_ACHROMATIC_EPSILON, LINEAR_SRGB_TO_LMS, LINEAR_SRGB_TO_XYZ, LMS_TO_LINEAR_SRGB,
    LMS_TO_OKLAB, OKLAB_ACHROMATIC_EPSILON, OKLAB_TO_LMS, XYZ_TO_LINEAR_SRGB, from_polar, lab_f,
    lab_f_inv, linear_to_srgb, multiply, normalize_hue, rgb_hue, srgb_to_linear, to_polar,
};

// ─── sRGB ────────────────────────────────────────────────────────────────────

/// Gamma-encoded sRGB with channels normalized to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into [0, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Remove the transfer function.
    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
        }
    }

    /// HSL-style hue from the max-channel branch formula.
    #[must_use]
    pub fn hue(self) -> f64 {
        rgb_hue(self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in the RGB unit cube.
    ///
    /// No square root: callers only compare distances.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        db.mul_add(db, dr.mul_add(dr, dg * dg))
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta <= 0.0 {
            0.0
        } else {
            delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs())
        };

        Hsl {
            h: self.hue(),
            s: s.clamp(0.0, 1.0),
            l,
        }
    }

    #[must_use]
    pub fn to_hwb(self) -> Hwb {
        Hwb {
            h: self.hue(),
            w: self.r.min(self.g).min(self.b),
            b: 1.0 - self.r.max(self.g).max(self.b),
        }
    }

    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        self.to_linear().to_xyz()
    }

    #[must_use]
    pub fn to_lab(self) -> Lab {
        self.to_xyz().to_lab()
    }

    #[must_use]
    pub fn to_lch(self) -> Lch {
        self.to_lab().to_lch()
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        self.to_linear().to_oklab()
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }
}

// ─── Linear RGB ─────────────────────────────────────────────────────────────

/// Linear-light sRGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Apply the transfer function. The result is not clamped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
        }
    }

    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, [self.r, self.g, self.b]);
        Xyz { x, y, z }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, [self.r, self.g, self.b]);
        let [l, a, b] = multiply(&LMS_TO_OKLAB, [l.cbrt(), m.cbrt(), s.cbrt()]);
        Oklab { l, a, b }
    }
}

// ─── CIE XYZ ────────────────────────────────────────────────────────────────

/// CIE 1931 XYZ relative to the D65 white point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn to_linear_rgb(self) -> LinearRgb {
        let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, [self.x, self.y, self.z]);
        LinearRgb { r, g, b }
    }

    /// Gamma-encode and clamp into the sRGB cube.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        self.to_linear_rgb().to_srgb().clamped()
    }

    #[must_use]
    pub fn to_lab(self) -> Lab {
        let [xn, yn, zn] = D65_WHITE;
        let fx = lab_f(self.x / xn);
        let fy = lab_f(self.y / yn);
        let fz = lab_f(self.z / zn);

        Lab {
            l: 116.0f64.mul_add(fy, -16.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

// ─── CIE LAB / LCH ──────────────────────────────────────────────────────────

/// CIE L*a*b* under D65.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        let [xn, yn, zn] = D65_WHITE;
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz {
            x: xn * lab_f_inv(fx),
            y: yn * lab_f_inv(fy),
            z: zn * lab_f_inv(fz),
        }
    }

    #[must_use]
    pub fn to_lch(self) -> Lch {
        let (c, h) = to_polar(self.a, self.b, LAB_ACHROMATIC_EPSILON);
        Lch { l: self.l, c, h }
    }

    /// Convert to sRGB, clamped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        self.to_xyz().to_srgb()
    }
}

/// Cylindrical CIE LAB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (a, b) = from_polar(self.c, self.h);
        Lab { l: self.l, a, b }
    }

    /// Convert to sRGB, clamped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        self.to_lab().to_srgb()
    }
}

// ─── OKLAB / OKLCH ──────────────────────────────────────────────────────────

/// Björn Ottosson's perceptual Oklab space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[must_use]
    pub fn to_linear_rgb(self) -> LinearRgb {
        let [l_, m_, s_] = multiply(&OKLAB_TO_LMS, [self.l, self.a, self.b]);
        let [r, g, b] = multiply(&LMS_TO_LINEAR_SRGB, [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_]);
        LinearRgb { r, g, b }
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (c, h) = to_polar(self.a, self.b, OKLAB_ACHROMATIC_EPSILON);
        Oklch { l: self.l, c, h }
    }

    /// Convert to sRGB, clamped.
    ///
    /// Clamping happens in linear light first so the transfer function
    /// never sees a negative input.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        let linear = self.to_linear_rgb();
        LinearRgb {
            r: linear.r.clamp(0.0, 1.0),
            g: linear.g.clamp(0.0, 1.0),
            b: linear.b.clamp(0.0, 1.0),
        }
        .to_srgb()
        .clamped()
    }
}

/// Cylindrical Oklab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (a, b) = from_polar(self.c, self.h);
        Oklab { l: self.l, a, b }
    }

    /// Convert to sRGB, clamped. Out-of-gamut colors are clipped, not mapped.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        self.to_oklab().to_srgb()
    }
}

// ─── HSL / HWB ──────────────────────────────────────────────────────────────

/// Hue, saturation, lightness. Saturation and lightness are fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Classic `p`/`q`/`t` formulation.
    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        let Self { h, s, l } = self;
        if s <= 0.0 {
            return Srgb::new(l, l, l).clamped();
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
        let p = 2.0f64.mul_add(l, -q);
        let t = normalize_hue(h) / 360.0;

        Srgb {
            r: hue_to_channel(p, q, t + 1.0 / 3.0),
            g: hue_to_channel(p, q, t),
            b: hue_to_channel(p, q, t - 1.0 / 3.0),
        }
        .clamped()
    }
}

/// One channel of the six-segment hue ramp.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * 6.0).mul_add(2.0 / 3.0 - t, p)
    } else {
        p
    }
}

/// Hue, whiteness, blackness. Whiteness and blackness are fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hwb {
    pub h: f64,
    pub w: f64,
    pub b: f64,
}

impl Hwb {
    #[must_use]
    pub const fn new(h: f64, w: f64, b: f64) -> Self {
        Self { h, w, b }
    }

    #[must_use]
    pub fn to_srgb(self) -> Srgb {
        let Self { h, w, b } = self;
        if w + b >= 1.0 {
            let gray = w / (w + b);
            return Srgb::new(gray, gray, gray);
        }

        let pure = Hsl::new(h, 1.0, 0.5).to_srgb();
        let scale = 1.0 - w - b;
        Srgb {
            r: pure.r.mul_add(scale, w),
            g: pure.g.mul_add(scale, w),
            b: pure.b.mul_add(scale, w),
        }
        .clamped()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
