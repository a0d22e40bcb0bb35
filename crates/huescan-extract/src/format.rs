//! Format converter: a canonical color rendered in a target notation.
//!
//! Output is built from the canonical key, never from the original text,
//! so two spellings of one color always convert identically. Hex keys are
//! read back as 8-bit RGB; OKLCH keys go through OKLAB and linear RGB and
//! are clamped into the sRGB gamut.

use std::fmt;
use std::str::FromStr;

use huescan_space::{Oklch, Rgb8, Srgb};

use crate::error::FormatError;
use crate::extract::ExtractedColor;
use crate::notation::{ColorValue, fixed, fixed_hue, format_oklch};

/// The notations a color can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
    /// SwiftUI `Color(red:green:blue:opacity:)`.
    SwiftUi,
    /// UIKit `UIColor(red:green:blue:alpha:)`.
    UiKit,
    /// Jetpack Compose packed ARGB literal.
    Compose,
    /// Flutter `Color.fromARGB`.
    Flutter,
    /// .NET `System.Drawing.Color.FromArgb`.
    DotNet,
}

impl TargetFormat {
    pub const ALL: [Self; 13] = [
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hwb,
        Self::Lab,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::SwiftUi,
        Self::UiKit,
        Self::Compose,
        Self::Flutter,
        Self::DotNet,
    ];

    /// The name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::SwiftUi => "swiftui",
            Self::UiKit => "uikit",
            Self::Compose => "compose",
            Self::Flutter => "flutter",
            Self::DotNet => "dotnet",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError(s.to_owned()))
    }
}

// ─── Conversion ─────────────────────────────────────────────────────────────

/// Everything a target notation may draw from.
struct Source {
    rgb: Rgb8,
    srgb: Srgb,
    alpha: Option<f64>,
    /// Set when the color was written as `oklch()`, to skip the sRGB detour.
    oklch: Option<Oklch>,
}

impl Source {
    fn new(value: ColorValue) -> Self {
        match value {
            ColorValue::Oklch { oklch, alpha } => {
                let srgb = oklch.to_srgb();
                Self {
                    rgb: Rgb8::from_srgb(srgb, alpha),
                    srgb,
                    alpha,
                    oklch: Some(oklch),
                }
            }
            other => {
                let rgb = other.to_rgb8();
                Self {
                    rgb,
                    srgb: rgb.to_srgb(),
                    alpha: rgb.alpha,
                    oklch: None,
                }
            }
        }
    }

    /// ` / A.AA` for the space-separated CSS notations.
    fn slash_alpha(&self) -> String {
        self.alpha
            .map_or_else(String::new, |a| format!(" / {}", fixed(a, 2)))
    }

    fn opacity(&self) -> String {
        fixed(self.alpha.unwrap_or(1.0), 3)
    }
}

/// Render `color` in `target` notation.
///
/// Converting an OKLCH-origin color to [`TargetFormat::Oklch`] returns its
/// canonical key untouched. A key that cannot be read back as a color is
/// returned as-is for every target.
///
/// # Examples
///
/// ```
/// use huescan_extract::{TargetFormat, convert, extract};
///
/// let coral = &extract("#FF5733")[0];
/// assert_eq!(convert(coral, TargetFormat::Hsl), "hsl(10.59, 100.00%, 60.00%)");
/// assert_eq!(convert(coral, TargetFormat::Compose), "Color(0xFFFF5733)");
/// ```
#[must_use]
pub fn convert(color: &ExtractedColor, target: TargetFormat) -> String {
    let key = color.canonical_key();
    let Some(value) = color.value() else {
        log::debug!("cannot reinterpret key `{key}`, printing it unchanged");
        return key.to_owned();
    };

    if target == TargetFormat::Oklch && value.notation().is_oklch_family() {
        return key.to_owned();
    }

    let src = Source::new(value);
    let Rgb8 { r, g, b, .. } = src.rgb;

    match target {
        TargetFormat::Hex => src.rgb.to_hex(),
        TargetFormat::Rgb => match src.alpha {
            Some(a) => format!("rgba({r}, {g}, {b}, {})", fixed(a, 2)),
            None => format!("rgb({r}, {g}, {b})"),
        },
        TargetFormat::Hsl => {
            let hsl = src.srgb.to_hsl();
            let (h, s, l) = (fixed_hue(hsl.h), fixed(hsl.s * 100.0, 2), fixed(hsl.l * 100.0, 2));
            match src.alpha {
                Some(a) => format!("hsla({h}, {s}%, {l}%, {})", fixed(a, 2)),
                None => format!("hsl({h}, {s}%, {l}%)"),
            }
        }
        TargetFormat::Hwb => {
            let hwb = src.srgb.to_hwb();
            format!(
                "hwb({} {}% {}%{})",
                fixed_hue(hwb.h),
                fixed(hwb.w * 100.0, 2),
                fixed(hwb.b * 100.0, 2),
                src.slash_alpha()
            )
        }
        TargetFormat::Lab => {
            let lab = src.srgb.to_lab();
            format!(
                "lab({} {} {}{})",
                fixed(lab.l, 2),
                fixed(lab.a, 2),
                fixed(lab.b, 2),
                src.slash_alpha()
            )
        }
        TargetFormat::Lch => {
            let lch = src.srgb.to_lch();
            format!(
                "lch({} {} {}{})",
                fixed(lch.l, 2),
                fixed(lch.c, 2),
                fixed_hue(lch.h),
                src.slash_alpha()
            )
        }
        TargetFormat::Oklab => {
            let oklab = src
                .oklch
                .map_or_else(|| src.srgb.to_oklab(), Oklch::to_oklab);
            format!(
                "oklab({}% {} {}{})",
                fixed(oklab.l * 100.0, 2),
                fixed(oklab.a, 4),
                fixed(oklab.b, 4),
                src.slash_alpha()
            )
        }
        TargetFormat::Oklch => format_oklch(src.srgb.to_oklch(), src.alpha),
        TargetFormat::SwiftUi => format!(
            "Color(red: {}, green: {}, blue: {}, opacity: {})",
            fixed(src.srgb.r, 3),
            fixed(src.srgb.g, 3),
            fixed(src.srgb.b, 3),
            src.opacity()
        ),
        TargetFormat::UiKit => format!(
            "UIColor(red: {}, green: {}, blue: {}, alpha: {})",
            fixed(src.srgb.r, 3),
            fixed(src.srgb.g, 3),
            fixed(src.srgb.b, 3),
            src.opacity()
        ),
        TargetFormat::Compose => {
            format!("Color(0x{:02X}{r:02X}{g:02X}{b:02X})", src.rgb.opacity_byte())
        }
        TargetFormat::Flutter => {
            format!("Color.fromARGB({}, {r}, {g}, {b})", src.rgb.opacity_byte())
        }
        TargetFormat::DotNet => {
            format!("Color.FromArgb({}, {r}, {g}, {b})", src.rgb.opacity_byte())
        }
    }
}
