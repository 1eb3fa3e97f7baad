//! WCAG 2.1 contrast ratios and compliance classification.
//!
//! Everything here is a pure function of its inputs:
//!
//! - Relative luminance: linearize each sRGB channel, then
//!   `0.2126 * R + 0.7152 * G + 0.0722 * B`
//! - Contrast ratio: `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21]
//! - AA: >= 4.5:1 (normal text), >= 3:1 (large text)
//! - AAA: >= 7:1 (normal text), >= 4.5:1 (large text)
//!
//! Threshold checks always see the unrounded ratio. Rounding to two decimals
//! happens only for the values a [`ContrastProfile`] stores for display, so a
//! ratio of 4.496 never turns into a passing 4.50.

use std::fmt;

use card_color::{ColorError, Rgb, srgb_to_linear};
use serde::Serialize;

/// AA threshold for normal-size text.
pub const AA_NORMAL: f64 = 4.5;
/// AA threshold for large text (>= 18pt, or >= 14pt bold).
pub const AA_LARGE: f64 = 3.0;
/// AAA threshold for normal-size text.
pub const AAA_NORMAL: f64 = 7.0;
/// AAA threshold for large text.
pub const AAA_LARGE: f64 = 4.5;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
// Unfused multiply-add: results must match the published formula bit-for-bit.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] over two hex strings.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for the first string that is not a
/// six-digit hex color.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Whether `ratio` meets WCAG AA. Inclusive at the threshold.
#[must_use]
pub fn meets_aa(ratio: f64, large_text: bool) -> bool {
    ratio >= if large_text { AA_LARGE } else { AA_NORMAL }
}

/// Whether `ratio` meets WCAG AAA. Inclusive at the threshold.
#[must_use]
pub fn meets_aaa(ratio: f64, large_text: bool) -> bool {
    ratio >= if large_text { AAA_LARGE } else { AAA_NORMAL }
}

/// The highest WCAG level a ratio satisfies.
#[must_use]
pub fn compliance_level(ratio: f64, large_text: bool) -> Compliance {
    if meets_aaa(ratio, large_text) {
        Compliance::Aaa
    } else if meets_aa(ratio, large_text) {
        Compliance::Aa
    } else {
        Compliance::Fail
    }
}

/// Round a ratio to two decimals, half away from zero.
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// WCAG conformance level. AAA implies AA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Compliance {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Compliance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContrastProfile
// ---------------------------------------------------------------------------

/// A color's contrast against plain white and plain black backgrounds.
///
/// Ratios are rounded to two decimals; the AA flags were decided on the
/// unrounded ratios (normal-text threshold).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastProfile {
    pub on_white: f64,
    pub on_black: f64,
    #[serde(rename = "meetsAA_onWhite")]
    pub meets_aa_on_white: bool,
    #[serde(rename = "meetsAA_onBlack")]
    pub meets_aa_on_black: bool,
}

impl ContrastProfile {
    #[must_use]
    pub fn of(color: Rgb) -> Self {
        let on_white = contrast_ratio(color, Rgb::WHITE);
        let on_black = contrast_ratio(color, Rgb::BLACK);
        Self {
            on_white: round_ratio(on_white),
            on_black: round_ratio(on_black),
            meets_aa_on_white: meets_aa(on_white, false),
            meets_aa_on_black: meets_aa(on_black, false),
        }
    }

    /// The better of the two backgrounds for text in this color.
    #[must_use]
    pub fn prefers_dark_background(&self) -> bool {
        self.on_black > self.on_white
    }
}

/// [`ContrastProfile::of`] for a hex string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not a six-digit hex color.
pub fn contrast_profile(hex: &str) -> Result<ContrastProfile, ColorError> {
    Rgb::from_hex(hex).map(ContrastProfile::of)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
