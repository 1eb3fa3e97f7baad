// SPDX-License-Identifier: MIT
//
// Rgb color value: the hex/triplet representation every palette entry is
// authored in.
//
// Parsing is deliberately narrow: exactly six hex digits, optionally behind
// a `#`, case-insensitive. Shorthand (`#fff`) and alpha (`#rrggbbaa`) forms
// are rejected, because a palette literal in either shape is a typo.
//
// Formatting always produces the canonical form: lowercase, zero-padded,
// with a leading `#`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to interpret a string as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not `#rrggbb` / `rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidFormat(String),

    /// Not three comma-separated decimal channels in 0–255.
    #[error("invalid rgb triplet: {0:?}")]
    InvalidTriplet(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use card_color::Rgb;
///
/// let pink = Rgb::from_hex("#EC4899").unwrap();
/// assert_eq!(pink, Rgb::new(236, 72, 153));
/// assert_eq!(pink.to_hex(), "#ec4899");
/// assert_eq!(pink.triplet(), "236, 72, 153");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if the string (after stripping
    /// one optional `#`) is not exactly six ASCII hex digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))
    }

    /// Parse the `"r, g, b"` notation (decimal channels, any whitespace
    /// around the commas).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidTriplet`] unless there are exactly three
    /// channels and each fits in a `u8`.
    pub fn parse_triplet(s: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidTriplet(s.to_owned());

        let mut channels = s.split(',').map(|part| part.trim().parse::<u8>());
        let r = channels.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let g = channels.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let b = channels.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        if channels.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(r, g, b))
    }

    /// Canonical `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The `"r, g, b"` form used in the palette table.
    #[must_use]
    pub fn triplet(self) -> String {
        let Self { r, g, b } = self;
        format!("{r}, {g}, {b}")
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Transfer Function ───────────────────────────────────────────────────────

/// sRGB → linear light, one channel (0.0–1.0), as written in WCAG 2.1.
///
/// WCAG 2.1 uses 0.03928 as the breakpoint rather than the IEC 61966-2-1
/// value of 0.04045. No 8-bit channel falls between the two, so the choice
/// never changes a result here, but the published constant is kept.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex parsing ──────────────────────────────────────────────────────

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ec4899"), Ok(Rgb::new(236, 72, 153)));
        assert_eq!(Rgb::from_hex("ec4899"), Ok(Rgb::new(236, 72, 153)));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("#EC4899"), Rgb::from_hex("#ec4899"));
        assert_eq!(Rgb::from_hex("#Ec4899"), Rgb::from_hex("#ec4899"));
    }

    #[test]
    fn parses_extremes() {
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("#ffffff"), Ok(Rgb::WHITE));
    }

    #[test]
    fn rejects_shorthand_and_alpha() {
        for input in ["#fff", "fff", "#ffffffff", "#fffff", "#fffffff"] {
            assert_eq!(
                Rgb::from_hex(input),
                Err(ColorError::InvalidFormat(input.to_owned())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#12345z").is_err());
        assert!(Rgb::from_hex(" #123456").is_err());
        assert!(Rgb::from_hex("#123456 ").is_err());
    }

    #[test]
    fn rejects_empty_and_double_hash() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#").is_err());
        assert!(Rgb::from_hex("##123456").is_err());
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        // Six bytes, but not six ASCII digits.
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Rgb = "#1e3a8a".parse().unwrap();
        assert_eq!(parsed, Rgb::new(30, 58, 138));
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(5, 150, 105).to_hex(), "#059669");
        assert_eq!(Rgb::from_hex("#ABCDEF").unwrap().to_hex(), "#abcdef");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    // ── Triplets ─────────────────────────────────────────────────────────

    #[test]
    fn parses_triplet() {
        assert_eq!(Rgb::parse_triplet("236, 72, 153"), Ok(Rgb::new(236, 72, 153)));
        assert_eq!(Rgb::parse_triplet("5,150,105"), Ok(Rgb::new(5, 150, 105)));
    }

    #[test]
    fn rejects_bad_triplets() {
        for input in ["", "1, 2", "1, 2, 3, 4", "256, 0, 0", "-1, 0, 0", "a, b, c"] {
            assert_eq!(
                Rgb::parse_triplet(input),
                Err(ColorError::InvalidTriplet(input.to_owned())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn triplet_formats_back() {
        assert_eq!(Rgb::new(4, 120, 87).triplet(), "4, 120, 87");
    }

    // ── Linearization ────────────────────────────────────────────────────

    #[test]
    fn linear_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_low_segment_is_scaled() {
        let c = 10.0 / 255.0;
        assert!((srgb_to_linear(c) - c / 12.92).abs() < 1e-15);
    }

    #[test]
    fn linear_is_monotonic_over_u8() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let lin = srgb_to_linear(f64::from(v) / 255.0);
            assert!(lin > prev, "not increasing at {v}");
            prev = lin;
        }
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = Rgb::from_hex("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color: \"nope\"");
    }
}
