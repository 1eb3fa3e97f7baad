//! Palette data model: intensities, variants and color families.
//!
//! A family owns exactly nine variants, one per [`Intensity`]. Variants are
//! stored in an array indexed by intensity, so "every family has all nine
//! keys" holds by construction rather than by checking.

use std::fmt;
use std::str::FromStr;

use card_color::Rgb;
use serde::Serialize;

use crate::contrast::ContrastProfile;

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// One of the nine shade levels of a family. Ascending = darker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    I100,
    I200,
    I300,
    I400,
    I500,
    I600,
    I700,
    I800,
    I900,
}

impl Intensity {
    /// All intensities, lightest first.
    pub const ALL: [Self; 9] = [
        Self::I100,
        Self::I200,
        Self::I300,
        Self::I400,
        Self::I500,
        Self::I600,
        Self::I700,
        Self::I800,
        Self::I900,
    ];

    /// The canonical base tone of a family.
    pub const BASE: Self = Self::I500;

    /// Numeric key: 100, 200, …, 900.
    #[must_use]
    pub const fn value(self) -> u16 {
        (self.index() as u16 + 1) * 100
    }

    /// Position in [`Intensity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        Some(match value {
            100 => Self::I100,
            200 => Self::I200,
            300 => Self::I300,
            400 => Self::I400,
            500 => Self::I500,
            600 => Self::I600,
            700 => Self::I700,
            800 => Self::I800,
            900 => Self::I900,
            _ => return None,
        })
    }
}

impl TryFrom<u16> for Intensity {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(value)
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| format!("invalid intensity {s:?} (expected 100, 200, …, 900)"))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Intensity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Background theme a recommendation is made for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Intensities a family may recommend for this theme.
    #[must_use]
    pub const fn allowed(self) -> [Intensity; 3] {
        match self {
            Self::Light => [Intensity::I500, Intensity::I600, Intensity::I700],
            Self::Dark => [Intensity::I400, Intensity::I500, Intensity::I600],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme {s:?} (expected light or dark)")),
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteVariant
// ---------------------------------------------------------------------------

/// One shade of a family with its precomputed contrast metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteVariant {
    pub intensity: Intensity,
    /// Canonical `#rrggbb`.
    pub value: String,
    pub rgb: Rgb,
    #[serde(flatten)]
    pub contrast: ContrastProfile,
}

impl PaletteVariant {
    #[must_use]
    pub fn new(intensity: Intensity, rgb: Rgb) -> Self {
        Self {
            intensity,
            value: rgb.to_hex(),
            rgb,
            contrast: ContrastProfile::of(rgb),
        }
    }
}

// ---------------------------------------------------------------------------
// Recommended / ColorPalette
// ---------------------------------------------------------------------------

/// Default intensity per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommended {
    pub light: Intensity,
    pub dark: Intensity,
}

impl Recommended {
    #[must_use]
    pub const fn for_theme(self, theme: Theme) -> Intensity {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// A named color family with its nine variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub name: String,
    pub display_name: String,
    #[serde(serialize_with = "serialize_variants")]
    pub(crate) variants: [PaletteVariant; 9],
    pub recommended: Recommended,
}

impl ColorPalette {
    /// The variant at `intensity`. Total: every family has all nine.
    #[must_use]
    pub const fn variant(&self, intensity: Intensity) -> &PaletteVariant {
        &self.variants[intensity.index()]
    }

    /// All variants, lightest first.
    pub fn variants(&self) -> impl ExactSizeIterator<Item = &PaletteVariant> {
        self.variants.iter()
    }

    /// The recommended variant for `theme`.
    #[must_use]
    pub const fn recommended_variant(&self, theme: Theme) -> &PaletteVariant {
        self.variant(self.recommended.for_theme(theme))
    }
}

/// Variants serialize as an object keyed by intensity (`"100"` … `"900"`).
fn serialize_variants<S: serde::Serializer>(
    variants: &[PaletteVariant; 9],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(variants.len()))?;
    for v in variants {
        map.serialize_entry(&v.intensity.to_string(), v)?;
    }
    map.end()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intensity_values_ascend_by_hundreds() {
        let values: Vec<u16> = Intensity::ALL.iter().map(|i| i.value()).collect();
        assert_eq!(values, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn intensity_index_matches_position() {
        for (i, intensity) in Intensity::ALL.iter().enumerate() {
            assert_eq!(intensity.index(), i);
        }
    }

    #[test]
    fn intensity_round_trips_through_value() {
        for intensity in Intensity::ALL {
            assert_eq!(Intensity::try_from(intensity.value()), Ok(intensity));
            assert_eq!(intensity.to_string().parse::<Intensity>(), Ok(intensity));
        }
    }

    #[test]
    fn intensity_rejects_off_grid_values() {
        assert_eq!(Intensity::try_from(0_u16), Err(0));
        assert_eq!(Intensity::try_from(50_u16), Err(50));
        assert_eq!(Intensity::try_from(550_u16), Err(550));
        assert_eq!(Intensity::try_from(1000_u16), Err(1000));
        assert!("five hundred".parse::<Intensity>().is_err());
    }

    #[test]
    fn base_is_500() {
        assert_eq!(Intensity::BASE.value(), 500);
    }

    #[test]
    fn theme_parses_and_defaults_to_light() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_allowed_subsets() {
        let light: Vec<u16> = Theme::Light.allowed().iter().map(|i| i.value()).collect();
        let dark: Vec<u16> = Theme::Dark.allowed().iter().map(|i| i.value()).collect();
        assert_eq!(light, vec![500, 600, 700]);
        assert_eq!(dark, vec![400, 500, 600]);
    }

    #[test]
    fn variant_carries_canonical_hex_and_profile() {
        let v = PaletteVariant::new(Intensity::I500, Rgb::new(236, 72, 153));
        assert_eq!(v.value, "#ec4899");
        assert_eq!(v.contrast, ContrastProfile::of(Rgb::new(236, 72, 153)));
    }

    #[test]
    fn recommended_for_theme() {
        let rec = Recommended { light: Intensity::I600, dark: Intensity::I500 };
        assert_eq!(rec.for_theme(Theme::Light), Intensity::I600);
        assert_eq!(rec.for_theme(Theme::Dark), Intensity::I500);
    }
}
