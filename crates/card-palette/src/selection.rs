//! Form color selection: the card form's `bg-<family>-<intensity>` values.
//!
//! The color step of the card form stores the picked swatch as a background
//! utility class (`bg-pink-500`). When the answer is saved, the same choice
//! is expanded into the text and gradient classes the card page uses.
//! Templates refer to colors in the short `<family>-<intensity>` form.
//!
//! Everything here degrades instead of failing: a value that does not parse
//! becomes `pink`/500, and an unknown family resolves to the fallback family.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::builtin::FALLBACK_FAMILY;
use crate::catalog::Catalog;
use crate::palette::{ColorPalette, Intensity, PaletteVariant, Theme};

/// The picker's value pattern. Unanchored, like the form's own matcher.
static BG_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bg-(\w+)-(\d+)").expect("Invalid background value regex"));

/// Template color references: `indigo-700`.
static SHORT_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)-(\d+)$").expect("Invalid short color regex"));

/// A family + intensity pair picked in the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColorSelection {
    pub family: String,
    pub intensity: Intensity,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self {
            family: FALLBACK_FAMILY.to_owned(),
            intensity: Intensity::BASE,
        }
    }
}

impl ColorSelection {
    #[must_use]
    pub fn new(family: impl Into<String>, intensity: Intensity) -> Self {
        Self {
            family: family.into(),
            intensity,
        }
    }

    /// Extract the selection from a `bg-<family>-<intensity>` value.
    ///
    /// Returns `None` if the pattern is absent or the number is not one of
    /// the nine intensities. Family existence is not checked here.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        captures_to_selection(&BG_VALUE_REGEX, value)
    }

    /// Extract the selection from a short `<family>-<intensity>` reference.
    #[must_use]
    pub fn parse_short(value: &str) -> Option<Self> {
        captures_to_selection(&SHORT_VALUE_REGEX, value)
    }

    /// [`ColorSelection::parse`], falling back to `pink`/500.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Select a family at its recommended light-theme intensity (500 for
    /// unknown families), as clicking a palette in the form does.
    #[must_use]
    pub fn pick_family(catalog: &Catalog, name: &str) -> Self {
        Self::new(name, catalog.recommended_variant(name, Theme::Light))
    }

    /// The picker value: `bg-<family>-<intensity>`.
    #[must_use]
    pub fn bg_value(&self) -> String {
        format!("bg-{self}")
    }

    /// The classes stored with the card for this selection.
    #[must_use]
    pub fn classes(&self) -> CardColorClasses {
        CardColorClasses::from_bg_value(&self.bg_value())
    }

    /// Look the selection up in `catalog`.
    ///
    /// An unknown family resolves to the fallback family at 500. Returns
    /// `None` only when the fallback family is missing too, which cannot
    /// happen with the builtin catalog.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<ResolvedColor<'a>> {
        if let Some(palette) = catalog.get(&self.family) {
            return Some(ResolvedColor {
                palette,
                variant: palette.variant(self.intensity),
                fell_back: false,
            });
        }

        warn!(
            family = %self.family,
            fallback = FALLBACK_FAMILY,
            "unknown color family, using fallback"
        );
        catalog.get(FALLBACK_FAMILY).map(|palette| ResolvedColor {
            palette,
            variant: palette.variant(Intensity::BASE),
            fell_back: true,
        })
    }
}

impl fmt::Display for ColorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.intensity)
    }
}

fn captures_to_selection(regex: &Regex, value: &str) -> Option<ColorSelection> {
    let caps = regex.captures(value)?;
    let intensity = caps[2].parse::<u16>().ok().and_then(Intensity::from_value)?;
    Some(ColorSelection::new(&caps[1], intensity))
}

// ---------------------------------------------------------------------------
// ResolvedColor
// ---------------------------------------------------------------------------

/// A selection bound to catalog data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor<'a> {
    pub palette: &'a ColorPalette,
    pub variant: &'a PaletteVariant,
    /// The requested family did not exist.
    pub fell_back: bool,
}

impl ResolvedColor<'_> {
    /// The selection actually in effect.
    #[must_use]
    pub fn selection(&self) -> ColorSelection {
        ColorSelection::new(self.palette.name.as_str(), self.variant.intensity)
    }

    #[must_use]
    pub fn hex(&self) -> &str {
        &self.variant.value
    }
}

// ---------------------------------------------------------------------------
// CardColorClasses
// ---------------------------------------------------------------------------

/// The color classes saved with a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardColorClasses {
    pub bg_color: String,
    pub text_color: String,
    pub via_color: String,
}

impl CardColorClasses {
    /// Expand a stored `bg-…` value: `bg-pink-500` gives `text-pink-500`
    /// and `via-pink-500`. Only the first `bg-` is stripped; the value is
    /// kept verbatim as the background class.
    #[must_use]
    pub fn from_bg_value(value: &str) -> Self {
        let color = value.replacen("bg-", "", 1);
        Self {
            bg_color: value.to_owned(),
            text_color: format!("text-{color}"),
            via_color: format!("via-{color}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Swatches
// ---------------------------------------------------------------------------

/// Intensities the form offers for a family: all nine, or only the
/// recommended light one (500 for an unknown family).
#[must_use]
pub fn visible_intensities(catalog: &Catalog, family: &str, show_all: bool) -> Vec<Intensity> {
    if show_all {
        return Intensity::ALL.to_vec();
    }
    vec![catalog.recommended_variant(family, Theme::Light)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
