//! The palette catalog, built once at startup and shared by reference.
//!
//! ```text
//! builtin::FAMILIES (literal table)
//!     │  parse hex + rgb, check they agree
//!     ▼
//! PaletteVariant × 9   (contrast metrics computed here, once)
//!     │  check recommendations
//!     ▼
//! ColorPalette × 15 ──► Catalog (immutable)
//! ```
//!
//! Construction is all-or-nothing: the first bad entry aborts the build and
//! no catalog value exists. After that every query is total. Lookups by name
//! return `Option`, and [`Catalog::recommended_variant`] falls back to
//! [`Intensity::BASE`] for unknown families.
//!
//! The catalog is a plain owned value. Build it at startup and pass it by
//! reference; it is `Send + Sync` and never mutated.

use std::collections::HashMap;

use card_color::{ColorError, Rgb};
use thiserror::Error;
use tracing::{debug, info};

use crate::builtin::{FAMILIES, FamilyDef};
use crate::palette::{ColorPalette, Intensity, PaletteVariant, Recommended, Theme};

/// Why a catalog could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("family '{family}', intensity {intensity}: {source}")]
    Color {
        family: String,
        intensity: Intensity,
        #[source]
        source: ColorError,
    },

    #[error("family '{family}', intensity {intensity}: hex {hex} is rgb({actual}), table says rgb({listed})")]
    RgbMismatch {
        family: String,
        intensity: Intensity,
        hex: String,
        actual: String,
        listed: String,
    },

    #[error("family '{0}' is defined more than once")]
    DuplicateFamily(String),

    #[error("family '{family}': {intensity} is not a valid {theme} recommendation (allowed: {allowed})")]
    Recommendation {
        family: String,
        theme: Theme,
        intensity: u16,
        allowed: String,
    },
}

/// Immutable mapping from family name to [`ColorPalette`].
#[derive(Debug, Clone)]
pub struct Catalog {
    palettes: Vec<ColorPalette>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the builtin table.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any builtin entry is malformed. The
    /// builtin table is covered by tests, so callers treat this as fatal.
    pub fn build() -> Result<Self, CatalogError> {
        Self::from_definitions(&FAMILIES)
    }

    /// Build a catalog from an arbitrary family table, in table order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found; nothing is built.
    pub fn from_definitions(defs: &[FamilyDef]) -> Result<Self, CatalogError> {
        let mut palettes = Vec::with_capacity(defs.len());
        let mut by_name = HashMap::with_capacity(defs.len());

        for def in defs {
            if by_name.contains_key(def.name) {
                return Err(CatalogError::DuplicateFamily(def.name.to_owned()));
            }
            let palette = build_palette(def)?;
            debug!(
                family = def.name,
                light = %palette.recommended.light,
                dark = %palette.recommended.dark,
                "built palette"
            );
            by_name.insert(def.name.to_owned(), palettes.len());
            palettes.push(palette);
        }

        info!(families = palettes.len(), variants = palettes.len() * 9, "palette catalog ready");
        Ok(Self { palettes, by_name })
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorPalette> {
        self.by_name.get(name).map(|&i| &self.palettes[i])
    }

    /// Whether a family with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All palettes in declaration order.
    pub fn palettes(&self) -> impl ExactSizeIterator<Item = &ColorPalette> {
        self.palettes.iter()
    }

    /// All family names in declaration order.
    pub fn family_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    /// Recommended intensity of `name` for `theme`, or
    /// [`Intensity::BASE`] when the family does not exist.
    #[must_use]
    pub fn recommended_variant(&self, name: &str, theme: Theme) -> Intensity {
        self.get(name)
            .map_or(Intensity::BASE, |p| p.recommended.for_theme(theme))
    }

    /// The variant of `name` at `intensity`, if the family exists.
    #[must_use]
    pub fn variant(&self, name: &str, intensity: Intensity) -> Option<&PaletteVariant> {
        self.get(name).map(|p| p.variant(intensity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

fn build_palette(def: &FamilyDef) -> Result<ColorPalette, CatalogError> {
    let mut colors = [Rgb::BLACK; 9];
    for (intensity, (hex, listed)) in Intensity::ALL.into_iter().zip(def.variants) {
        let color_err = |source| CatalogError::Color {
            family: def.name.to_owned(),
            intensity,
            source,
        };
        let rgb = Rgb::from_hex(hex).map_err(color_err)?;
        let listed_rgb = Rgb::parse_triplet(listed).map_err(color_err)?;
        if rgb != listed_rgb {
            return Err(CatalogError::RgbMismatch {
                family: def.name.to_owned(),
                intensity,
                hex: hex.to_owned(),
                actual: rgb.triplet(),
                listed: listed.to_owned(),
            });
        }
        colors[intensity.index()] = rgb;
    }

    let recommended = Recommended {
        light: recommendation(def, Theme::Light, def.light)?,
        dark: recommendation(def, Theme::Dark, def.dark)?,
    };

    Ok(ColorPalette {
        name: def.name.to_owned(),
        display_name: def.display_name.to_owned(),
        variants: Intensity::ALL.map(|i| PaletteVariant::new(i, colors[i.index()])),
        recommended,
    })
}

fn recommendation(def: &FamilyDef, theme: Theme, value: u16) -> Result<Intensity, CatalogError> {
    let allowed = theme.allowed();
    Intensity::from_value(value)
        .filter(|i| allowed.contains(i))
        .ok_or_else(|| CatalogError::Recommendation {
            family: def.name.to_owned(),
            theme,
            intensity: value,
            allowed: allowed.map(|i| i.to_string()).join(", "),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::build().expect("builtin table is valid")
    }

    fn def_with(variants: [(&'static str, &'static str); 9]) -> FamilyDef {
        FamilyDef {
            name: "test",
            display_name: "Test",
            variants,
            light: 500,
            dark: 400,
        }
    }

    const GRAYS: [(&str, &str); 9] = [
        ("#f5f5f5", "245, 245, 245"),
        ("#e5e5e5", "229, 229, 229"),
        ("#d4d4d4", "212, 212, 212"),
        ("#a3a3a3", "163, 163, 163"),
        ("#737373", "115, 115, 115"),
        ("#525252", "82, 82, 82"),
        ("#404040", "64, 64, 64"),
        ("#262626", "38, 38, 38"),
        ("#171717", "23, 23, 23"),
    ];

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn builtin_has_fifteen_families_of_nine() {
        let c = catalog();
        assert_eq!(c.len(), 15);
        assert!(!c.is_empty());
        for palette in c.palettes() {
            let keys: Vec<u16> = palette.variants().map(|v| v.intensity.value()).collect();
            assert_eq!(keys, vec![100, 200, 300, 400, 500, 600, 700, 800, 900], "{}", palette.name);
        }
    }

    #[test]
    fn build_is_deterministic() {
        let a = catalog();
        let b = catalog();
        assert!(a.palettes().eq(b.palettes()));
    }

    #[test]
    fn custom_table_builds() {
        let c = Catalog::from_definitions(&[def_with(GRAYS)]).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("test").unwrap().variant(Intensity::I900).value, "#171717");
    }

    #[test]
    fn empty_table_builds_empty_catalog() {
        let c = Catalog::from_definitions(&[]).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.recommended_variant("pink", Theme::Light), Intensity::BASE);
    }

    #[test]
    fn bad_hex_fails_whole_build() {
        let mut variants = GRAYS;
        variants[3] = ("#a3a3a", "163, 163, 163");
        let broken = FamilyDef { name: "broken", ..def_with(variants) };
        let err = Catalog::from_definitions(&[def_with(GRAYS), broken]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Color {
                family: "broken".to_owned(),
                intensity: Intensity::I400,
                source: ColorError::InvalidFormat("#a3a3a".to_owned()),
            }
        );
    }

    #[test]
    fn rgb_column_must_agree_with_hex() {
        let mut variants = GRAYS;
        variants[0] = ("#f5f5f5", "245, 245, 244");
        let err = Catalog::from_definitions(&[def_with(variants)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RgbMismatch { intensity: Intensity::I100, .. }
        ));
    }

    #[test]
    fn duplicate_family_rejected() {
        let err = Catalog::from_definitions(&[def_with(GRAYS), def_with(GRAYS)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateFamily("test".to_owned()));
    }

    #[test]
    fn recommendation_subsets_enforced() {
        let light_400 = FamilyDef { light: 400, ..def_with(GRAYS) };
        let err = Catalog::from_definitions(&[light_400]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Recommendation { theme: Theme::Light, intensity: 400, .. }
        ));
        assert_eq!(
            err.to_string(),
            "family 'test': 400 is not a valid light recommendation (allowed: 500, 600, 700)"
        );

        let dark_700 = FamilyDef { dark: 700, ..def_with(GRAYS) };
        assert!(Catalog::from_definitions(&[dark_700]).is_err());

        let off_grid = FamilyDef { light: 550, ..def_with(GRAYS) };
        assert!(Catalog::from_definitions(&[off_grid]).is_err());
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let c = catalog();
        assert_eq!(c.get("pink").map(|p| p.display_name.as_str()), Some("Rosa"));
        assert!(c.get("Pink").is_none());
        assert!(c.get(" pink").is_none());
        assert!(c.get("nonexistent-family").is_none());
        assert!(c.contains("teal"));
        assert!(!c.contains("violet"));
    }

    #[test]
    fn pink_500_baseline() {
        let c = catalog();
        let v = c.variant("pink", Intensity::I500).unwrap();
        assert_eq!(v.value, "#ec4899");
        assert_eq!(v.rgb.triplet(), "236, 72, 153");
        assert!((v.contrast.on_white - 3.53).abs() < 1e-9);
        assert!((v.contrast.on_black - 5.95).abs() < 1e-9);
        assert!(!v.contrast.meets_aa_on_white);
        assert!(v.contrast.meets_aa_on_black);
    }

    #[test]
    fn dark_shades_pass_on_white() {
        let c = catalog();
        let v = c.variant("blue", Intensity::I900).unwrap();
        assert_eq!(v.value, "#1e3a8a");
        assert!((v.contrast.on_white - 10.36).abs() < 1e-9);
        assert!(v.contrast.meets_aa_on_white);
        assert!(!v.contrast.meets_aa_on_black);
    }

    #[test]
    fn family_names_in_declaration_order() {
        let c = catalog();
        let names: Vec<&str> = c.family_names().collect();
        assert_eq!(
            names,
            vec![
                "pink", "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal",
                "cyan", "sky", "blue", "indigo", "purple", "fuchsia",
            ]
        );
        let from_palettes: Vec<&str> = c.palettes().map(|p| p.name.as_str()).collect();
        assert_eq!(names, from_palettes);
    }

    #[test]
    fn recommended_variant_lookup() {
        let c = catalog();
        assert_eq!(c.recommended_variant("pink", Theme::Light), Intensity::I500);
        assert_eq!(c.recommended_variant("pink", Theme::Dark), Intensity::I400);
        assert_eq!(c.recommended_variant("indigo", Theme::Light), Intensity::I600);
        assert_eq!(c.recommended_variant("indigo", Theme::Dark), Intensity::I500);
    }

    #[test]
    fn recommended_variant_falls_back_to_500() {
        let c = catalog();
        assert_eq!(c.recommended_variant("nonexistent-family", Theme::Light), Intensity::I500);
        assert_eq!(c.recommended_variant("nonexistent-family", Theme::Dark), Intensity::I500);
    }

    #[test]
    fn every_recommendation_is_in_its_subset() {
        for palette in catalog().palettes() {
            assert!(Theme::Light.allowed().contains(&palette.recommended.light));
            assert!(Theme::Dark.allowed().contains(&palette.recommended.dark));
        }
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();

        let c = std::sync::Arc::new(catalog());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = std::sync::Arc::clone(&c);
                std::thread::spawn(move || c.variant("teal", Intensity::I600).map(|v| v.value.clone()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().as_deref(), Some("#0d9488"));
        }
    }
}
