//! Predesigned card templates: named presets over the palette catalog.
//!
//! Each template fixes a color (as a short `<family>-<intensity>`
//! reference), a font, a layout and an animation. Like the builtin palette
//! table these are compile-time data; [`CardTemplate::selection`] connects
//! them to the catalog.

use std::fmt;

use serde::Serialize;

use crate::selection::ColorSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Elegant,
    Fun,
    Minimal,
    Retro,
    Modern,
    Classic,
    Romantic,
    Bold,
}

impl TemplateCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elegant => "elegant",
            Self::Fun => "fun",
            Self::Minimal => "minimal",
            Self::Retro => "retro",
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Romantic => "romantic",
            Self::Bold => "bold",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Centered,
    SideBySide,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    None,
    Confetti,
    Fireworks,
}

/// A predesigned card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub preview_image: &'static str,
    /// Short color reference, e.g. `indigo-700`.
    pub color_palette: &'static str,
    pub font: &'static str,
    pub font_weight: u16,
    pub layout: Layout,
    /// `None` means animations are disabled.
    pub animation: Animation,
}

impl CardTemplate {
    /// The template's color as a selection. `None` only if the reference is
    /// malformed (covered by tests for the builtin set).
    #[must_use]
    pub fn selection(&self) -> Option<ColorSelection> {
        ColorSelection::parse_short(self.color_palette)
    }

    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animation != Animation::None
    }
}

const TEMPLATES: [CardTemplate; 8] = [
    CardTemplate {
        id: "elegant-serif",
        name: "Elegancia Clásica",
        description: "Diseño sofisticado con tipografía serif y tonos índigo profundos",
        category: TemplateCategory::Elegant,
        preview_image: "/templates/elegant-serif.jpg",
        color_palette: "indigo-700",
        font: "bebas-neue",
        font_weight: 700,
        layout: Layout::Centered,
        animation: Animation::None,
    },
    CardTemplate {
        id: "retro-arcade",
        name: "Retro Arcade",
        description: "Estilo pixel art con colores vibrantes fucsia",
        category: TemplateCategory::Retro,
        preview_image: "/templates/retro-arcade.jpg",
        color_palette: "fuchsia-500",
        font: "press-start-2p",
        font_weight: 400,
        layout: Layout::Centered,
        animation: Animation::Fireworks,
    },
    CardTemplate {
        id: "minimal-modern",
        name: "Minimalista Moderno",
        description: "Diseño limpio y contemporáneo con tonos cielo suaves",
        category: TemplateCategory::Minimal,
        preview_image: "/templates/minimal-modern.jpg",
        color_palette: "sky-400",
        font: "bebas-neue",
        font_weight: 300,
        layout: Layout::Stacked,
        animation: Animation::None,
    },
    CardTemplate {
        id: "romance-script",
        name: "Romance Script",
        description: "Tipografía cursiva elegante con rosa intenso",
        category: TemplateCategory::Romantic,
        preview_image: "/templates/romance-script.jpg",
        color_palette: "pink-600",
        font: "bebas-neue",
        font_weight: 700,
        layout: Layout::Centered,
        animation: Animation::Confetti,
    },
    CardTemplate {
        id: "vibrant-fun",
        name: "Diversión Vibrante",
        description: "Colores brillantes y energía con tonos ámbar",
        category: TemplateCategory::Fun,
        preview_image: "/templates/vibrant-fun.jpg",
        color_palette: "amber-500",
        font: "bebas-neue",
        font_weight: 700,
        layout: Layout::SideBySide,
        animation: Animation::Confetti,
    },
    CardTemplate {
        id: "professional-clean",
        name: "Profesional Limpio",
        description: "Estilo corporativo con esmeralda y tipografía sans-serif",
        category: TemplateCategory::Modern,
        preview_image: "/templates/professional-clean.jpg",
        color_palette: "emerald-600",
        font: "bebas-neue",
        font_weight: 500,
        layout: Layout::Stacked,
        animation: Animation::None,
    },
    CardTemplate {
        id: "monochrome-bold",
        name: "Monocromático Audaz",
        description: "Diseño en blanco y negro con alto contraste",
        category: TemplateCategory::Bold,
        preview_image: "/templates/monochrome-bold.jpg",
        color_palette: "blue-900",
        font: "bebas-neue",
        font_weight: 900,
        layout: Layout::Centered,
        animation: Animation::Fireworks,
    },
    CardTemplate {
        id: "nature-organic",
        name: "Naturaleza Orgánica",
        description: "Tonos tierra con verde profundo y tipografía cálida",
        category: TemplateCategory::Classic,
        preview_image: "/templates/nature-organic.jpg",
        color_palette: "green-700",
        font: "bebas-neue",
        font_weight: 600,
        layout: Layout::Centered,
        animation: Animation::Confetti,
    },
];

/// All builtin templates.
#[must_use]
pub const fn templates() -> &'static [CardTemplate] {
    &TEMPLATES
}

/// Look up a template by id.
#[must_use]
pub fn builtin_template(id: &str) -> Option<&'static CardTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[must_use]
pub fn templates_by_category(category: TemplateCategory) -> Vec<&'static CardTemplate> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

/// Categories in use, unique, in first-seen order.
#[must_use]
pub fn categories() -> Vec<TemplateCategory> {
    let mut seen = Vec::new();
    for t in &TEMPLATES {
        if !seen.contains(&t.category) {
            seen.push(t.category);
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::palette::Intensity;

    #[test]
    fn every_template_color_resolves_without_fallback() {
        let catalog = Catalog::build().unwrap();
        for t in templates() {
            let selection = t.selection().unwrap_or_else(|| panic!("{} has a bad color", t.id));
            let resolved = selection.resolve(&catalog).unwrap();
            assert!(!resolved.fell_back, "{} uses unknown family", t.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let t = builtin_template("retro-arcade").unwrap();
        assert_eq!(t.font, "press-start-2p");
        assert_eq!(t.selection(), Some(ColorSelection::new("fuchsia", Intensity::I500)));
        assert!(t.animations_enabled());
        assert!(builtin_template("nope").is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, t) in TEMPLATES.iter().enumerate() {
            assert!(TEMPLATES[i + 1..].iter().all(|o| o.id != t.id), "duplicate {}", t.id);
        }
    }

    #[test]
    fn every_category_has_one_template() {
        let cats = categories();
        assert_eq!(cats.len(), 8);
        assert_eq!(cats[0], TemplateCategory::Elegant);
        for c in cats {
            assert_eq!(templates_by_category(c).len(), 1, "{c}");
        }
    }

    #[test]
    fn disabled_animation() {
        assert!(!builtin_template("minimal-modern").unwrap().animations_enabled());
    }
}
