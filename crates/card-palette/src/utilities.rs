//! Utility stylesheet generation: one CSS rule per (kind, family, intensity).
//!
//! Card pages build their class names at runtime (`bg-${color}`), so the CSS
//! framework cannot discover them by scanning sources. This module emits
//! every class the form can produce, straight from the catalog:
//!
//! ```text
//! 5 kinds × 15 families × 9 intensities = 675 rules
//! ```
//!
//! plus a few static extras (`hover:text-white` and the fade animations).
//! Sections are written kind by kind, families and intensities in catalog
//! order, so the output is byte-for-byte stable for a given catalog.

use std::fmt::{self, Write as _};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::palette::Intensity;

// ---------------------------------------------------------------------------
// UtilityKind
// ---------------------------------------------------------------------------

/// The kinds of utility class generated per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UtilityKind {
    Background,
    GradientVia,
    Text,
    Border,
    HoverBackground,
}

impl UtilityKind {
    /// All kinds, in stylesheet section order.
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::GradientVia,
        Self::Text,
        Self::Border,
        Self::HoverBackground,
    ];

    /// Class-name prefix: `bg`, `via`, `text`, `border`, `hover:bg`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::GradientVia => "via",
            Self::Text => "text",
            Self::Border => "border",
            Self::HoverBackground => "hover:bg",
        }
    }

    /// Section comment inside the utilities layer.
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Background => "Background colors",
            Self::GradientVia => "Gradient via colors",
            Self::Text => "Text colors",
            Self::Border => "Border colors",
            Self::HoverBackground => "Hover variants",
        }
    }
}

impl fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

// ---------------------------------------------------------------------------
// StyleRule
// ---------------------------------------------------------------------------

/// A single generated utility class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    pub kind: UtilityKind,
    /// Class name as written in markup, e.g. `hover:bg-pink-500`.
    pub class_name: String,
    pub hex: String,
}

impl StyleRule {
    #[must_use]
    pub fn new(kind: UtilityKind, family: &str, intensity: Intensity, hex: &str) -> Self {
        Self {
            kind,
            class_name: format!("{}-{family}-{intensity}", kind.prefix()),
            hex: hex.to_owned(),
        }
    }

    /// The CSS rule, without indentation.
    #[must_use]
    pub fn to_css(&self) -> String {
        let Self { class_name, hex, .. } = self;
        match self.kind {
            UtilityKind::Background => format!(".{class_name} {{ background-color: {hex}; }}"),
            UtilityKind::Text => format!(".{class_name} {{ color: {hex}; }}"),
            UtilityKind::Border => format!(".{class_name} {{ border-color: {hex}; }}"),
            UtilityKind::GradientVia => format!(
                ".{class_name} {{ --tw-gradient-stops: var(--tw-gradient-from), {hex} var(--tw-gradient-via-position), var(--tw-gradient-to); }}"
            ),
            UtilityKind::HoverBackground => {
                let escaped = class_name.replacen(':', "\\:", 1);
                format!(".{escaped}:hover {{ background-color: {hex}; }}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Every utility rule for `catalog`, in stylesheet order.
#[must_use]
pub fn generate_rules(catalog: &Catalog) -> Vec<StyleRule> {
    let mut rules = Vec::with_capacity(UtilityKind::ALL.len() * catalog.len() * Intensity::ALL.len());
    for kind in UtilityKind::ALL {
        for palette in catalog.palettes() {
            for variant in palette.variants() {
                rules.push(StyleRule::new(kind, &palette.name, variant.intensity, &variant.value));
            }
        }
    }
    debug!(rules = rules.len(), "generated utility rules");
    rules
}

/// Static rules appended after the generated sections.
pub const EXTRA_RULES: &[&str] = &[".hover\\:text-white:hover { color: #fff; }"];

const ANIMATIONS: &str = r"/* Fade animations used by the card page */
@layer utilities {
  /* Fade in */
  .animate-fade-in {
    animation: fadeIn 0.5s ease-in;
  }

  .animate-fade-in-up {
    animation: fadeInUp 0.5s ease-out;
  }

  .animate-delay-500 {
    animation-delay: 0.5s;
  }

  @keyframes fadeIn {
    from {
      opacity: 0;
    }
    to {
      opacity: 1;
    }
  }

  @keyframes fadeInUp {
    from {
      opacity: 0;
      transform: translateY(20px);
    }
    to {
      opacity: 1;
      transform: translateY(0);
    }
  }
}
";

/// The complete generated stylesheet.
#[must_use]
pub fn render_stylesheet(catalog: &Catalog) -> String {
    let rules = generate_rules(catalog);
    let mut out = String::with_capacity(rules.len() * 96 + ANIMATIONS.len() + 256);

    // `fmt::Write` for `String` never fails.
    let _ = writeln!(out, "@import \"tailwindcss\";");
    out.push('\n');
    let _ = writeln!(out, "/* Dynamic color safelist for the card generator */");
    let _ = writeln!(
        out,
        "/* {} palettes × {} variants × {} utilities = {} classes */",
        catalog.len(),
        Intensity::ALL.len(),
        UtilityKind::ALL.len(),
        rules.len()
    );
    out.push_str("@layer utilities {\n");

    for kind in UtilityKind::ALL {
        let _ = writeln!(out, "  /* {} */", kind.section_title());
        for rule in rules.iter().filter(|r| r.kind == kind) {
            let _ = writeln!(out, "  {}", rule.to_css());
        }
        out.push('\n');
    }

    for extra in EXTRA_RULES {
        let _ = writeln!(out, "  {extra}");
    }
    out.push_str("}\n\n");
    out.push_str(ANIMATIONS);
    out
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

    #[test]
    fn class_names_per_kind() {
        let names: Vec<String> = UtilityKind::ALL
            .iter()
            .map(|&k| StyleRule::new(k, "pink", Intensity::I500, "#ec4899").class_name)
            .collect();
        assert_eq!(
            names,
            vec!["bg-pink-500", "via-pink-500", "text-pink-500", "border-pink-500", "hover:bg-pink-500"]
        );
    }

    #[test]
    fn css_per_kind() {
        let css = |kind| StyleRule::new(kind, "sky", Intensity::I400, "#38bdf8").to_css();
        assert_eq!(css(UtilityKind::Background), ".bg-sky-400 { background-color: #38bdf8; }");
        assert_eq!(css(UtilityKind::Text), ".text-sky-400 { color: #38bdf8; }");
        assert_eq!(css(UtilityKind::Border), ".border-sky-400 { border-color: #38bdf8; }");
        assert_eq!(
            css(UtilityKind::GradientVia),
            ".via-sky-400 { --tw-gradient-stops: var(--tw-gradient-from), #38bdf8 var(--tw-gradient-via-position), var(--tw-gradient-to); }"
        );
        assert_eq!(
            css(UtilityKind::HoverBackground),
            ".hover\\:bg-sky-400:hover { background-color: #38bdf8; }"
        );
    }

    #[test]
    fn rules_are_grouped_by_kind_in_section_order() {
        let rules = generate_rules(&catalog());
        assert_eq!(rules.len(), 675);
        for (i, chunk) in rules.chunks(135).enumerate() {
            assert!(chunk.iter().all(|r| r.kind == UtilityKind::ALL[i]));
        }
        assert_eq!(rules[0].class_name, "bg-pink-100");
        assert_eq!(rules[674].class_name, "hover:bg-fuchsia-900");
    }

    #[test]
    fn stylesheet_shape() {
        let css = render_stylesheet(&catalog());
        assert!(css.starts_with("@import \"tailwindcss\";\n\n"));
        assert!(css.contains("/* 15 palettes × 9 variants × 5 utilities = 675 classes */"));
        assert!(css.contains("  .bg-pink-500 { background-color: #ec4899; }\n"));
        assert!(css.contains("  .hover\\:text-white:hover { color: #fff; }\n}\n"));
        assert!(css.contains("@keyframes fadeInUp"));
        assert_eq!(css.matches(" { background-color: ").count(), 15 * 9 * 2);
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn stylesheet_sections_in_order() {
        let css = render_stylesheet(&catalog());
        let positions: Vec<usize> = UtilityKind::ALL
            .iter()
            .map(|k| css.find(&format!("/* {} */", k.section_title())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stylesheet_is_stable() {
        assert_eq!(render_stylesheet(&catalog()), render_stylesheet(&catalog()));
    }
}
