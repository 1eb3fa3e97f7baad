//! # card-palette — color families and accessibility metrics for cardkit
//!
//! The color engine behind the birthday card form. A fixed table of fifteen
//! color families, nine intensities each, is turned into an immutable
//! catalog with WCAG 2.1 contrast metrics precomputed for every variant.
//!
//! # Architecture
//!
//! ```text
//! builtin.rs:   literal family table (hex + rgb, recommendations)
//!     │
//!     ▼
//! contrast.rs:  luminance, contrast ratio, AA/AAA classification
//!     │
//!     ▼
//! catalog.rs:   validate + build Catalog (all-or-nothing)
//!     │
//!     ├──► selection.rs:  form values (`bg-pink-500`) → catalog colors
//!     ├──► utilities.rs:  675 utility rules → stylesheet
//!     └──► template.rs:   predesigned cards referencing catalog colors
//! ```
//!
//! Nothing here performs I/O or holds global state. Build a [`Catalog`] once
//! and share it by reference.

// Color-science formulas read best with their single-letter names.
#![allow(clippy::many_single_char_names)]
// Intensity discriminants are 0..9; the cast to u16 is lossless.
#![allow(clippy::cast_possible_truncation)]

pub mod builtin;
pub mod catalog;
pub mod contrast;
pub mod palette;
pub mod selection;
pub mod template;
pub mod utilities;

pub use catalog::{Catalog, CatalogError};
pub use contrast::{Compliance, ContrastProfile};
pub use palette::{ColorPalette, Intensity, PaletteVariant, Recommended, Theme};
pub use selection::{CardColorClasses, ColorSelection};
pub use utilities::{StyleRule, UtilityKind};
