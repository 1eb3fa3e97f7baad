// SPDX-License-Identifier: MIT
//
// Subcommand implementations. Each takes the prebuilt catalog and an output
// writer, so the same code serves stdout, files, and tests.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use card_color::Rgb;
use card_palette::contrast::{compliance_level, contrast_ratio, round_ratio};
use card_palette::template::{self, CardTemplate};
use card_palette::utilities::render_stylesheet;
use card_palette::{Catalog, ColorSelection, Intensity, Theme};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tracing::info;

use crate::cli::{
    ContrastArgs, OutputFormatArg, PalettesArgs, ResolveArgs, TemplatesArgs, UtilitiesArgs,
};

// ─── utilities ──────────────────────────────────────────────────────────────

pub fn run_utilities(catalog: &Catalog, args: &UtilitiesArgs, out: &mut impl Write) -> Result<()> {
    let css = render_stylesheet(catalog);
    match &args.output {
        Some(path) => {
            fs::write(path, &css).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = css.len(), "wrote utility stylesheet");
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => out.write_all(css.as_bytes())?,
    }
    Ok(())
}

// ─── palettes ───────────────────────────────────────────────────────────────

pub fn run_palettes(catalog: &Catalog, args: &PalettesArgs, out: &mut impl Write) -> Result<()> {
    let theme = Theme::from(args.theme);
    if args.format == OutputFormatArg::Json {
        let palettes: Vec<_> = catalog.palettes().collect();
        serde_json::to_writer_pretty(&mut *out, &palettes)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut header = vec!["Family".to_owned(), "Name".to_owned(), format!("Rec. ({theme})")];
    header.extend(Intensity::ALL.iter().map(ToString::to_string));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for palette in catalog.palettes() {
        let mut row = vec![
            palette.name.clone(),
            palette.display_name.clone(),
            palette.recommended.for_theme(theme).to_string(),
        ];
        row.extend(palette.variants().map(|v| {
            let (ratio, passes) = match theme {
                Theme::Light => (v.contrast.on_white, v.contrast.meets_aa_on_white),
                Theme::Dark => (v.contrast.on_black, v.contrast.meets_aa_on_black),
            };
            let badge = if passes { " AA" } else { "" };
            format!("{}\n{ratio:.2}{badge}", v.value)
        }));
        table.add_row(row);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

// ─── contrast ───────────────────────────────────────────────────────────────

pub fn run_contrast(args: &ContrastArgs, out: &mut impl Write) -> Result<()> {
    let fg = Rgb::from_hex(&args.foreground).context("foreground")?;
    let bg = Rgb::from_hex(&args.background).context("background")?;
    let ratio = contrast_ratio(fg, bg);
    let level = compliance_level(ratio, args.large_text);
    let size = if args.large_text { "large" } else { "normal" };
    writeln!(out, "{fg} on {bg}: {:.2}:1, {level} ({size} text)", round_ratio(ratio))?;
    Ok(())
}

// ─── resolve ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveReport<'a> {
    selection: String,
    hex: &'a str,
    fell_back: bool,
    classes: card_palette::CardColorClasses,
}

pub fn run_resolve(catalog: &Catalog, args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let selection = ColorSelection::from_value(&args.value);
    let Some(resolved) = selection.resolve(catalog) else {
        bail!("catalog has no fallback family to resolve {:?}", args.value);
    };
    let effective = resolved.selection();
    let report = ResolveReport {
        selection: effective.to_string(),
        hex: resolved.hex(),
        fell_back: resolved.fell_back,
        classes: effective.classes(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

// ─── templates ──────────────────────────────────────────────────────────────

pub fn run_templates(catalog: &Catalog, args: &TemplatesArgs, out: &mut impl Write) -> Result<()> {
    let selected: Vec<&CardTemplate> = match args.category.as_deref() {
        None => template::templates().iter().collect(),
        Some(name) => {
            let Some(category) = template::categories().into_iter().find(|c| c.as_str() == name)
            else {
                let known: Vec<_> = template::categories().iter().map(ToString::to_string).collect();
                bail!("unknown template category {name:?} (known: {})", known.join(", "));
            };
            template::templates_by_category(category)
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Name", "Category", "Color", "Hex", "Font"]);

    for t in selected {
        let hex = t
            .selection()
            .and_then(|s| s.resolve(catalog).map(|r| r.hex().to_owned()))
            .unwrap_or_default();
        table.add_row(vec![
            t.id.to_owned(),
            t.name.to_owned(),
            t.category.to_string(),
            t.color_palette.to_owned(),
            hex,
            format!("{} {}", t.font, t.font_weight),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}
