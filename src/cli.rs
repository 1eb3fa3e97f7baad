// SPDX-License-Identifier: MIT
//
// Command-line definitions for cardkit.

use std::path::PathBuf;

use card_palette::Theme;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "cardkit",
    version,
    about = "Birthday card color engine",
    long_about = "Inspect the birthday card color palettes and generate the utility stylesheet.\n\n\
                  Every palette variant carries its WCAG 2.1 contrast against white and black."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the color utility stylesheet (675 classes plus extras).
    Utilities(UtilitiesArgs),

    /// List palettes with their recommended intensity and contrast.
    Palettes(PalettesArgs),

    /// Contrast ratio and WCAG level of two hex colors.
    Contrast(ContrastArgs),

    /// Resolve a form color value such as `bg-pink-500`.
    Resolve(ResolveArgs),

    /// List the predesigned card templates.
    Templates(TemplatesArgs),
}

#[derive(Args)]
pub struct UtilitiesArgs {
    /// Output file (stdout when omitted).
    #[arg(long, short, value_name = "PATH", env = "CARDKIT_UTILITIES_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PalettesArgs {
    /// Background theme the contrast badges are computed for.
    #[arg(long, value_enum, default_value = "light")]
    pub theme: ThemeArg,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ContrastArgs {
    /// Text color, `#rrggbb`.
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color, `#rrggbb`.
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Use the large-text thresholds (>= 18pt, or >= 14pt bold).
    #[arg(long = "large-text")]
    pub large_text: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Picker value, e.g. `bg-teal-600`.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Args)]
pub struct TemplatesArgs {
    /// Only templates of this category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
