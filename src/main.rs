// SPDX-License-Identifier: MIT
//
// cardkit — the color engine of the birthday card generator.
//
// This is the main binary that wires together the crates:
//
//   card-color   → hex parsing, RGB values, sRGB linearization
//   card-palette → contrast math, the palette catalog, form selections,
//                  utility stylesheet generation, card templates
//
// Startup builds the palette catalog exactly once. A malformed entry in the
// literal table stops the process before any command runs; afterwards every
// command only reads the catalog.
//
//   args → logging → Catalog::build() → subcommand(&catalog, stdout)

use std::io::{self, IsTerminal};
use std::process;

use anyhow::Context;
use card_palette::Catalog;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {err}");
        process::exit(1);
    }

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = Catalog::build().context("palette table is invalid")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Utilities(args) => commands::run_utilities(&catalog, &args, &mut out),
        Command::Palettes(args) => commands::run_palettes(&catalog, &args, &mut out),
        Command::Contrast(args) => commands::run_contrast(&args, &mut out),
        Command::Resolve(args) => commands::run_resolve(&catalog, &args, &mut out),
        Command::Templates(args) => commands::run_templates(&catalog, &args, &mut out),
    }
}

/// Explicit -v/-q flags win over the environment filter.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    }
}
