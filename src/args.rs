// SPDX-License-Identifier: MIT
//
// Command-line options.
//
//   huewheel [--strict] [--json | --format <text|json>] [-s <scheme>] <color> [scheme]
//   huewheel --list [--json]
//
// `clap` handles `--help`, `--version`, `--opt=value` and `--`; usage
// errors exit with status 2 before any palette work happens.

use clap::{Parser, ValueEnum};

/// Scheme used when none is given.
pub const DEFAULT_SCHEME: &str = "complementary";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One color per line: hex, rgb(...), hsl(...).
    #[default]
    Text,
    /// A JSON array.
    Json,
}

/// More info: <https://docs.rs/clap/latest/clap/_derive/index.html>
#[derive(Debug, Parser)]
#[command(name = "huewheel", bin_name = "huewheel", version)]
#[command(about = "Color-harmony palettes from a single hex color")]
#[command(after_help = "Environment:\n  HUEWHEEL_LOG  tracing filter, e.g. debug (default: warn)")]
pub struct Cli {
    /// Six-digit hex color, with or without '#'.
    #[arg(required_unless_present = "list")]
    pub color: Option<String>,

    /// complementary (default), analogous, triadic, split-complementary,
    /// tetradic or monochromatic.
    pub scheme: Option<String>,

    /// Scheme, instead of the positional argument.
    #[arg(short = 's', long = "scheme", value_name = "NAME", conflicts_with = "scheme")]
    pub scheme_flag: Option<String>,

    /// Fail on an invalid color or unknown scheme instead of falling back.
    #[arg(long)]
    pub strict: bool,

    /// Same as `--format json`.
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// List schemes and how many colors each produces.
    #[arg(long, conflicts_with_all = ["color", "scheme", "scheme_flag", "strict"])]
    pub list: bool,
}

/// Settings for a palette request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub color: String,
    pub scheme: String,
    /// Reject bad colors and unknown schemes instead of falling back.
    pub strict: bool,
    pub format: Format,
}

/// What the user asked the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    List { format: Format },
    Palette(Options),
}

impl Cli {
    const fn format(&self) -> Format {
        if self.json { Format::Json } else { self.format }
    }

    /// Resolve flags and positionals into a single request.
    #[must_use]
    pub fn into_invocation(self) -> Invocation {
        let format = self.format();
        if self.list {
            return Invocation::List { format };
        }
        Invocation::Palette(Options {
            // `required_unless_present` guarantees a color outside `--list`.
            color: self.color.unwrap_or_default(),
            scheme: self
                .scheme_flag
                .or(self.scheme)
                .unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            strict: self.strict,
            format,
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
