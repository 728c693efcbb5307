// SPDX-License-Identifier: MIT
//
// huewheel: color-harmony palettes from the command line.
//
// A thin wrapper over the library crates:
//
//   hw-color   → hex parsing/encoding, RGB ↔ HSL conversion
//   hw-palette → scheme table, palette generation
//
// Each invocation flows through:
//
//   argv → args::Cli (clap) → Invocation → render → stdout
//
// Diagnostics go to stderr through `tracing`, filtered by HUEWHEEL_LOG
// (default `warn`).

mod args;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use hw_color::{Rgb, try_parse_color};
use hw_palette::{Color, PaletteError, Scheme, palette_from_rgb, try_generate_palette};
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use args::{Cli, Format, Invocation, Options};

const LOG_ENV: &str = "HUEWHEEL_LOG";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Produce the full stdout text for an invocation.
fn render(invocation: &Invocation) -> Result<String, RunError> {
    match invocation {
        Invocation::List { format } => render_schemes(*format),
        Invocation::Palette(options) => {
            let palette = palette_for(options)?;
            render_palette(&palette, options.format)
        }
    }
}

/// Generate the requested palette, honoring `--strict`.
///
/// In lenient mode the library silently falls back; the fallbacks are
/// surfaced here as warnings so the user can tell black-by-default from
/// an actual black.
fn palette_for(options: &Options) -> Result<Vec<Color>, PaletteError> {
    if options.strict {
        return try_generate_palette(&options.color, &options.scheme);
    }
    let rgb = try_parse_color(&options.color).unwrap_or_else(|e| {
        warn!("{e}; using #000000");
        Rgb::BLACK
    });
    let scheme = Scheme::from_name(&options.scheme);
    if scheme.is_none() {
        warn!(scheme = %options.scheme, "unknown scheme; returning the base's HSL re-encoded");
    }
    Ok(palette_from_rgb(rgb, scheme))
}

fn render_palette(palette: &[Color], format: Format) -> Result<String, RunError> {
    match format {
        Format::Text => Ok(palette
            .iter()
            .map(|c| format!("{}  {}  {}\n", c.hex(), c.rgb(), c.hsl()))
            .collect()),
        Format::Json => Ok(serde_json::to_string_pretty(palette)? + "\n"),
    }
}

fn render_schemes(format: Format) -> Result<String, RunError> {
    match format {
        Format::Text => Ok(Scheme::all()
            .iter()
            .map(|s| format!("{:<20} {}\n", s.name(), s.entry_count()))
            .collect()),
        Format::Json => {
            let entries: Vec<_> = Scheme::all()
                .iter()
                .map(|s| json!({ "name": s, "colors": s.entry_count() }))
                .collect();
            Ok(serde_json::to_string_pretty(&entries)? + "\n")
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    init_tracing();

    let invocation = Cli::parse().into_invocation();

    let output = render(&invocation).unwrap_or_else(|e| {
        eprintln!("huewheel: {e}");
        process::exit(1);
    });

    if let Err(e) = io::stdout().lock().write_all(output.as_bytes()) {
        // A closed pipe (e.g. `| head`) is not worth reporting.
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("huewheel: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hw_color::ColorError;
    use pretty_assertions::assert_eq;

    fn options(color: &str, scheme: &str, strict: bool, format: Format) -> Invocation {
        Invocation::Palette(Options {
            color: color.to_string(),
            scheme: scheme.to_string(),
            strict,
            format,
        })
    }

    #[test]
    fn text_palette() {
        let out = render(&options("#3366cc", "triadic", false, Format::Text)).unwrap();
        assert_eq!(
            out,
            "#3366cc  rgb(51, 102, 204)  hsl(220, 60%, 50%)\n\
             #cc3366  rgb(204, 51, 102)  hsl(340, 60%, 50%)\n\
             #66cc33  rgb(102, 204, 51)  hsl(100, 60%, 50%)\n"
        );
    }

    #[test]
    fn json_palette() {
        let out = render(&options("ff0000", "complementary", false, Format::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([
                { "hex": "#ff0000", "rgb": { "r": 255, "g": 0, "b": 0 }, "hsl": { "h": 0, "s": 100, "l": 50 } },
                { "hex": "#00ffff", "rgb": { "r": 0, "g": 255, "b": 255 }, "hsl": { "h": 180, "s": 100, "l": 50 } },
            ])
        );
    }

    /// Lenient mode keeps going with the fallbacks.
    #[test]
    fn lenient_fallbacks() {
        let out = render(&options("nope", "pastel", false, Format::Text)).unwrap();
        assert_eq!(out, "#000000  rgb(0, 0, 0)  hsl(0, 0%, 0%)\n");
    }

    #[test]
    fn strict_errors() {
        let err = render(&options("nope", "triadic", true, Format::Text)).unwrap_err();
        assert!(matches!(
            err,
            RunError::Palette(PaletteError::Color(ColorError::InvalidHex { .. }))
        ));

        let err = render(&options("#ff0000", "pastel", true, Format::Text)).unwrap_err();
        assert_eq!(err.to_string(), "unknown scheme \"pastel\"");
    }

    #[test]
    fn scheme_list() {
        let out = render(&Invocation::List { format: Format::Text }).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), Scheme::all().len());
        assert_eq!(lines[0], format!("{:<20} 2", "complementary"));
        assert_eq!(lines[5], format!("{:<20} 5", "monochromatic"));

        let out = render(&Invocation::List { format: Format::Json }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[3], json!({ "name": "split-complementary", "colors": 3 }));
    }

    /// The single fallback entry is the base's HSL re-encoded, which need
    /// not match the input hex.
    #[test]
    fn lenient_unknown_scheme_reencodes_base_hsl() {
        let out = render(&options("#02e4e6", "pastel", false, Format::Text)).unwrap();
        assert_eq!(out, "#02dfe3  rgb(2, 223, 227)  hsl(181, 98%, 45%)\n");
    }
}
