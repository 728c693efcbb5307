// SPDX-License-Identifier: MIT
//
// Hex parsing and encoding.
//
// Only the six-digit form is accepted: an optional `#` followed by three
// case-insensitive hex pairs. Shorthand (`#abc`), alpha (`#rrggbbaa`) and
// surrounding whitespace are all rejected. The lenient parser turns a
// rejection into black without any signal to the caller.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ColorError;
use crate::rgb::Rgb;

// ─── Parsing ─────────────────────────────────────────────────────────────────

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex color pattern is a valid regex")
});

fn match_hex(s: &str) -> Option<Rgb> {
    let caps = HEX_COLOR.captures(s)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Parse `#rrggbb` or `rrggbb` (any case) into channels.
///
/// Anything else, including the empty string and the three-digit
/// shorthand, yields [`Rgb::BLACK`]. A black result therefore does not
/// imply the input was valid; use [`try_parse_color`] to tell the two apart.
#[must_use]
pub fn parse_color(hex: &str) -> Rgb {
    match_hex(hex).unwrap_or_else(|| {
        debug!(input = hex, "unparseable hex color, falling back to black");
        Rgb::BLACK
    })
}

/// Strict counterpart of [`parse_color`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] when `hex` does not match the
/// six-digit pattern.
pub fn try_parse_color(hex: &str) -> Result<Rgb, ColorError> {
    match_hex(hex).ok_or_else(|| ColorError::invalid_hex(hex))
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Render channels as lowercase `#rrggbb`, zero-padding each pair.
#[must_use]
pub fn encode_hex(rgb: Rgb) -> String {
    let Rgb { r, g, b } = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
