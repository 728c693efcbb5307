//! Palette generation: from a base color and a scheme to concrete colors.
//!
//! The base is parsed and converted to HSL once. Each scheme entry is a new
//! HSL triple (saturation always carried over from the base), which is then
//! converted back to channels and hex to build a [`Color`].

use std::fmt;

use hw_color::{Hsl, Rgb, parse_color, try_parse_color};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::PaletteError;
use crate::scheme::{MAX_LIGHTNESS, MIN_LIGHTNESS, Scheme, Variation, normalize_hue};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// One palette entry in all three representations.
///
/// The only way to build one is [`Color::from_hsl`], and the fields are
/// read-only, so the hex string, channels and HSL always agree. `hsl` is
/// the triple the entry was derived from, not a re-conversion of `rgb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    /// Derive channels and hex from an HSL triple.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Build the palette for `scheme` around the hex color `base`.
///
/// This is the lenient entry point: an unparseable `base` is treated as
/// black, and an unrecognized `scheme` produces a single color: the base's
/// HSL re-encoded. HSL is integer, so that entry's hex and channels can
/// differ slightly from `base`. Use [`try_generate_palette`] to reject both instead.
///
/// ```
/// use hw_palette::generate_palette;
///
/// let palette = generate_palette("#ff0000", "complementary");
/// let hexes: Vec<&str> = palette.iter().map(|c| c.hex()).collect();
/// assert_eq!(hexes, ["#ff0000", "#00ffff"]);
/// ```
#[must_use]
pub fn generate_palette(base: &str, scheme: &str) -> Vec<Color> {
    let kind = Scheme::from_name(scheme);
    if kind.is_none() {
        debug!(scheme, "unrecognized scheme, palette is the base's HSL re-encoded");
    }
    palette_from_rgb(parse_color(base), kind)
}

/// Strict counterpart of [`generate_palette`].
///
/// # Errors
///
/// Returns [`PaletteError::Color`] if `base` is not a six-digit hex color,
/// or [`PaletteError::UnknownScheme`] if `scheme` names no scheme.
pub fn try_generate_palette(base: &str, scheme: &str) -> Result<Vec<Color>, PaletteError> {
    let rgb = try_parse_color(base)?;
    let kind: Scheme = scheme.parse()?;
    Ok(palette_from_rgb(rgb, Some(kind)))
}

/// Build a palette from channels already in hand.
///
/// `None` stands for an unrecognized scheme and yields one color built
/// from the base's HSL.
#[must_use]
pub fn palette_from_rgb(base: Rgb, scheme: Option<Scheme>) -> Vec<Color> {
    let base_hsl = base.to_hsl();
    let points: Vec<Hsl> = match scheme.map(Scheme::variation) {
        Some(Variation::Hue(offsets)) => offsets
            .iter()
            .map(|&offset| rotate(base_hsl, offset))
            .collect(),
        // Hue is carried over untouched, so it is never normalized here.
        Some(Variation::Lightness(steps)) => steps
            .iter()
            .map(|&step| Hsl { l: shift_lightness(base_hsl.l, step), ..base_hsl })
            .collect(),
        None => vec![rotate(base_hsl, 0)],
    };

    trace!(
        base = %base_hsl,
        scheme = scheme.map_or("identity", Scheme::name),
        entries = points.len(),
        "generated palette"
    );

    points.into_iter().map(Color::from_hsl).collect()
}

fn rotate(hsl: Hsl, offset: i32) -> Hsl {
    Hsl {
        h: normalize_hue(i32::from(hsl.h) + offset),
        ..hsl
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shift_lightness(l: u8, step: i32) -> u8 {
    // The clamp keeps the value inside u8.
    (i32::from(l) + step).clamp(i32::from(MIN_LIGHTNESS), i32::from(MAX_LIGHTNESS)) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
