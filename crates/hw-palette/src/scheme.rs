//! Harmony schemes: which hues or lightness steps a palette visits.
//!
//! Hue schemes rotate the base hue by fixed offsets and keep lightness.
//! Monochromatic keeps the hue and walks lightness instead. In both cases
//! the order of the offsets is the order of the resulting palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Lightness deltas for [`Scheme::Monochromatic`], darkest first.
pub const MONOCHROMATIC_STEPS: [i32; 5] = [-20, -10, 0, 10, 20];

/// Lower bound applied to monochromatic lightness.
pub const MIN_LIGHTNESS: u8 = 10;

/// Upper bound applied to monochromatic lightness.
pub const MAX_LIGHTNESS: u8 = 90;

/// A named color-harmony rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// Base and its opposite (2 colors).
    Complementary,
    /// Neighbors 30 degrees either side of the base (3 colors).
    Analogous,
    /// 120-degree spacing (3 colors).
    Triadic,
    /// Base plus the two hues flanking its complement (3 colors).
    SplitComplementary,
    /// 90-degree spacing (4 colors).
    Tetradic,
    /// Base hue at five lightness levels (5 colors).
    Monochromatic,
}

/// How a scheme derives its entries from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    /// Degrees added to the base hue, one entry per offset.
    Hue(&'static [i32]),
    /// Percentage points added to the base lightness, one entry per step.
    Lightness(&'static [i32]),
}

impl Scheme {
    /// Name used on the command line and in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Tetradic,
            Self::Monochromatic,
        ]
    }

    /// The offsets this scheme applies, in output order.
    #[must_use]
    pub const fn variation(self) -> Variation {
        match self {
            Self::Complementary => Variation::Hue(&[0, 180]),
            Self::Analogous => Variation::Hue(&[-30, 0, 30]),
            Self::Triadic => Variation::Hue(&[0, 120, 240]),
            Self::SplitComplementary => Variation::Hue(&[0, 150, 210]),
            Self::Tetradic => Variation::Hue(&[0, 90, 180, 270]),
            Self::Monochromatic => Variation::Lightness(&MONOCHROMATIC_STEPS),
        }
    }

    /// Number of colors a palette of this scheme contains.
    #[must_use]
    pub const fn entry_count(self) -> usize {
        match self.variation() {
            Variation::Hue(steps) | Variation::Lightness(steps) => steps.len(),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownScheme {
            name: s.to_string(),
        })
    }
}

/// Wrap any hue into [0, 360) with floored modulo, so negatives wrap upward.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn normalize_hue(h: i32) -> u16 {
    h.rem_euclid(360) as u16
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
