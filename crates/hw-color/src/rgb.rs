// SPDX-License-Identifier: MIT
//
// 8-bit sRGB channel triple.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hex::{encode_hex, parse_color, try_parse_color};
use crate::hsl::{Hsl, rgb_to_hsl};

/// Red, green and blue intensity, each 0–255.
///
/// The `u8` channels make the range structural: anything that produces an
/// `Rgb` (the hex parser, [`Hsl::to_rgb`]) has already constrained it.
///
/// ```
/// use hw_color::Rgb;
///
/// let blue = Rgb::from_hex("#3366cc");
/// assert_eq!(blue, Rgb::new(51, 102, 204));
/// assert_eq!(blue.to_hex(), "#3366cc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, also the fallback for unparseable hex input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional), falling back to black.
    ///
    /// See [`parse_color`].
    #[must_use]
    pub fn from_hex(s: &str) -> Self {
        parse_color(s)
    }

    /// Strict counterpart of [`from_hex`](Self::from_hex).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] when `s` is not a six-digit hex color.
    pub fn try_from_hex(s: &str) -> Result<Self, ColorError> {
        try_parse_color(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        encode_hex(self)
    }

    /// Convert to integer HSL. See [`rgb_to_hsl`].
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Channels as fractions of full intensity.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
