// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion with integer results.
//
// Both directions normalize to [0, 1], do all arithmetic in f64, and round
// exactly once at the end. The expression order below is part of the
// contract: reordering or fusing operations moves values across .5
// rounding boundaries and changes the integer output.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue in whole degrees, saturation and lightness in whole percent.
///
/// Values produced by [`rgb_to_hsl`] have `s` and `l` in 0–100 and `h` in
/// 0–360. The hue is rounded, not wrapped, so 360 can appear for reds just
/// below the wrap point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Whether the color is a gray.
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s == 0
    }

    /// Convert to channels. See [`hsl_to_rgb`].
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert channels to integer HSL.
///
/// Grays get hue 0 and saturation 0. For chromatic colors the hue sector is
/// chosen by whichever channel holds the maximum, tested red, then green,
/// then blue; on a tie the earlier channel wins.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0, 0, round_u8(l * 100.0));
    }

    let d = max - min;
    // l == 0.5 takes the second branch.
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    Hsl::new(round_u16(h * 360.0), round_u8(s * 100.0), round_u8(l * 100.0))
}

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert integer HSL to channels.
///
/// Inputs are not validated. A hue offset is wrapped by a single ±1 turn,
/// so hues of 720° or more land outside the lookup and resolve to the
/// darkest channel value; saturation or lightness above 100 saturate the
/// channels at 0 or 255.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if hsl.is_achromatic() {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise channel ramp over one hue turn, breakpoints at 1/6, 1/2, 2/3.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── Rounding ────────────────────────────────────────────────────────────────
//
// `as` saturates on overflow and maps negatives to zero, which is the
// documented behavior for out-of-range HSL input.

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_u8(v: f64) -> u8 {
    v.round() as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_u16(v: f64) -> u16 {
    v.round() as u16
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn channel_diff(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test_case((255, 0, 0), (0, 100, 50) ; "red")]
    #[test_case((0, 128, 0), (120, 100, 25) ; "dark green")]
    #[test_case((51, 102, 204), (220, 60, 50) ; "slate blue")]
    #[test_case((18, 52, 86), (210, 65, 20) ; "navy")]
    #[test_case((250, 128, 114), (6, 93, 71) ; "salmon")]
    #[test_case((75, 0, 130), (275, 100, 25) ; "indigo")]
    #[test_case((255, 128, 128), (0, 100, 75) ; "light red uses upper saturation branch")]
    #[test_case((255, 128, 0), (30, 100, 50) ; "orange")]
    fn rgb_to_hsl_known_values(rgb: (u8, u8, u8), hsl: (u16, u8, u8)) {
        assert_eq!(rgb_to_hsl(Rgb::from(rgb)), Hsl::new(hsl.0, hsl.1, hsl.2));
    }

    #[test_case((0, 0, 0), 0 ; "black")]
    #[test_case((255, 255, 255), 100 ; "white")]
    #[test_case((127, 127, 127), 50 ; "mid gray")]
    #[test_case((26, 26, 26), 10 ; "near black")]
    fn grays_have_no_hue_or_saturation(rgb: (u8, u8, u8), lightness: u8) {
        assert_eq!(rgb_to_hsl(Rgb::from(rgb)), Hsl::new(0, 0, lightness));
    }

    /// Two channels sharing the maximum resolve to the expected sector.
    #[test_case((255, 255, 0), 60 ; "red and green tie")]
    #[test_case((255, 0, 255), 300 ; "red and blue tie")]
    #[test_case((0, 255, 255), 180 ; "green and blue tie")]
    fn tied_maximum(rgb: (u8, u8, u8), hue: u16) {
        assert_eq!(rgb_to_hsl(Rgb::from(rgb)).h, hue);
    }

    /// Hue is rounded, not wrapped, so a red leaning blue rounds up to 360.
    #[test]
    fn hue_can_round_to_360() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 1)), Hsl::new(360, 100, 50));
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test_case((0, 100, 50), (255, 0, 0) ; "red")]
    #[test_case((180, 100, 50), (0, 255, 255) ; "cyan")]
    #[test_case((220, 60, 50), (51, 102, 204) ; "slate blue")]
    #[test_case((340, 60, 50), (204, 51, 102) ; "raspberry")]
    #[test_case((100, 60, 50), (102, 204, 51) ; "leaf")]
    #[test_case((210, 65, 20), (18, 51, 84) ; "navy")]
    #[test_case((360, 100, 50), (255, 0, 0) ; "full turn is red")]
    #[test_case((0, 100, 0), (0, 0, 0) ; "zero lightness")]
    #[test_case((0, 100, 100), (255, 255, 255) ; "full lightness")]
    #[test_case((0, 0, 50), (128, 128, 128) ; "achromatic")]
    fn hsl_to_rgb_known_values(hsl: (u16, u8, u8), rgb: (u8, u8, u8)) {
        assert_eq!(hsl_to_rgb(Hsl::new(hsl.0, hsl.1, hsl.2)), Rgb::from(rgb));
    }

    /// The hue offset wraps once, so two full turns fall off the ramp.
    #[test]
    fn hue_wraps_only_once() {
        assert_eq!(hsl_to_rgb(Hsl::new(720, 100, 50)), Rgb::BLACK);
    }

    #[test]
    fn out_of_range_percentages_saturate() {
        assert_eq!(hsl_to_rgb(Hsl::new(0, 200, 50)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 100, 200)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn ramp_breakpoints() {
        let (p, q) = (0.2, 0.8);
        assert!((hue_to_channel(p, q, 0.0) - p).abs() < 1e-12);
        assert!((hue_to_channel(p, q, 0.3) - q).abs() < 1e-12);
        assert!((hue_to_channel(p, q, 0.9) - p).abs() < 1e-12);
        assert!((hue_to_channel(p, q, -0.7) - q).abs() < 1e-12);
        assert!((hue_to_channel(p, q, 1.1) - hue_to_channel(p, q, 0.1)).abs() < 1e-12);
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    /// Grays only lose lightness precision: at most one step per channel.
    #[test]
    fn gray_roundtrip_within_one() {
        for v in 0..=u8::MAX {
            let gray = Rgb::new(v, v, v);
            let back = rgb_to_hsl(gray).to_rgb();
            assert!(channel_diff(gray, back) <= 1, "{gray} came back as {back}");
        }
    }

    /// Whole-percent saturation and lightness bound the chromatic error.
    #[test]
    fn roundtrip_error_is_bounded() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let rgb = Rgb::new(r, g, b);
                    let back = rgb_to_hsl(rgb).to_rgb();
                    assert!(channel_diff(rgb, back) <= 5, "{rgb} came back as {back}");
                }
            }
        }
    }

    #[test]
    fn primaries_roundtrip_exactly() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(51, 102, 204),
        ] {
            assert_eq!(rgb_to_hsl(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn display_uses_percent_signs() {
        assert_eq!(Hsl::new(220, 60, 50).to_string(), "hsl(220, 60%, 50%)");
    }
}
