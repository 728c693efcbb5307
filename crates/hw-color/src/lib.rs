// SPDX-License-Identifier: MIT
//
// hw-color: Color representations for huewheel.
//
// Three views of the same sRGB color: a `#rrggbb` hex string, an 8-bit
// channel triple, and an integer HSL triple. Everything here is a pure
// function over small `Copy` values; nothing allocates except the hex
// encoder's output string.
//
//   "#3366cc" ──parse──▶ Rgb(51, 102, 204) ──to_hsl──▶ Hsl(220, 60, 50)
//       ▲                     │    ▲                        │
//       └────────encode───────┘    └─────────to_rgb─────────┘
//
// Parsing is lenient by default (malformed input becomes black). The
// `try_` variants surface the same failure as a `ColorError` instead.

pub mod error;
pub mod hex;
pub mod hsl;
pub mod rgb;

pub use error::ColorError;
pub use hex::{encode_hex, parse_color, try_parse_color};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use rgb::Rgb;
