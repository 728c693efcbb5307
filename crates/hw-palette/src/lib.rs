//! # hw-palette: color-harmony palettes from a single base color
//!
//! Given a hex color and a scheme name, produces an ordered list of related
//! colors, each carried as hex, RGB and HSL at once.
//!
//! # Architecture
//!
//! ```text
//! "#3366cc" + "triadic"
//!     │
//!     ▼
//! hw-color:   parse hex → Rgb → Hsl (220, 60, 50)
//!     │
//!     ▼
//! scheme.rs:  hue offsets [0, 120, 240] or lightness steps
//!     │
//!     ▼
//! palette.rs: one Hsl per offset → Rgb → hex → Color
//! ```
//!
//! Generation is a pure function of its inputs: no caching, no shared
//! state, safe to call from any number of threads.
//!
//! Unrecognized scheme names and unparseable colors do not fail by
//! default. [`generate_palette`] returns one color, the base's HSL
//! re-encoded, for an unknown scheme and treats a bad color as black;
//! [`try_generate_palette`] reports both as [`PaletteError`].

pub mod error;
pub mod palette;
pub mod scheme;

pub use error::PaletteError;
pub use palette::{Color, generate_palette, palette_from_rgb, try_generate_palette};
pub use scheme::{Scheme, Variation, normalize_hue};
