//! Errors for strict palette generation.

use hw_color::ColorError;
use thiserror::Error;

/// Why a strict palette request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The base color did not parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The scheme name is not one of [`Scheme::all`](crate::Scheme::all).
    #[error("unknown scheme {name:?}")]
    UnknownScheme { name: String },
}
