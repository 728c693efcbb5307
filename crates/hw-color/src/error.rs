// SPDX-License-Identifier: MIT
//
// Errors for the strict parsing path. The lenient functions never fail.

use thiserror::Error;

/// Failure to interpret a string as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not an optional `#` followed by exactly six hex digits.
    #[error("invalid hex color {input:?}: expected six hex digits with an optional leading '#'")]
    InvalidHex { input: String },
}

impl ColorError {
    pub(crate) fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
