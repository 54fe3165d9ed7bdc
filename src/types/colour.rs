//! Packed colour type and hex-token parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PxedError, Result};

/// A 16-bit packed colour: red in the top 5 bits, green in the middle 6,
/// blue in the low 5 (RGB565).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Black (all bits clear).
    pub const BLACK: Self = Self(0x0000);

    /// White (all bits set).
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack 8-bit channels into 5/6/5 bits, truncating the low bits.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }

    /// Unpack to 8-bit channels.
    ///
    /// Re-packing the result reproduces `self` exactly; the opposite
    /// direction is lossy within channel quantization.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = (((self.0 >> 11) & 0x1F) << 3) as u8;
        let g = (((self.0 >> 5) & 0x3F) << 2) as u8;
        let b = ((self.0 & 0x1F) << 3) as u8;
        (r, g, b)
    }

    /// The raw packed value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl FromStr for Rgb565 {
    type Err = PxedError;

    /// Parse one token of the hex-text surface.
    ///
    /// Accepts an optional `0x`/`0X` prefix around a hexadecimal value in
    /// `0x0000..=0xFFFF`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let hex = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if hex.is_empty() {
            return Err(PxedError::InvalidToken {
                token: token.to_string(),
                help: Some("Expected a hex value like 0x001F".to_string()),
            });
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| PxedError::InvalidToken {
            token: token.to_string(),
            help: Some("Tokens must be hexadecimal, e.g. 0x07E0".to_string()),
        })?;

        if value > 0xFFFF {
            return Err(PxedError::InvalidToken {
                token: token.to_string(),
                help: Some("Packed colours are 16-bit: 0x0000..=0xFFFF".to_string()),
            });
        }

        Ok(Self(value as u16))
    }
}
