//! Hexadecimal text forms of [`Rgb`]
//!
//! Accepted inputs, after an optional `#`, `0x` or `0X` prefix:
//!
//! | digits | layout                     |
//! |--------|----------------------------|
//! | 3      | `RGB`, 4 bits per channel  |
//! | 4      | `RGB` 5-6-5 packed in 16 bits |
//! | 6      | `RRGGBB`, opaque           |
//! | 8      | `AARRGGBB`                 |

use std::str::FromStr;

use tracing::warn;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Parse a hex color, rejecting anything malformed
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::HexDigit {
            input: input.to_owned(),
        });
    }

    let len = digits.len();
    let value = match len {
        3 | 4 | 6 | 8 => u32::from_str_radix(digits, 16).map_err(|_| Error::HexDigit {
            input: input.to_owned(),
        })?,
        _ => {
            return Err(Error::HexLength {
                input: input.to_owned(),
                len,
            });
        }
    };

    Ok(match len {
        3 => Rgb::opaque(
            ((value >> 8) & 0xf) as f32 / 15.0,
            ((value >> 4) & 0xf) as f32 / 15.0,
            (value & 0xf) as f32 / 15.0,
        ),
        4 => Rgb::opaque(
            ((value >> 11) & 0x1f) as f32 / 31.0,
            ((value >> 5) & 0x3f) as f32 / 63.0,
            (value & 0x1f) as f32 / 31.0,
        ),
        6 => Rgb::from_hex_int(0xff00_0000 | value),
        _ => Rgb::from_hex_int(value),
    })
}

/// `0xAARRGGBB`, uppercase, saturating
pub fn to_hex_string(c: &Rgb) -> String {
    format!("0x{:08X}", c.to_hex_int_sat())
}

/// `#RRGGBB`, uppercase, saturating, alpha dropped
pub fn to_hex_web(c: &Rgb) -> String {
    format!("#{:06X}", c.to_hex_int_sat() & 0x00ff_ffff)
}

impl Rgb {
    /// Parse a hex color, falling back to opaque white on bad input
    pub fn from_hex_str(input: &str) -> Self {
        parse_hex(input).unwrap_or_else(|err| {
            warn!(input, %err, "unparseable hex color, using white");
            Rgb::WHITE
        })
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}
