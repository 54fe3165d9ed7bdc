//! The hex-text surface: a human-editable grid of packed-colour tokens.
//!
//! Each canvas row becomes one line of comma-separated `0xXXXX` tokens.
//! Parsing is lenient about token count (truncate or pad) and strict
//! about token syntax.

use crate::canvas::PixelBuffer;
use crate::error::Result;
use crate::types::Rgb565;

/// Render the buffer as one token row per line.
///
/// Tokens are 4-digit uppercase hex with a `0x` prefix, joined by `", "`;
/// rows are joined by newlines with no trailing newline.
pub fn to_text(buffer: &PixelBuffer) -> String {
    buffer
        .pixels()
        .chunks(buffer.width() as usize)
        .map(|row| {
            row.iter()
                .map(|colour| colour.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a hex grid back into a flat pixel run for a width x height canvas.
///
/// Blank lines are skipped; every other comma-separated token must parse
/// as a 16-bit hex value or the whole import aborts with `InvalidToken`
/// (nothing is committed). A count mismatch against width * height is
/// reconciled by truncating or padding with black, never an error.
pub fn from_text(text: &str, width: u32, height: u32) -> Result<Vec<Rgb565>> {
    let mut values = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        for token in line.split(',') {
            values.push(token.parse::<Rgb565>()?);
        }
    }

    let expected = width as usize * height as usize;
    values.truncate(expected);
    values.resize(expected, Rgb565::BLACK);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PxedError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_text_format() {
        let data = [Rgb565(0x0000), Rgb565(0x001F), Rgb565(0xF800), Rgb565(0xFFFF)];
        let buffer = PixelBuffer::from_flat(&data, 2, 2).unwrap();

        insta::assert_snapshot!(to_text(&buffer), @r"
        0x0000, 0x001F
        0xF800, 0xFFFF
        ");
    }

    #[test]
    fn test_round_trip_reproduces_buffer() {
        let data: Vec<Rgb565> = (0..15u16).map(|i| Rgb565(i * 0x111)).collect();
        let buffer = PixelBuffer::from_flat(&data, 5, 3).unwrap();

        let parsed = from_text(&to_text(&buffer), 5, 3).unwrap();
        assert_eq!(parsed, buffer.to_flat());
    }

    #[test]
    fn test_from_text_pads_short_input() {
        let parsed = from_text("0x0001, 0x0002, 0x0003", 2, 2).unwrap();
        assert_eq!(
            parsed,
            vec![Rgb565(1), Rgb565(2), Rgb565(3), Rgb565::BLACK]
        );
    }

    #[test]
    fn test_from_text_truncates_long_input() {
        let parsed = from_text("0x0001, 0x0002, 0x0003\n0x0004, 0x0005", 2, 2).unwrap();
        assert_eq!(parsed, vec![Rgb565(1), Rgb565(2), Rgb565(3), Rgb565(4)]);
    }

    #[test]
    fn test_from_text_ignores_row_layout() {
        // Tokens flow row-major regardless of how lines break.
        let one_line = from_text("0x0001, 0x0002, 0x0003, 0x0004", 2, 2).unwrap();
        let two_lines = from_text("0x0001, 0x0002\n0x0003, 0x0004", 2, 2).unwrap();
        assert_eq!(one_line, two_lines);
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let parsed = from_text("\n0x0001, 0x0002\n\n0x0003, 0x0004\n", 2, 2).unwrap();
        assert_eq!(parsed, vec![Rgb565(1), Rgb565(2), Rgb565(3), Rgb565(4)]);
    }

    #[test]
    fn test_from_text_rejects_bad_token() {
        let err = from_text("0x001F, 0xZZZZ", 2, 1).unwrap_err();
        match err {
            PxedError::InvalidToken { token, .. } => assert_eq!(token, "0xZZZZ"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_text_rejects_oversized_value() {
        assert!(from_text("0x12345", 1, 1).is_err());
    }

    #[test]
    fn test_from_text_rejects_empty_token() {
        // A trailing comma leaves an empty token, which is malformed.
        assert!(from_text("0x0001,", 2, 1).is_err());
    }

    #[test]
    fn test_empty_text_pads_to_black() {
        let parsed = from_text("", 2, 2).unwrap();
        assert_eq!(parsed, vec![Rgb565::BLACK; 4]);
    }
}
