//! # ESC/POS Raster Line Command
//!
//! This module implements the bit image command used to embed uploaded
//! logos into ticket templates.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal, 384 or 576 dots max)
//!   │
//!   │   ████████  ← Each dot is ~0.125mm (203 DPI)
//!   │   ████████
//!   ▼
//!   Y (one raster line per pixel row)
//! ```
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use super::commands::{ESC, u16_le};

/// Raster mode written by the encoder (the simplest bit image mode).
pub const RASTER_MODE: u8 = 0;

/// Bytes before the payload: ESC, '*', m, nL, nH.
pub const RASTER_HEADER_LEN: usize = 5;

/// Longest row `nL nH` can declare.
pub const MAX_ROW_BYTES: usize = u16::MAX as usize;

/// Widest raster, in dots, that fits one line.
pub const MAX_RASTER_WIDTH: u32 = MAX_ROW_BYTES as u32 * 8;

/// # Select Bit Image Mode (ESC * m nL nH d1...dk)
///
/// Prints one row of packed bitmap data.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
/// | Decimal | 27 42 m nL nH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode, always [`RASTER_MODE`]
/// - `nL, nH`: Row length in bytes, little-endian (`k = nL + nH × 256`)
/// - `d1...dk`: Packed row, MSB = leftmost dot
///
/// Rows longer than [`MAX_ROW_BYTES`] are truncated to that length.
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::graphics;
///
/// let cmd = graphics::raster_line(&[0xFF, 0x0F]);
/// assert_eq!(cmd, vec![0x1B, 0x2A, 0x00, 0x02, 0x00, 0xFF, 0x0F]);
/// ```
pub fn raster_line(row: &[u8]) -> Vec<u8> {
    // The length field is 16 bits; longer rows are cut to fit
    let row = &row[..row.len().min(MAX_ROW_BYTES)];
    let [nl, nh] = u16_le(row.len() as u16);

    let mut cmd = Vec::with_capacity(RASTER_HEADER_LEN + row.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(RASTER_MODE);
    cmd.push(nl);
    cmd.push(nh);
    cmd.extend_from_slice(row);
    cmd
}

/// Row length declared by a raster header, from its `nL` and `nH` bytes.
#[inline]
pub fn declared_len(nl: u32, nh: u32) -> usize {
    ((nl & 0xFF) | ((nh & 0xFF) << 8)) as usize
}

/// End index (exclusive) of a complete raster line starting at `start`.
///
/// `stream` is template text, one `char` per byte. Returns `None` when
/// `start` is not `ESC *`, when the header is cut short, or when the
/// declared payload runs past the end of the stream.
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::graphics::raster_line_span;
///
/// let stream: Vec<char> = "\u{1B}*\u{0}\u{2}\u{0}ABxyz".chars().collect();
/// assert_eq!(raster_line_span(&stream, 0), Some(7));
/// assert_eq!(raster_line_span(&stream[..6], 0), None);
/// ```
pub fn raster_line_span(stream: &[char], start: usize) -> Option<usize> {
    let header = stream.get(start..start + RASTER_HEADER_LEN)?;
    if header[0] != char::from(ESC) || header[1] != '*' {
        return None;
    }
    let end =
        start + RASTER_HEADER_LEN + declared_len(u32::from(header[3]), u32::from(header[4]));
    (end <= stream.len()).then_some(end)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_line_header() {
        let cmd = raster_line(&[0xFF; 72]);

        assert_eq!(cmd[0], 0x1B); // ESC
        assert_eq!(cmd[1], 0x2A); // '*'
        assert_eq!(cmd[2], 0); // m
        assert_eq!(cmd[3], 72); // nL
        assert_eq!(cmd[4], 0); // nH
        assert_eq!(cmd.len(), RASTER_HEADER_LEN + 72);
    }

    #[test]
    fn test_raster_line_wide_length() {
        let cmd = raster_line(&[0x00; 300]);
        // 300 = 0x012C
        assert_eq!(&cmd[3..5], &[0x2C, 0x01]);
        assert_eq!(declared_len(u32::from(cmd[3]), u32::from(cmd[4])), 300);
    }

    #[test]
    fn test_raster_line_span_finds_line() {
        let mut bytes = b"ab".to_vec();
        bytes.extend(raster_line(&[0x0A, 0x1B, 0x7B]));
        bytes.extend(b"cd");
        let stream: Vec<char> = bytes.iter().map(|&b| char::from(b)).collect();

        assert_eq!(raster_line_span(&stream, 0), None);
        assert_eq!(raster_line_span(&stream, 2), Some(2 + RASTER_HEADER_LEN + 3));
    }

    #[test]
    fn test_raster_line_span_truncated_payload() {
        let bytes = raster_line(&[0xFF; 4]);
        let stream: Vec<char> = bytes[..bytes.len() - 1].iter().map(|&b| char::from(b)).collect();
        assert_eq!(raster_line_span(&stream, 0), None);
    }

    #[test]
    fn test_raster_line_oversized_row_is_cut() {
        let cmd = raster_line(&vec![0xAA; MAX_ROW_BYTES + 10]);
        assert_eq!(cmd.len(), RASTER_HEADER_LEN + MAX_ROW_BYTES);
        assert_eq!(&cmd[3..5], &[0xFF, 0xFF]);

        let stream: Vec<char> = cmd.iter().map(|&b| char::from(b)).collect();
        assert_eq!(raster_line_span(&stream, 0), Some(stream.len()));
    }

    #[test]
    fn test_raster_line_empty() {
        assert_eq!(raster_line(&[]), vec![0x1B, 0x2A, 0, 0, 0]);
    }
}
