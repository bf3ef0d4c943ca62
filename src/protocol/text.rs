//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands understood by the
//! ticket preview.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right justification |
//! | Print mode | ESC ! n | Bold, double height, double width (bitmask) |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Decode the `n` parameter of `ESC a n`.
    ///
    /// Both the binary (0, 1, 2) and ASCII digit ('0', '1', '2') forms are
    /// accepted, as on real printers. Anything else falls back to left.
    pub fn from_param(n: u32) -> Self {
        match n {
            1 | 0x31 => Self::Center,
            2 | 0x32 => Self::Right,
            _ => Self::Left,
        }
    }

    /// CSS `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

/// Convenience function for right alignment
#[inline]
pub fn align_right() -> Vec<u8> {
    align(Alignment::Right)
}

// ============================================================================
// PRINT MODE (BOLD / DOUBLE SIZE)
// ============================================================================

/// Bit 3 of the `ESC !` parameter: emphasized
pub const MODE_BOLD: u8 = 0x08;
/// Bit 4 of the `ESC !` parameter: double height
pub const MODE_DOUBLE_HEIGHT: u8 = 0x10;
/// Bit 5 of the `ESC !` parameter: double width
pub const MODE_DOUBLE_WIDTH: u8 = 0x20;

/// # Select Print Mode (ESC ! n)
///
/// Sets bold, double height and double width in one command. Flags not
/// present in `n` are turned off.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Bitmask
///
/// | Bit | Hex | Meaning |
/// |-----|-----|---------|
/// | 3 | 0x08 | Bold |
/// | 4 | 0x10 | Double height |
/// | 5 | 0x20 | Double width |
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::text::{print_mode, MODE_BOLD, MODE_DOUBLE_WIDTH};
///
/// let cmd = print_mode(MODE_BOLD | MODE_DOUBLE_WIDTH);
/// assert_eq!(cmd, vec![0x1B, 0x21, 0x28]);
/// ```
#[inline]
pub fn print_mode(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// Reset print mode to plain text (ESC ! 0)
#[inline]
pub fn print_mode_reset() -> Vec<u8> {
    print_mode(0)
}

// ============================================================================
// TESTS
// ============================================================================
