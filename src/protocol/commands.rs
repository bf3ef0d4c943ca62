//! # ESC/POS Protocol Commands
//!
//! This module implements the basic ESC/POS commands used by ticket
//! templates: initialization, paper feed and paper cut.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CR`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC d n`, `GS V m`, `ESC * m nL nH data...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Templates as Text
//!
//! Ticket templates are stored as text. Every `char` below U+0100 stands
//! for the byte with the same value, so control codes and packed image data
//! live in the same string as the printable text. [`to_stream`] performs
//! that byte-to-char mapping.

// ============================================================================
// CONTROL CHARACTER CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for paper cut and advanced features.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return) - Ignored by most thermal printers in ESC/POS mode
pub const CR: u8 = 0x0D;

/// DEL - Not printable, consumed silently
pub const DEL: u8 = 0x7F;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Text formatting (bold, double height, double width) disabled
/// - Alignment reset to left
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds the paper `n` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cut function selector for `GS V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutMode {
    /// `GS V 0` - full cut at the current position
    Full,
    /// `GS V 1` - partial cut (leaves a small hinge)
    Partial,
    /// `GS V 65 n` - feed n dots, then full cut
    FeedFull(u8),
    /// `GS V 66 n` - feed n dots, then partial cut
    FeedPartial(u8),
}

/// # Select Cut Mode and Cut Paper (GS V m [n])
///
/// ## Protocol Details
///
/// | Form | Bytes | Parameters |
/// |------|-------|------------|
/// | A | `GS V m` | m = 0, 1, 48, 49 |
/// | B | `GS V m n` | m = 65, 66; n = feed amount |
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::commands::{cut, CutMode};
///
/// assert_eq!(cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
/// assert_eq!(cut(CutMode::FeedPartial(3)), vec![0x1D, 0x56, 66, 3]);
/// ```
pub fn cut(mode: CutMode) -> Vec<u8> {
    match mode {
        CutMode::Full => vec![GS, b'V', 0],
        CutMode::Partial => vec![GS, b'V', 1],
        CutMode::FeedFull(n) => vec![GS, b'V', 65, n],
        CutMode::FeedPartial(n) => vec![GS, b'V', 66, n],
    }
}

/// Number of parameter bytes that follow `GS V m` for a given `m`.
///
/// Returns `None` for selectors outside the ESC/POS table.
#[inline]
pub fn cut_extra_params(m: u8) -> Option<usize> {
    match m {
        0 | 1 | 48 | 49 => Some(0),
        65 | 66 => Some(1),
        _ => None,
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Map printer bytes to template text, one `char` per byte.
///
/// ## Example
///
/// ```
/// use ticketpress::protocol::commands::{init, to_stream};
///
/// assert_eq!(to_stream(&init()), "\u{1B}@");
/// ```
pub fn to_stream(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

// ============================================================================
// TESTS
// ============================================================================
