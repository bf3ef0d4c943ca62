//! # Luminance Thresholding
//!
//! This module converts colour pixels to binary (ink / no ink) output for
//! thermal printers. It uses a fixed midpoint threshold on perceptual
//! luminance. No dithering is applied.
//!
//! ## Algorithm
//!
//! For each pixel:
//!
//! 1. Composite the pixel over white using its alpha channel
//! 2. Compute luminance with the ITU-R BT.601 weights
//! 3. Compare with the midpoint of the channel range
//!
//! ```text
//! luma = 0.299 R + 0.587 G + 0.114 B
//!
//!   0 ─────────────── 128 ─────────────── 255
//!   │     ink (1)      │   background (0)  │
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use ticketpress::render::threshold;
//!
//! assert!(threshold::is_ink([0, 0, 0, 255]));
//! assert!(!threshold::is_ink([255, 255, 255, 255]));
//!
//! let row = vec![true, true, false, false, true, false, true, false];
//! assert_eq!(threshold::pack_row(&row), vec![0b11001010]);
//! ```

/// Luminance weights for red, green and blue, in thousandths.
///
/// They sum to exactly 1000, so the math stays in integers and a mid-gray
/// of 128 never lands a rounding error below the threshold.
pub const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];

/// Midpoint of the 8-bit channel range. Luminance below this prints.
pub const THRESHOLD: u32 = 128;

/// Luminance scaled by 1000 × 255, composited over white.
#[inline]
fn scaled_luminance(rgba: [u8; 4]) -> u64 {
    let [r, g, b, a] = rgba.map(u64::from);
    let luma_milli =
        LUMA_WEIGHTS[0] as u64 * r + LUMA_WEIGHTS[1] as u64 * g + LUMA_WEIGHTS[2] as u64 * b;
    luma_milli * a + 255_000 * (255 - a)
}

/// Perceptual luminance of an RGBA pixel, composited over white.
///
/// ## Returns
///
/// Luminance in `0.0..=255.0`. A fully transparent pixel is white (255).
///
/// ## Example
///
/// ```
/// use ticketpress::render::threshold::luminance;
///
/// assert_eq!(luminance([255, 255, 255, 255]), 255.0);
/// assert_eq!(luminance([0, 0, 0, 0]), 255.0);
/// assert!((luminance([255, 0, 0, 255]) - 76.245).abs() < 0.01);
/// ```
#[inline]
pub fn luminance(rgba: [u8; 4]) -> f32 {
    (scaled_luminance(rgba) as f64 / 255_000.0) as f32
}

/// Determine if a dot should be printed for the given pixel.
#[inline]
pub fn is_ink(rgba: [u8; 4]) -> bool {
    scaled_luminance(rgba) < THRESHOLD as u64 * 255_000
}

/// Pack a row of boolean pixel values into bytes.
///
/// ## Bit Packing
///
/// - Bit 7 (MSB) = leftmost pixel
/// - Bit 0 (LSB) = rightmost pixel
/// - 1 = black (print dot), 0 = white (no dot)
///
/// ## Padding
///
/// If the row length is not a multiple of 8, the last byte is padded
/// with zeros (white) on the right.
///
/// ## Example
///
/// ```
/// use ticketpress::render::threshold::pack_row;
///
/// // 12 pixels pack into 2 bytes (4 bits padding)
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

// ============================================================================
// TESTS
// ============================================================================
