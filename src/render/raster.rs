//! # Image to Raster Encoder
//!
//! Turns an uploaded image into a control-code fragment that prints the image
//! as consecutive raster lines.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──► validate ──► decode ──► fit to paper ──► threshold ──► pack ──► fragment
//!           (type, size)  (image)    (downscale)      (luma<128)   (MSB)    (ESC * per row)
//! ```
//!
//! ## Fragment Layout
//!
//! ```text
//! ESC a 1                         center
//! ESC * 0 nL nH d1..dk LF         row 0
//! ESC * 0 nL nH d1..dk LF         row 1
//! ...
//! ESC a 0                         restore left alignment
//! ```
//!
//! ## Example
//!
//! ```
//! use ticketpress::printer::PaperWidth;
//! use ticketpress::render::raster::{encode_raster, RasterImage};
//!
//! let raster = RasterImage::from_pixels(16, 2, vec![true; 32]);
//! let encoded = encode_raster(&raster);
//! assert_eq!((encoded.width, encoded.height), (16, 2));
//! ```

use image::{DynamicImage, ImageFormat, imageops::FilterType};
use rayon::prelude::*;
use tracing::debug;

use super::threshold::{is_ink, pack_row};
use crate::error::EncodeError;
use crate::printer::PaperWidth;
use crate::protocol::commands::{LF, to_stream};
use crate::protocol::graphics::{self, MAX_RASTER_WIDTH};
use crate::protocol::text;
use crate::template::escape::escape_controls;

/// Default upload limit (1 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// Raster formats accepted for upload.
pub const ACCEPTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Gif,
];

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Paper width; bounds the raster width
    pub paper: PaperWidth,
    /// Largest accepted file, in bytes
    pub max_bytes: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            paper: PaperWidth::default(),
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl EncoderOptions {
    pub fn new(paper: PaperWidth) -> Self {
        Self {
            paper,
            ..Default::default()
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

// ============================================================================
// RASTER IMAGE
// ============================================================================

/// A monochrome bitmap: `true` = ink, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl RasterImage {
    /// Build from an ink matrix.
    ///
    /// `pixels.len()` must equal `width * height`; missing pixels are
    /// treated as background and extra pixels are dropped. Columns past
    /// [`MAX_RASTER_WIDTH`] are cropped.
    pub fn from_pixels(mut width: u32, height: u32, mut pixels: Vec<bool>) -> Self {
        pixels.resize(width as usize * height as usize, false);
        if width > MAX_RASTER_WIDTH {
            pixels = pixels
                .chunks_exact(width as usize)
                .flat_map(|row| row[..MAX_RASTER_WIDTH as usize].iter().copied())
                .collect();
            width = MAX_RASTER_WIDTH;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Threshold a decoded image, downscaling it first when it is wider
    /// than `max_width`.
    ///
    /// Downscaling keeps the aspect ratio; the new height is rounded and
    /// never drops below one row.
    pub fn from_image(image: &DynamicImage, max_width: u32) -> Self {
        let fitted;
        let image = if image.width() > max_width {
            let scale = max_width as f64 / image.width() as f64;
            let height = ((image.height() as f64 * scale).round() as u32).max(1);
            debug!(
                from_width = image.width(),
                from_height = image.height(),
                to_width = max_width,
                to_height = height,
                "downscaling image to paper width"
            );
            fitted = image.resize_exact(max_width, height, FilterType::Triangle);
            &fitted
        } else {
            image
        };

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .as_raw()
            .par_chunks_exact(4)
            .map(|p| is_ink([p[0], p[1], p[2], p[3]]))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per packed row (width rounded up to a multiple of 8)
    pub fn width_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Whether the pixel at (x, y) is ink. Out of range reads as background.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Pack every row MSB-first, padding each row's last byte with zeros.
    pub fn packed_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.pixels
            .par_chunks(self.width as usize)
            .map(pack_row)
            .collect()
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Result of encoding an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Control-code fragment, one `char` per printer byte
    pub fragment: String,
    /// Raster width in pixels, after fitting to the paper
    pub width: u32,
    /// Raster height in pixels (= number of raster lines)
    pub height: u32,
}

impl EncodedImage {
    /// The fragment in escaped text form, safe for JSON and text inputs.
    pub fn escaped(&self) -> String {
        escape_controls(&self.fragment)
    }
}

/// Emit the control-code fragment for a raster image.
///
/// The block is centered and followed by a left-alignment restore. Every
/// row, including the last one, ends with a line feed.
pub fn encode_raster(raster: &RasterImage) -> EncodedImage {
    let rows = raster.packed_rows();
    let row_len = raster.width_bytes() + graphics::RASTER_HEADER_LEN + 1;

    let mut bytes = Vec::with_capacity(6 + rows.len() * row_len);
    bytes.extend(text::align_center());
    for row in &rows {
        bytes.extend(graphics::raster_line(row));
        bytes.push(LF);
    }
    bytes.extend(text::align_left());

    EncodedImage {
        fragment: to_stream(&bytes),
        width: raster.width(),
        height: raster.height(),
    }
}

/// Check type and size before any decoding work.
///
/// The extension of `file_name` (when it has one) must map to an accepted
/// MIME type, and the content must sniff as an accepted format.
pub fn validate(
    file_name: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ImageFormat, EncodeError> {
    if bytes.is_empty() {
        return Err(EncodeError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(EncodeError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }

    if let Some(mime) = file_name.and_then(|name| mime_guess::from_path(name).first()) {
        let accepted = ACCEPTED_FORMATS
            .iter()
            .any(|format| format.to_mime_type() == mime.essence_str());
        if !accepted {
            return Err(EncodeError::UnsupportedFormat(
                mime.essence_str().to_string(),
            ));
        }
    }

    match image::guess_format(bytes) {
        Ok(format) if ACCEPTED_FORMATS.contains(&format) => Ok(format),
        Ok(format) => Err(EncodeError::UnsupportedFormat(
            format.to_mime_type().to_string(),
        )),
        Err(_) => Err(EncodeError::UnsupportedFormat("unknown".to_string())),
    }
}

/// Decode validated bytes.
pub fn decode(bytes: &[u8], format: ImageFormat) -> Result<DynamicImage, EncodeError> {
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| EncodeError::Decode(e.to_string()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(EncodeError::Decode("image has no pixels".to_string()));
    }
    Ok(image)
}

/// Validate, decode, fit and encode an uploaded image.
///
/// ## Example
///
/// ```no_run
/// use ticketpress::printer::PaperWidth;
/// use ticketpress::render::raster::{encode_image, EncoderOptions};
///
/// let bytes = std::fs::read("logo.png")?;
/// let encoded = encode_image(Some("logo.png"), &bytes, &EncoderOptions::new(PaperWidth::Narrow))?;
/// println!("{}", encoded.escaped());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode_image(
    file_name: Option<&str>,
    bytes: &[u8],
    options: &EncoderOptions,
) -> Result<EncodedImage, EncodeError> {
    let format = validate(file_name, bytes, options.max_bytes)?;
    let image = decode(bytes, format)?;
    let raster = RasterImage::from_image(&image, options.paper.width_dots());
    let encoded = encode_raster(&raster);

    debug!(
        width = encoded.width,
        height = encoded.height,
        paper = %options.paper,
        "encoded image"
    );

    Ok(encoded)
}

// ============================================================================
// TESTS
// ============================================================================
