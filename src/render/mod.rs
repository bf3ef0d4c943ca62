//! # Image Encoding
//!
//! Turns uploaded images into raster control codes for ticket templates.
//!
//! ## Modules
//!
//! - [`threshold`]: luminance and fixed-threshold binarization
//! - [`raster`]: validation, resizing, bit packing and fragment output
//!
//! ## Usage Example
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use ticketpress::printer::PaperWidth;
//! use ticketpress::render::raster::{RasterImage, encode_raster};
//!
//! let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 255])));
//! let raster = RasterImage::from_image(&logo, PaperWidth::Narrow.width_dots());
//! let encoded = encode_raster(&raster);
//!
//! assert_eq!((encoded.width, encoded.height), (16, 8));
//! ```

pub mod raster;
pub mod threshold;
