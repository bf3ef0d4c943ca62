//! # ticketpress - ESC/POS Ticket Template Previews
//!
//! ticketpress renders thermal-printer ticket templates to HTML and turns
//! uploaded logos into raster control codes that can be spliced into those
//! templates. It provides:
//!
//! - **Preview**: placeholder substitution, escape normalization, a
//!   control-code tokenizer and an HTML renderer
//! - **Encoder**: image validation, resizing, thresholding and raster output
//! - **Server**: a small JSON/multipart API for the template editor
//!
//! ## Quick Start
//!
//! ```
//! use ticketpress::{
//!     preview::render_preview,
//!     printer::PaperWidth,
//!     render::raster::{EncoderOptions, RasterImage, encode_raster},
//!     template::SampleData,
//! };
//!
//! // Render a stored template with sample data
//! let html = render_preview(r"\u001B@\u001Ba\u0001{nom_empresa}\n", &SampleData::default());
//! assert!(html.contains("PARQUEADERO CENTRAL"));
//!
//! // Encode a logo and splice it into a template
//! let logo = RasterImage::from_pixels(16, 2, vec![true; 32]);
//! let fragment = encode_raster(&logo).escaped();
//! let html = render_preview(&format!("{}TICKET", fragment), &SampleData::default());
//! assert!(html.contains("image 16x2"));
//! # let _ = EncoderOptions::new(PaperWidth::Narrow);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and constants |
//! | [`template`] | Placeholder substitution and escape normalization |
//! | [`ir`] | Tokenizer and preview opcodes |
//! | [`preview`] | HTML rendering |
//! | [`render`] | Image to raster encoding |
//! | [`printer`] | Paper widths and printer profiles |
//! | [`model`] | Ticket template data contracts |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod error;
pub mod ir;
pub mod model;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use error::{EncodeError, TicketError};
pub use preview::{render_document, render_preview};
pub use printer::PaperWidth;
pub use template::SampleData;
