//! # ESC/POS Protocol Subset
//!
//! This module provides low-level command builders for the ESC/POS control
//! codes that ticket templates use. The encoder writes them and the preview
//! interpreter reads them, so both sides share the constants defined here.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, feed, cut)
//! - [`graphics`]: Raster line command for embedded images
//! - [`text`]: Alignment and print mode (bold, double size)
//!
//! ## Usage Example
//!
//! ```
//! use ticketpress::protocol::{commands, graphics, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align_center());
//! data.extend(text::print_mode(text::MODE_BOLD));
//! data.extend(b"PARKING\n");
//! data.extend(text::print_mode_reset());
//! data.extend(graphics::raster_line(&[0xAA; 8]));
//! data.extend(commands::cut(commands::CutMode::Partial));
//!
//! // Template text for the editor
//! let template = commands::to_stream(&data);
//! assert!(template.contains("PARKING"));
//! ```

pub mod commands;
pub mod graphics;
pub mod text;
