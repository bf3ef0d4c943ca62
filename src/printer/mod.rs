//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Paper widths and the printer profile contract

pub mod config;

pub use config::{PaperWidth, PrinterProfile};
