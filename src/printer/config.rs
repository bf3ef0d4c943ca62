//! # Printer Configuration
//!
//! This module defines the paper roll widths a printer profile can report,
//! and the printer-profile data contract read from the back office.
//!
//! ## Supported Paper Widths
//!
//! | Paper | Print width (dots) | Bytes per row | Preview columns |
//! |-------|--------------------|---------------|-----------------|
//! | 58mm | 384 | 48 | 32 |
//! | 80mm | 576 | 72 | 48 |
//!
//! ## Usage
//!
//! ```
//! use ticketpress::printer::PaperWidth;
//!
//! let paper: PaperWidth = "58mm".parse().unwrap();
//! println!("Raster budget: {} dots ({} bytes)",
//!          paper.width_dots(),
//!          paper.width_bytes());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// # Paper Width Class
///
/// The physical roll width of a printer. It bounds the horizontal pixel
/// budget of uploaded images and picks the column count of the preview.
///
/// ## Print Area
///
/// ```text
/// 58mm roll: ├─ 5mm ─┼── 48mm printable (384 dots) ──┼─ 5mm ─┤
/// 80mm roll: ├─ 4mm ─┼── 72mm printable (576 dots) ──┼─ 4mm ─┤
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaperWidth {
    /// 58mm roll
    #[serde(rename = "58mm", alias = "narrow", alias = "NARROW")]
    Narrow,
    /// 80mm roll
    #[default]
    #[serde(rename = "80mm", alias = "wide", alias = "WIDE")]
    Wide,
}

impl PaperWidth {
    /// Maximum raster width in dots (pixels).
    ///
    /// ## Example
    ///
    /// ```
    /// use ticketpress::printer::PaperWidth;
    ///
    /// assert_eq!(PaperWidth::Narrow.width_dots(), 384);
    /// assert_eq!(PaperWidth::Wide.width_dots(), 576);
    /// ```
    #[inline]
    pub const fn width_dots(self) -> u32 {
        match self {
            Self::Narrow => 384,
            Self::Wide => 576,
        }
    }

    /// Maximum raster width in bytes (width_dots / 8)
    #[inline]
    pub const fn width_bytes(self) -> u32 {
        self.width_dots() / 8
    }

    /// Characters per line with the default 12-dot font
    #[inline]
    pub const fn preview_columns(self) -> usize {
        (self.width_dots() / 12) as usize
    }

    /// Label used in serialized form and on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Narrow => "58mm",
            Self::Wide => "80mm",
        }
    }
}

impl fmt::Display for PaperWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaperWidth {
    type Err = String;

    /// Parse a paper width.
    ///
    /// Formats:
    /// - `"58mm"`, `"58"`, `"narrow"` → [`PaperWidth::Narrow`]
    /// - `"80mm"`, `"80"`, `"wide"` → [`PaperWidth::Wide`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "58mm" | "58" | "narrow" => Ok(Self::Narrow),
            "80mm" | "80" | "wide" => Ok(Self::Wide),
            _ => Err(format!(
                "Unknown paper type '{}'. Use '58mm' or '80mm'",
                s
            )),
        }
    }
}

// ============================================================================
// PRINTER PROFILE
// ============================================================================

/// Printer profile as returned by the printer lookup service.
///
/// Read-only here; only `paper_type` matters to the preview engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterProfile {
    pub printer_id: u64,
    #[serde(default)]
    pub paper_type: PaperWidth,
}

impl PrinterProfile {
    pub fn new(printer_id: u64, paper_type: PaperWidth) -> Self {
        Self {
            printer_id,
            paper_type,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bytes() {
        assert_eq!(PaperWidth::Narrow.width_bytes(), 48);
        assert_eq!(PaperWidth::Wide.width_bytes(), 72);
        assert_eq!(
            PaperWidth::Wide.width_dots(),
            PaperWidth::Wide.width_bytes() * 8
        );
    }

    #[test]
    fn test_preview_columns() {
        assert_eq!(PaperWidth::Narrow.preview_columns(), 32);
        assert_eq!(PaperWidth::Wide.preview_columns(), 48);
    }

    #[test]
    fn test_parse() {
        assert_eq!("58mm".parse::<PaperWidth>(), Ok(PaperWidth::Narrow));
        assert_eq!("WIDE".parse::<PaperWidth>(), Ok(PaperWidth::Wide));
        assert_eq!(" 80 ".parse::<PaperWidth>(), Ok(PaperWidth::Wide));
        assert!("a4".parse::<PaperWidth>().is_err());
    }

    #[test]
    fn test_default_is_wide() {
        assert_eq!(PaperWidth::default(), PaperWidth::Wide);
    }

    #[test]
    fn test_profile_json() {
        let profile: PrinterProfile =
            serde_json::from_str(r#"{"printerId": 7, "paperType": "58mm"}"#).unwrap();
        assert_eq!(profile, PrinterProfile::new(7, PaperWidth::Narrow));

        let profile: PrinterProfile =
            serde_json::from_str(r#"{"printerId": 8, "paperType": "narrow"}"#).unwrap();
        assert_eq!(profile.paper_type, PaperWidth::Narrow);

        let json = serde_json::to_string(&PrinterProfile::new(1, PaperWidth::Wide)).unwrap();
        assert_eq!(json, r#"{"printerId":1,"paperType":"80mm"}"#);
    }

    #[test]
    fn test_profile_without_paper_type() {
        let profile: PrinterProfile = serde_json::from_str(r#"{"printerId": 3}"#).unwrap();
        assert_eq!(profile.paper_type, PaperWidth::Wide);
    }
}
