//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for ticket
//! previews. The tokenizer turns a control-code stream into a sequence of
//! opcodes; the HTML renderer consumes them.
//!
//! ## Design Philosophy
//!
//! ```text
//! Template text → Tokenizer → IR (inspectable) → HTML renderer
//! ```
//!
//! Each text run carries the style snapshot in effect when it was read, so
//! the renderer never has to replay style changes to style a run.

use crate::protocol::text::{Alignment, MODE_BOLD, MODE_DOUBLE_HEIGHT, MODE_DOUBLE_WIDTH};

/// Character style tracked while scanning.
///
/// Set as a whole by `ESC !`, cleared by `ESC @`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleState {
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
}

impl StyleState {
    /// Decode the `n` parameter of `ESC ! n`.
    ///
    /// ## Example
    ///
    /// ```
    /// use ticketpress::ir::StyleState;
    ///
    /// let style = StyleState::from_mode(0x18);
    /// assert!(style.bold && style.double_height && !style.double_width);
    /// ```
    pub fn from_mode(n: u32) -> Self {
        let n = n & 0xFF;
        Self {
            bold: n & u32::from(MODE_BOLD) != 0,
            double_height: n & u32::from(MODE_DOUBLE_HEIGHT) != 0,
            double_width: n & u32::from(MODE_DOUBLE_WIDTH) != 0,
        }
    }

    /// True when no flag is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// CSS classes for the set flags, in a fixed order.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(3);
        if self.bold {
            classes.push("bold");
        }
        if self.double_height {
            classes.push("double-height");
        }
        if self.double_width {
            classes.push("double-width");
        }
        classes
    }
}

/// IR opcodes for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Run of printable characters sharing one style.
    Text { value: String, style: StyleState },

    /// Line feed (newline).
    LineBreak,

    /// A block of consecutive raster lines.
    /// `width` is in dots (row bytes × 8), `height` counts raster lines.
    ImagePlaceholder { width: u32, height: u32 },

    /// Alignment for subsequent lines.
    AlignmentChange(Alignment),

    /// Style for subsequent text.
    StyleChange(StyleState),
}

/// A tokenized template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Whether anything would show on paper: non-blank text or an image.
    pub fn has_visible_content(&self) -> bool {
        self.ops.iter().any(|op| match op {
            Op::Text { value, .. } => !value.trim().is_empty(),
            Op::ImagePlaceholder { .. } => true,
            _ => false,
        })
    }

    /// Every image block, as (width, height).
    pub fn images(&self) -> Vec<(u32, u32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::ImagePlaceholder { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
