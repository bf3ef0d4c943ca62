//! # Control-Code Tokenizer
//!
//! Scans a control-code stream left to right and produces a [`Program`].
//!
//! ## Recognized Sequences
//!
//! | Bytes | Op |
//! |-------|----|
//! | `ESC @` | `StyleChange(default)` + `AlignmentChange(Left)` |
//! | `ESC d n` | `n` × `LineBreak` |
//! | `ESC a n` | `AlignmentChange` |
//! | `ESC ! n` | `StyleChange` |
//! | `ESC * m nL nH d1..dk` (repeated) | one `ImagePlaceholder` |
//! | `GS V m [n]` | nothing |
//! | `LF` | `LineBreak` |
//! | `CR`, other C0 controls, DEL | nothing |
//! | unknown `ESC x` / `GS x` | nothing |
//!
//! A sequence cut off by the end of the stream (or a raster header whose
//! payload runs past it) ends structure recognition. Whatever is left is
//! kept as one text run with its control characters removed.
//!
//! Re-issuing the style or alignment already in effect (or `ESC d 0`)
//! emits nothing and does not split the current text run.

use super::ops::{Op, Program, StyleState};
use crate::protocol::commands::{CR, DEL, ESC, GS, LF, cut_extra_params};
use crate::protocol::graphics::{RASTER_HEADER_LEN, raster_line_span};
use crate::protocol::text::Alignment;

const ESC_CHAR: char = ESC as char;
const GS_CHAR: char = GS as char;
const LF_CHAR: char = LF as char;
const CR_CHAR: char = CR as char;

/// Tokenize a control-code stream.
///
/// Never fails: unknown bytes are dropped and malformed tails become text.
///
/// ## Example
///
/// ```
/// use ticketpress::ir::{tokenize, Op, StyleState};
///
/// let program = tokenize("\u{1B}!\u{8}BOLD\n");
/// let bold = StyleState::from_mode(0x08);
/// assert_eq!(
///     program.ops,
///     vec![
///         Op::StyleChange(bold),
///         Op::Text { value: "BOLD".into(), style: bold },
///         Op::LineBreak,
///     ]
/// );
/// ```
pub fn tokenize(stream: &str) -> Program {
    let chars: Vec<char> = stream.chars().collect();
    let mut tokenizer = Tokenizer::new(&chars);
    tokenizer.run();
    tokenizer.program
}

fn is_control(ch: char) -> bool {
    (ch as u32) < 0x20 || ch == DEL as char
}

struct Tokenizer<'a> {
    chars: &'a [char],
    pos: usize,
    style: StyleState,
    alignment: Alignment,
    text: String,
    program: Program,
}

impl<'a> Tokenizer<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            style: StyleState::default(),
            alignment: Alignment::Left,
            text: String::new(),
            program: Program::new(),
        }
    }

    fn run(&mut self) {
        while let Some(&ch) = self.chars.get(self.pos) {
            let handled = match ch {
                ESC_CHAR => self.escape_sequence(),
                GS_CHAR => self.gs_sequence(),
                LF_CHAR => {
                    self.flush_text();
                    self.program.push(Op::LineBreak);
                    self.pos += 1;
                    true
                }
                c if is_control(c) => {
                    self.pos += 1;
                    true
                }
                c => {
                    self.text.push(c);
                    self.pos += 1;
                    true
                }
            };

            if !handled {
                self.literal_remainder();
                break;
            }
        }
        self.flush_text();
    }

    /// Parameter byte at `offset` from the current position.
    fn param(&self, offset: usize) -> Option<u32> {
        self.chars.get(self.pos + offset).map(|&c| c as u32)
    }

    /// Returns false when the sequence is truncated.
    fn escape_sequence(&mut self) -> bool {
        let Some(&command) = self.chars.get(self.pos + 1) else {
            return false;
        };

        match command {
            '@' => {
                self.flush_text();
                self.style = StyleState::default();
                self.alignment = Alignment::Left;
                self.program.push(Op::StyleChange(self.style));
                self.program.push(Op::AlignmentChange(self.alignment));
                self.pos += 2;
            }
            'd' => {
                let Some(n) = self.param(2) else {
                    return false;
                };
                let lines = n & 0xFF;
                if lines > 0 {
                    self.flush_text();
                    for _ in 0..lines {
                        self.program.push(Op::LineBreak);
                    }
                }
                self.pos += 3;
            }
            'a' => {
                let Some(n) = self.param(2) else {
                    return false;
                };
                self.set_alignment(Alignment::from_param(n));
                self.pos += 3;
            }
            '!' => {
                let Some(n) = self.param(2) else {
                    return false;
                };
                self.set_style(StyleState::from_mode(n));
                self.pos += 3;
            }
            '*' => return self.image_block(),
            _ => self.pos += 2,
        }
        true
    }

    fn gs_sequence(&mut self) -> bool {
        let Some(&command) = self.chars.get(self.pos + 1) else {
            return false;
        };

        if command == 'V' {
            let Some(m) = self.param(2) else {
                return false;
            };
            let extra = u8::try_from(m).ok().and_then(cut_extra_params);
            if let Some(extra) = extra {
                let end = self.pos + 3 + extra;
                if end > self.chars.len() {
                    return false;
                }
                self.pos = end;
                return true;
            }
        }

        self.pos += 2;
        true
    }

    /// Accumulate consecutive raster lines into one image.
    fn image_block(&mut self) -> bool {
        let Some(mut end) = raster_line_span(self.chars, self.pos) else {
            return false;
        };

        self.flush_text();
        let mut width = 0u32;
        let mut height = 0u32;

        loop {
            let row_bytes = (end - self.pos - RASTER_HEADER_LEN) as u32;
            width = width.max(row_bytes * 8);
            height += 1;
            self.pos = end;

            // The newline ending a raster line belongs to the image
            match (self.chars.get(self.pos), self.chars.get(self.pos + 1)) {
                (Some(&LF_CHAR), _) => self.pos += 1,
                (Some(&CR_CHAR), Some(&LF_CHAR)) => self.pos += 2,
                _ => {}
            }

            match raster_line_span(self.chars, self.pos) {
                Some(next) => end = next,
                None => break,
            }
        }

        self.program.push(Op::ImagePlaceholder { width, height });
        true
    }

    fn set_style(&mut self, style: StyleState) {
        if style != self.style {
            self.flush_text();
            self.style = style;
            self.program.push(Op::StyleChange(style));
        }
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        if alignment != self.alignment {
            self.flush_text();
            self.alignment = alignment;
            self.program.push(Op::AlignmentChange(alignment));
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.program.push(Op::Text {
                value: std::mem::take(&mut self.text),
                style: self.style,
            });
        }
    }

    fn literal_remainder(&mut self) {
        self.text.extend(
            self.chars[self.pos..]
                .iter()
                .copied()
                .filter(|&c| !is_control(c)),
        );
        self.pos = self.chars.len();
    }
}

// ============================================================================
// TESTS
// ============================================================================
