//! # Intermediate Representation (IR)
//!
//! The IR sits between a ticket template and its HTML preview. Templates
//! are tokenized once into a flat list of ops; the renderer never looks at
//! raw control codes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Template   │ ──► │  Tokenizer  │ ──► │      IR      │ ──► HTML
//! │ (ESC/POS)   │     │             │     │  (Vec<Op>)   │
//! └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use ticketpress::ir::{tokenize, Op};
//! use ticketpress::protocol::text::Alignment;
//!
//! let program = tokenize("\u{1B}a\u{1}TICKET\n");
//! assert_eq!(program.ops[0], Op::AlignmentChange(Alignment::Center));
//! assert_eq!(program.len(), 3);
//! ```

mod ops;
mod tokenize;

pub use ops::*;
pub use tokenize::tokenize;
