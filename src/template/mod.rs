//! # Template Pre-passes
//!
//! Text-level passes that run before a template is tokenized:
//!
//! - [`placeholder`]: `{field}` → sample value
//! - [`escape`]: `\u001B` and friends → real control characters
//!
//! ```text
//! stored template ──► substitute ──► normalize ──► tokenizer
//! ```

pub mod escape;
pub mod placeholder;

pub use escape::{escape_controls, normalize};
pub use placeholder::{Placeholder, SampleData, substitute};

/// Run both pre-passes in order.
///
/// ## Example
///
/// ```
/// use ticketpress::template::{prepare, SampleData};
///
/// let stream = prepare(r"\u001B@{des_placa}", &SampleData::default());
/// assert_eq!(stream, "\u{1B}@ABC123");
/// ```
pub fn prepare(template: &str, samples: &SampleData) -> String {
    normalize(&substitute(template, samples))
}
