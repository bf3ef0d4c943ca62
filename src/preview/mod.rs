//! # Template to HTML Preview
//!
//! Renders a ticket template to an HTML approximation of the printed
//! ticket, with sample data in place of the `{field}` tokens.
//!
//! ## Architecture
//!
//! ```text
//! template ──► substitute ──► normalize ──► tokenize ──► HtmlRenderer ──► HTML
//!              {field}        \u001B        Vec<Op>      escaped text,
//!                                                        spans, blocks
//! ```
//!
//! Every call starts from a fresh state, so rendering is pure and can run
//! from any number of threads at once.
//!
//! ## Example
//!
//! ```
//! use ticketpress::preview::render_preview;
//! use ticketpress::template::SampleData;
//!
//! let html = render_preview(r"\u001B!\u0008BOLD", &SampleData::default());
//! assert_eq!(html, r#"<span class="bold">BOLD</span>"#);
//! ```

pub mod html;

pub use html::{EMPTY_PREVIEW, HtmlRenderer, PREVIEW_CSS, html_escape};

use crate::ir::{Program, tokenize};
use crate::printer::PaperWidth;
use crate::template::{SampleData, prepare};

/// Tokenize a template after both text pre-passes.
pub fn parse_template(template: &str, samples: &SampleData) -> Program {
    tokenize(&prepare(template, samples))
}

/// Render a template to an HTML fragment.
pub fn render_preview(template: &str, samples: &SampleData) -> String {
    HtmlRenderer::new().render(&parse_template(template, samples))
}

/// Render a template inside a container as wide as the paper's columns.
pub fn render_document(template: &str, samples: &SampleData, paper: PaperWidth) -> String {
    format!(
        r#"<div class="ticket-preview" style="width:{}ch">{}</div>"#,
        paper.preview_columns(),
        render_preview(template, samples)
    )
}

/// Render a standalone HTML page, stylesheet included.
pub fn render_page(template: &str, samples: &SampleData, paper: PaperWidth) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>Ticket preview ({})</title>\n<style>\n{}</style>\n</head>\n",
            "<body>\n{}\n</body>\n</html>\n"
        ),
        paper,
        PREVIEW_CSS,
        render_document(template, samples, paper)
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_then_text() {
        assert_eq!(
            render_preview(r"\u001B@Hello", &SampleData::default()),
            "Hello"
        );
    }

    #[test]
    fn test_placeholder_only() {
        assert_eq!(
            render_preview("{des_placa}", &SampleData::default()),
            "ABC123"
        );
    }

    #[test]
    fn test_centered() {
        assert_eq!(
            render_preview(r"\u001Ba\u0001CENTERED", &SampleData::default()),
            r#"<div class="align-center" style="display:block;width:100%;text-align:center">CENTERED</div>"#
        );
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render_preview("", &SampleData::default()), EMPTY_PREVIEW);
        assert_eq!(
            render_preview(r"\u001B@\n\n", &SampleData::default()),
            EMPTY_PREVIEW
        );
    }

    #[test]
    fn test_document_width() {
        let html = render_document("Hi", &SampleData::default(), PaperWidth::Narrow);
        assert_eq!(
            html,
            r#"<div class="ticket-preview" style="width:32ch">Hi</div>"#
        );
    }

    #[test]
    fn test_page_includes_styles() {
        let page = render_page("Hi", &SampleData::default(), PaperWidth::Wide);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(".bold{font-weight:bold}"));
        assert!(page.contains(r#"style="width:48ch">Hi</div>"#));
    }
}
