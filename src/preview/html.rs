//! # IR to HTML
//!
//! Walks a [`Program`] and writes an HTML approximation of the ticket.
//!
//! ## Output Shapes
//!
//! | Op | HTML |
//! |----|------|
//! | plain left text | escaped text |
//! | styled text | `<span class="bold double-height double-width">` |
//! | centered/right text | `<div class="align-center" style="…">` |
//! | line break | `<br>` (absorbed right after a block) |
//! | image | `<div class="image-placeholder" style="…">image WxH</div>` |

use crate::ir::{Op, Program, StyleState};
use crate::protocol::text::Alignment;

/// Shown when a template has nothing visible to print.
pub const EMPTY_PREVIEW: &str =
    r#"<p class="preview-empty">Enter a template to see the preview</p>"#;

/// Largest on-screen box for an image placeholder, in CSS pixels.
pub const IMAGE_BOX_MAX_WIDTH: f64 = 192.0;
pub const IMAGE_BOX_MAX_HEIGHT: f64 = 160.0;

/// Stylesheet for the classes the renderer emits.
pub const PREVIEW_CSS: &str = "\
.ticket-preview{font-family:monospace;white-space:pre-wrap;background:#fff;color:#000;padding:1ch;line-height:1.3}
.bold{font-weight:bold}
.double-height{font-size:1.8em;line-height:1.1}
.double-width{letter-spacing:1ch}
.preview-empty{color:#888;font-style:italic}
";

/// Escape text for HTML element content and attribute values.
///
/// ## Example
///
/// ```
/// use ticketpress::preview::html_escape;
///
/// assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
/// ```
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// On-screen box for an image of `width`×`height` dots.
///
/// Scaled by `min(1, 192/W, 160/H)`: proportional, never enlarged.
pub fn image_box(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let scale = 1f64
        .min(IMAGE_BOX_MAX_WIDTH / width as f64)
        .min(IMAGE_BOX_MAX_HEIGHT / height as f64);
    let scaled = |v: u32| ((v as f64 * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

fn image_margin(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "0 auto 0 0",
        Alignment::Center => "0 auto",
        Alignment::Right => "0 0 0 auto",
    }
}

/// HTML renderer state.
///
/// Alignment only affects text and images that come after it; style is
/// carried on each text op.
pub struct HtmlRenderer {
    out: String,
    alignment: Alignment,
    /// Aligned block still open on the current line
    block: Option<(Alignment, String)>,
    /// A block just ended the line; the next line break is implied
    absorb_break: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            alignment: Alignment::Left,
            block: None,
            absorb_break: false,
        }
    }

    /// Render a whole program, or [`EMPTY_PREVIEW`] when nothing is visible.
    pub fn render(mut self, program: &Program) -> String {
        if !program.has_visible_content() {
            return EMPTY_PREVIEW.to_string();
        }
        for op in program {
            self.process_op(op);
        }
        self.finish()
    }

    pub fn process_op(&mut self, op: &Op) {
        match op {
            Op::Text { value, style } => self.text(value, style),
            Op::LineBreak => {
                self.close_block();
                if self.absorb_break {
                    self.absorb_break = false;
                } else {
                    self.out.push_str("<br>");
                }
            }
            Op::ImagePlaceholder { width, height } => self.image(*width, *height),
            Op::AlignmentChange(alignment) => self.alignment = *alignment,
            // Text ops carry their own style snapshot
            Op::StyleChange(_) => {}
        }
    }

    pub fn finish(mut self) -> String {
        self.close_block();
        self.out
    }

    fn text(&mut self, value: &str, style: &StyleState) {
        let escaped = html_escape(value);
        let piece = if style.is_plain() {
            escaped
        } else {
            format!(r#"<span class="{}">{}</span>"#, style.classes().join(" "), escaped)
        };
        self.absorb_break = false;

        if self.alignment == Alignment::Left {
            self.close_block();
            self.absorb_break = false;
            self.out.push_str(&piece);
            return;
        }

        // Runs on the same line with the same alignment share one block
        if let Some((alignment, content)) = &mut self.block
            && *alignment == self.alignment
        {
            content.push_str(&piece);
            return;
        }

        self.close_block();
        self.absorb_break = false;
        self.block = Some((self.alignment, piece));
    }

    fn image(&mut self, width: u32, height: u32) {
        self.close_block();
        let (box_width, box_height) = image_box(width, height);
        self.out.push_str(&format!(
            concat!(
                r#"<div class="image-placeholder" style="display:flex;align-items:center;"#,
                r#"justify-content:center;box-sizing:border-box;width:{}px;height:{}px;"#,
                r#"margin:{};border:1px dashed #888;color:#666;font-size:10px">image {}x{}</div>"#
            ),
            box_width,
            box_height,
            image_margin(self.alignment),
            width,
            height
        ));
        self.absorb_break = true;
    }

    fn close_block(&mut self) {
        if let Some((alignment, content)) = self.block.take() {
            let css = alignment.css();
            self.out.push_str(&format!(
                r#"<div class="align-{css}" style="display:block;width:100%;text-align:{css}">{content}</div>"#
            ));
            self.absorb_break = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(ops: Vec<Op>) -> String {
        HtmlRenderer::new().render(&ops.into_iter().collect())
    }

    fn text(value: &str) -> Op {
        Op::Text {
            value: value.into(),
            style: StyleState::default(),
        }
    }

    #[test]
    fn test_plain_text_is_bare() {
        assert_eq!(render(vec![text("Hello")]), "Hello");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render(vec![text("<b>&")]), "&lt;b&gt;&amp;");
    }

    #[test]
    fn test_styled_span() {
        let style = StyleState::from_mode(0x30);
        assert_eq!(
            render(vec![Op::Text {
                value: "BIG".into(),
                style
            }]),
            r#"<span class="double-height double-width">BIG</span>"#
        );
    }

    #[test]
    fn test_right_block_absorbs_break() {
        let html = render(vec![
            Op::AlignmentChange(Alignment::Right),
            text("A"),
            text("B"),
            Op::LineBreak,
            Op::AlignmentChange(Alignment::Left),
            text("C"),
            Op::LineBreak,
            text("D"),
        ]);
        assert_eq!(
            html,
            r#"<div class="align-right" style="display:block;width:100%;text-align:right">AB</div>C<br>D"#
        );
    }

    #[test]
    fn test_second_break_after_block_is_kept() {
        let html = render(vec![
            Op::AlignmentChange(Alignment::Center),
            text("X"),
            Op::LineBreak,
            Op::LineBreak,
        ]);
        assert!(html.ends_with("</div><br>"));
    }

    #[test]
    fn test_image_box() {
        assert_eq!(image_box(16, 8), (16, 8));
        assert_eq!(image_box(384, 100), (192, 50));
        assert_eq!(image_box(100, 400), (25, 160));
    }

    #[test]
    fn test_image_placeholder() {
        let html = render(vec![
            Op::AlignmentChange(Alignment::Center),
            Op::ImagePlaceholder {
                width: 384,
                height: 192,
            },
            Op::LineBreak,
        ]);
        assert!(html.starts_with(r#"<div class="image-placeholder""#));
        assert!(html.contains("width:192px;height:96px;margin:0 auto;"));
        assert!(html.contains("border:1px dashed"));
        assert!(html.ends_with(">image 384x192</div>"));
    }

    #[test]
    fn test_nothing_visible() {
        assert_eq!(render(vec![]), EMPTY_PREVIEW);
        assert_eq!(
            render(vec![Op::LineBreak, text("  "), Op::LineBreak]),
            EMPTY_PREVIEW
        );
    }
}
