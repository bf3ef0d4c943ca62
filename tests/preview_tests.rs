//! # Preview Tests
//!
//! End-to-end checks of template → HTML, from stored (escaped) templates
//! through the tokenizer and renderer.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ticketpress::ir::{Op, StyleState};
use ticketpress::preview::{EMPTY_PREVIEW, parse_template, render_document, render_preview};
use ticketpress::printer::PaperWidth;
use ticketpress::protocol::text::Alignment;
use ticketpress::template::{SampleData, escape_controls, normalize};

fn render(template: &str) -> String {
    render_preview(template, &SampleData::default())
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn init_then_text_has_no_styling() {
    assert_eq!(render(r"\u001B@Hello"), "Hello");
}

#[test]
fn bold_text_gets_bold_span() {
    assert_eq!(
        render(r"\u001B!\u0008BOLD"),
        r#"<span class="bold">BOLD</span>"#
    );
}

#[test]
fn repeated_print_mode_keeps_one_span() {
    let expected = r#"<span class="bold">AB</span>"#;
    assert_eq!(render("\u{1B}!\u{8}A\u{1B}!\u{8}B"), expected);
    assert_eq!(render(r"\u001B!\u0008A\u001B!\u0008B"), expected);
    assert_eq!(render(r"\u001B!\u0008A\u001Bd\u0000B"), expected);
}

#[test]
fn repeated_alignment_keeps_one_span() {
    assert_eq!(
        render(r"\u001Ba\u0001\u001B!\u0008A\u001Ba\u0001B"),
        concat!(
            r#"<div class="align-center" style="display:block;width:100%;text-align:center">"#,
            r#"<span class="bold">AB</span></div>"#,
        )
    );
}

#[test]
fn centered_text_is_a_full_width_block() {
    assert_eq!(
        render(r"\u001Ba\u0001CENTERED"),
        r#"<div class="align-center" style="display:block;width:100%;text-align:center">CENTERED</div>"#
    );
}

#[test]
fn lone_placeholder_renders_sample() {
    assert_eq!(render("{des_placa}"), "ABC123");
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn parking_entry_ticket() {
    let template = concat!(
        r"\u001B@\u001Ba\u0001\u001B!8{nom_empresa}\n",
        r"\u001B!\u0000NIT {nit_empresa}\n",
        r"\u001Ba\u0000Placa: \u001B!\u0008{des_placa}\u001B!\u0000\n",
        r"Entrada: {fecha} {hora_entrada}\n",
        r"\u001Bd\u0003\u001DVA\u0003",
    );
    let html = render(template);
    assert_eq!(
        html,
        concat!(
            r#"<div class="align-center" style="display:block;width:100%;text-align:center">"#,
            r#"<span class="bold double-height double-width">PARQUEADERO CENTRAL S.A.S.</span></div>"#,
            r#"<div class="align-center" style="display:block;width:100%;text-align:center">NIT 900.123.456-7</div>"#,
            r#"Placa: <span class="bold">ABC123</span><br>"#,
            r#"Entrada: 2024-01-15 08:30<br>"#,
            r#"<br><br><br>"#,
        )
    );
}

#[test]
fn style_flags_are_listed_in_order() {
    assert_eq!(
        render(r"\u001B!0X"),
        r#"<span class="double-height double-width">X</span>"#
    );
}

#[test]
fn right_alignment_with_ascii_parameter() {
    let html = render(r"\u001Ba2TOTAL {total}");
    assert_eq!(
        html,
        r#"<div class="align-right" style="display:block;width:100%;text-align:right">TOTAL $ 5.400</div>"#
    );
}

#[test]
fn init_resets_style_and_alignment() {
    let html = render(r"\u001B!\u0008\u001Ba\u0001A\n\u001B@B");
    assert!(html.ends_with("</div>B"), "{}", html);
    assert!(!html.ends_with(r#"<span class="bold">B</span>"#));
}

#[test]
fn markup_in_text_is_escaped() {
    assert_eq!(
        render(r#"<script>alert("x & 'y'")</script>"#),
        "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
    );
}

#[test]
fn unknown_placeholders_stay_literal() {
    assert_eq!(render("{cliente} {des_placa"), "{cliente} {des_placa");
}

#[test]
fn caller_samples_override_defaults() {
    let samples = SampleData::default().with_value("des_placa", "XYZ987");
    assert_eq!(render_preview("{des_placa}", &samples), "XYZ987");
}

#[test]
fn empty_and_blank_templates() {
    assert_eq!(render(""), EMPTY_PREVIEW);
    assert_eq!(render(r"\u001B@\n\n\u001DV\u0000"), EMPTY_PREVIEW);
}

#[test]
fn document_uses_paper_columns() {
    let narrow = render_document("Hi", &SampleData::default(), PaperWidth::Narrow);
    let wide = render_document("Hi", &SampleData::default(), PaperWidth::Wide);
    assert!(narrow.contains("width:32ch"));
    assert!(wide.contains("width:48ch"));
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn truncated_raster_header_degrades_to_text() {
    // Declares a 64-byte row but carries two bytes
    let html = render(r"OK\n\u001B*\u0000@\u0000ab");
    assert_eq!(html, "OK<br>*@ab");
}

#[test]
fn unknown_sequences_are_dropped() {
    // ESC E and GS B are consumed as pairs; the letters after them print
    assert_eq!(render(r"A\u001BEB\u001DBC\u0007D"), "ABCD");
}

#[test]
fn tokenizer_sees_escaped_raster_block() {
    let program = parse_template(
        r"\u001Ba\u0001\u001B*\u0000\u0002\u0000ÿÿ\n\u001B*\u0000\u0002\u0000ÿÿ\n\u001Ba\u0000",
        &SampleData::default(),
    );
    assert_eq!(
        program.ops,
        vec![
            Op::AlignmentChange(Alignment::Center),
            Op::ImagePlaceholder {
                width: 16,
                height: 2
            },
            Op::AlignmentChange(Alignment::Left),
        ]
    );
}

#[test]
fn text_ops_carry_style() {
    let program = parse_template(r"\u001B!\u0010TALL", &SampleData::default());
    assert_eq!(
        program.ops[1],
        Op::Text {
            value: "TALL".into(),
            style: StyleState {
                double_height: true,
                ..StyleState::default()
            },
        }
    );
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn rendering_never_panics_and_is_pure(input in "[\\x00-\\xFF{}\\\\a-z]{0,200}") {
        let first = render(&input);
        let second = render(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
        let stream: String = bytes.iter().map(|&b| char::from(b)).collect();
        let html = render(&stream);
        prop_assert!(!html.is_empty());
    }

    #[test]
    fn escape_roundtrip(input in "[\\x00-\\xFF]{0,120}") {
        prop_assert_eq!(normalize(&escape_controls(&input)), input);
    }

    #[test]
    fn plain_text_renders_escaped(text in "[A-Za-z0-9 .,:$-]{1,60}") {
        prop_assume!(!text.trim().is_empty());
        prop_assert_eq!(render(&text), text);
    }
}
