//! Template preview API handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::{
    preview,
    printer::{PaperWidth, PrinterProfile},
    template::escape_controls,
};

use super::super::state::AppState;

/// Request body for the preview endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// Template text; control codes may be real or escaped
    pub template: String,
    #[serde(default)]
    pub paper_type: Option<PaperWidth>,
    /// Profile of the target printer; `paperType` wins when both are set
    #[serde(default)]
    pub printer: Option<PrinterProfile>,
    /// Extra or overriding sample values, keyed by bare field name
    #[serde(default)]
    pub samples: BTreeMap<String, String>,
}

/// Response from the preview endpoint.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
    /// Text columns of the paper, for sizing the preview container
    pub columns: usize,
}

/// POST /api/preview - Render a template to HTML.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PreviewRequest>,
) -> Json<PreviewResponse> {
    let paper = request
        .paper_type
        .or(request.printer.as_ref().map(|profile| profile.paper_type))
        .unwrap_or(state.config.default_paper);
    // Caller values are literal text; keep their backslashes out of normalize
    let samples = request
        .samples
        .into_iter()
        .fold(state.samples.clone(), |samples, (name, value)| {
            samples.with_value(name, escape_controls(&value))
        });

    let html = preview::render_preview(&request.template, &samples);
    debug!(
        template_len = request.template.len(),
        html_len = html.len(),
        %paper,
        "rendered preview"
    );

    Json(PreviewResponse {
        html,
        columns: paper.preview_columns(),
    })
}
