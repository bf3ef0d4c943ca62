//! Image encoding API handler.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    printer::{PaperWidth, PrinterProfile},
    render::raster::encode_image,
};

use super::super::state::AppState;
use super::ApiError;

/// Response from the encode endpoint.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    /// Control-code fragment in escaped text form
    pub fragment: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/images/encode - Encode an uploaded image as raster lines.
///
/// Multipart fields: `image` (file), an optional `paperType` text and an
/// optional `printer` profile JSON. `paperType` wins over the profile.
pub async fn encode(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<EncodeResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut paper: Option<PaperWidth> = None;
    let mut profile: Option<PrinterProfile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), format!("Multipart error: {}", e.body_text())))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::new(e.status(), format!("Failed to read image: {}", e.body_text()))
                })?;
                image_data = Some(bytes.to_vec());
            }
            "paperType" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::new(
                        e.status(),
                        format!("Failed to read paperType: {}", e.body_text()),
                    )
                })?;
                if !value.trim().is_empty() {
                    paper = Some(
                        value
                            .trim()
                            .parse::<PaperWidth>()
                            .map_err(ApiError::bad_request)?,
                    );
                }
            }
            "printer" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::new(e.status(), format!("Failed to read printer: {}", e.body_text()))
                })?;
                profile = Some(serde_json::from_str(&value).map_err(|e| {
                    ApiError::bad_request(format!("Invalid printer profile: {}", e))
                })?);
            }
            _ => {}
        }
    }

    let image_bytes = image_data.ok_or_else(|| ApiError::bad_request("No image field found"))?;
    let paper = paper.or(profile.map(|profile| profile.paper_type));
    let options = state.config.encoder_options(paper);
    let size = image_bytes.len();

    // Decoding and resizing are CPU-bound
    let result = tokio::task::spawn_blocking(move || {
        encode_image(file_name.as_deref(), &image_bytes, &options)
    })
    .await
    .map_err(|e| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Encoder task failed: {}", e),
        )
    })?;

    match result {
        Ok(encoded) => {
            info!(
                size,
                width = encoded.width,
                height = encoded.height,
                paper = %options.paper,
                "encoded uploaded image"
            );
            Ok(Json(EncodeResponse {
                fragment: encoded.escaped(),
                width: encoded.width,
                height: encoded.height,
            }))
        }
        Err(err) => {
            warn!(size, error = %err, "rejected uploaded image");
            Err(err.into())
        }
    }
}
