//! Server state and configuration.

use crate::printer::PaperWidth;
use crate::render::raster::{DEFAULT_MAX_IMAGE_BYTES, EncoderOptions};
use crate::template::SampleData;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Largest accepted image upload, in bytes
    pub max_image_bytes: usize,
    /// Paper used when a request does not name one
    pub default_paper: PaperWidth,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            default_paper: PaperWidth::default(),
        }
    }
}

impl ServerConfig {
    /// Encoder options for a request, falling back to the default paper.
    pub fn encoder_options(&self, paper: Option<PaperWidth>) -> EncoderOptions {
        EncoderOptions::new(paper.unwrap_or(self.default_paper))
            .with_max_bytes(self.max_image_bytes)
    }

    /// Request body limit for image uploads.
    ///
    /// Leaves room for the multipart framing around the file.
    pub fn upload_body_limit(&self) -> usize {
        self.max_image_bytes.saturating_add(64 * 1024)
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Sample table used when a preview request brings no values
    pub samples: SampleData,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            samples: SampleData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.max_image_bytes, 1024 * 1024);
        assert_eq!(config.default_paper, PaperWidth::Wide);
    }

    #[test]
    fn test_encoder_options() {
        let config = ServerConfig {
            max_image_bytes: 10,
            ..ServerConfig::default()
        };
        let options = config.encoder_options(Some(PaperWidth::Narrow));
        assert_eq!(options.paper, PaperWidth::Narrow);
        assert_eq!(options.max_bytes, 10);
        assert_eq!(config.encoder_options(None).paper, PaperWidth::Wide);
    }
}
