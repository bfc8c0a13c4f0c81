//! Google Cloud Vision client.

use super::{
    DominantColor, HttpConfig, Label, VisionAnalyzer, build_http_client, is_valid_api_key_format,
};
use crate::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Google Cloud Vision label- and color-detection client.
pub struct GoogleVisionClient {
    /// API key.
    api_key: Option<String>,
    /// API endpoint.
    endpoint: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl GoogleVisionClient {
    /// Default API endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://vision.googleapis.com/v1";

    /// Maximum labels requested per image.
    const MAX_LABELS: u32 = 10;

    /// Creates a new client, reading `GOOGLE_VISION_API_KEY` from the
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        let api_key = std::env::var("GOOGLE_VISION_API_KEY").ok();
        Self {
            api_key,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            client: build_http_client(HttpConfig::from_env()),
        }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets HTTP client timeouts.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.client = build_http_client(config);
        self
    }

    /// Whether a credential is configured at all.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn validate(&self) -> Result<&str> {
        let key = self.api_key.as_deref().ok_or_else(|| Error::ServiceUnavailable {
            service: "cloud-vision".to_string(),
            cause: "GOOGLE_VISION_API_KEY not set".to_string(),
        })?;

        if !is_valid_api_key_format(key) {
            return Err(Error::ServiceUnavailable {
                service: "cloud-vision".to_string(),
                cause: "Invalid API key format: expected 'AIza' prefix".to_string(),
            });
        }

        Ok(key)
    }

    /// Issues an `images:annotate` request with a single feature.
    fn annotate(&self, image: &[u8], feature_type: &'static str) -> Result<AnnotateResponse> {
        let api_key = self.validate()?;

        tracing::info!(service = "cloud-vision", feature = feature_type, "Annotating image");

        let request = AnnotateRequest {
            requests: vec![AnnotateItem {
                image: Image {
                    content: BASE64.encode(image),
                },
                features: vec![Feature {
                    feature_type,
                    max_results: Self::MAX_LABELS,
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}/images:annotate?key={api_key}", self.endpoint))
            .json(&request)
            .send()
            .map_err(|e| {
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connect"
                } else {
                    "request"
                };
                tracing::error!(
                    service = "cloud-vision",
                    error = %e,
                    error_kind = error_kind,
                    "Vision request failed"
                );
                Error::ServiceUnavailable {
                    service: "cloud-vision".to_string(),
                    cause: format!("{error_kind} error: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            tracing::error!(
                service = "cloud-vision",
                status = %status,
                body = %body,
                "Vision API returned error status"
            );
            return Err(Error::ServiceUnavailable {
                service: "cloud-vision".to_string(),
                cause: format!("API returned status: {status} - {body}"),
            });
        }

        let mut parsed: AnnotateBatchResponse =
            response.json().map_err(|e| Error::ServiceUnavailable {
                service: "cloud-vision".to_string(),
                cause: format!("invalid response body: {e}"),
            })?;

        if parsed.responses.is_empty() {
            return Err(Error::ServiceUnavailable {
                service: "cloud-vision".to_string(),
                cause: "empty annotate response".to_string(),
            });
        }
        Ok(parsed.responses.swap_remove(0))
    }
}

impl Default for GoogleVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionAnalyzer for GoogleVisionClient {
    fn name(&self) -> &'static str {
        "cloud-vision"
    }

    fn detect_labels(&self, image: &[u8]) -> Result<Vec<Label>> {
        let response = self.annotate(image, "LABEL_DETECTION")?;
        Ok(response.label_annotations)
    }

    fn dominant_colors(&self, image: &[u8]) -> Result<Vec<DominantColor>> {
        let response = self.annotate(image, "IMAGE_PROPERTIES")?;
        Ok(response
            .image_properties_annotation
            .map(|props| props.dominant_colors.colors)
            .unwrap_or_default())
    }
}

/// Request body for `images:annotate`.
#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateItem>,
}

#[derive(Debug, Serialize)]
struct AnnotateItem {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    max_results: u32,
}

/// Response body for `images:annotate`.
#[derive(Debug, Deserialize)]
struct AnnotateBatchResponse {
    #[serde(default)]
    responses: Vec<AnnotateResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResponse {
    #[serde(default)]
    label_annotations: Vec<Label>,
    #[serde(default)]
    image_properties_annotation: Option<ImageProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageProperties {
    #[serde(default)]
    dominant_colors: DominantColors,
}

#[derive(Debug, Default, Deserialize)]
struct DominantColors {
    #[serde(default)]
    colors: Vec<DominantColor>,
}
