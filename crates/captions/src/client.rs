//! REST client for the caption generation API.
//!
//! Speaks the `generateContent` endpoint shape: one request carries an
//! inline base64 image part plus a fixed instruction part. The
//! multi-suggestion mode additionally requests a strictly-typed JSON
//! response (`{"captions": [...]}`); the single-caption mode takes the
//! plain text of the first candidate.

use serde::{Deserialize, Serialize};
use serde_json::json;

use generalis_core::content::GalleryImage;

/// Upper bound on suggestions returned by [`CaptionClient::suggest_captions`].
pub const MAX_CAPTION_SUGGESTIONS: usize = 3;

/// Fallback suggestion list returned when the caption service fails.
pub const FALLBACK_CAPTION_SUGGESTIONS: [&str; 3] = [
    "Could not generate captions.",
    "Please try again.",
    "AI model error.",
];

/// Fallback caption returned when a single-caption request fails.
pub const FALLBACK_CAPTION: &str = "Caption generation failed.";

const SUGGESTIONS_INSTRUCTION: &str = "Generate 3 diverse, concise, and appealing captions \
     for this image for a restaurant's website gallery.";

const SINGLE_CAPTION_INSTRUCTION: &str = "Generate a single, concise, and appealing caption \
     for this image for a restaurant's website gallery.";

/// Connection settings for the caption service, supplied by the hosting
/// environment at startup. Credentials are never literals in source.
#[derive(Debug, Clone)]
pub struct CaptionConfig {
    /// Base URL, e.g. `https://generativelanguage.googleapis.com`.
    pub api_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
}

/// Errors from the caption REST layer.
///
/// Internal only: the public suggestion methods absorb these into
/// fallback values rather than letting them escape the crate boundary.
#[derive(Debug, thiserror::Error)]
enum CaptionApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Caption API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A 2xx response whose body does not carry a usable caption.
    #[error("Malformed caption response: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Structured payload requested in multi-suggestion mode.
#[derive(Debug, Deserialize)]
struct CaptionList {
    captions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the caption generation service.
pub struct CaptionClient {
    client: reqwest::Client,
    config: CaptionConfig,
}

impl CaptionClient {
    /// Create a new client for the configured caption service.
    pub fn new(config: CaptionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: CaptionConfig) -> Self {
        Self { client, config }
    }

    /// Suggest up to [`MAX_CAPTION_SUGGESTIONS`] captions for one image.
    ///
    /// Always returns a non-empty list: any failure (transport, non-2xx
    /// status, unparsable body, empty candidate list) resolves to
    /// [`FALLBACK_CAPTION_SUGGESTIONS`].
    pub async fn suggest_captions(&self, image: &str) -> Vec<String> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "captions": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            }
        });
        let generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });

        let result = self
            .generate(image, SUGGESTIONS_INSTRUCTION, Some(generation_config))
            .await
            .and_then(|text| {
                serde_json::from_str::<CaptionList>(&text)
                    .map_err(|e| CaptionApiError::Malformed(format!("caption list: {e}")))
            });

        match result {
            Ok(list) if !list.captions.is_empty() => {
                let mut captions = list.captions;
                captions.truncate(MAX_CAPTION_SUGGESTIONS);
                captions
            }
            Ok(_) => {
                tracing::warn!("Caption service returned an empty suggestion list");
                fallback_suggestions()
            }
            Err(error) => {
                tracing::warn!(%error, "Caption suggestions failed, using fallbacks");
                fallback_suggestions()
            }
        }
    }

    /// Suggest exactly one caption for one image.
    ///
    /// On any failure returns [`FALLBACK_CAPTION`].
    pub async fn suggest_single_caption(&self, image: &str) -> String {
        match self.generate(image, SINGLE_CAPTION_INSTRUCTION, None).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!("Caption service returned an empty caption");
                FALLBACK_CAPTION.to_string()
            }
            Err(error) => {
                tracing::warn!(%error, "Single caption generation failed, using fallback");
                FALLBACK_CAPTION.to_string()
            }
        }
    }

    /// Fill in captions for gallery images that do not have one yet.
    ///
    /// Images are processed strictly in sequence to bound load on the
    /// caption service; images with an existing caption are left
    /// untouched, so re-running over a fully captioned gallery is a
    /// no-op.
    pub async fn fill_missing_captions(&self, gallery: Vec<GalleryImage>) -> Vec<GalleryImage> {
        let mut filled = Vec::with_capacity(gallery.len());
        for mut image in gallery {
            if image.caption.is_empty() {
                image.caption = self.suggest_single_caption(&image.src).await;
            }
            filled.push(image);
        }
        filled
    }

    // ---- private helpers ----

    /// Issue one `generateContent` call and return the text of the
    /// first candidate part.
    async fn generate(
        &self,
        image: &str,
        instruction: &str,
        generation_config: Option<serde_json::Value>,
    ) -> Result<String, CaptionApiError> {
        let (mime_type, data) = split_image_payload(image);

        let parts = vec![
            Part::Inline {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: data.to_string(),
                },
            },
            Part::Text {
                text: instruction.to_string(),
            },
        ];

        let mut body = json!({
            "contents": [{ "parts": parts }],
        });
        if let Some(config) = generation_config {
            body["generationConfig"] = config;
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CaptionApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CaptionApiError::Malformed("no candidate text".to_string()))?;

        Ok(text)
    }
}

fn fallback_suggestions() -> Vec<String> {
    FALLBACK_CAPTION_SUGGESTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Split an image payload into mime type and base64 data.
///
/// Accepts a `data:<mime>;base64,<data>` URL or a raw base64 string
/// (assumed `image/jpeg`). Remote URLs pass through as-is and are left
/// for the service to reject, which the callers absorb as a fallback.
fn split_image_payload(image: &str) -> (&str, &str) {
    if let Some(rest) = image.strip_prefix("data:") {
        if let Some((mime, data)) = rest.split_once(";base64,") {
            if !mime.is_empty() {
                return (mime, data);
            }
            return ("image/jpeg", data);
        }
    }
    ("image/jpeg", image)
}
