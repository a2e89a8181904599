//! External image-generation endpoint.

use serde::Deserialize;

use super::client::{ApiClient, ApiError};

/// Maximum length of an image prompt, in characters.
pub const MAX_PROMPT_LEN: usize = 1000;

/// Reference to a generated image.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

/// POST /ai/generate-image
pub async fn generate_image(api: &ApiClient, prompt: &str) -> Result<GeneratedImage, ApiError> {
    if prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }
    if prompt.chars().count() > MAX_PROMPT_LEN {
        return Err(ApiError::Validation(format!(
            "prompt exceeds {} characters",
            MAX_PROMPT_LEN
        )));
    }
    api.post_json("/ai/generate-image", &serde_json::json!({ "prompt": prompt }))
        .await
}
