//! Generic text-generation wire types.
//!
//! Request/response structures for bare `inputs` / `generated_text`
//! endpoints (HF-inference style). The response may be a single-element
//! array or a bare object; an `error` field can appear in place of the
//! generated text.

use serde::{Deserialize, Serialize};

/// Request body for a text-generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
    pub repetition_penalty: f64,
}

/// Response body: either a list of chunks or one bare chunk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    Many(Vec<GeneratedChunk>),
    One(GeneratedChunk),
}

impl TextGenerationResponse {
    /// The first chunk of the response, whichever shape arrived.
    pub fn into_first(self) -> Option<GeneratedChunk> {
        match self {
            TextGenerationResponse::Many(chunks) => chunks.into_iter().next(),
            TextGenerationResponse::One(chunk) => Some(chunk),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedChunk {
    pub generated_text: Option<String>,
    pub error: Option<String>,
}
