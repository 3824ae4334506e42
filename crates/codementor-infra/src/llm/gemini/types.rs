//! Gemini REST API wire types.
//!
//! Request/response structures for the Generative Language `v1beta`
//! endpoints. These are provider-specific; the generic types live in
//! codementor-types.
//!
//! The generated text has been observed nested in at least three
//! response shapes, so a candidate is held as raw JSON and decoded
//! against each known shape in order rather than deserialized into a
//! single struct.

use serde::{Deserialize, Serialize};

use codementor_types::llm::ModelDescriptor;

/// Response body of `GET /v1beta/models`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

/// Request body for `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a composed prompt as a single user content entry.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One content entry in a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<TextPart>,
}

/// A text part, shared between request bodies and response decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    #[serde(default)]
    pub text: String,
}

/// Response body of a generation call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One completion option within a generation response, held as raw JSON
/// until a known shape decodes from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Candidate(pub serde_json::Value);

/// Shape a: `{content: {parts: [{text}, ...]}}`.
#[derive(Debug, Deserialize)]
struct StructuredShape {
    content: PartList,
}

#[derive(Debug, Deserialize)]
struct PartList {
    #[serde(default)]
    parts: Vec<TextPart>,
}

/// Shape b: `{output: [{content: [{parts: [{text}, ...]}, ...]}, ...]}`.
#[derive(Debug, Deserialize)]
struct NestedShape {
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<PartList>,
}

/// Shape c: `{text: "..."}` directly on the candidate.
#[derive(Debug, Deserialize)]
struct FlatShape {
    text: String,
}

impl Candidate {
    /// Normalize this candidate to plain text.
    ///
    /// Decodes the three known shapes in order, taking the first that
    /// yields non-empty text. An unknown shape serializes the raw
    /// candidate so the caller always receives something printable.
    pub fn text(&self) -> String {
        if let Ok(shape) = serde_json::from_value::<StructuredShape>(self.0.clone()) {
            let text = concat_parts(&shape.content.parts);
            if !text.is_empty() {
                return text;
            }
        }

        if let Ok(shape) = serde_json::from_value::<NestedShape>(self.0.clone()) {
            let text = shape
                .output
                .iter()
                .map(|item| {
                    item.content
                        .iter()
                        .map(|block| concat_parts(&block.parts))
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");
            if !text.trim().is_empty() {
                return text;
            }
        }

        if let Ok(shape) = serde_json::from_value::<FlatShape>(self.0.clone()) {
            if !shape.text.is_empty() {
                return shape.text;
            }
        }

        self.0.to_string()
    }
}

fn concat_parts(parts: &[TextPart]) -> String {
    parts.iter().map(|part| part.text.as_str()).collect()
}
