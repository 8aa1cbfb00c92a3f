//! NarrativeProvider trait — the abstraction over text-generation backends.
//!
//! A NarrativeProvider takes the locally computed bucket summary and returns
//! free-text recommendations to append to the report.
//!
//! Implementations: OpenAI-compatible endpoints, deterministic stubs.

use crate::error::NarrativeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single narrative request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeRequest {
    /// The model to use (e.g. "anthropic/claude-sonnet-4")
    pub model: String,

    /// The fully formatted prompt: analyst instruction plus the locally
    /// computed summary the model should treat as ground truth
    pub prompt: String,

    /// Temperature (low by default — recommendations, not fiction)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.2
}

impl NarrativeRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

/// A complete response from a narrative provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeResponse {
    /// The generated markdown narrative, verbatim
    pub text: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The narrative boundary trait.
///
/// One exchange: the formatted summary goes out, free text comes back. The
/// report pipeline calls `generate()` without knowing which backend is in
/// use, and treats any error as "recommendations unavailable".
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// A human-readable name for this provider (e.g. "openrouter", "static").
    fn name(&self) -> &str;

    /// Generate narrative recommendations from the formatted summary.
    async fn generate(
        &self,
        request: NarrativeRequest,
    ) -> std::result::Result<NarrativeResponse, NarrativeError>;

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, NarrativeError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_low_temperature() {
        let req = NarrativeRequest::new("gpt-4o", "summary text");
        assert!((req.temperature - 0.2).abs() < f32::EPSILON);
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn request_serialization_skips_absent_max_tokens() {
        let req = NarrativeRequest::new("gpt-4o", "summary");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn response_roundtrip() {
        let resp = NarrativeResponse {
            text: "Discount the milk.".into(),
            model: "gpt-4o".into(),
            usage: Some(Usage {
                prompt_tokens: 100,
                completion_tokens: 20,
                total_tokens: 120,
            }),
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: NarrativeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text, resp.text);
        assert_eq!(back.usage.unwrap().total_tokens, 120);
    }
}
