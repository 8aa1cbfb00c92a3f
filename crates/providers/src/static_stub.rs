//! Deterministic narrative providers.
//!
//! `StaticNarrative` returns canned text for offline runs and tests;
//! `FailingNarrative` always errors, exercising the report pipeline's
//! degradation path.

use async_trait::async_trait;
use shelfwatch_core::error::NarrativeError;
use shelfwatch_core::narrative::{NarrativeProvider, NarrativeRequest, NarrativeResponse};

/// A provider that returns the same text for every request.
pub struct StaticNarrative {
    text: String,
}

impl StaticNarrative {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Generic recommendations suitable for offline demo runs.
    pub fn offline() -> Self {
        Self::new(
            "Recommendations were generated offline without a language model.\n\n\
             - Remove expired items from storage and log the waste.\n\
             - Plan specials or discounts around items expiring within the window.\n\
             - Re-check fresh stock against upcoming menu demand before reordering.",
        )
    }
}

#[async_trait]
impl NarrativeProvider for StaticNarrative {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate(
        &self,
        request: NarrativeRequest,
    ) -> std::result::Result<NarrativeResponse, NarrativeError> {
        if self.text.trim().is_empty() {
            return Err(NarrativeError::EmptyResponse);
        }
        Ok(NarrativeResponse {
            text: self.text.clone(),
            model: request.model,
            usage: None,
        })
    }
}

/// A provider that fails every request with the given error.
pub struct FailingNarrative {
    error: NarrativeError,
}

impl FailingNarrative {
    pub fn new(error: NarrativeError) -> Self {
        Self { error }
    }

    /// The common case: the upstream cannot be reached at all.
    pub fn unreachable() -> Self {
        Self::new(NarrativeError::Network("connection refused".into()))
    }
}

#[async_trait]
impl NarrativeProvider for FailingNarrative {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _request: NarrativeRequest,
    ) -> std::result::Result<NarrativeResponse, NarrativeError> {
        Err(self.error.clone())
    }

    async fn health_check(&self) -> std::result::Result<bool, NarrativeError> {
        Ok(false)
    }
}
