/// Translate interface - actual translation delegated to an upstream provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine identifier reported in every successful translation response.
/// A constant, not derived from upstream metadata.
pub const ENGINE_SOURCE: &str = "MyMemory-Engine";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(rename = "targetLang")]
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    pub source: String,
}

/// Failure modes of the outbound translation call.
///
/// The HTTP layer collapses all of these into a single generic client-facing
/// message; the variants exist so callers and tests can tell the causes apart.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Connect failure, timeout, or body read failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream answered 2xx but the body was not the expected shape.
    #[error("upstream payload missing responseData.translatedText")]
    MalformedPayload,
}

#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate English `text` into `target_lang`.
    ///
    /// One upstream call per invocation; no retry, no caching. Both arguments
    /// pass through verbatim - the provider is the sole authority on
    /// acceptability.
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, TranslateError>;
}
