//! Headline Generation — orchestrates one request end to end.
//!
//! Flow: build prompt → provider completion → normalize to 3 headlines →
//!       SEO-score each → return batch.
//!
//! Nothing is persisted; a batch lives for a single request/response cycle.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::headlines::normalize::{normalize_headlines, HEADLINE_COUNT};
use crate::headlines::prompts::{
    headline_prompt, HEADLINE_MAX_TOKENS, HEADLINE_SYSTEM, HEADLINE_TEMPERATURE,
};
use crate::headlines::seo::{analyze_seo, SeoAnalysis};
use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A validated headline request. The keyword is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineRequest {
    keyword: String,
}

impl HeadlineRequest {
    pub fn parse(keyword: Option<&str>) -> Result<Self, AppError> {
        let keyword = keyword.map(str::trim).unwrap_or_default();
        if keyword.is_empty() {
            return Err(AppError::validation("Keyword is required"));
        }
        Ok(Self {
            keyword: keyword.to_string(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// One generated headline with its SEO diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub text: String,
    pub seo: SeoAnalysis,
}

/// Result of a single generation: always exactly `HEADLINE_COUNT` headlines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineBatch {
    pub keyword: String,
    pub headlines: [Headline; HEADLINE_COUNT],
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Builds the completion request sent for `keyword`.
pub fn build_completion_request(keyword: &str) -> CompletionRequest {
    CompletionRequest {
        system: HEADLINE_SYSTEM.to_string(),
        prompt: headline_prompt(keyword),
        temperature: HEADLINE_TEMPERATURE,
        max_tokens: HEADLINE_MAX_TOKENS,
    }
}

/// Turns raw completion text into a scored batch. No I/O.
pub fn score_completion(keyword: &str, raw: &str) -> HeadlineBatch {
    let headlines = normalize_headlines(raw, keyword).map(|text| {
        let seo = analyze_seo(&text, keyword);
        Headline { text, seo }
    });

    HeadlineBatch {
        keyword: keyword.to_string(),
        headlines,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Runs the generation pipeline for a validated request.
///
/// The provider is called exactly once; a provider failure fails the request.
pub async fn generate_headlines(
    provider: &dyn CompletionProvider,
    request: &HeadlineRequest,
) -> Result<HeadlineBatch, LlmError> {
    let keyword = request.keyword();
    let raw = provider.complete(&build_completion_request(keyword)).await?;
    let batch = score_completion(keyword, &raw);

    info!(
        "Generated {} headlines for keyword {:?} ({} contain it)",
        HEADLINE_COUNT,
        keyword,
        batch.headlines.iter().filter(|h| h.seo.has_keyword).count()
    );

    Ok(batch)
}
