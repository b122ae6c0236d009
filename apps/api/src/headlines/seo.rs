//! SEO Scorer — pure length and keyword-density diagnostics for one headline.
//!
//! Thresholds:
//! - length: good in 40..=70 characters, warning outside
//! - density: error at 0 occurrences, warning below 5% or above 15%, good otherwise

use serde::Serialize;

const MIN_GOOD_LENGTH: usize = 40;
const MAX_GOOD_LENGTH: usize = 70;
const MIN_GOOD_DENSITY: f64 = 5.0;
const MAX_GOOD_DENSITY: f64 = 15.0;

/// Traffic-light verdict used for both the length and density checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Good,
    Warning,
    Error,
}

/// Diagnostics for a single headline against its target keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    pub length: usize,
    pub word_count: usize,
    /// Percentage with one decimal, e.g. "20.0".
    pub keyword_density: String,
    pub length_score: ScoreLevel,
    pub length_message: String,
    pub density_score: ScoreLevel,
    pub density_message: String,
    pub has_keyword: bool,
}

/// Scores `headline` for `keyword`. Never fails.
pub fn analyze_seo(headline: &str, keyword: &str) -> SeoAnalysis {
    let length = headline.chars().count();
    // An empty or all-whitespace headline still counts as one (empty) word.
    let word_count = headline.split_whitespace().count().max(1);
    let occurrences = count_keyword_occurrences(headline, keyword);
    let density = (occurrences as f64 / word_count as f64) * 100.0;

    let (length_score, length_message) = score_length(length);
    let (density_score, density_message) = score_density(occurrences, density);

    SeoAnalysis {
        length,
        word_count,
        keyword_density: format!("{density:.1}"),
        length_score,
        length_message: length_message.to_string(),
        density_score,
        density_message: density_message.to_string(),
        has_keyword: occurrences > 0,
    }
}

/// Case-insensitive, non-overlapping, literal substring count.
fn count_keyword_occurrences(headline: &str, keyword: &str) -> usize {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    headline.to_lowercase().matches(keyword.as_str()).count()
}

fn score_length(length: usize) -> (ScoreLevel, &'static str) {
    if length < MIN_GOOD_LENGTH {
        (
            ScoreLevel::Warning,
            "Too short - consider adding more context",
        )
    } else if length > MAX_GOOD_LENGTH {
        (
            ScoreLevel::Warning,
            "Too long - might be truncated in search results",
        )
    } else {
        (ScoreLevel::Good, "Perfect length for SEO")
    }
}

fn score_density(occurrences: usize, density: f64) -> (ScoreLevel, &'static str) {
    if occurrences == 0 {
        (ScoreLevel::Error, "Keyword not found in headline")
    } else if density < MIN_GOOD_DENSITY {
        (ScoreLevel::Warning, "Low keyword presence")
    } else if density > MAX_GOOD_DENSITY {
        (
            ScoreLevel::Warning,
            "Too much keyword repetition (keyword stuffing)",
        )
    } else {
        (ScoreLevel::Good, "Good keyword usage")
    }
}
