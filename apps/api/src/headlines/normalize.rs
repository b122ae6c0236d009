//! Response normalization — turns raw provider text into exactly three headlines.
//!
//! Strategies run in order and the first non-empty result wins:
//! 1. `JsonArrayParser`: first bracketed substring that parses as a JSON string array
//! 2. `LineSplitParser`: one headline per line, stripped of bullets, numbering and quotes
//!
//! Whatever comes out is padded with `filler_headline` and cut to `HEADLINE_COUNT`.
//! Parse failures never leave this module.

use tracing::{debug, warn};

/// Number of headlines returned for every request.
pub const HEADLINE_COUNT: usize = 3;

/// Deterministic stand-in used when the provider yields fewer than three headlines.
pub fn filler_headline(keyword: &str) -> String {
    format!("{keyword} - Transform Your Business Today")
}

/// One way of reading headlines out of raw completion text.
pub trait HeadlineParser: Sync {
    fn name(&self) -> &'static str;

    /// Returns `None` when this strategy cannot read anything from `raw`.
    fn parse(&self, raw: &str) -> Option<Vec<String>>;
}

/// Finds the first `[...]` substring that is a valid JSON array of strings.
///
/// Each opening bracket (earliest first) is parsed once as a streaming prefix:
/// a JSON array can only end at its own matching `]`, so trailing prose or code
/// fences after it are ignored. Work per candidate is bounded by where parsing fails.
pub struct JsonArrayParser;

impl HeadlineParser for JsonArrayParser {
    fn name(&self) -> &'static str {
        "json_array"
    }

    fn parse(&self, raw: &str) -> Option<Vec<String>> {
        raw.match_indices('[').find_map(|(open, _)| {
            serde_json::Deserializer::from_str(&raw[open..])
                .into_iter::<Vec<String>>()
                .next()
                .and_then(Result::ok)
        })
    }
}

/// Reads one headline per line, skipping anything that looks like array syntax.
pub struct LineSplitParser;

impl HeadlineParser for LineSplitParser {
    fn name(&self) -> &'static str {
        "line_split"
    }

    fn parse(&self, raw: &str) -> Option<Vec<String>> {
        let headlines: Vec<String> = raw
            .split('\n')
            .filter(|line| !line.trim().is_empty() && !line.contains(['[', ']']))
            .map(clean_line)
            .filter(|line| !line.is_empty())
            .take(HEADLINE_COUNT)
            .collect();

        Some(headlines)
    }
}

/// Strips leading quote/bullet/numbering characters and one trailing quote.
fn clean_line(line: &str) -> String {
    let stripped = line.trim_start_matches(|c: char| {
        matches!(c, '"' | '\'' | '-' | '.' | ')') || c.is_ascii_digit() || c.is_whitespace()
    });
    let stripped = stripped
        .strip_suffix(['"', '\''])
        .unwrap_or(stripped);
    stripped.trim().to_string()
}

/// The cascade, in priority order.
pub const STRATEGIES: &[&dyn HeadlineParser] = &[&JsonArrayParser, &LineSplitParser];

/// Runs the cascade over `raw` and returns exactly `HEADLINE_COUNT` headlines.
pub fn normalize_headlines(raw: &str, keyword: &str) -> [String; HEADLINE_COUNT] {
    let parsed = STRATEGIES
        .iter()
        .find_map(|strategy| {
            strategy
                .parse(raw)
                .filter(|headlines| !headlines.is_empty())
                .map(|headlines| {
                    debug!(
                        "Parsed {} headline(s) with {} strategy",
                        headlines.len(),
                        strategy.name()
                    );
                    headlines
                })
        })
        .unwrap_or_default();

    if parsed.len() < HEADLINE_COUNT {
        warn!(
            "Provider yielded {} headline(s); padding with filler",
            parsed.len()
        );
    }

    std::array::from_fn(|i| {
        parsed
            .get(i)
            .cloned()
            .unwrap_or_else(|| filler_headline(keyword))
    })
}
