// All LLM prompt constants for the Headlines module.

/// System prompt for headline generation — enforces JSON-array output.
pub const HEADLINE_SYSTEM: &str =
    "You are an expert marketing copywriter. Always respond with valid JSON arrays.";

/// Sampling temperature for headline generation.
pub const HEADLINE_TEMPERATURE: f32 = 0.9;

/// Output cap for headline generation, in tokens.
pub const HEADLINE_MAX_TOKENS: u32 = 500;

/// Headline prompt template. Replace `{keyword}` before sending.
pub const HEADLINE_PROMPT_TEMPLATE: &str = r#"You are an expert marketing copywriter. Generate 3 compelling, creative, and conversion-focused marketing headlines for the keyword: "{keyword}".

Requirements:
- Each headline should be 50-60 characters long
- Include the keyword naturally
- Make them attention-grabbing and actionable
- Focus on benefits and value
- Use power words when appropriate

Format your response as a JSON array with exactly 3 headlines:
["headline 1", "headline 2", "headline 3"]

Only respond with the JSON array, nothing else."#;

/// Builds the user prompt for `keyword`.
pub fn headline_prompt(keyword: &str) -> String {
    HEADLINE_PROMPT_TEMPLATE.replace("{keyword}", keyword)
}
