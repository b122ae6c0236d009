// Headline generation: prompt → provider → normalization cascade → SEO scoring.
// All provider calls go through llm_client::CompletionProvider.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod seo;
