pub mod gemini;
pub mod openrouter;

pub use gemini::GeminiClient;
pub use openrouter::OpenRouterClient;

/// Fallback analysis text when a provider returns an empty completion.
pub(crate) const EMPTY_COMPLETION: &str = "No recommendation generated";
