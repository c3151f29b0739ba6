use serde::Deserialize;
use thiserror::Error;

/// Providers must return at least this many suggestions.
pub const MIN_SUGGESTIONS: usize = 3;

pub type SuggestionResult<T> = std::result::Result<T, SuggestionError>;

/// Failures of the external suggestion collaborator.
///
/// No retry and no fallback content: a failure surfaces once and leaves all
/// prior state untouched.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("design description is empty")]
    EmptyDescription,
    #[error("suggestion service failure: {0}")]
    Service(String),
    #[error("malformed suggestion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("provider returned {got} suggestions, expected at least 3")]
    TooFewSuggestions { got: usize },
}

/// Opaque text-in/text-out collaborator producing layout suggestions.
///
/// Implementations wrap whatever backs the call (a hosted model, a canned
/// fixture in tests); the composer only sees prompt text going out and raw
/// response text coming back.
pub trait SuggestionProvider {
    fn complete(&self, prompt: &str) -> SuggestionResult<String>;
}

/// Response document expected from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// Prompt handed to the provider for a design description.
pub fn suggestion_prompt(design_description: &str) -> String {
    format!(
        "You are an expert layout designer. Based on the desired design and content, \
         provide intelligent layout suggestions.\n\n\
         Desired Design and Content: {design_description}\n\n\
         Provide at least 3 layout suggestions."
    )
}

/// Parse the provider's raw response and enforce the minimum count.
pub fn parse_suggestions(raw: &str) -> SuggestionResult<Vec<String>> {
    let response: SuggestionResponse = serde_json::from_str(raw)?;
    if response.suggestions.len() < MIN_SUGGESTIONS {
        return Err(SuggestionError::TooFewSuggestions {
            got: response.suggestions.len(),
        });
    }
    Ok(response.suggestions)
}

/// Build the prompt, invoke the provider once, and parse its response.
pub fn request_suggestions(
    provider: &dyn SuggestionProvider,
    design_description: &str,
) -> SuggestionResult<Vec<String>> {
    let trimmed = design_description.trim();
    if trimmed.is_empty() {
        return Err(SuggestionError::EmptyDescription);
    }
    let raw = provider.complete(&suggestion_prompt(trimmed))?;
    parse_suggestions(&raw)
}
