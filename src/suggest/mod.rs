//! Suggestion collaborator orchestrator following the RSB module
//! specification.

mod core;

pub use core::{
    MIN_SUGGESTIONS, SuggestionError, SuggestionProvider, SuggestionResponse, SuggestionResult,
    parse_suggestions, request_suggestions, suggestion_prompt,
};
