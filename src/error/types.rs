use thiserror::Error;

use crate::suggest::SuggestionError;

/// Unified result type for the composer crate.
pub type Result<T> = std::result::Result<T, ComposerError>;

/// Errors surfaced by the layout model and the surrounding session.
#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("row `{0}` not found")]
    RowNotFound(String),
    #[error("column `{0}` not found")]
    ColumnNotFound(String),
    #[error("column size {0} is outside 1..=12")]
    SizeOutOfRange(u8),
    #[error("suggestion failure: {0}")]
    Suggestion(#[from] SuggestionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
