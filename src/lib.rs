//! Core engine of the grid layout composer.
//!
//! The crate models a page layout as ordered rows of proportionally-sized
//! columns and turns it into component-framework markup plus a stylesheet
//! fragment. The modules follow the RSB `MODULE_SPEC` pattern: a `mod.rs`
//! orchestrator per module with the implementation in a private `core`.
//!
//! - [`model`] - rows, columns, token enums, and the [`Layout`] mutation
//!   surface with deterministic selection tracking.
//! - [`codegen`] - the pure [`generate`] function producing [`Artifacts`].
//! - [`session`] - [`ComposerSession`], an ordered editing loop with a
//!   content-hash artifact cache, structured logging, and metrics.
//! - [`suggest`] - the opaque suggestion-collaborator seam.

pub mod codegen;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod session;
pub mod suggest;

pub use codegen::{Artifacts, MARKUP_FILE, STYLE_FILE, generate};
pub use error::{ComposerError, Result};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{MetricsSnapshot, SessionMetrics};
pub use model::{
    Column, Flexibility, HorizontalAlignment, Layout, Padding, PullBoundary, Row, RowPatch,
    VerticalAlignment,
};
pub use session::ComposerSession;
pub use suggest::{
    MIN_SUGGESTIONS, SuggestionError, SuggestionProvider, SuggestionResponse, SuggestionResult,
    request_suggestions, suggestion_prompt,
};
