use std::path::{Path, PathBuf};

use serde_json::json;

use crate::codegen::{self, Artifacts};
use crate::error::Result;
use crate::logging::{LogEvent, LogFields, LogLevel, Logger};
use crate::metrics::{MetricsSnapshot, SessionMetrics};
use crate::model::{Column, Layout, Row, RowPatch};
use crate::suggest::{self, SuggestionProvider};

const LOG_TARGET: &str = "composer::session";

/// Owns a layout for the duration of an editing session.
///
/// Mutations are applied strictly in the order issued; generation always
/// observes the latest committed state. Generated artifacts are cached
/// behind a content hash of the rows, so regenerating an unchanged layout
/// costs one hash. Logging is best-effort: sink failures never abort an
/// edit.
pub struct ComposerSession {
    layout: Layout,
    logger: Option<Logger>,
    metrics: SessionMetrics,
    cache: Option<CachedArtifacts>,
}

struct CachedArtifacts {
    hash: blake3::Hash,
    artifacts: Artifacts,
}

impl ComposerSession {
    pub fn new() -> Self {
        Self {
            layout: Layout::new(),
            logger: None,
            metrics: SessionMetrics::new(),
            cache: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn selected_column_id(&self) -> Option<&str> {
        self.layout.selected_column_id()
    }

    pub fn select(&mut self, column_id: &str) -> Result<()> {
        self.layout.select(column_id)?;
        self.log_id(LogLevel::Debug, "column selected", "column_id", column_id);
        Ok(())
    }

    /// Append a default row and return its id.
    pub fn add_row(&mut self) -> String {
        let row_id = self.layout.add_row().id.clone();
        self.metrics.record_mutation();
        self.log_id(LogLevel::Info, "row added", "row_id", &row_id);
        row_id
    }

    /// Append a default column to the given row and return its id.
    pub fn add_column(&mut self, row_id: &str) -> Result<String> {
        let column_id = self.layout.add_column(row_id)?.id.clone();
        self.metrics.record_mutation();
        let mut fields = LogFields::new();
        fields.insert("row_id".to_string(), json!(row_id));
        fields.insert("column_id".to_string(), json!(column_id));
        self.log(LogLevel::Info, "column added", fields);
        Ok(column_id)
    }

    pub fn update_row(&mut self, row_id: &str, patch: RowPatch) -> Result<()> {
        self.layout.update_row(row_id, patch)?;
        self.metrics.record_mutation();
        self.log_id(LogLevel::Info, "row updated", "row_id", row_id);
        Ok(())
    }

    pub fn update_column(&mut self, column: Column) -> Result<()> {
        let column_id = column.id.clone();
        self.layout.update_column(column)?;
        self.metrics.record_mutation();
        self.log_id(LogLevel::Info, "column updated", "column_id", &column_id);
        Ok(())
    }

    /// Delete a column; returns the id now selected.
    pub fn delete_column(&mut self, column_id: &str) -> Result<String> {
        let next = self.layout.delete_column(column_id)?;
        self.metrics.record_mutation();
        let mut fields = LogFields::new();
        fields.insert("column_id".to_string(), json!(column_id));
        fields.insert("selected".to_string(), json!(next));
        self.log(LogLevel::Info, "column deleted", fields);
        Ok(next)
    }

    /// Delete a row; returns the id now selected.
    pub fn delete_row(&mut self, row_id: &str) -> Result<String> {
        let next = self.layout.delete_row(row_id)?;
        self.metrics.record_mutation();
        let mut fields = LogFields::new();
        fields.insert("row_id".to_string(), json!(row_id));
        fields.insert("selected".to_string(), json!(next));
        self.log(LogLevel::Info, "row deleted", fields);
        Ok(next)
    }

    /// Generate artifacts for the current layout, reusing the cached pair
    /// when the rows are unchanged since the last call.
    pub fn generate(&mut self) -> &Artifacts {
        let hash = layout_hash(self.layout.rows());
        match self.cache.take() {
            Some(cached) if cached.hash == hash => {
                self.metrics.record_cache_hit();
                self.log(LogLevel::Debug, "artifact cache hit", LogFields::new());
                &self.cache.insert(cached).artifacts
            }
            _ => {
                self.metrics.record_generation();
                let artifacts = codegen::generate(self.layout.rows());
                let mut fields = LogFields::new();
                fields.insert("rows".to_string(), json!(self.layout.rows().len()));
                fields.insert("markup_bytes".to_string(), json!(artifacts.markup.len()));
                self.log(LogLevel::Info, "artifacts generated", fields);
                &self.cache.insert(CachedArtifacts { hash, artifacts }).artifacts
            }
        }
    }

    /// Generate (or reuse) artifacts and write them into `dir`.
    pub fn export(&mut self, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
        let paths = self.generate().write_to(dir)?;
        let mut fields = LogFields::new();
        fields.insert("markup_path".to_string(), json!(paths.0.display().to_string()));
        fields.insert("style_path".to_string(), json!(paths.1.display().to_string()));
        self.log(LogLevel::Info, "artifacts exported", fields);
        Ok(paths)
    }

    /// Ask the collaborator for layout suggestions. The layout itself is
    /// never touched by a suggestion call, successful or not.
    pub fn suggest(
        &mut self,
        provider: &dyn SuggestionProvider,
        design_description: &str,
    ) -> Result<Vec<String>> {
        self.metrics.record_suggestion_call();
        match suggest::request_suggestions(provider, design_description) {
            Ok(suggestions) => {
                let mut fields = LogFields::new();
                fields.insert("count".to_string(), json!(suggestions.len()));
                self.log(LogLevel::Info, "suggestions received", fields);
                Ok(suggestions)
            }
            Err(err) => {
                self.metrics.record_suggestion_failure();
                let mut fields = LogFields::new();
                fields.insert("error".to_string(), json!(err.to_string()));
                self.log(LogLevel::Warn, "suggestion request failed", fields);
                Err(err.into())
            }
        }
    }

    /// Emit the current metrics snapshot through the logger, if any.
    pub fn log_metrics(&self) {
        if let Some(logger) = &self.logger {
            let event = self.metrics.snapshot().to_log_event("composer::session.metrics");
            let _ = logger.log_event(event);
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: LogFields) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(LogEvent::with_fields(level, LOG_TARGET, message, fields));
        }
    }

    fn log_id(&self, level: LogLevel, message: &str, key: &str, id: &str) {
        let mut fields = LogFields::new();
        fields.insert(key.to_string(), json!(id));
        self.log(level, message, fields);
    }
}

impl Default for ComposerSession {
    fn default() -> Self {
        Self::new()
    }
}

fn layout_hash(rows: &[Row]) -> blake3::Hash {
    // Rows serialize deterministically (struct order, Vec order), so the
    // hash is a stable fingerprint of the layout content.
    let bytes = serde_json::to_vec(rows).unwrap_or_default();
    blake3::hash(&bytes)
}
