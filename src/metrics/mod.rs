use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated over one editing session.
#[derive(Debug, Default, Clone)]
pub struct SessionMetrics {
    mutations: u64,
    generations: u64,
    cache_hits: u64,
    suggestion_calls: u64,
    suggestion_failures: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mutation(&mut self) {
        self.mutations = self.mutations.saturating_add(1);
    }

    pub fn record_generation(&mut self) {
        self.generations = self.generations.saturating_add(1);
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits = self.cache_hits.saturating_add(1);
    }

    pub fn record_suggestion_call(&mut self) {
        self.suggestion_calls = self.suggestion_calls.saturating_add(1);
    }

    pub fn record_suggestion_failure(&mut self) {
        self.suggestion_failures = self.suggestion_failures.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            mutations: self.mutations,
            generations: self.generations,
            cache_hits: self.cache_hits,
            suggestion_calls: self.suggestion_calls,
            suggestion_failures: self.suggestion_failures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub mutations: u64,
    pub generations: u64,
    pub cache_hits: u64,
    pub suggestion_calls: u64,
    pub suggestion_failures: u64,
}

impl MetricsSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("mutations".to_string(), json!(self.mutations));
        map.insert("generations".to_string(), json!(self.generations));
        map.insert("cache_hits".to_string(), json!(self.cache_hits));
        map.insert(
            "suggestion_calls".to_string(),
            json!(self.suggestion_calls),
        );
        map.insert(
            "suggestion_failures".to_string(),
            json!(self.suggestion_failures),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "session_metrics".to_string(),
            self.as_fields(),
        )
    }
}
