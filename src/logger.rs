use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, trace, warn};

use crate::scrub::ScrubPipeline;

/// Log severity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        })
    }
}

/// A single log event as handed to sinks, post-masking.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub meta: Value,
}

/// An output transport for fully masked events.
pub trait Sink: Send + Sync {
    /// Lowest level this sink accepts; events below it are skipped.
    fn level(&self) -> Level {
        Level::Verbose
    }

    fn write(&self, event: &LogEvent);
}

/// Sink that forwards events to the `tracing` ecosystem, with the masked
/// meta payload attached as a JSON field.
pub struct TracingSink {
    min_level: Level,
}

impl TracingSink {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::Verbose)
    }
}

impl Sink for TracingSink {
    fn level(&self) -> Level {
        self.min_level
    }

    fn write(&self, event: &LogEvent) {
        let meta = event.meta.to_string();
        match event.level {
            Level::Verbose => trace!(meta = %meta, "{}", event.message),
            Level::Debug => debug!(meta = %meta, "{}", event.message),
            Level::Info => info!(meta = %meta, "{}", event.message),
            Level::Warn => warn!(meta = %meta, "{}", event.message),
            Level::Error => error!(meta = %meta, "{}", event.message),
        }
    }
}

/// Sink that drops every event.
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _event: &LogEvent) {}
}

/// Logger facade: assembles an event, runs its meta payload through the
/// masking pipeline in configuration order, then hands the masked event to
/// every sink.
pub struct Logger {
    pipeline: ScrubPipeline,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    pub fn new(pipeline: ScrubPipeline, sinks: Vec<Box<dyn Sink>>) -> Self {
        Self { pipeline, sinks }
    }

    /// Masking mutates `meta` in place before any sink observes it; callers
    /// that need the pre-mask value must copy before logging.
    pub fn log(&self, level: Level, message: impl Into<String>, meta: Value) {
        let mut event = LogEvent {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            meta,
        };
        self.pipeline.mask(&mut event.meta);
        for sink in &self.sinks {
            if event.level >= sink.level() {
                sink.write(&event);
            }
        }
    }

    pub fn verbose(&self, message: impl Into<String>, meta: Value) {
        self.log(Level::Verbose, message, meta);
    }

    pub fn debug(&self, message: impl Into<String>, meta: Value) {
        self.log(Level::Debug, message, meta);
    }

    pub fn info(&self, message: impl Into<String>, meta: Value) {
        self.log(Level::Info, message, meta);
    }

    pub fn warn(&self, message: impl Into<String>, meta: Value) {
        self.log(Level::Warn, message, meta);
    }

    pub fn error(&self, message: impl Into<String>, meta: Value) {
        self.log(Level::Error, message, meta);
    }
}
