//! Diagnostic sinks and the level-filtering service.

use std::sync::{Arc, Mutex};

use super::events::{DiagEvent, DiagLevel};
use crate::config::RegistryPreferences;

/// Destination for diagnostic events.
pub trait Sink: Send + Sync {
    fn emit(&self, event: &DiagEvent);
}

/// Writes events to stderr, either as console lines or JSON lines.
pub struct ConsoleSink {
    structured: bool,
}

impl ConsoleSink {
    pub fn new(structured: bool) -> Self {
        Self { structured }
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, event: &DiagEvent) {
        if self.structured {
            match event.format_json() {
                Ok(line) => eprintln!("{}", line),
                Err(_) => eprintln!("{}", event.format()),
            }
        } else {
            eprintln!("{}", event.format());
        }
    }
}

/// Captures events in memory; test support.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagEvent> {
        self.events.lock().expect("memory sink lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.events.lock().expect("memory sink lock poisoned").clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, event: &DiagEvent) {
        self.events
            .lock()
            .expect("memory sink lock poisoned")
            .push(event.clone());
    }
}

/// Level-filtering diagnostic service.
pub struct DiagService {
    sink: Arc<dyn Sink>,
    min_level: DiagLevel,
}

impl DiagService {
    pub fn new(sink: Arc<dyn Sink>, min_level: DiagLevel) -> Self {
        Self { sink, min_level }
    }

    /// Build a console-backed service from runtime preferences.
    pub fn from_preferences(preferences: &RegistryPreferences) -> Self {
        Self::new(
            Arc::new(ConsoleSink::new(preferences.use_structured_diagnostics)),
            preferences.min_diag_level,
        )
    }

    pub fn should_emit(&self, level: DiagLevel) -> bool {
        level <= self.min_level
    }

    pub fn emit(&self, event: DiagEvent) {
        if self.should_emit(event.level) {
            self.sink.emit(&event);
        }
    }
}
