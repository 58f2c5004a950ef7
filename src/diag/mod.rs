//! Global diagnostics for registry lifecycle events.
//!
//! Mirrors the registry's own lifecycle: initialize once at process
//! start, read-only afterwards. Every emit path is safe to call before
//! initialization; events are simply dropped until a service exists.

pub mod events;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use events::{DiagEvent, DiagLevel};
pub use service::{ConsoleSink, DiagService, MemorySink, Sink};

use crate::config::{self, InitError};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_DIAGNOSTICS: OnceLock<Arc<DiagService>> = OnceLock::new();

/// Initialize global diagnostics from runtime preferences.
pub fn init_diagnostics() -> Result<(), InitError> {
    config::validate_config()?;
    let service = Arc::new(DiagService::from_preferences(&config::preferences()));
    GLOBAL_DIAGNOSTICS
        .set(service)
        .map_err(|_| InitError::DiagnosticsAlreadyInitialized)
}

/// Initialize with a custom service (primarily for testing).
pub fn init_diagnostics_with_service(service: Arc<DiagService>) -> Result<(), InitError> {
    GLOBAL_DIAGNOSTICS
        .set(service)
        .map_err(|_| InitError::DiagnosticsAlreadyInitialized)
}

pub fn is_initialized() -> bool {
    GLOBAL_DIAGNOSTICS.get().is_some()
}

/// Safe access to the global service.
pub fn try_get_diagnostics() -> Option<&'static DiagService> {
    GLOBAL_DIAGNOSTICS.get().map(|service| service.as_ref())
}

// ============================================================================
// EMIT HELPERS
// ============================================================================

/// Emit an event through the global service, dropping it when
/// diagnostics are uninitialized.
pub fn emit(event: DiagEvent) {
    if let Some(service) = try_get_diagnostics() {
        service.emit(event);
    }
}

pub(crate) fn debug(message: &str, context: Vec<(&str, String)>) {
    emit(build(DiagEvent::debug(message), context));
}

pub(crate) fn info(message: &str, context: Vec<(&str, String)>) {
    emit(build(DiagEvent::info(message), context));
}

fn build(mut event: DiagEvent, context: Vec<(&str, String)>) -> DiagEvent {
    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    event
}
