//! Process-wide message registry mapping stable codes to templates.
//!
//! The registry is append-only: codes are registered once at process
//! initialization and resolved many times afterwards. Registration after
//! `seal()` is a calling-convention violation and fails loudly.

pub mod template;

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use serde_json::Value;

pub use template::Template;

use crate::diag;

// ============================================================================
// REGISTRY
// ============================================================================

/// Owned code -> template mapping with an init-then-freeze lifecycle.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    templates: HashMap<String, Template>,
    sealed: bool,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            sealed: false,
        }
    }

    /// Insert a template under `code`, silently overwriting an existing
    /// entry. Code uniqueness is a calling-convention invariant, not a
    /// runtime check.
    ///
    /// # Panics
    ///
    /// Panics on an empty code or when the registry has been sealed;
    /// both indicate a bug at the call site.
    pub fn register(&mut self, code: &str, template: impl Into<Template>) {
        assert!(!code.is_empty(), "message code must be a non-empty string");
        assert!(
            !self.sealed,
            "message registry is sealed; cannot register '{}'",
            code
        );
        self.templates.insert(code.to_string(), template.into());
    }

    /// Render the message registered under `code` against `args`.
    ///
    /// # Panics
    ///
    /// Panics when `code` has no registered template; resolving an
    /// unregistered code is a programmer error, not a recoverable
    /// condition.
    pub fn resolve(&self, code: &str, args: &[Value]) -> String {
        let template = self
            .templates
            .get(code)
            .unwrap_or_else(|| panic!("no message template registered for code '{}'", code));
        template.render(args)
    }

    /// Freeze the registry; subsequent `register` calls panic.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn contains(&self, code: &str) -> bool {
        self.templates.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_REGISTRY: OnceLock<RwLock<MessageRegistry>> = OnceLock::new();

fn global() -> &'static RwLock<MessageRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(MessageRegistry::new()))
}

/// Register `code` with the process-wide registry.
///
/// Expected usage confines all registration to process initialization,
/// before `seal()`; the write lock covers hosts that register late.
pub fn register(code: &str, template: impl Into<Template>) {
    {
        let mut registry = global().write().expect("message registry lock poisoned");
        registry.register(code, template);
    }
    diag::debug("registered message template", vec![("code", code.to_string())]);
}

/// Resolve `code` against `args` through the process-wide registry.
pub fn resolve(code: &str, args: &[Value]) -> String {
    let registry = global().read().expect("message registry lock poisoned");
    registry.resolve(code, args)
}

/// Freeze the process-wide registry after initialization-time registration.
pub fn seal() {
    let count = {
        let mut registry = global().write().expect("message registry lock poisoned");
        registry.seal();
        registry.len()
    };
    diag::info(
        "message registry sealed",
        vec![("codes", count.to_string())],
    );
}

pub fn is_sealed() -> bool {
    global()
        .read()
        .expect("message registry lock poisoned")
        .is_sealed()
}

pub fn is_registered(code: &str) -> bool {
    global()
        .read()
        .expect("message registry lock poisoned")
        .contains(code)
}

pub fn registered_count() -> usize {
    global().read().expect("message registry lock poisoned").len()
}
