//! Coded errors: base-kind semantics plus a permanent identity code.
//!
//! `CodedError<K>` is the factory product of the design: a fully valid
//! error of base kind `K` whose machine identity is the code it was
//! constructed with. Message wording may change between releases; the
//! code never does, so downstream handling must branch on `code()`,
//! never on message text.

pub mod kinds;

use std::backtrace::Backtrace;
use std::marker::PhantomData;

use serde_json::Value;

pub use kinds::BaseKind;

use crate::{config, registry};

/// An error that is simultaneously a `K`-kind error and carries a
/// permanent code.
///
/// The code is set once at construction and exposed only through
/// [`code()`](CodedError::code); there is no way to reassign it. The
/// message is resolved through the message registry at construction time
/// and is immutable thereafter, matching base-kind semantics.
#[derive(Debug, thiserror::Error)]
#[error("{}[{}]: {}", K::NAME, .code, .message)]
pub struct CodedError<K: BaseKind> {
    code: &'static str,
    message: String,
    trace: Option<Backtrace>,
    kind: PhantomData<K>,
}

impl<K: BaseKind> CodedError<K> {
    /// Construct a coded error, rendering its message now.
    ///
    /// # Panics
    ///
    /// Panics when `code` is not registered with the message registry;
    /// an unregistered code is a registry/caller mismatch, caught at
    /// test time rather than handled at runtime.
    pub fn new(code: &'static str, args: &[Value]) -> Self {
        let message = registry::resolve(code, args);
        let trace = if config::preferences().capture_backtraces {
            Some(Backtrace::capture())
        } else {
            None
        };

        Self {
            code,
            message,
            trace,
            kind: PhantomData,
        }
    }

    /// Stable identity of this error condition. Write-once: fixed at
    /// construction.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Rendered message, fixed at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Displayed type name, `"<base kind>[<code>]"`.
    pub fn name(&self) -> String {
        format!("{}[{}]", K::NAME, self.code)
    }

    /// Name of the undecorated base kind.
    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    /// Backtrace captured at the construction site, when enabled by
    /// [`config::RegistryPreferences::capture_backtraces`].
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.trace.as_ref()
    }
}
