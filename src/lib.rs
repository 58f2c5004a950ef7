//! Centralized error-identity registry.
//!
//! Decouples a stable, machine-readable error code from its
//! human-readable message text: message wording can evolve freely while
//! programs keep branching on error identity. Each error condition gets a
//! permanent symbolic code, the registry stores a template (fixed string
//! or formatting function) under that code, and the error factory
//! produces errors whose `code` is stable while their rendered message
//! may vary.
//!
//! ```
//! use errkit::{args, catalog, registry};
//! use errkit::errors::{kinds, CodedError};
//!
//! // Process initialization: register the catalog, then freeze.
//! catalog::install();
//! registry::seal();
//!
//! // Raise site.
//! let err = CodedError::<kinds::TypeError>::new(
//!     catalog::ERR_INVALID_ARG_TYPE,
//!     &args!["name", "string", 5],
//! );
//! assert_eq!(err.code(), "ERR_INVALID_ARG_TYPE");
//! assert_eq!(err.name(), "TypeError[ERR_INVALID_ARG_TYPE]");
//! assert_eq!(
//!     err.message(),
//!     "The \"name\" argument must be type string. Received type number"
//! );
//! ```
//!
//! Downstream handling must branch on `code()`, never on message text.

// Internal modules
pub mod catalog;
pub mod config;
pub mod diag;
pub mod errors;
pub mod format;
pub mod registry;

// Re-export key types for library consumers
pub use config::{InitError, RegistryPreferences};
pub use errors::{kinds, BaseKind, CodedError};
pub use registry::{MessageRegistry, Template};

// Re-exported for the `args!` macro and for callers building argument
// lists by hand.
pub use serde_json::{json, Value};

/// Build a positional argument list for message resolution.
///
/// Each element is converted to a JSON value, so mixed literals work:
/// `args!["name", "string", 5]`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$( $crate::json!($value) ),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::{args, catalog, registry};
    use crate::errors::{kinds, CodedError};

    #[test]
    fn test_end_to_end_error_construction() {
        catalog::install();

        let err = CodedError::<kinds::TypeError>::new(
            catalog::ERR_INVALID_ARG_TYPE,
            &args!["name", "string", 5],
        );
        assert_eq!(err.code(), "ERR_INVALID_ARG_TYPE");
        assert_eq!(err.name(), "TypeError[ERR_INVALID_ARG_TYPE]");
        assert_eq!(
            err.message(),
            "The \"name\" argument must be type string. Received type number"
        );
    }

    #[test]
    fn test_args_macro_shapes() {
        let empty = args![];
        assert!(empty.is_empty());

        let mixed = args!["text", 5, true];
        assert_eq!(mixed.len(), 3);
        assert_eq!(mixed[0], crate::json!("text"));
        assert_eq!(mixed[1], crate::json!(5));
        assert_eq!(mixed[2], crate::json!(true));

        let trailing = args![1, 2,];
        assert_eq!(trailing.len(), 2);
    }

    #[test]
    fn test_registry_reexports() {
        registry::register("TEST_LIB_REEXPORT", "visible");
        assert_eq!(registry::resolve("TEST_LIB_REEXPORT", &args![]), "visible");
    }
}
