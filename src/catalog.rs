//! Fixed catalog of stable error codes and their message templates.
//!
//! Once published, a code's string value and general meaning are permanent:
//! the catalog only ever grows. Entries are registered in alphabetical
//! order; keep new codes in order when adding them.

use serde_json::Value;

use crate::format::{stringify, value_type};
use crate::registry::{self, Template};

// ============================================================================
// CODES (alphabetical)
// ============================================================================

pub const ERR_ASSERTION: &str = "ERR_ASSERTION";
pub const ERR_INVALID_ARGS: &str = "ERR_INVALID_ARGS";
pub const ERR_INVALID_ARG_TYPE: &str = "ERR_INVALID_ARG_TYPE";
pub const ERR_INVALID_ARG_VALUE: &str = "ERR_INVALID_ARG_VALUE";
pub const ERR_INVALID_CALLBACK: &str = "ERR_INVALID_CALLBACK";
pub const ERR_INVALID_FLAG: &str = "ERR_INVALID_FLAG";
pub const ERR_INVALID_IP: &str = "ERR_INVALID_IP";
pub const ERR_INVALID_PORT: &str = "ERR_INVALID_PORT";
pub const ERR_SETTING_SERVERS: &str = "ERR_SETTING_SERVERS";

/// Every published code, in registration (alphabetical) order.
pub fn all() -> &'static [&'static str] {
    &[
        ERR_ASSERTION,
        ERR_INVALID_ARGS,
        ERR_INVALID_ARG_TYPE,
        ERR_INVALID_ARG_VALUE,
        ERR_INVALID_CALLBACK,
        ERR_INVALID_FLAG,
        ERR_INVALID_IP,
        ERR_INVALID_PORT,
        ERR_SETTING_SERVERS,
    ]
}

// ============================================================================
// INSTALLATION
// ============================================================================

/// Register every catalog code with the process-wide registry.
///
/// Call once during process initialization, before `registry::seal()`.
/// Idempotent: re-installing the same templates does not change
/// resolution behavior.
pub fn install() {
    registry::register(ERR_ASSERTION, "%s");
    registry::register(ERR_INVALID_ARGS, "Invalid arguments");
    registry::register(
        ERR_INVALID_ARG_TYPE,
        Template::formatted(|args: &[Value]| {
            format!(
                "The \"{}\" argument must be type {}. Received type {}",
                stringify(arg(ERR_INVALID_ARG_TYPE, args, 0)),
                stringify(arg(ERR_INVALID_ARG_TYPE, args, 1)),
                value_type(arg(ERR_INVALID_ARG_TYPE, args, 2)),
            )
        }),
    );
    registry::register(
        ERR_INVALID_ARG_VALUE,
        Template::formatted(|args: &[Value]| {
            format!(
                "The argument '{}' is invalid. Received {}",
                stringify(arg(ERR_INVALID_ARG_VALUE, args, 0)),
                arg(ERR_INVALID_ARG_VALUE, args, 1),
            )
        }),
    );
    registry::register(ERR_INVALID_CALLBACK, "Callback must be a function");
    registry::register(
        ERR_INVALID_FLAG,
        Template::formatted(|args: &[Value]| {
            format!("Invalid flag: {}", stringify(arg(ERR_INVALID_FLAG, args, 0)))
        }),
    );
    registry::register(
        ERR_INVALID_IP,
        Template::formatted(|args: &[Value]| {
            format!(
                "Invalid IP address: {}",
                stringify(arg(ERR_INVALID_IP, args, 0))
            )
        }),
    );
    registry::register(
        ERR_INVALID_PORT,
        Template::formatted(|args: &[Value]| {
            format!(
                "Port should be >= 0 and < 65536. Received {}",
                stringify(arg(ERR_INVALID_PORT, args, 0))
            )
        }),
    );
    registry::register(
        ERR_SETTING_SERVERS,
        Template::formatted(|args: &[Value]| {
            format!(
                "Error setting servers: {}",
                stringify(arg(ERR_SETTING_SERVERS, args, 0))
            )
        }),
    );
}

/// Fetch a required positional argument, failing loudly when the call
/// site supplied too few.
fn arg<'a>(code: &str, args: &'a [Value], index: usize) -> &'a Value {
    args.get(index).unwrap_or_else(|| {
        panic!(
            "missing argument {} for message code '{}'",
            index, code
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_install_registers_every_code() {
        install();
        for code in all() {
            assert!(registry::is_registered(code), "{} not registered", code);
        }
    }

    #[test]
    fn test_catalog_is_alphabetical() {
        let codes = all();
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        assert_eq!(codes, &sorted[..]);
    }

    #[test]
    fn test_install_is_idempotent() {
        install();
        install();
        assert_eq!(
            registry::resolve(ERR_INVALID_ARGS, &args![]),
            "Invalid arguments"
        );
    }

    #[test]
    fn test_assertion_uses_sprintf_mode() {
        install();
        assert_eq!(
            registry::resolve(ERR_ASSERTION, &args!["expected a to equal b"]),
            "expected a to equal b"
        );
    }

    #[test]
    fn test_invalid_arg_type_wording() {
        install();
        assert_eq!(
            registry::resolve(ERR_INVALID_ARG_TYPE, &args!["name", "string", 5]),
            "The \"name\" argument must be type string. Received type number"
        );
        assert_eq!(
            registry::resolve(ERR_INVALID_ARG_TYPE, &args!["cb", "function", "nope"]),
            "The \"cb\" argument must be type function. Received type string"
        );
    }

    #[test]
    fn test_invalid_arg_value_wording() {
        install();
        assert_eq!(
            registry::resolve(ERR_INVALID_ARG_VALUE, &args!["flags", -1]),
            "The argument 'flags' is invalid. Received -1"
        );
        assert_eq!(
            registry::resolve(ERR_INVALID_ARG_VALUE, &args!["host", ""]),
            "The argument 'host' is invalid. Received \"\""
        );
    }

    #[test]
    fn test_fixed_templates() {
        install();
        assert_eq!(
            registry::resolve(ERR_INVALID_CALLBACK, &args![]),
            "Callback must be a function"
        );
        assert_eq!(
            registry::resolve(ERR_INVALID_ARGS, &args![]),
            "Invalid arguments"
        );
    }

    #[test]
    fn test_network_code_wordings() {
        install();
        assert_eq!(
            registry::resolve(ERR_INVALID_IP, &args!["300.0.0.1"]),
            "Invalid IP address: 300.0.0.1"
        );
        assert_eq!(
            registry::resolve(ERR_INVALID_PORT, &args![65536]),
            "Port should be >= 0 and < 65536. Received 65536"
        );
        assert_eq!(
            registry::resolve(ERR_INVALID_FLAG, &args!["ADDRCONFIG|BOGUS"]),
            "Invalid flag: ADDRCONFIG|BOGUS"
        );
        assert_eq!(
            registry::resolve(ERR_SETTING_SERVERS, &args!["query refused"]),
            "Error setting servers: query refused"
        );
    }

    #[test]
    #[should_panic(expected = "ERR_INVALID_ARG_TYPE")]
    fn test_missing_formatting_argument_fails_fast() {
        install();
        registry::resolve(ERR_INVALID_ARG_TYPE, &args!["name"]);
    }
}
