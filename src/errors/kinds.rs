//! Base error kinds the factory decorates.
//!
//! A base kind is an externally supplied error category; the factory only
//! needs its display name and the ability to construct an instance from a
//! message, so the capability surface is a marker trait with a name.

use std::fmt::Debug;

/// Capability surface a base error kind must supply.
pub trait BaseKind: Debug + Send + Sync + 'static {
    /// Display name of the base kind, e.g. `"TypeError"`.
    const NAME: &'static str;
}

/// The host's plain error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

/// The host's type-error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeError;

/// The host's range-error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError;

impl BaseKind for Error {
    const NAME: &'static str = "Error";
}

impl BaseKind for TypeError {
    const NAME: &'static str = "TypeError";
}

impl BaseKind for RangeError {
    const NAME: &'static str = "RangeError";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Error::NAME, "Error");
        assert_eq!(TypeError::NAME, "TypeError");
        assert_eq!(RangeError::NAME, "RangeError");
    }
}
