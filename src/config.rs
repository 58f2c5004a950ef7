//! Runtime preferences for diagnostics and error construction.
//!
//! Preferences are read once, either from an explicit `init_preferences`
//! call or lazily from `ERRKIT_*` environment variables. They tune the
//! ambient behavior of the crate; they never affect code identity or
//! message wording.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::diag::DiagLevel;

/// Initialization-time failures for preferences and diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("runtime preferences already initialized")]
    PreferencesAlreadyInitialized,

    #[error("diagnostics service already initialized")]
    DiagnosticsAlreadyInitialized,

    #[error("invalid value for {name}: '{value}'")]
    InvalidPreference { name: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryPreferences {
    /// Minimum level of registry lifecycle diagnostics to emit
    pub min_diag_level: DiagLevel,

    /// Whether diagnostics are emitted as JSON lines instead of console text
    pub use_structured_diagnostics: bool,

    /// Whether coded errors capture a backtrace at the construction site
    pub capture_backtraces: bool,
}

impl Default for RegistryPreferences {
    fn default() -> Self {
        Self {
            min_diag_level: env::var("ERRKIT_MIN_DIAG_LEVEL")
                .ok()
                .and_then(|v| DiagLevel::from_str(&v))
                .unwrap_or(DiagLevel::Info),
            use_structured_diagnostics: env::var("ERRKIT_STRUCTURED_DIAGNOSTICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            capture_backtraces: env::var("ERRKIT_CAPTURE_BACKTRACES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

static PREFERENCES: OnceLock<RegistryPreferences> = OnceLock::new();

/// Install explicit preferences. May be called at most once, before any
/// lazy default access.
pub fn init_preferences(preferences: RegistryPreferences) -> Result<(), InitError> {
    PREFERENCES
        .set(preferences)
        .map_err(|_| InitError::PreferencesAlreadyInitialized)
}

/// Current preferences, falling back to environment-derived defaults.
pub fn preferences() -> RegistryPreferences {
    PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate environment-supplied settings without installing anything.
///
/// `Default` falls back silently on unparsable variables; this surfaces
/// them so misconfiguration is visible at initialization time.
pub fn validate_config() -> Result<(), InitError> {
    if let Ok(value) = env::var("ERRKIT_MIN_DIAG_LEVEL") {
        if DiagLevel::from_str(&value).is_none() {
            return Err(InitError::InvalidPreference {
                name: "ERRKIT_MIN_DIAG_LEVEL",
                value,
            });
        }
    }
    for name in ["ERRKIT_STRUCTURED_DIAGNOSTICS", "ERRKIT_CAPTURE_BACKTRACES"] {
        if let Ok(value) = env::var(name) {
            if value.parse::<bool>().is_err() {
                return Err(InitError::InvalidPreference { name, value });
            }
        }
    }
    Ok(())
}

/// Human-readable configuration summary for diagnostics output.
pub fn config_summary() -> String {
    let preferences = preferences();
    format!(
        "Registry configuration:\n\
         - Min diagnostic level: {}\n\
         - Structured diagnostics: {}\n\
         - Capture backtraces: {}",
        preferences.min_diag_level.as_str(),
        preferences.use_structured_diagnostics,
        preferences.capture_backtraces,
    )
}
