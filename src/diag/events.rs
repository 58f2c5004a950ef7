//! Diagnostic events describing registry lifecycle activity.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl DiagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagLevel::Error => "ERROR",
            DiagLevel::Warning => "WARN",
            DiagLevel::Info => "INFO",
            DiagLevel::Debug => "DEBUG",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Some(DiagLevel::Error),
            "warning" | "warn" => Some(DiagLevel::Warning),
            "info" => Some(DiagLevel::Info),
            "debug" => Some(DiagLevel::Debug),
            _ => None,
        }
    }
}

/// One diagnostic event with optional string context.
#[derive(Debug, Clone)]
pub struct DiagEvent {
    pub timestamp: DateTime<Utc>,
    pub level: DiagLevel,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl DiagEvent {
    pub fn new(level: DiagLevel, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self::new(DiagLevel::Error, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new(DiagLevel::Warning, message)
    }

    pub fn info(message: &str) -> Self {
        Self::new(DiagLevel::Info, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::new(DiagLevel::Debug, message)
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagLevel::Error
    }

    /// Format as a console line.
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {}", self.level.as_str(), self.message);
        if !self.context.is_empty() {
            let mut pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            pairs.sort_unstable();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }
        line
    }

    /// Format as a JSON line for structured output.
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "message": self.message,
        });

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(DiagLevel::Error < DiagLevel::Warning);
        assert!(DiagLevel::Info < DiagLevel::Debug);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(DiagLevel::from_str("debug"), Some(DiagLevel::Debug));
        assert_eq!(DiagLevel::from_str("WARN"), Some(DiagLevel::Warning));
        assert_eq!(DiagLevel::from_str("loud"), None);
    }

    #[test]
    fn test_event_creation() {
        let event = DiagEvent::info("registry sealed");
        assert_eq!(event.level, DiagLevel::Info);
        assert_eq!(event.message, "registry sealed");
        assert!(!event.is_error());
    }

    #[test]
    fn test_event_with_context() {
        let event = DiagEvent::debug("registered message template")
            .with_context("code", "ERR_INVALID_IP");
        assert_eq!(
            event.context.get("code"),
            Some(&"ERR_INVALID_IP".to_string())
        );
    }

    #[test]
    fn test_console_formatting() {
        let event = DiagEvent::info("message registry sealed").with_context("codes", "9");
        assert_eq!(
            event.format(),
            "[INFO] message registry sealed (codes=9)"
        );
    }

    #[test]
    fn test_json_formatting() {
        let event = DiagEvent::error("lock poisoned").with_context("stage", "seal");
        let json = event.format_json().unwrap();
        assert!(json.contains("\"level\":\"ERROR\""));
        assert!(json.contains("\"message\":\"lock poisoned\""));
        assert!(json.contains("\"stage\":\"seal\""));
    }
}
