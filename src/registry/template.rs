//! Message templates: the stored representation behind each code.

use std::fmt;

use serde_json::Value;

use crate::format;

/// Render function signature for argument-taking templates.
pub type RenderFn = dyn Fn(&[Value]) -> String + Send + Sync;

/// The two template forms a code can be registered with.
pub enum Template {
    /// Fixed display string. Doubles as a sprintf specifier when the
    /// caller supplies arguments (compatibility mode).
    Fixed(String),
    /// Formatting function over positional arguments.
    Formatted(Box<RenderFn>),
}

impl Template {
    /// Create a fixed-string template.
    pub fn fixed(text: impl Into<String>) -> Self {
        Template::Fixed(text.into())
    }

    /// Create a formatting-function template.
    pub fn formatted<F>(render: F) -> Self
    where
        F: Fn(&[Value]) -> String + Send + Sync + 'static,
    {
        Template::Formatted(Box::new(render))
    }

    /// Render this template against positional arguments.
    pub fn render(&self, args: &[Value]) -> String {
        match self {
            Template::Formatted(render) => render(args),
            Template::Fixed(text) if args.is_empty() => text.clone(),
            Template::Fixed(text) => format::sprintf(text, args),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Template::Fixed(_))
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, Template::Formatted(_))
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            Template::Formatted(_) => f.write_str("Formatted(..)"),
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::Fixed(text.to_string())
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::Fixed(text)
    }
}

impl From<fn(&[Value]) -> String> for Template {
    fn from(render: fn(&[Value]) -> String) -> Self {
        Template::Formatted(Box::new(render))
    }
}
