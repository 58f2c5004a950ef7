//! Sprintf-style rendering of positional JSON arguments.
//!
//! Fixed templates double as format specifiers when a caller supplies
//! arguments, so this module implements the small directive set those
//! templates rely on: `%s`, `%d`/`%i`, `%f`, `%j` and the `%%` escape.
//! Surplus arguments are appended space-separated; a directive with no
//! matching argument is left verbatim.

use serde_json::Value;

/// Render a value the way it should appear inside prose: strings bare,
/// everything else as JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Classify a value the way argument-taking templates describe it,
/// e.g. "Received type number".
pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Interpolate `args` into `spec` positionally.
pub fn sprintf(spec: &str, args: &[Value]) -> String {
    let mut output = String::with_capacity(spec.len() + 16);
    let mut chars = spec.chars();
    let mut next_arg = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some('%') => output.push('%'),
            Some(directive @ ('s' | 'd' | 'i' | 'f' | 'j')) => {
                if next_arg < args.len() {
                    output.push_str(&render_directive(directive, &args[next_arg]));
                    next_arg += 1;
                } else {
                    output.push('%');
                    output.push(directive);
                }
            }
            Some(other) => {
                output.push('%');
                output.push(other);
            }
            None => output.push('%'),
        }
    }

    for surplus in &args[next_arg..] {
        output.push(' ');
        output.push_str(&stringify(surplus));
    }

    output
}

fn render_directive(directive: char, value: &Value) -> String {
    match directive {
        's' => stringify(value),
        'd' | 'i' => match value {
            Value::Number(number) => number
                .as_i64()
                .map(|n| n.to_string())
                .or_else(|| number.as_f64().map(|n| (n.trunc() as i64).to_string()))
                .unwrap_or_else(|| "NaN".to_string()),
            _ => "NaN".to_string(),
        },
        'f' => match value {
            Value::Number(number) => number
                .as_f64()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "NaN".to_string()),
            _ => "NaN".to_string(),
        },
        'j' => value.to_string(),
        _ => unreachable!("unhandled format directive '{}'", directive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_directive() {
        assert_eq!(sprintf("hello %s", &[json!("world")]), "hello world");
        assert_eq!(sprintf("got %s", &[json!(42)]), "got 42");
    }

    #[test]
    fn test_numeric_directives() {
        assert_eq!(sprintf("%d items", &[json!(3)]), "3 items");
        assert_eq!(sprintf("%i items", &[json!(3.9)]), "3 items");
        assert_eq!(sprintf("%d items", &[json!("three")]), "NaN items");
        assert_eq!(sprintf("%f", &[json!(1.5)]), "1.5");
    }

    #[test]
    fn test_json_directive() {
        assert_eq!(sprintf("payload %j", &[json!({"a": 1})]), "payload {\"a\":1}");
        assert_eq!(sprintf("%j", &[json!("quoted")]), "\"quoted\"");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(sprintf("100%% done", &[]), "100% done");
    }

    #[test]
    fn test_surplus_args_appended() {
        assert_eq!(
            sprintf("base", &[json!("extra"), json!(1)]),
            "base extra 1"
        );
        assert_eq!(sprintf("%s", &[json!("a"), json!("b")]), "a b");
    }

    #[test]
    fn test_missing_args_leave_directive() {
        assert_eq!(sprintf("%s and %s", &[json!("one")]), "one and %s");
    }

    #[test]
    fn test_unknown_directive_passes_through() {
        assert_eq!(sprintf("%q", &[]), "%q");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(sprintf("50%", &[]), "50%");
    }

    #[test]
    fn test_value_type_classification() {
        assert_eq!(value_type(&json!("x")), "string");
        assert_eq!(value_type(&json!(5)), "number");
        assert_eq!(value_type(&json!(true)), "boolean");
        assert_eq!(value_type(&json!(null)), "null");
        assert_eq!(value_type(&json!([1, 2])), "array");
        assert_eq!(value_type(&json!({"k": "v"})), "object");
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!("bare")), "bare");
        assert_eq!(stringify(&json!(7)), "7");
        assert_eq!(stringify(&json!([1])), "[1]");
    }
}
