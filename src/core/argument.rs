//! Call-argument model
//!
//! Every value passed to a level call is classified exactly once, at the call
//! boundary, into a [`LogArgument`]. Downstream formatting and dispatch
//! consume the tagged form and never re-inspect types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single argument of a level call, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArgument {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map<String, Value>),
    Error(ErrorArgument),
}

/// The preserved form of an error value.
///
/// Carries the error's type name and rendered message so the sink receives
/// the error as an error, not as a flattened string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorArgument {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ErrorArgument {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Capture any error, keeping its short type name and display message.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let kind = std::any::type_name::<E>()
            .rsplit("::")
            .next()
            .unwrap_or("Error");
        Self::new(kind, err.to_string())
    }

    /// Object form used when the error lands in a structured record.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.kind.clone()));
        map.insert("message".to_string(), Value::String(self.message.clone()));
        Value::Object(map)
    }
}

impl fmt::Display for ErrorArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl LogArgument {
    /// Capture an error value as an argument.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        LogArgument::Error(ErrorArgument::from_error(err))
    }

    /// Whether this is a plain object (not an error, not a string).
    pub fn is_object(&self) -> bool {
        matches!(self, LogArgument::Object(_))
    }

    /// JSON value form of this argument, type-preserving.
    pub fn to_value(&self) -> Value {
        match self {
            LogArgument::Null => Value::Null,
            LogArgument::Bool(b) => Value::Bool(*b),
            LogArgument::Number(n) => Value::Number(n.clone()),
            LogArgument::String(s) => Value::String(s.clone()),
            LogArgument::Array(items) => Value::Array(items.clone()),
            LogArgument::Object(map) => Value::Object(map.clone()),
            LogArgument::Error(err) => err.to_value(),
        }
    }

    /// Text form used when space-joining arguments into a message.
    ///
    /// Strings pass through unquoted; objects and arrays are serialized as
    /// compact JSON.
    pub fn join_text(&self) -> String {
        match self {
            LogArgument::Null => "null".to_string(),
            LogArgument::Bool(b) => b.to_string(),
            LogArgument::Number(n) => n.to_string(),
            LogArgument::String(s) => s.clone(),
            LogArgument::Array(_) | LogArgument::Object(_) => self.to_value().to_string(),
            LogArgument::Error(err) => err.to_string(),
        }
    }

    /// Text form used for a `%j` placeholder: JSON for everything,
    /// including strings.
    pub fn json_text(&self) -> String {
        self.to_value().to_string()
    }
}

impl From<Value> for LogArgument {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LogArgument::Null,
            Value::Bool(b) => LogArgument::Bool(b),
            Value::Number(n) => LogArgument::Number(n),
            Value::String(s) => LogArgument::String(s),
            Value::Array(items) => LogArgument::Array(items),
            Value::Object(map) => LogArgument::Object(map),
        }
    }
}

impl From<&str> for LogArgument {
    fn from(s: &str) -> Self {
        LogArgument::String(s.to_string())
    }
}

impl From<String> for LogArgument {
    fn from(s: String) -> Self {
        LogArgument::String(s)
    }
}

impl From<i32> for LogArgument {
    fn from(n: i32) -> Self {
        LogArgument::Number(Number::from(n))
    }
}

impl From<i64> for LogArgument {
    fn from(n: i64) -> Self {
        LogArgument::Number(Number::from(n))
    }
}

impl From<u64> for LogArgument {
    fn from(n: u64) -> Self {
        LogArgument::Number(Number::from(n))
    }
}

impl From<f64> for LogArgument {
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(LogArgument::Number)
            .unwrap_or(LogArgument::Null)
    }
}

impl From<bool> for LogArgument {
    fn from(b: bool) -> Self {
        LogArgument::Bool(b)
    }
}

impl From<Map<String, Value>> for LogArgument {
    fn from(map: Map<String, Value>) -> Self {
        LogArgument::Object(map)
    }
}

impl From<ErrorArgument> for LogArgument {
    fn from(err: ErrorArgument) -> Self {
        LogArgument::Error(err)
    }
}

/// The variadic argument list of a single level call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments(Vec<LogArgument>);

impl CallArguments {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_vec(args: Vec<LogArgument>) -> Self {
        Self(args)
    }

    pub fn as_slice(&self) -> &[LogArgument] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<LogArgument> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<LogArgument> for CallArguments {
    fn from(arg: LogArgument) -> Self {
        Self(vec![arg])
    }
}

impl From<Vec<LogArgument>> for CallArguments {
    fn from(args: Vec<LogArgument>) -> Self {
        Self(args)
    }
}

impl From<&str> for CallArguments {
    fn from(s: &str) -> Self {
        Self(vec![LogArgument::from(s)])
    }
}

impl From<String> for CallArguments {
    fn from(s: String) -> Self {
        Self(vec![LogArgument::from(s)])
    }
}

impl From<Value> for CallArguments {
    fn from(value: Value) -> Self {
        Self(vec![LogArgument::from(value)])
    }
}

impl From<ErrorArgument> for CallArguments {
    fn from(err: ErrorArgument) -> Self {
        Self(vec![LogArgument::from(err)])
    }
}

impl FromIterator<LogArgument> for CallArguments {
    fn from_iter<I: IntoIterator<Item = LogArgument>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification_from_value() {
        assert_eq!(LogArgument::from(json!(null)), LogArgument::Null);
        assert_eq!(LogArgument::from(json!(true)), LogArgument::Bool(true));
        assert!(matches!(LogArgument::from(json!(1)), LogArgument::Number(_)));
        assert!(matches!(
            LogArgument::from(json!("hi")),
            LogArgument::String(_)
        ));
        assert!(matches!(
            LogArgument::from(json!([1, 2])),
            LogArgument::Array(_)
        ));
        assert!(LogArgument::from(json!({"a": 1})).is_object());
    }

    #[test]
    fn test_join_text() {
        assert_eq!(LogArgument::from("test").join_text(), "test");
        assert_eq!(LogArgument::from(42i64).join_text(), "42");
        assert_eq!(LogArgument::from(true).join_text(), "true");
        assert_eq!(
            LogArgument::from(json!({"test": "test2"})).join_text(),
            r#"{"test":"test2"}"#
        );
    }

    #[test]
    fn test_json_text_quotes_strings() {
        assert_eq!(LogArgument::from("test").json_text(), r#""test""#);
        assert_eq!(
            LogArgument::from(json!({"test": "test3"})).json_text(),
            r#"{"test":"test3"}"#
        );
    }

    #[test]
    fn test_error_argument_capture() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let arg = LogArgument::from_error(&io_err);

        match &arg {
            LogArgument::Error(err) => {
                assert_eq!(err.kind, "Error");
                assert_eq!(err.message, "missing file");
            }
            other => panic!("expected error argument, got {:?}", other),
        }

        let value = arg.to_value();
        assert_eq!(value["message"], json!("missing file"));
    }

    #[test]
    fn test_call_arguments_from_single() {
        let args = CallArguments::from("hello");
        assert_eq!(args.len(), 1);
        assert_eq!(args.as_slice()[0], LogArgument::from("hello"));
    }
}
