//! Structured log record
//!
//! The normalized object form of a log call: numeric level, capture-time
//! timestamp, merged binding/object fields, and an optional type-preserving
//! message. Records are consumed immediately by the resolved sink and never
//! stored.

use super::argument::LogArgument;
use super::log_level::LogLevel;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Numeric severity value from the level registry
    pub level: u8,

    /// Capture-time wall clock, milliseconds since the Unix epoch
    pub time: i64,

    /// Merged fields: ancestor bindings oldest first, then the call's own
    /// object argument. Insertion order is preserved.
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    /// Message value; keeps the original JSON type of a single bare argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<Value>,
}

impl LogRecord {
    /// Create a record for `level`, capturing the timestamp now.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: level.value(),
            time: chrono::Utc::now().timestamp_millis(),
            fields: Map::new(),
            msg: None,
        }
    }

    /// Merge `fields` into the record, later keys overriding earlier ones.
    pub fn merge_fields(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert into the single object argument delivered to a console method
    /// in object mode.
    pub fn into_argument(self) -> LogArgument {
        let mut map = Map::new();
        map.insert("level".to_string(), Value::Number(self.level.into()));
        map.insert("time".to_string(), Value::Number(self.time.into()));
        for (key, value) in self.fields {
            map.insert(key, value);
        }
        if let Some(msg) = self.msg {
            map.insert("msg".to_string(), msg);
        }
        LogArgument::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_captures_level_and_time() {
        let record = LogRecord::new(LogLevel::Info);
        assert_eq!(record.level, 30);
        assert!(record.time > 0);
        assert!(record.msg.is_none());
    }

    #[test]
    fn test_merge_fields_overrides() {
        let mut record = LogRecord::new(LogLevel::Warn);
        let mut first = Map::new();
        first.insert("a".to_string(), json!(1));
        first.insert("b".to_string(), json!("old"));
        let mut second = Map::new();
        second.insert("b".to_string(), json!("new"));

        record.merge_fields(&first);
        record.merge_fields(&second);

        assert_eq!(record.fields["a"], json!(1));
        assert_eq!(record.fields["b"], json!("new"));
    }

    #[test]
    fn test_json_flattens_fields() {
        let mut record = LogRecord::new(LogLevel::Error);
        let mut fields = Map::new();
        fields.insert("test".to_string(), json!("test"));
        record.merge_fields(&fields);
        record.msg = Some(json!("boom"));

        let parsed: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed["level"], json!(50));
        assert_eq!(parsed["test"], json!("test"));
        assert_eq!(parsed["msg"], json!("boom"));
    }

    #[test]
    fn test_into_argument_keeps_types() {
        let mut record = LogRecord::new(LogLevel::Info);
        record.msg = Some(json!(1));

        match record.into_argument() {
            LogArgument::Object(map) => {
                assert_eq!(map["level"], json!(30));
                assert_eq!(map["msg"], json!(1));
                assert!(map["time"].as_i64().unwrap() > 0);
            }
            other => panic!("expected object argument, got {:?}", other),
        }
    }
}
