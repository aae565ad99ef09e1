//! Argument formatter
//!
//! Turns the variadic arguments of a level call into a [`LogRecord`]. Only
//! the structured path (custom write functions and object-mode console
//! routing) runs the formatter; raw console routing delivers the arguments
//! untouched.

use super::argument::LogArgument;
use super::bindings::BindingChain;
use super::log_level::LogLevel;
use super::record::LogRecord;

/// Whether `text` contains at least one recognized interpolation placeholder.
///
/// Only `%s`, `%d` and `%j` are recognized; any other specifier is passed
/// through literally by [`interpolate`].
pub fn has_placeholder(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes
        .windows(2)
        .any(|w| w[0] == b'%' && matches!(w[1], b's' | b'd' | b'j'))
}

/// Substitute `args` into `fmt`, consuming one argument per recognized
/// placeholder.
///
/// `%s` and `%d` stringify their argument (objects render as compact JSON),
/// `%j` JSON-serializes it, and `%%` escapes a literal percent. A
/// placeholder with no argument left, or an unrecognized specifier, is
/// emitted literally. Arguments left over once every placeholder is consumed
/// are appended, space-joined.
pub fn interpolate(fmt: &str, args: &[LogArgument]) -> String {
    let mut out = String::with_capacity(fmt.len());
    let mut next = args.iter();
    let mut pending = args.len();
    let mut chars = fmt.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'j')) if pending > 0 => {
                let spec = *spec;
                chars.next();
                // `pending > 0` guarantees the iterator yields a value
                if let Some(arg) = next.next() {
                    pending -= 1;
                    if spec == 'j' {
                        out.push_str(&arg.json_text());
                    } else {
                        out.push_str(&arg.join_text());
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in next {
        out.push(' ');
        out.push_str(&arg.join_text());
    }

    out
}

fn join(args: &[LogArgument]) -> String {
    args.iter()
        .map(LogArgument::join_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the structured record for a level call.
///
/// Ancestor bindings merge in first, oldest binding first, then the call's
/// own arguments apply according to their shape.
pub fn format_record(level: LogLevel, chain: &BindingChain, args: &[LogArgument]) -> LogRecord {
    let mut record = LogRecord::new(level);
    for binding in chain.collect() {
        record.merge_fields(binding);
    }

    match args {
        [] => {}
        [LogArgument::String(fmt), rest @ ..] if !rest.is_empty() && has_placeholder(fmt) => {
            record.msg = Some(serde_json::Value::String(interpolate(fmt, rest)));
        }
        [LogArgument::Object(map), rest @ ..] => {
            record.merge_fields(map);
            if !rest.is_empty() {
                record.msg = Some(serde_json::Value::String(join(rest)));
            }
        }
        [single] => {
            record.msg = Some(single.to_value());
        }
        many => {
            record.msg = Some(serde_json::Value::String(join(many)));
        }
    }

    record
}
