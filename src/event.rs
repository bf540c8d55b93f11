use serde_json::{Map, Value};

/// A log event: a free-form mapping from field name to value
pub type Event = Map<String, Value>;

/// Field holding the event's severity name
pub const LOG_LEVEL: &str = "log_level";
/// Field holding the event's dotted namespace
pub const LOG_NAMESPACE: &str = "log_namespace";
/// Opt-in list of `[stage, next]` pairs recording which filters passed the event
pub const LOG_TRACE: &str = "log_trace";

/// Read the event's level name, if it carries one
pub fn event_level(event: &Event) -> Option<&str> {
    event.get(LOG_LEVEL).and_then(Value::as_str)
}

/// Read the event's namespace, if it carries one
pub fn event_namespace(event: &Event) -> Option<&str> {
    event.get(LOG_NAMESPACE).and_then(Value::as_str)
}

/// Append a `[stage, next]` entry to the event's trace list
///
/// Only events that already carry a `log_trace` array are touched; the field
/// is never created here. Returns whether an entry was appended.
pub fn append_trace(event: &mut Event, stage: &str, next: &str) -> bool {
    match event.get_mut(LOG_TRACE) {
        Some(Value::Array(trace)) => {
            trace.push(Value::Array(vec![
                Value::String(stage.to_string()),
                Value::String(next.to_string()),
            ]));
            true
        }
        Some(other) => {
            tracing::warn!(
                field = LOG_TRACE,
                found = %other,
                "trace field is not a list, leaving it untouched"
            );
            false
        }
        None => false,
    }
}
