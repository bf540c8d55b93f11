use crate::event::{Event, LOG_TRACE};
use crate::filter::{FilterError, FilteringObserver};
use crate::observer::Observer;
use serde_json::Value;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read events: {0}")]
    Read(#[source] std::io::Error),

    #[error("Line {line}: invalid JSON: {source}")]
    InvalidJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: expected a JSON object, got {found}")]
    NotAnObject { line: usize, found: String },

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Counts of what happened to the events in one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub forwarded: usize,
    pub dropped: usize,
}

impl FilterStats {
    pub fn total(&self) -> usize {
        self.forwarded + self.dropped
    }
}

/// Parse one line of input into an event
pub fn parse_event(line: &str, line_number: usize) -> Result<Event, PipelineError> {
    let value: Value =
        serde_json::from_str(line).map_err(|source| PipelineError::InvalidJson {
            line: line_number,
            source,
        })?;

    match value {
        Value::Object(event) => Ok(event),
        other => Err(PipelineError::NotAnObject {
            line: line_number,
            found: other.to_string(),
        }),
    }
}

/// Push every JSON-lines event from `reader` through `filter`
///
/// Blank lines are skipped. With `seed_trace`, events without a `log_trace`
/// field get an empty one first, so the forwarded output shows which stages
/// passed them.
pub fn filter_events<R, O>(
    reader: R,
    filter: &FilteringObserver<O>,
    seed_trace: bool,
) -> Result<FilterStats, PipelineError>
where
    R: BufRead,
    O: Observer,
{
    let mut stats = FilterStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(PipelineError::Read)?;
        if line.trim().is_empty() {
            continue;
        }

        let mut event = parse_event(&line, idx + 1)?;
        if seed_trace && !event.contains_key(LOG_TRACE) {
            event.insert(LOG_TRACE.to_string(), Value::Array(Vec::new()));
        }

        if filter.forward(&mut event)? {
            stats.forwarded += 1;
        } else {
            stats.dropped += 1;
        }
    }

    tracing::debug!(forwarded = stats.forwarded, dropped = stats.dropped, "filter run finished");
    Ok(stats)
}
