use super::error::FilterError;
use super::predicate::{Predicate, PredicateChain};
use crate::event::{Event, append_trace};
use crate::observer::Observer;
use std::sync::Arc;

/// Observer that forwards events to another observer only if its predicates allow it
///
/// Dropped events vanish silently. A forwarded event that carries a
/// `log_trace` list gets a `[<this filter>, <downstream>]` entry appended
/// before it is handed on. Predicate errors are returned to the caller.
pub struct FilteringObserver<O> {
    name: String,
    observer: O,
    chain: PredicateChain,
}

impl<O: Observer> FilteringObserver<O> {
    /// Wrap `observer` behind `predicates`, evaluated in the given order
    pub fn new<I>(observer: O, predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        Self {
            name: "filter".to_string(),
            observer,
            chain: PredicateChain::new(predicates),
        }
    }

    /// Name this filter stage is recorded under in trace entries
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn chain(&self) -> &PredicateChain {
        &self.chain
    }

    /// The observer events are forwarded to
    pub fn inner(&self) -> &O {
        &self.observer
    }

    pub fn into_inner(self) -> O {
        self.observer
    }

    /// Forward `event` if the predicates allow it
    ///
    /// Returns whether the event was forwarded.
    pub fn forward(&self, event: &mut Event) -> Result<bool, FilterError> {
        if !self.chain.decide(event)? {
            return Ok(false);
        }

        append_trace(event, &self.name, self.observer.name());
        self.observer.observe(event)?;
        Ok(true)
    }
}

impl<O: Observer> Observer for FilteringObserver<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError> {
        self.forward(event).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PredicateResult;
    use crate::observer::FnObserver;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dropped_event_is_not_traced() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let sink = FnObserver::new("sink", move |_: &mut Event| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let deny: Arc<dyn Predicate> =
            Arc::new(|_: &Event| -> Result<PredicateResult, FilterError> { Ok(PredicateResult::Deny) });
        let filter = FilteringObserver::new(sink, vec![deny]);

        let mut event = Event::new();
        event.insert("log_trace".to_string(), json!([]));
        assert!(!filter.forward(&mut event).unwrap());
        assert_eq!(event["log_trace"], json!([]));
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_name_appears_in_trace() {
        let filter = FilteringObserver::new(FnObserver::new("sink", |_: &mut Event| {}), Vec::new())
            .with_name("edge");
        let mut event = Event::new();
        event.insert("log_trace".to_string(), json!([]));
        filter.observe(&mut event).unwrap();
        assert_eq!(event["log_trace"], json!([["edge", "sink"]]));
    }
}
