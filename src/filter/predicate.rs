use super::error::FilterError;
use crate::event::Event;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A predicate's opinion about a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Forward the event; later predicates are not consulted
    Allow,
    /// Drop the event; later predicates are not consulted
    Deny,
    /// No opinion; ask the next predicate
    Abstain,
}

impl PredicateResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateResult::Allow => "allow",
            PredicateResult::Deny => "deny",
            PredicateResult::Abstain => "abstain",
        }
    }
}

impl fmt::Display for PredicateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredicateResult {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" | "yes" => Ok(PredicateResult::Allow),
            "deny" | "no" => Ok(PredicateResult::Deny),
            "abstain" | "maybe" => Ok(PredicateResult::Abstain),
            _ => Err(FilterError::InvalidPredicateResult(s.to_string())),
        }
    }
}

/// Classifies events as allow, deny or abstain
///
/// Predicates are shared between threads, so implementations must be safe
/// to call concurrently. An `Err` means the predicate itself is broken and
/// is propagated to whoever is filtering; it is not a way to drop events.
pub trait Predicate: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Give an opinion on `event`
    fn classify(&self, event: &Event) -> Result<PredicateResult, FilterError>;
}

impl<F> Predicate for F
where
    F: Fn(&Event) -> Result<PredicateResult, FilterError> + Send + Sync,
{
    fn classify(&self, event: &Event) -> Result<PredicateResult, FilterError> {
        self(event)
    }
}

/// Decide whether an event should be forwarded
///
/// Predicates run in order. The first `Allow` returns `true` and the first
/// `Deny` returns `false` without running the rest. If every predicate
/// abstains, or there are none, the event is forwarded.
pub fn should_log_event(
    predicates: &[Arc<dyn Predicate>],
    event: &Event,
) -> Result<bool, FilterError> {
    for predicate in predicates {
        match predicate.classify(event)? {
            PredicateResult::Allow => return Ok(true),
            PredicateResult::Deny => {
                tracing::trace!(predicate = predicate.name(), "event denied");
                return Ok(false);
            }
            PredicateResult::Abstain => continue,
        }
    }
    Ok(true)
}

/// An ordered, fixed list of predicates
///
/// The list is copied when the chain is built; the caller's collection can
/// change afterwards without affecting the chain.
#[derive(Clone)]
pub struct PredicateChain {
    predicates: Arc<[Arc<dyn Predicate>]>,
}

impl PredicateChain {
    /// Build a chain from predicates in evaluation order
    pub fn new<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }

    /// Decide whether `event` should be forwarded
    pub fn decide(&self, event: &Event) -> Result<bool, FilterError> {
        should_log_event(&self.predicates, event)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Names of all predicates in chain order
    pub fn names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }
}

impl fmt::Debug for PredicateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateChain")
            .field("predicates", &self.names())
            .finish()
    }
}
