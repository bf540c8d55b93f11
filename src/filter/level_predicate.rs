use super::error::FilterError;
use super::namespace::NamespaceLevelResolver;
use super::predicate::{Predicate, PredicateResult};
use crate::event::{Event, event_level, event_namespace};
use crate::level::LogLevel;

/// Drops events logged below the level configured for their namespace
///
/// Events without a level or a namespace are dropped too, as are events
/// whose level is not a recognized name. Everything else gets `Abstain`:
/// this predicate only vetoes, and leaves accepting to the rest of the chain.
#[derive(Debug, Default)]
pub struct LogLevelFilterPredicate {
    levels: NamespaceLevelResolver,
}

impl LogLevelFilterPredicate {
    /// Create a predicate whose root level is `default_level`
    pub fn new(default_level: LogLevel) -> Self {
        Self {
            levels: NamespaceLevelResolver::new(default_level),
        }
    }

    /// Level that `clear_log_levels` resets the root to
    pub fn default_log_level(&self) -> LogLevel {
        self.levels.default_level()
    }

    /// Effective level for a namespace, respecting dotted ancestors
    ///
    /// After `set_log_level_for_namespace(Some("mypackage"), LogLevel::Debug)`,
    /// `log_level_for_namespace(Some("mypackage.subpackage"))` is `Debug`.
    pub fn log_level_for_namespace(&self, namespace: Option<&str>) -> LogLevel {
        self.levels.resolve(namespace)
    }

    pub fn set_log_level_for_namespace(&self, namespace: Option<&str>, level: LogLevel) {
        self.levels.set_level(namespace, level);
    }

    /// Like [`set_log_level_for_namespace`](Self::set_log_level_for_namespace),
    /// with the level given by name
    pub fn set_log_level_for_namespace_named(
        &self,
        namespace: Option<&str>,
        level: &str,
    ) -> Result<(), FilterError> {
        self.levels.set_level_named(namespace, level)
    }

    /// Reset every namespace to the default level
    pub fn clear_log_levels(&self) {
        self.levels.clear();
    }

    /// Explicitly configured namespaces and their levels, sorted
    pub fn configured_levels(&self) -> Vec<(String, LogLevel)> {
        self.levels.configured()
    }
}

impl Predicate for LogLevelFilterPredicate {
    fn name(&self) -> &str {
        "log-level"
    }

    fn classify(&self, event: &Event) -> Result<PredicateResult, FilterError> {
        let (Some(level_name), Some(namespace)) = (event_level(event), event_namespace(event))
        else {
            tracing::debug!("dropping event without level or namespace");
            return Ok(PredicateResult::Deny);
        };

        let Ok(level) = LogLevel::from_name(level_name) else {
            tracing::debug!(namespace, level = level_name, "dropping event with unknown level");
            return Ok(PredicateResult::Deny);
        };

        let threshold = self.levels.resolve(Some(namespace));
        if level.priority() < threshold.priority() {
            tracing::debug!(namespace, %level, %threshold, "dropping event below namespace level");
            return Ok(PredicateResult::Deny);
        }

        Ok(PredicateResult::Abstain)
    }
}
