use thiserror::Error;

/// Errors raised while configuring or running event filters
///
/// Dropping an event is never an error; these signal a bad level name, a
/// misbehaving predicate, or a downstream write failure.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid log level: '{0}'. Valid levels are: debug, info, warn, error, critical")]
    InvalidLevel(String),

    #[error("Invalid predicate result: '{0}'. Valid results are: allow, deny, abstain")]
    InvalidPredicateResult(String),

    #[error("Failed to write event: {0}")]
    Io(#[from] std::io::Error),
}
