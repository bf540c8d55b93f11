//! Event filtering
//!
//! A [`FilteringObserver`] sits in front of another observer and forwards
//! only the events its predicates let through.
//!
//! # Evaluation
//!
//! ```text
//! event ──► predicate 1 ──► predicate 2 ──► ... ──► forward
//!              │                │
//!              ├─ Allow: forward now
//!              ├─ Deny:  drop now
//!              └─ Abstain: ask the next one
//! ```
//!
//! When every predicate abstains, the event is forwarded.
//!
//! # Namespace levels
//!
//! [`LogLevelFilterPredicate`] drops events below the level configured for
//! their namespace. Namespaces are dotted; an unconfigured namespace inherits
//! from its nearest configured ancestor, then from the root level.
//!
//! ```text
//! root = info, app = debug
//!
//! app.db.pool  ──► debug   (inherited from app)
//! other        ──► info    (root)
//! ```

pub mod error;
pub mod forwarder;
pub mod level_predicate;
pub mod namespace;
pub mod predicate;

pub use error::FilterError;
pub use forwarder::FilteringObserver;
pub use level_predicate::LogLevelFilterPredicate;
pub use namespace::NamespaceLevelResolver;
pub use predicate::{Predicate, PredicateChain, PredicateResult, should_log_event};
