pub mod cli;
pub mod config;
pub mod display;
pub mod event;
pub mod filter;
pub mod level;
pub mod observer;
pub mod pipeline;

pub use cli::{Cli, Commands, cli_parse};
pub use config::{ConfigError, FilterConfig, load_config, load_config_from_path};
pub use event::{Event, LOG_LEVEL, LOG_NAMESPACE, LOG_TRACE};
pub use filter::{
    FilterError, FilteringObserver, LogLevelFilterPredicate, NamespaceLevelResolver, Predicate,
    PredicateChain, PredicateResult, should_log_event,
};
pub use level::LogLevel;
pub use observer::{FnObserver, JsonLinesObserver, Observer};
pub use pipeline::{FilterStats, PipelineError, filter_events};
