use crate::filter::{FilterError, LogLevelFilterPredicate};
use crate::level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Bad level for namespace '{namespace}': {source}")]
    Level {
        namespace: String,
        #[source]
        source: FilterError,
    },
}

/// Filter settings, usually loaded from a TOML file
///
/// ```toml
/// default_level = "info"
/// trace = false
///
/// [namespaces]
/// "app" = "debug"
/// "app.db" = "error"
/// ```
///
/// The key `""` sets the root level, overriding `default_level` until the
/// levels are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub default_level: LogLevel,
    /// Start a trace list on events that do not already carry one
    pub trace: bool,
    /// Level names keyed by namespace; validated by `build_predicate`
    pub namespaces: BTreeMap<String, String>,
}

impl FilterConfig {
    /// Build a level predicate seeded with this configuration
    pub fn build_predicate(&self) -> Result<LogLevelFilterPredicate, ConfigError> {
        let predicate = LogLevelFilterPredicate::new(self.default_level);
        for (namespace, level) in &self.namespaces {
            predicate
                .set_log_level_for_namespace_named(Some(namespace.as_str()), level)
                .map_err(|source| ConfigError::Level {
                    namespace: namespace.clone(),
                    source,
                })?;
        }
        Ok(predicate)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static FilterConfig {
    static DEFAULT_CONFIG: LazyLock<FilterConfig> = LazyLock::new(FilterConfig::default);
    &DEFAULT_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_info_root() {
        let cfg = default_config();
        assert_eq!(cfg.default_level, LogLevel::Info);
        assert!(!cfg.trace);
        assert!(cfg.namespaces.is_empty());
    }

    #[test]
    fn test_build_predicate_applies_namespaces() {
        let cfg: FilterConfig = toml::from_str(
            r#"
default_level = "warn"

[namespaces]
"" = "error"
"app" = "debug"
"#,
        )
        .unwrap();

        let predicate = cfg.build_predicate().unwrap();
        assert_eq!(predicate.default_log_level(), LogLevel::Warn);
        assert_eq!(predicate.log_level_for_namespace(None), LogLevel::Error);
        assert_eq!(predicate.log_level_for_namespace(Some("app.x")), LogLevel::Debug);

        predicate.clear_log_levels();
        assert_eq!(predicate.log_level_for_namespace(None), LogLevel::Warn);
    }

    #[test]
    fn test_unknown_namespace_level_is_reported() {
        let mut cfg = FilterConfig::default();
        cfg.namespaces.insert("app".to_string(), "noisy".to_string());

        match cfg.build_predicate() {
            Err(ConfigError::Level { namespace, source }) => {
                assert_eq!(namespace, "app");
                assert!(matches!(source, FilterError::InvalidLevel(_)));
            }
            other => panic!("expected level error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_default_level_fails_to_parse() {
        assert!(toml::from_str::<FilterConfig>("default_level = \"loud\"").is_err());
    }
}
