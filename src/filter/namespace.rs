use super::error::FilterError;
use crate::level::LogLevel;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug)]
struct Levels {
    root: LogLevel,
    by_namespace: HashMap<String, LogLevel>,
}

/// Maps dotted namespaces to the minimum level they log at
///
/// A namespace with no entry of its own inherits the level of its closest
/// configured ancestor (`app.db.pool` falls back to `app.db`, then `app`),
/// and finally the root level. The root level always exists; `clear` resets
/// it to the default the resolver was built with.
///
/// Reads and writes go through an `RwLock`, so a `resolve` running alongside
/// `set_level` or `clear` sees either the old or the new mapping, never a mix.
#[derive(Debug)]
pub struct NamespaceLevelResolver {
    default_level: LogLevel,
    levels: RwLock<Levels>,
}

impl NamespaceLevelResolver {
    /// Create a resolver whose root level is `default_level`
    pub fn new(default_level: LogLevel) -> Self {
        Self {
            default_level,
            levels: RwLock::new(Levels {
                root: default_level,
                by_namespace: HashMap::new(),
            }),
        }
    }

    /// The level the root is reset to by [`clear`](Self::clear)
    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    /// Determine the effective level for a namespace
    ///
    /// `None` and the empty string both mean "no namespace" and resolve to
    /// the root level.
    pub fn resolve(&self, namespace: Option<&str>) -> LogLevel {
        let levels = self.levels.read();

        let namespace = match namespace {
            Some(ns) if !ns.is_empty() => ns,
            _ => return levels.root,
        };

        if let Some(level) = levels.by_namespace.get(namespace) {
            return *level;
        }

        // Most specific proper ancestor first, down to the first segment.
        for (dot, _) in namespace.rmatch_indices('.') {
            let ancestor = &namespace[..dot];
            if ancestor.is_empty() {
                continue;
            }
            if let Some(level) = levels.by_namespace.get(ancestor) {
                return *level;
            }
        }

        levels.root
    }

    /// Set the level for a namespace, or the root level for `None`/`""`
    pub fn set_level(&self, namespace: Option<&str>, level: LogLevel) {
        let mut levels = self.levels.write();
        match namespace {
            Some(ns) if !ns.is_empty() => {
                levels.by_namespace.insert(ns.to_string(), level);
            }
            _ => levels.root = level,
        }
        tracing::debug!(namespace = namespace.unwrap_or(""), %level, "namespace level set");
    }

    /// Set a level given by name
    ///
    /// Fails with [`FilterError::InvalidLevel`] if `level` does not name a
    /// recognized level; the existing configuration is left as it was.
    pub fn set_level_named(&self, namespace: Option<&str>, level: &str) -> Result<(), FilterError> {
        let level = LogLevel::from_name(level)?;
        self.set_level(namespace, level);
        Ok(())
    }

    /// Drop every namespace entry and reset the root to the default level
    pub fn clear(&self) {
        let mut levels = self.levels.write();
        levels.by_namespace.clear();
        levels.root = self.default_level;
        tracing::debug!(default = %self.default_level, "namespace levels cleared");
    }

    /// Snapshot of the explicit namespace entries, sorted by namespace
    ///
    /// The root level is not included; read it with `resolve(None)`.
    pub fn configured(&self) -> Vec<(String, LogLevel)> {
        let levels = self.levels.read();
        let mut entries: Vec<(String, LogLevel)> = levels
            .by_namespace
            .iter()
            .map(|(ns, level)| (ns.clone(), *level))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for NamespaceLevelResolver {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}
