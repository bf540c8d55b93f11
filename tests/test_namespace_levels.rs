use log_sieve::filter::{FilterError, NamespaceLevelResolver};
use log_sieve::level::LogLevel;

#[test]
fn test_scenario_app_debug_with_info_default() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Info);
    resolver.set_level(Some("app"), LogLevel::Debug);

    assert_eq!(resolver.resolve(Some("app.db")), LogLevel::Debug);
    assert_eq!(resolver.resolve(Some("other")), LogLevel::Info);
}

#[test]
fn test_nearest_configured_ancestor_wins() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Info);
    resolver.set_level(Some("a"), LogLevel::Critical);
    resolver.set_level(Some("a.b"), LogLevel::Warn);

    for ns in ["a.b.c", "a.b.c.d", "a.b.c.d.e"] {
        assert_eq!(resolver.resolve(Some(ns)), LogLevel::Warn, "namespace {}", ns);
    }
    assert_eq!(resolver.resolve(Some("a.x.b")), LogLevel::Critical);
}

#[test]
fn test_unconfigured_namespaces_get_root_level() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Error);
    resolver.set_level(Some("app.db"), LogLevel::Debug);

    for ns in ["app", "db", "app2.db", "x.app.db", "app_db"] {
        assert_eq!(resolver.resolve(Some(ns)), LogLevel::Error, "namespace {}", ns);
    }
}

#[test]
fn test_clear_resets_every_namespace_to_default() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Info);
    resolver.set_level(None, LogLevel::Critical);
    resolver.set_level(Some("app"), LogLevel::Debug);
    resolver.set_level(Some("app.db.pool"), LogLevel::Error);

    resolver.clear();

    for ns in [None, Some(""), Some("app"), Some("app.db.pool"), Some("zzz")] {
        assert_eq!(resolver.resolve(ns), LogLevel::Info);
    }
}

#[test]
fn test_set_level_named_rejects_unknown_levels() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Info);
    resolver.set_level_named(Some("app"), "error").unwrap();

    let err = resolver.set_level_named(Some("app"), "trace").unwrap_err();
    assert!(matches!(err, FilterError::InvalidLevel(ref name) if name == "trace"));
    let err = resolver.set_level_named(None, "").unwrap_err();
    assert!(matches!(err, FilterError::InvalidLevel(_)));

    assert_eq!(resolver.resolve(Some("app")), LogLevel::Error);
    assert_eq!(resolver.resolve(None), LogLevel::Info);
}

#[test]
fn test_overwrite_replaces_exact_entry() {
    let resolver = NamespaceLevelResolver::new(LogLevel::Info);
    resolver.set_level(Some("app"), LogLevel::Debug);
    resolver.set_level(Some("app"), LogLevel::Warn);

    assert_eq!(resolver.configured(), vec![("app".to_string(), LogLevel::Warn)]);
}
