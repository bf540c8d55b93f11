use log_sieve::event::Event;
use log_sieve::filter::{FilteringObserver, LogLevelFilterPredicate, Predicate};
use log_sieve::level::LogLevel;
use log_sieve::observer::FnObserver;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[test]
fn test_resolve_sees_whole_updates_while_reconfiguring() {
    let levels = LogLevelFilterPredicate::new(LogLevel::Info);

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..500 {
                if i % 2 == 0 {
                    levels.set_log_level_for_namespace(Some("app"), LogLevel::Debug);
                    levels.set_log_level_for_namespace(Some("app.db"), LogLevel::Error);
                } else {
                    levels.clear_log_levels();
                }
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let level = levels.log_level_for_namespace(Some("app.db.pool"));
                    assert!(
                        matches!(level, LogLevel::Info | LogLevel::Debug | LogLevel::Error),
                        "unexpected level {:?}",
                        level
                    );
                }
            });
        }
    });
}

#[test]
fn test_shared_filter_forwards_from_many_threads() {
    let forwarded = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&forwarded);
    let sink = FnObserver::new("counter", move |_: &mut Event| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let levels = Arc::new(LogLevelFilterPredicate::new(LogLevel::Warn));
    let filter = FilteringObserver::new(sink, vec![levels as Arc<dyn Predicate>]);

    thread::scope(|scope| {
        for t in 0..4 {
            let filter = &filter;
            scope.spawn(move || {
                for i in 0..100 {
                    let level = if (t + i) % 2 == 0 { "error" } else { "debug" };
                    let mut event = match json!({"log_level": level, "log_namespace": "svc"}) {
                        serde_json::Value::Object(map) => map,
                        _ => unreachable!(),
                    };
                    filter.forward(&mut event).unwrap();
                }
            });
        }
    });

    assert_eq!(forwarded.load(Ordering::SeqCst), 200);
}
