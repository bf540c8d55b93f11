use crate::filter::LogLevelFilterPredicate;
use crate::level::LogLevel;
use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

/// Color a level name by severity
pub fn colorize_level(level: LogLevel) -> ColoredString {
    let name = level.name();
    match level {
        LogLevel::Critical => name.red().bold().underline(),
        LogLevel::Error => name.red().bold(),
        LogLevel::Warn => name.yellow().bold(),
        LogLevel::Info => name.green(),
        LogLevel::Debug => name.bright_blue(),
    }
}

/// Print the effective level of each namespace, one per line
pub fn display_resolved(predicate: &LogLevelFilterPredicate, namespaces: &[String]) {
    let width = namespaces.iter().map(|ns| ns.len()).max().unwrap_or(0);
    for namespace in namespaces {
        let level = predicate.log_level_for_namespace(Some(namespace.as_str()));
        println!("{:<width$}  {}", namespace, colorize_level(level), width = width);
    }
}

/// Build a table of the root level and every configured namespace
pub fn levels_table(predicate: &LogLevelFilterPredicate) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Namespace", "Level"]);

    table.add_row(vec![
        Cell::new("(root)"),
        Cell::new(predicate.log_level_for_namespace(None)),
    ]);
    for (namespace, level) in predicate.configured_levels() {
        table.add_row(vec![Cell::new(namespace), Cell::new(level)]);
    }

    table
}
