use crate::level::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Filter JSON-lines log events by namespace level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML filter configuration
    #[arg(short, long, global = true, env = "LOG_SIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostics written to stderr (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forward the events that pass the level filter, one JSON object per line
    Filter {
        /// Input file of JSON-lines events (stdin if omitted)
        file: Option<PathBuf>,

        /// Write forwarded events here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Root level, overriding the configuration
        #[arg(short, long, value_enum)]
        default_level: Option<LogLevel>,

        /// Namespace level override, e.g. "app.db=error" ("=debug" sets the root)
        #[arg(short, long, value_name = "NAMESPACE=LEVEL", value_parser = parse_namespace_level)]
        set: Vec<(String, LogLevel)>,

        /// Start a trace list on events that lack one
        #[arg(short, long)]
        trace: bool,

        /// Print forwarded/dropped counts to stderr when done
        #[arg(long)]
        stats: bool,
    },
    /// Print the effective level for each namespace
    Resolve {
        /// Dotted namespaces to resolve
        #[arg(required = true)]
        namespaces: Vec<String>,
    },
    /// List configured namespace levels
    Levels,
}

/// Parse a `NAMESPACE=LEVEL` override
pub fn parse_namespace_level(s: &str) -> Result<(String, LogLevel), String> {
    let (namespace, level) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAMESPACE=LEVEL, got '{}'", s))?;
    let level = LogLevel::from_name(level).map_err(|e| e.to_string())?;
    Ok((namespace.trim().to_string(), level))
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
