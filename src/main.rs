use anyhow::{Context, Result};
use log_sieve::display::{display_resolved, levels_table};
use log_sieve::{
    Commands, FilteringObserver, JsonLinesObserver, Predicate, cli_parse, filter_events,
    load_config,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let cli = cli_parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Filter {
            file,
            output,
            default_level,
            set,
            trace,
            stats,
        } => {
            let mut config = config;
            if let Some(level) = default_level {
                config.default_level = level;
            }
            let predicate = Arc::new(config.build_predicate()?);
            for (namespace, level) in &set {
                predicate.set_log_level_for_namespace(Some(namespace.as_str()), *level);
            }

            let writer: Box<dyn Write + Send> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create '{}'", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout())),
            };
            let sink = JsonLinesObserver::new(writer);
            let predicates = vec![predicate as Arc<dyn Predicate>];
            let filter = FilteringObserver::new(sink, predicates);

            let counts = match &file {
                Some(path) => {
                    let input = File::open(path)
                        .with_context(|| format!("Failed to open '{}'", path.display()))?;
                    filter_events(BufReader::new(input), &filter, trace || config.trace)
                }
                None => filter_events(io::stdin().lock(), &filter, trace || config.trace),
            }?;
            filter.inner().flush()?;

            if stats {
                eprintln!(
                    "forwarded {} of {} events ({} dropped)",
                    counts.forwarded,
                    counts.total(),
                    counts.dropped
                );
            }
        }
        Commands::Resolve { namespaces } => {
            let predicate = config.build_predicate()?;
            display_resolved(&predicate, &namespaces);
        }
        Commands::Levels => {
            let predicate = config.build_predicate()?;
            println!("{}", levels_table(&predicate));
        }
    }

    Ok(())
}
