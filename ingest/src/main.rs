use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
#[command(about = "Turns scraped match-report values into series records")]
struct Cli {
    /// JSON file with additions to the tag, agent, display-name and veto-override tables
    #[arg(long, env = "VETO_TABLES", global = true)]
    tables: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build records from raw series files and print them as JSON lines
    Series {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Show which team a token resolves to and which rule decided it
    Resolve {
        token: String,
        left: String,
        right: String,
    },
    /// Parse a veto note
    Veto {
        text: String,
        left: String,
        right: String,

        #[arg(long)]
        match_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let max_level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            (meta.target().contains("ingest") || meta.target().contains("analysis"))
                && *meta.level() <= max_level
        }));
    tracing::subscriber::set_global_default(registry)?;

    let tables = Arc::new(ingest::load_tables(cli.tables.as_deref())?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Series { files, pretty } => {
            let total = files.len();
            let results = ingest::process_files(tables, files).await;

            let mut failed = 0;
            for (path, result) in results {
                let records = match result {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::error!("Processing {}: {:?}", path.display(), e);
                        failed += 1;
                        continue;
                    }
                };

                for record in records.iter() {
                    if pretty {
                        serde_json::to_writer_pretty(&mut out, record)?;
                    } else {
                        serde_json::to_writer(&mut out, record)?;
                    }
                    writeln!(out)?;
                }
            }

            if failed > 0 {
                anyhow::bail!("{} of {} input files failed", failed, total);
            }
        }
        Command::Resolve { token, left, right } => {
            let resolution = analysis::teams::resolve_with_strategy(&tables, &token, &left, &right);
            writeln!(
                out,
                "{} ({:?}, {:?})",
                resolution.team(&left, &right),
                resolution.side,
                resolution.strategy
            )?;
        }
        Command::Veto {
            text,
            left,
            right,
            match_id,
        } => {
            let parsed = analysis::veto::parse_for_match(&tables, match_id.as_deref(), &text, &left, &right);
            serde_json::to_writer_pretty(&mut out, &parsed)?;
            writeln!(out)?;
        }
    };

    Ok(())
}
