use clap::Parser;
use filmdb::{Exit, Source};
use filmdb_core::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "filmdb", about = "Search a film database by title, genre or actor")]
struct Cli {
    /// Write debug logs to /tmp/filmdb-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/filmdb/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// MongoDB connection string, overriding `store.uri`.
    #[arg(long)]
    uri: Option<String>,

    /// Search a JSON array of film documents instead of MongoDB.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Exit> {
    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/filmdb-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("filmdb debug log started, tail -f /tmp/filmdb-debug.log");
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        }),
    };
    if let Some(uri) = cli.uri {
        config.store.uri = uri;
    }

    let source = match cli.data {
        Some(path) => Source::File(path),
        None => Source::Mongo(config.store.clone()),
    };
    let store = match filmdb::open_store(&source) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Database error: {e}");
            return Ok(Exit::Unreachable);
        }
    };

    let stdin = std::io::stdin();
    let exit = filmdb::session(
        store,
        config.search,
        stdin.lock(),
        std::io::stdout(),
        std::io::stderr(),
    )?;
    Ok(exit)
}
