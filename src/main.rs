//! Site runtime bootstrap.
//!
//! Resolves the runtime configuration from the process environment, logs
//! it, and in development keeps a watcher on the source tree until Ctrl+C.

use std::path::PathBuf;

use clap::Parser;

use site_runtime::config::EnvSnapshot;
use site_runtime::dev::SourceWatcher;
use site_runtime::lifecycle::bootstrap;
use site_runtime::observability::init_logging;

#[derive(Parser)]
#[command(name = "site-runtime")]
#[command(about = "Resolve site runtime configuration and watch sources", long_about = None)]
struct Cli {
    /// Source tree to watch.
    #[arg(short, long, default_value = "src")]
    root: PathBuf,

    /// Resolve and exit without watching.
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    tracing::info!("site-runtime v{} starting", env!("CARGO_PKG_VERSION"));

    let config = bootstrap(&EnvSnapshot::from_process_env());

    if cli.no_watch {
        return Ok(());
    }

    let (watcher, mut changes) = SourceWatcher::new(&cli.root, &config.dev_server.watch);
    let _active = watcher.run()?;

    loop {
        tokio::select! {
            Some(change) = changes.recv() => {
                tracing::info!(paths = ?change.paths, "Sources changed");
            }
            res = tokio::signal::ctrl_c() => {
                res?;
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
