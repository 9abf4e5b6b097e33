//! Management CLI for inspecting the resolved site runtime configuration.
//!
//! Reads the same process environment as `site-runtime` and never mutates it.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use site_runtime::config::defines::define_constants;
use site_runtime::config::env::RECOGNISED_VARS;
use site_runtime::config::render::{render, Format};
use site_runtime::config::validation::lint;
use site_runtime::config::{resolve, EnvSnapshot, RuntimeConfig};
use site_runtime::dev::AllowedHosts;
use site_runtime::probe::probe_backends;

#[derive(Parser)]
#[command(name = "site-config")]
#[command(about = "Inspect the resolved site runtime configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the build-time constant table
    Defines,
    /// List recognised environment variables and their effective values
    Env,
    /// Check a Host header against the dev server allow-list
    CheckHost { host: String },
    /// Report non-fatal configuration problems
    Lint,
    /// GET every backend URL and report reachability
    Probe {
        #[arg(short, long, default_value_t = 5)]
        timeout_secs: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => Format::Json,
            OutputFormat::Toml => Format::Toml,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let env = EnvSnapshot::from_process_env();
    let config = resolve(&env);

    match cli.command {
        Commands::Show { format } => {
            println!("{}", render(&config, format.into())?);
        }
        Commands::Defines => {
            for (name, literal) in define_constants(&config) {
                println!("{} = {}", name, literal);
            }
        }
        Commands::Env => print_env(&env, &config),
        Commands::CheckHost { host } => {
            let allowed = AllowedHosts::new(&config.dev_server.allowed_hosts);
            if allowed.is_allowed(&host) {
                println!("allowed: {}", host);
            } else {
                println!("blocked: {}", host);
                std::process::exit(1);
            }
        }
        Commands::Lint => {
            let warnings = lint(&config);
            if warnings.is_empty() {
                println!("ok");
            }
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
        }
        Commands::Probe { timeout_secs } => {
            let reports =
                probe_backends(&config.backends, Duration::from_secs(timeout_secs)).await?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
            if reports.iter().any(|r| !r.is_reachable()) {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}

fn print_env(env: &EnvSnapshot, config: &RuntimeConfig) {
    let effective = [
        config.backends.backend_api_url.as_str(),
        config.backends.wp_api_url.as_str(),
        config.backends.node_api_url.as_str(),
    ];
    for (name, value) in RECOGNISED_VARS.iter().zip(effective) {
        let source = match env.non_empty(name) {
            Some(_) => "env",
            None => "default",
        };
        println!("{:<16} {:<8} {}", name, source, value);
    }
}
