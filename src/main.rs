use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use roshni_api_config::{ApiConfig, Endpoint, dotenv};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Resolve the backend base URL and print the derived endpoint table
#[derive(Debug, Parser)]
#[command(name = "roshni-api-config", version)]
struct Cli {
    /// Directory to load .env and .env.local from (repeatable)
    #[arg(long = "env-dir", default_value = ".")]
    env_dirs: Vec<PathBuf>,

    /// Print a single endpoint URL by its logical name (e.g. chatGroups)
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = load_env_and_filter(&cli.env_dirs)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = roshni_api_config::init().context("API configuration could not be resolved")?;
    config.log_startup();

    if let Some(name) = cli.endpoint.as_deref() {
        let endpoint = Endpoint::from_name(name)?;
        println!("{}", config.endpoint(endpoint));
        return Ok(());
    }

    print!("{}", render(config, cli.format)?);
    Ok(())
}

/// Load env files before building the filter, so a RUST_LOG set there is honoured
fn load_env_and_filter(env_dirs: &[PathBuf]) -> Result<EnvFilter> {
    dotenv::load_environment(env_dirs)?;
    Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
}

fn render(config: &ApiConfig, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            Ok(json)
        }
        Format::Text => {
            let mut out = format!("baseUrl\t{}\n", config.base_url);
            for (endpoint, url) in config.endpoints.iter() {
                out.push_str(&format!("{}\t{}\n", endpoint.name(), url));
            }
            Ok(out)
        }
    }
}
