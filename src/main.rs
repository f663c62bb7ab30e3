use anyhow::Result;
use clap::Parser;
use redirector::{config, server};
use tracing_subscriber::EnvFilter;

/// URL redirector: resolves aliases and mints new ones.
#[derive(Parser)]
#[command(name = "redirector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<String>,

    /// Alternate dotenv file to load instead of `.env`
    #[arg(long)]
    env_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
