//! CCB CLI - query the Church Community Builder service API

use std::time::Duration;

use ccb_api::processes::queue_managers::QueueManagers;
use ccb_api::{ApiConfig, ContentType, Executor};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccb")]
#[command(about = "Query the Church Community Builder service API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Exchange XML instead of the configured content type
    #[arg(long, global = true)]
    xml: bool,

    /// Request timeout in seconds (overrides CCB_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the managers of a process's queues
    QueueManagers {
        /// Only managers of this process
        #[arg(long, value_name = "ID")]
        process_id: Option<u32>,

        /// Only managers of this queue
        #[arg(long, value_name = "ID")]
        queue_id: Option<u32>,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,ccb_api=info".to_string(),
            2 => "info,ccb_api=debug".to_string(),
            _ => "debug,ccb_api=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<ApiConfig> {
    let mut config = ApiConfig::from_env().wrap_err("loading configuration from environment")?;
    if cli.xml {
        config.content_type = ContentType::Xml;
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Some(Duration::from_secs(secs));
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");
    let executor = Executor::new(config);

    match cli.command {
        Commands::QueueManagers {
            process_id,
            queue_id,
        } => {
            let managers = QueueManagers::new(&executor)
                .list(process_id, queue_id)
                .await
                .wrap_err("queue_managers request failed")?;
            println!("{}", serde_json::to_string_pretty(&managers)?);
        }
    }

    Ok(())
}
