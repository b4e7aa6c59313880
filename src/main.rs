use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lookbook_server::config::{AppConfig, CliConfig, FileConfig};
use lookbook_server::server::{metrics, run_server, RequestsLoggingLevel};
use lookbook_server::{ReferenceStore, SqliteReferenceStore};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the reference library database.
    #[clap(long, value_parser = parse_path)]
    pub db_dir: Option<PathBuf>,

    /// Path to a TOML config file; its values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Suggestion count when a match request does not specify a limit.
    #[clap(long, default_value_t = 6)]
    pub default_match_limit: usize,

    /// Hard cap on the suggestion count of a single match request.
    #[clap(long, default_value_t = 24)]
    pub max_match_limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;

    let cli_config = CliConfig {
        db_dir: cli_args.db_dir,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
        default_match_limit: cli_args.default_match_limit,
        max_match_limit: cli_args.max_match_limit,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening reference database at {:?}...",
        config.reference_db_path()
    );
    let reference_store = Arc::new(SqliteReferenceStore::new(config.reference_db_path())?);

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::set_library_items(
        reference_store.brand_reference_count(),
        reference_store.style_reference_count(),
    );

    info!("Starting server on port {}", config.port);
    run_server(config.server_config(), reference_store).await
}
