use clap::{CommandFactory, FromArgMatches, Parser};
use plagcheck_core::config::DetectorConfig;
use plagcheck_core::detector::Detector;
use plagcheck_server::{AppState, DEFAULT_BODY_LIMIT};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Simulated plagiarism checker service")]
struct Args {
    #[arg(long, default_value_t = 5000)]
    port: u16,

    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
    body_limit: usize,

    /// JSON file with detector settings; typed flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    detector: DetectorConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches)?;

    info!("🧪 plagcheck server is initializing...");

    let config = match &args.config {
        Some(path) => {
            info!("⚙️  Loading detector config from {:?}", path);
            let mut config = DetectorConfig::load_from_file(path).map_err(anyhow::Error::msg)?;
            config.merge_from_cli(&args.detector, &matches);
            config
        }
        None => args.detector.clone(),
    };

    let detector = Detector::ready(config)?;
    let state = Arc::new(AppState::new(detector));
    let app = plagcheck_server::app(state, args.body_limit);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 Checker listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
