use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use findash_core::{load_dataset, LoadError};
use findash_web::{router, AppState};

/// Financial data dashboard server.
///
/// Loads the CSV dataset once at startup and serves the interactive
/// dashboard on a local port. Render-only: no files are written and no
/// outbound calls are made.
#[derive(Debug, Parser)]
#[command(name = "findash", version, about = "Financial data dashboard server")]
struct Args {
    /// Path to the financial CSV dataset.
    #[arg(default_value = "assets/financial_data.csv")]
    data: PathBuf,

    /// Port to serve the dashboard on.
    #[arg(long, default_value_t = 8050)]
    port: u16,

    /// Enable debug-level logging.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[derive(Debug, Error)]
enum ServeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "findash=debug,findash_web=debug,findash_core=debug"
    } else {
        "findash=info,findash_web=info,findash_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Fatal if the file is missing or structurally broken; the dashboard
    // cannot render without data.
    let dataset = load_dataset(&args.data)?;
    tracing::info!(
        path = %args.data.display(),
        records = dataset.len(),
        sectors = dataset.sectors().len(),
        "dataset loaded"
    );

    let state = AppState::new(dataset);
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("dashboard listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
