use clap::{Parser, Subcommand};
use radios_api::{BASE_PATH, create_app};
use radios_core::{Directory, StreamKind};
use radios_site::build_site;
use std::path::PathBuf;

/// Command line arguments for the radios-espana tools
#[derive(Parser, Debug)]
#[command(name = "radios-espana")]
#[command(about = "Radios de España — development server and static site builder")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a station directory JSON file, overriding the built-in
    /// environment-driven station list
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the static asset tree
    #[arg(long, default_value = "assets", global = true)]
    assets: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the development server
    Serve {
        /// Port to bind the server to
        #[arg(short, long, default_value = "3000", env = "PORT")]
        port: u16,
    },
    /// Emit a deployable static site
    Build {
        /// Output directory for the generated site
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    // Pick up per-station stream URLs from a local .env file, if present
    if dotenvy::dotenv().is_ok() {
        tracing::info!("loaded environment overrides from .env");
    }

    // Build the station directory, either from a JSON file or from the
    // built-in table plus environment variables
    let directory = match &args.config {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                format!("Failed to read config file '{}': {}", path.display(), e)
            })?;
            Directory::from_json_str(&content).map_err(|e| {
                format!("Failed to parse config file '{}': {}", path.display(), e)
            })?
        }
        None => Directory::from_env(),
    };

    directory
        .validate()
        .map_err(|e| format!("Invalid station directory: {}", e))?;

    for station in directory.stations() {
        match station.stream_kind() {
            Some(StreamKind::Hls) => {
                tracing::info!("station {}: HLS stream configured", station.id)
            }
            Some(StreamKind::Progressive) => {
                tracing::info!("station {}: direct stream configured", station.id)
            }
            None => tracing::warn!("station {}: no stream URL configured", station.id),
        }
    }

    if !args.assets.is_dir() {
        tracing::warn!("asset directory '{}' does not exist", args.assets.display());
    }

    match args.command {
        Command::Serve { port } => {
            // Build our application with routes
            let app = create_app(directory, &args.assets);

            // Run our app with hyper
            let bind_addr = format!("0.0.0.0:{}", port);
            tracing::info!("Starting server on http://localhost:{}{}/", port, BASE_PATH);

            let listener = tokio::net::TcpListener::bind(&bind_addr)
                .await
                .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

            axum::serve(listener, app)
                .await
                .map_err(|e| format!("Server error: {}", e))?;
        }
        Command::Build { out } => {
            let summary = build_site(&directory, &args.assets, &out)
                .map_err(|e| format!("Build failed: {}", e))?;

            tracing::info!(
                "Build complete: {} assets and {} stations written to {}",
                summary.assets_copied,
                summary.stations,
                out.display()
            );
        }
    }

    Ok(())
}
