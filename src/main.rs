use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use placeguide::{app, data_service, seed, state::AppState};

#[derive(Parser)]
#[command(name = "placeguide", about = "Tourist places guide")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the rendered pages (default).
    Serve,
    /// Serve the seed document as a read-only data service.
    DataService {
        /// Seed document, defaults to DATA_DB_PATH.
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Flatten a nested places array into the seed document.
    Seed {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "db/db.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "placeguide=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state = AppState::init()?;
            let addr = state.config.server.addr()?;
            tracing::info!(data_service = %state.config.places_api_url, "starting page server");
            app::serve(app::build_app(state), addr).await
        }
        Command::DataService { db } => {
            let config = placeguide::config::AppConfig::from_env()?;
            let path = db.unwrap_or_else(|| PathBuf::from(&config.data_service.db_path));
            let doc = seed::SeedDocument::load(&path)
                .with_context(|| format!("load seed document {}", path.display()))?;
            tracing::info!(
                places = doc.places.len(),
                reviews = doc.reviews.len(),
                images = doc.images.len(),
                "seed document loaded"
            );
            let addr: SocketAddr = format!("{}:{}", config.server.host, config.data_service.port)
                .parse()
                .context("data service listen address")?;
            app::serve(app::with_layers(data_service::router(doc)), addr).await
        }
        Command::Seed { input, output } => {
            seed::run(&input, &output)
                .with_context(|| format!("seed {} -> {}", input.display(), output.display()))?;
            Ok(())
        }
    }
}
