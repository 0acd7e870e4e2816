use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use colormapper::api;
use colormapper::models::{AppConfig, Question};
use colormapper::server;
use oklch_map::{
    clusters_for_hue, find_hue, generate_seed_data, to_display_hex, ColorEntry, HexMode,
};

#[derive(Parser)]
#[command(name = "colormapper")]
#[command(about = "Crowdsourced color naming on an OKLCH map")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print question colors for a hue as JSON
    Question {
        /// Catalog hue angle in degrees (e.g. 25)
        #[arg(long)]
        hue: f64,

        /// Number of questions to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Cluster the records of one hue from an export file
    Clusters {
        /// JSON array of records, as written by /api/export
        #[arg(short, long)]
        input: PathBuf,

        /// Catalog hue angle in degrees
        #[arg(long)]
        hue: f64,
    },
    /// Write synthetic seed records to a JSON file
    Seed {
        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Convert OKLCH coordinates to a hex color
    Hex {
        /// Lightness, 0 to 1
        #[arg(short, long)]
        l: f64,

        /// Chroma, 0 to about 0.4
        #[arg(short, long)]
        c: f64,

        /// Hue angle in degrees
        #[arg(long)]
        hue: f64,

        /// Clamp each channel instead of reducing chroma onto the gamut
        #[arg(long)]
        clip: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Colormapper API",
        description = "Crowdsourced color naming on an OKLCH map",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_hues,
        api::handle_question,
        api::handle_entries,
        api::handle_submit,
        api::handle_entry_stream,
        api::handle_map,
        api::handle_stats,
        api::handle_export,
        api::handle_import,
        api::handle_prune,
    ),
    components(schemas(
        api::HueInfo,
        Question,
        api::SubmitRequest,
        api::SubmitResponse,
        api::StatsResponse,
        api::MapResponse,
        api::BoundaryPoint,
        api::MapPoint,
        api::ImportResponse,
        api::PruneResponse,
    )),
    tags(
        (name = "Catalog", description = "Hue families"),
        (name = "Naming", description = "Question colors and name submission"),
        (name = "Records", description = "Stored records, live feed and backup"),
        (name = "Map", description = "Clustered semantic map per hue"),
        (name = "Admin", description = "Restore and cleanup, token protected")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Question { hue, count }) => run_question_command(hue, count),
        Some(Commands::Clusters { input, hue }) => run_clusters_command(&input, hue),
        Some(Commands::Seed { output }) => run_seed_command(&output),
        Some(Commands::Hex { l, c, hue, clip }) => {
            let mode = if clip { HexMode::Clip } else { HexMode::GamutMapped };
            println!("{}", to_display_hex(l, c, hue, mode));
            Ok(())
        }
        Some(Commands::Serve) | None => run_server().await,
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colormapper=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_question_command(hue: f64, count: usize) -> anyhow::Result<()> {
    init_cli_logging();

    let hue = find_hue(hue).ok_or_else(|| anyhow::anyhow!("Hue {hue} is not in the catalog"))?;
    let sampler = AppConfig::from_env().color_sampler()?;
    let mut rng = rand::thread_rng();

    let questions: Vec<Question> = (0..count)
        .map(|_| Question::new(*hue, sampler.sample(hue.angle, &mut rng)))
        .collect();

    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}

fn run_clusters_command(input: &Path, hue: f64) -> anyhow::Result<()> {
    init_cli_logging();

    if find_hue(hue).is_none() {
        anyhow::bail!("Hue {hue} is not in the catalog");
    }

    let content = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let entries: Vec<ColorEntry> = serde_json::from_str(&content)?;
    tracing::info!(records = entries.len(), "Loaded records");

    let clusters = clusters_for_hue(&entries, hue);
    println!("{}", serde_json::to_string_pretty(&clusters)?);
    Ok(())
}

fn run_seed_command(output: &Path) -> anyhow::Result<()> {
    init_cli_logging();

    let entries = generate_seed_data(
        &mut rand::thread_rng(),
        chrono::Utc::now().timestamp_millis(),
    );
    std::fs::write(output, serde_json::to_string_pretty(&entries)?)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    println!("Wrote {} seed records to {}", entries.len(), output.display());
    Ok(())
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colormapper=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    let state = server::create_app_state(config)?;

    // OpenAPI documentation is only mounted by the binary
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Colormapper server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
