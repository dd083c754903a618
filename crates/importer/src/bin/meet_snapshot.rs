use clap::{Parser, Subcommand};
use importer::{
    CouchDocumentSource, DocumentSource, build_snapshot,
    sources::couch::{AllDocsResponse, documents_from},
};
use std::path::{Path, PathBuf};
use storage::models::{FederationRegistry, Snapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meet-snapshot")]
#[command(about = "Builds a scored meet snapshot from a live document feed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a competition once from the document source and print its snapshot
    Fetch {
        #[arg(short, long)]
        competition: String,

        #[arg(short, long, default_value = "IPF")]
        federation: String,

        #[arg(long, env = "DOCUMENT_SOURCE_URL")]
        source_url: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a snapshot from a saved `_all_docs` dump
    Project {
        file: PathBuf,

        #[arg(short, long, default_value = "IPF")]
        federation: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in federations
    Federations,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("meet_snapshot={},importer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = FederationRegistry::new();

    match cli.command {
        Commands::Fetch {
            competition,
            federation,
            source_url,
            output,
        } => {
            handle_fetch(&registry, &competition, &federation, &source_url, output).await?;
        }
        Commands::Project {
            file,
            federation,
            output,
        } => {
            handle_project(&registry, &file, &federation, output).await?;
        }
        Commands::Federations => list_federations(&registry),
    }

    Ok(())
}

async fn handle_fetch(
    registry: &FederationRegistry,
    competition: &str,
    federation: &str,
    source_url: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    warn_on_unknown_federation(registry, federation);

    let source = CouchDocumentSource::new(source_url)?;
    tracing::info!("Fetching '{}' from {} at {}", competition, source.name(), source_url);

    let documents = source.fetch(competition).await?;
    tracing::info!("Fetched {} documents", documents.len());

    let snapshot = build_snapshot(registry.get(federation), &documents, chrono::Utc::now())?;
    write_snapshot(&snapshot, output).await
}

async fn handle_project(
    registry: &FederationRegistry,
    file: &Path,
    federation: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    warn_on_unknown_federation(registry, federation);
    tracing::info!("Loading document dump from: {}", file.display());

    let json_content = tokio::fs::read_to_string(file).await?;
    let response: AllDocsResponse = serde_json::from_str(&json_content)?;
    let documents = documents_from(response);
    tracing::info!("Loaded {} documents", documents.len());

    let snapshot = build_snapshot(registry.get(federation), &documents, chrono::Utc::now())?;
    write_snapshot(&snapshot, output).await
}

async fn write_snapshot(
    snapshot: &Snapshot,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Snapshot: {} lifters, {} attempts, {} platforms",
        snapshot.lifters.len(),
        snapshot.attempts.len(),
        snapshot.platforms.len()
    );

    let json = serde_json::to_string_pretty(snapshot)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            tracing::info!("Written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn warn_on_unknown_federation(registry: &FederationRegistry, federation: &str) {
    if !registry.contains(federation) {
        tracing::warn!(
            "Unknown federation '{}', using {} weight classes",
            federation,
            registry.get(federation).code
        );
    }
}

fn list_federations(registry: &FederationRegistry) {
    for federation in registry.summaries() {
        println!(
            "{:<6} {}{}",
            federation.code,
            federation.name,
            if federation.drug_tested { " (tested)" } else { "" }
        );
    }
}
