use anyhow::Context;
use importer::CouchDocumentSource;
use std::sync::Arc;
use storage::SnapshotStore;
use storage::models::FederationRegistry;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod hub;
mod protocol;
mod scheduler;
mod state;

use config::Config;
use hub::BroadcastHub;
use scheduler::PollingScheduler;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competition::handlers::get_snapshot,
        features::competition::handlers::get_competition,
        features::competition::handlers::configure_competition,
        features::federations::handlers::list_federations,
    ),
    components(
        schemas(
            scheduler::CompetitionTarget,
            storage::models::Snapshot,
            storage::models::Lifter,
            storage::models::LiftResult,
            storage::models::Attempt,
            storage::models::Division,
            storage::models::Platform,
            storage::models::Referee,
            storage::models::MeetInfo,
            storage::models::Plate,
            storage::models::Units,
            storage::models::Discipline,
            storage::models::Outcome,
            storage::models::Sex,
            storage::models::FederationSummary,
        )
    ),
    tags(
        (name = "live", description = "Live competition snapshot and target"),
        (name = "federations", description = "Built-in federation rules"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting live meet scoreboard");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let source = CouchDocumentSource::new(&config.document_source_url)
        .context("Failed to build document source client")?;
    tracing::info!("Reading documents from {}", config.document_source_url);

    let store = Arc::new(SnapshotStore::new());
    let registry = Arc::new(FederationRegistry::new());
    let hub = Arc::new(BroadcastHub::new(Arc::clone(&store), registry.codes()));
    let scheduler = Arc::new(PollingScheduler::new(
        Arc::new(source),
        Arc::clone(&store),
        Arc::clone(&hub),
        Arc::clone(&registry),
        config.poll_settings(),
    ));

    if let Some(target) = config.initial_target() {
        let target = features::competition::services::apply_target(&scheduler, target)
            .map_err(|e| anyhow::anyhow!("Invalid initial competition: {}", e))?;
        tracing::info!("Initial competition: {}", target.competition_id);
    } else {
        tracing::info!("No competition configured, waiting for a viewer to pick one");
    }

    let poller = tokio::spawn(Arc::clone(&scheduler).run());

    let state = AppState {
        store,
        hub,
        scheduler,
        registry,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = features::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Live socket at ws://{}/ws", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    poller.abort();
    tracing::info!("Shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
