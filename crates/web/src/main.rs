use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;
use features::{events, fighters, rankings};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        fighters::handlers::list_fighters,
        fighters::handlers::get_fighter,
        fighters::handlers::get_fighter_fights,
        fighters::handlers::get_filter_options,
        events::handlers::list_events,
        events::handlers::list_event_years,
        events::handlers::list_upcoming_events,
        events::handlers::get_event,
        rankings::handlers::get_rankings,
    ),
    components(
        schemas(
            storage::dto::fighter::FighterSummary,
            storage::dto::fighter::FighterListResponse,
            storage::dto::fighter::FilterOptionsResponse,
            storage::dto::fighter::FighterDetail,
            storage::dto::fighter::FighterRecordCounts,
            storage::dto::fighter::FighterProfileResponse,
            storage::dto::fight::FightOutcome,
            storage::dto::fight::BoutOutcome,
            storage::dto::fight::FightRecordEntry,
            storage::dto::fight::FightRecordResponse,
            storage::dto::fight::CardCorner,
            storage::dto::fight::CardFight,
            storage::dto::event::EventSummary,
            storage::dto::event::EventListResponse,
            storage::dto::event::EventDetailResponse,
            storage::dto::event::AvailableYearsResponse,
            storage::dto::ranking::RosterEntry,
            storage::dto::ranking::DivisionRoster,
            storage::dto::ranking::RosterResponse,
            storage::dto::ranking::FighterRankingInfo,
            storage::models::FighterStatus,
            storage::models::EventStatus,
            storage::models::WeightClass,
        )
    ),
    tags(
        (name = "fighters", description = "Fighter directory and profiles"),
        (name = "events", description = "Event schedule and fight cards"),
        (name = "rankings", description = "Divisional rankings"),
        (name = "health", description = "Service status"),
    )
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let cors = match config.cors_allowed_origin.as_deref() {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN is not a valid header value")?,
        ),
        None => cors.allow_origin(Any),
    };

    Ok(cors)
}

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

    tracing::info!("Starting MMA API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    let app = routes::router(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
