mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::analysis::services::SupabasePopulationAnalyzer;
use crate::features::analysis::{routes as analysis_routes, AnalysisService};
use crate::features::boundaries::services::{BoundaryCache, SupabaseBoundaryFetcher};
use crate::features::boundaries::{routes as boundaries_routes, BoundaryLookupService};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::{JsonFileCatalogSource, RegionCatalogSource};
use crate::features::regions::{routes as regions_routes, RegionResolver};
use crate::modules::supabase::SupabaseClient;
use axum::Router;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// API routes of every feature, without middleware
fn api_routes(
    resolver: Arc<RegionResolver>,
    lookup: Arc<BoundaryLookupService>,
    analysis: Arc<AnalysisService>,
) -> Router {
    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    Router::new()
        .merge(regions_routes::routes(resolver))
        .merge(boundaries_routes::routes(lookup))
        .merge(analysis_routes::routes(analysis))
        .route("/health", axum::routing::get(health_check))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Load the region catalog; the service cannot start without it
    let catalog = JsonFileCatalogSource::new(&config.catalog.path)
        .load()
        .map_err(|e| anyhow::anyhow!("{} ({})", e, config.catalog.path))?;
    tracing::info!(
        "Region catalog ready: {} provinces",
        catalog.len(RegionLevel::Province)
    );

    let resolver = Arc::new(RegionResolver::new(Arc::new(catalog)));
    tracing::info!("Region resolver initialized");

    // Initialize boundary cache
    let cache = Arc::new(BoundaryCache::new(&config.cache));
    tracing::info!(
        "Boundary cache initialized: max_items={}, max_memory_bytes={}, eviction_percent={}",
        config.cache.max_items,
        config.cache.max_memory_bytes,
        config.cache.eviction_percent
    );

    // Initialize Supabase client (boundary, census and shape analysis calls)
    let supabase_client = Arc::new(
        SupabaseClient::new(&config.supabase)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase client: {}", e))?,
    );
    tracing::info!("Supabase client initialized for {}", config.supabase.url);

    let boundary_fetcher = Arc::new(SupabaseBoundaryFetcher::new(Arc::clone(&supabase_client)));
    let lookup_service = Arc::new(BoundaryLookupService::new(
        Arc::clone(&resolver),
        Arc::clone(&cache),
        boundary_fetcher,
    ));
    tracing::info!("Boundary lookup service initialized");

    let population_analyzer = Arc::new(SupabasePopulationAnalyzer::new(Arc::clone(
        &supabase_client,
    )));
    let analysis_service = Arc::new(AnalysisService::new(
        population_analyzer,
        Arc::clone(&lookup_service),
    ));
    tracing::info!("Analysis service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes(resolver, lookup_service, analysis_service))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
