use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use customer_grid::config::ServerConfig;
use customer_grid::functions::handlers::handle_invoke;
use customer_grid::functions::identity::{register_identity, IdentityFunction};
use customer_grid::functions::protocol::ENDPOINT_INVOKE;
use customer_grid::functions::registry::FunctionRegistry;
use customer_grid::model::Customer;
use customer_grid::query::handlers::{handle_query_customers, handle_save_customer};
use customer_grid::region::handlers::{handle_count, handle_get};
use customer_grid::region::memory::Region;
use customer_grid::region::protocol::*;
use customer_grid::region::NameIndex;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match ServerConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} --bind <addr:port> [--region <name>]", args[0]);
            eprintln!("Example: {} --bind 127.0.0.1:6000", args[0]);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting grid server on {} (region '{}')",
        config.bind,
        config.region_name
    );

    // 1. Storage layer:
    let region = Arc::new(Region::<u64, Customer>::new(&config.region_name));
    let index = Arc::new(NameIndex::new());

    // 2. Function registry:
    let registry = FunctionRegistry::new();
    register_identity(&registry, Arc::new(IdentityFunction::started_now()));

    // 3. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_PUT, post(handle_save_customer))
        .route(&format!("{}/:id", ENDPOINT_GET), get(handle_get_customer))
        .route(ENDPOINT_COUNT, get(handle_count_customers))
        .route(ENDPOINT_QUERY, get(handle_query_customers))
        .route(ENDPOINT_INVOKE, post(handle_invoke))
        .layer(Extension(region))
        .layer(Extension(index))
        .layer(Extension(registry));

    // 4. Start HTTP server:
    tracing::info!("Grid server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Concrete wrappers over the generic region handlers.

async fn handle_get_customer(
    region: Extension<Arc<Region<u64, Customer>>>,
    key: Path<String>,
) -> (StatusCode, Json<GetResponse>) {
    handle_get::<u64, Customer>(region, key).await
}

async fn handle_count_customers(
    region: Extension<Arc<Region<u64, Customer>>>,
) -> (StatusCode, Json<CountResponse>) {
    handle_count::<u64, Customer>(region).await
}
