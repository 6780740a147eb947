use produits_api::app::repository::Repository;
use produits_api::infra::config::Config;
use produits_api::storage::sqlite;
use produits_api::transport;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(path = %config.database_path.display(), "opening database");
    let pool = sqlite::open_pool(&config.database_path);
    if let Err(e) = sqlite::ensure_schema(&pool).await {
        // The process keeps serving; every operation then fails individually
        // and is answered with a 500.
        error!("database initialization failed: {e:#}");
    }

    let app_state = transport::http::AppState {
        repository: Arc::new(Repository::new(pool)),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("API server listening on http://{}", listener.local_addr()?);
    info!("Swagger UI available at http://{}/swagger-ui", config.listen_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
