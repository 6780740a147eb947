use crate::domain::model::Product;
use crate::transport::http::handlers::{health, produits};
use crate::transport::http::types::UpdateProductRequest;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        produits::list_produits_handler,
        produits::ajouter_produit_handler,
        produits::supprimer_produit_handler,
        produits::supprimer_tous_produits_handler,
        produits::miseajour_produit_handler
    ),
    components(schemas(Product, UpdateProductRequest))
)]
#[allow(dead_code)]
pub struct ApiDoc;

// The dispatch table answers 404 with an empty body for anything it does not
// list, including a wrong method on a known path (never 405).
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler).fallback(not_found))
        .route(
            "/api/produits/",
            get(produits::list_produits_handler).fallback(not_found),
        )
        .route(
            "/api/produits/ajouter/",
            post(produits::ajouter_produit_handler).fallback(not_found),
        )
        .route(
            "/api/produits/supprimer/",
            post(produits::supprimer_produit_handler).fallback(not_found),
        )
        .route(
            "/api/produits/supprimer-tous/",
            post(produits::supprimer_tous_produits_handler).fallback(not_found),
        )
        .route(
            "/api/produits/miseajour/",
            post(produits::miseajour_produit_handler).fallback(not_found),
        )
        .with_state(app_state)
}
