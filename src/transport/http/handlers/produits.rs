use crate::domain::model::{render_grid, Product};
use crate::transport::http::types::{
    msg_produit_introuvable, msg_produit_mis_a_jour, msg_produit_supprime,
    msg_produits_utilisateur_supprimes, AppState, UpdateProductRequest, MSG_ERREUR_INTERNE,
    MSG_FORMAT_ID_PRODUIT_INVALIDE, MSG_FORMAT_ID_UTILISATEUR_INVALIDE,
    MSG_FORMAT_MISE_A_JOUR_INVALIDE, MSG_FORMAT_PRODUIT_INVALIDE, MSG_PRODUIT_AJOUTE,
};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, warn};

/// The two ID routes take the raw body as exactly one integer literal, no
/// JSON envelope. Surrounding ASCII whitespace is tolerated; anything else
/// (non-UTF-8 included) is a format error.
fn parse_id_body(body: &Bytes) -> Option<i64> {
    std::str::from_utf8(body).ok()?.trim().parse().ok()
}

#[utoipa::path(
    get,
    path = "/api/produits/",
    responses(
        (status = 200, description = "Tab-separated catalogue grid, header line first", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn list_produits_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repository.list().await {
        Ok(rows) => (StatusCode::OK, render_grid(&rows)).into_response(),
        Err(e) => {
            error!("listing produits failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_ERREUR_INTERNE).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/produits/ajouter/",
    request_body = Product,
    responses(
        (status = 200, description = "Product and its synthetic user inserted", body = String),
        (status = 400, description = "Body is not a product object", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn ajouter_produit_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    // Parsed from the raw bytes: the Content-Type header is not consulted.
    let product: Product = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("rejected ajouter body: {e}");
            return (StatusCode::BAD_REQUEST, MSG_FORMAT_PRODUIT_INVALIDE).into_response();
        }
    };
    match state.repository.add_product(&product).await {
        Ok(_) => (StatusCode::OK, MSG_PRODUIT_AJOUTE).into_response(),
        Err(e) => {
            error!("inserting produit failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_ERREUR_INTERNE).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/produits/supprimer/",
    request_body = String,
    responses(
        (status = 200, description = "Delete confirmation sentence", body = String),
        (status = 400, description = "Body is not an integer literal", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn supprimer_produit_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    let Some(product_id) = parse_id_body(&body) else {
        return (StatusCode::BAD_REQUEST, MSG_FORMAT_ID_PRODUIT_INVALIDE).into_response();
    };
    match state.repository.delete_product(product_id).await {
        Ok(_) => (StatusCode::OK, msg_produit_supprime(product_id)).into_response(),
        Err(e) => {
            error!(product_id, "deleting produit failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_ERREUR_INTERNE).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/produits/supprimer-tous/",
    request_body = String,
    responses(
        (status = 200, description = "Bulk delete confirmation sentence", body = String),
        (status = 400, description = "Body is not an integer literal", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn supprimer_tous_produits_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    let Some(user_id) = parse_id_body(&body) else {
        return (StatusCode::BAD_REQUEST, MSG_FORMAT_ID_UTILISATEUR_INVALIDE).into_response();
    };
    match state.repository.delete_products_by_user(user_id).await {
        Ok(affected) => {
            if affected.is_none() {
                warn!(user_id, "utilisateur inconnu, aucun produit supprimé");
            }
            (StatusCode::OK, msg_produits_utilisateur_supprimes(user_id)).into_response()
        }
        Err(e) => {
            error!(user_id, "deleting produits by user failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_ERREUR_INTERNE).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/produits/miseajour/",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Update confirmation sentence", body = String),
        (status = 400, description = "Body is not an update object", body = String),
        (status = 404, description = "No product with that id", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn miseajour_produit_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    let update: UpdateProductRequest = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("rejected miseajour body: {e}");
            return (StatusCode::BAD_REQUEST, MSG_FORMAT_MISE_A_JOUR_INVALIDE).into_response();
        }
    };
    let result = state
        .repository
        .update_product(
            update.produit_id,
            &update.nouveau_nom,
            update.nouveau_prix,
            &update.nouvelle_date,
        )
        .await;
    match result {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            msg_produit_introuvable(update.produit_id),
        )
            .into_response(),
        Ok(_) => (StatusCode::OK, msg_produit_mis_a_jour(update.produit_id)).into_response(),
        Err(e) => {
            error!(product_id = update.produit_id, "updating produit failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_ERREUR_INTERNE).into_response()
        }
    }
}
