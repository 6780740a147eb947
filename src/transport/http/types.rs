use crate::app::repository::Repository;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<Repository>,
}

/// Body of the update route. Wire names are the French PascalCase fields
/// (`ProduitId`, `NouveauNom`, `NouveauPrix`, `NouvelleDate`).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProductRequest {
    pub produit_id: i64,
    pub nouveau_nom: String,
    pub nouveau_prix: f64,
    pub nouvelle_date: String,
}

// Fixed response sentences of the wire contract.
pub const MSG_PRODUIT_AJOUTE: &str = "Produit ajouté avec succès.";
pub const MSG_FORMAT_PRODUIT_INVALIDE: &str = "Format de données de produit invalide.";
pub const MSG_FORMAT_ID_PRODUIT_INVALIDE: &str = "Format d'ID de produit invalide.";
pub const MSG_FORMAT_ID_UTILISATEUR_INVALIDE: &str = "Format d'ID d'utilisateur invalide.";
pub const MSG_FORMAT_MISE_A_JOUR_INVALIDE: &str =
    "Format de données de mise à jour de produit invalide.";
pub const MSG_ERREUR_INTERNE: &str = "Erreur interne du serveur.";

pub fn msg_produit_supprime(product_id: i64) -> String {
    format!("Produit avec l'ID {product_id} supprimé avec succès.")
}

pub fn msg_produits_utilisateur_supprimes(user_id: i64) -> String {
    format!("Tous les produits de l'utilisateur avec l'ID {user_id} ont été supprimés avec succès.")
}

pub fn msg_produit_mis_a_jour(product_id: i64) -> String {
    format!("Produit avec l'ID {product_id} mis à jour avec succès.")
}

pub fn msg_produit_introuvable(product_id: i64) -> String {
    format!("Produit avec l'ID {product_id} introuvable.")
}
