//! Domain records and the tab-separated catalogue grid.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalogue product. The wire shape uses the French PascalCase field names
/// (`Id`, `Nom`, `Prix`, `Date`); `Id` is optional and ignored on insert, the
/// database assigns the real identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub prix: f64,
    pub date: String,
}

/// A synthetic user row. Never authored by a client request; every product
/// insert fabricates one. Not part of the wire surface.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub mot_de_passe: String,
}

/// One row of the catalogue listing: product columns joined with the columns
/// of the user stamped on the product, when that user still exists.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogueRow {
    pub id: i64,
    pub nom: String,
    pub prix: f64,
    pub date: String,
    pub utilisateur: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
}

/// Fixed header of the catalogue grid.
pub const GRID_HEADER: &str = "Id\tProduit\tPrix\tDate\tUtilisateur\tPrenom\tEmail";

/// Renders the catalogue as a tab-separated grid, one line per row, header
/// first. An empty catalogue renders as the header line alone.
pub fn render_grid(rows: &[CatalogueRow]) -> String {
    let mut grid = String::new();
    grid.push_str(GRID_HEADER);
    grid.push('\n');
    for row in rows {
        grid.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            row.id,
            row.nom,
            row.prix,
            row.date,
            row.utilisateur.as_deref().unwrap_or(""),
            row.prenom.as_deref().unwrap_or(""),
            row.email.as_deref().unwrap_or(""),
        ));
    }
    grid
}
