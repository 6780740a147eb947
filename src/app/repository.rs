//! The record repository.
//!
//! This module is the intermediary between the HTTP handlers and the SQLite
//! file database. It is responsible for:
//! 1.  Executing the parameterized SQL behind every route (list-join,
//!     insert, delete, update).
//! 2.  Fabricating the synthetic user that accompanies every product insert,
//!     inside the same transaction as the product row.

use crate::domain::model::{CatalogueRow, Product, User};
use crate::domain::synthetic;
use sqlx::SqlitePool;
use tracing::info;

/// The main service that manages database interaction for products and users.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Joins every product with the user stamped on it, ordered by product id.
    pub async fn list(&self) -> anyhow::Result<Vec<CatalogueRow>> {
        let rows = sqlx::query_as::<_, CatalogueRow>(
            "SELECT p.id, p.nom, p.prix, p.date,
                    u.nom AS utilisateur, u.prenom, u.email
             FROM produits p
             LEFT JOIN utilisateurs u ON p.id_utilisateur = u.id
             ORDER BY p.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Inserts the product together with a freshly generated synthetic user.
    ///
    /// Both rows land in one transaction and the product is stamped with the
    /// new user's id. The incoming product id is ignored; the database
    /// assigns identities. Returns the assigned product id and the generated
    /// user.
    pub async fn add_product(&self, product: &Product) -> anyhow::Result<(i64, User)> {
        let mut user = synthetic::random_user();

        let mut tx = self.pool.begin().await?;
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO utilisateurs (nom, prenom, email, mot_de_passe)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&user.nom)
        .bind(&user.prenom)
        .bind(&user.email)
        .bind(&user.mot_de_passe)
        .fetch_one(&mut *tx)
        .await?;

        let product_id: i64 = sqlx::query_scalar(
            "INSERT INTO produits (nom, prix, date, id_utilisateur)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&product.nom)
        .bind(product.prix)
        .bind(&product.date)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        user.id = user_id;
        info!(
            product_id,
            user_id,
            nom = %product.nom,
            utilisateur = %user.nom,
            "produit et utilisateur insérés"
        );
        Ok((product_id, user))
    }

    /// Deletes one product by id. Returns the affected-row count.
    pub async fn delete_product(&self, product_id: i64) -> anyhow::Result<u64> {
        let affected = sqlx::query("DELETE FROM produits WHERE id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(product_id, affected, "suppression de produit");
        Ok(affected)
    }

    /// Deletes every product stamped with the given user id.
    ///
    /// Returns `None` when no such user exists, `Some(count)` otherwise. The
    /// existence check and the delete share one transaction.
    pub async fn delete_products_by_user(&self, user_id: i64) -> anyhow::Result<Option<u64>> {
        let mut tx = self.pool.begin().await?;
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM utilisateurs WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }
        let affected = sqlx::query("DELETE FROM produits WHERE id_utilisateur = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        info!(user_id, affected, "suppression des produits d'un utilisateur");
        Ok(Some(affected))
    }

    /// Full replace of nom/prix/date by product id. Returns the affected-row
    /// count; zero means the id matched nothing.
    pub async fn update_product(
        &self,
        product_id: i64,
        nom: &str,
        prix: f64,
        date: &str,
    ) -> anyhow::Result<u64> {
        let affected = sqlx::query("UPDATE produits SET nom = ?, prix = ?, date = ? WHERE id = ?")
            .bind(nom)
            .bind(prix)
            .bind(date)
            .bind(product_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(product_id, affected, "mise à jour de produit");
        Ok(affected)
    }

    /// Deletes one user by id. Not reachable from any route.
    pub async fn delete_user(&self, user_id: i64) -> anyhow::Result<u64> {
        let affected = sqlx::query("DELETE FROM utilisateurs WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(user_id, affected, "suppression d'utilisateur");
        Ok(affected)
    }

    /// Full replace of a user's fields by id. Not reachable from any route.
    pub async fn update_user(
        &self,
        user_id: i64,
        nom: &str,
        prenom: &str,
        email: &str,
        mot_de_passe: &str,
    ) -> anyhow::Result<u64> {
        let affected = sqlx::query(
            "UPDATE utilisateurs SET nom = ?, prenom = ?, email = ?, mot_de_passe = ? WHERE id = ?",
        )
        .bind(nom)
        .bind(prenom)
        .bind(email)
        .bind(mot_de_passe)
        .bind(user_id)
        .execute(&self.pool)
        .await?
        .rows_affected();
        info!(user_id, affected, "mise à jour d'utilisateur");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthetic::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES};
    use crate::storage::sqlite;
    use tempfile::TempDir;

    async fn test_repository() -> (Repository, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = sqlite::open_pool(&dir.path().join("catalogue.db"));
        sqlite::ensure_schema(&pool).await.unwrap();
        (Repository::new(pool), dir)
    }

    fn widget() -> Product {
        Product {
            id: 0,
            nom: "Widget".to_string(),
            prix: 9.99,
            date: "2024-01-01".to_string(),
        }
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn add_product_inserts_one_product_and_one_synthetic_user() {
        let (repo, _dir) = test_repository().await;
        let (product_id, user) = repo.add_product(&widget()).await.unwrap();

        assert_eq!(count(repo.pool(), "produits").await, 1);
        assert_eq!(count(repo.pool(), "utilisateurs").await, 1);

        let (nom, prix, date, id_utilisateur): (String, f64, String, i64) =
            sqlx::query_as("SELECT nom, prix, date, id_utilisateur FROM produits WHERE id = ?")
                .bind(product_id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        assert_eq!(nom, "Widget");
        assert_eq!(prix, 9.99);
        assert_eq!(date, "2024-01-01");
        assert_eq!(id_utilisateur, user.id);

        assert!(LAST_NAMES.contains(&user.nom.as_str()));
        assert!(FIRST_NAMES.contains(&user.prenom.as_str()));
        let domain = user.email.split_once('@').unwrap().1;
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[tokio::test]
    async fn add_product_rolls_back_the_user_when_the_product_insert_fails() {
        let (repo, _dir) = test_repository().await;
        // With produits gone, the second insert of the transaction fails and
        // the user row from the first insert must not survive.
        sqlx::query("DROP TABLE produits")
            .execute(repo.pool())
            .await
            .unwrap();

        assert!(repo.add_product(&widget()).await.is_err());
        assert_eq!(count(repo.pool(), "utilisateurs").await, 0);
    }

    #[tokio::test]
    async fn delete_product_reports_affected_rows() {
        let (repo, _dir) = test_repository().await;
        let (product_id, _) = repo.add_product(&widget()).await.unwrap();

        assert_eq!(repo.delete_product(product_id).await.unwrap(), 1);
        assert_eq!(count(repo.pool(), "produits").await, 0);
        assert_eq!(repo.delete_product(product_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_products_by_user_only_touches_that_users_rows() {
        let (repo, _dir) = test_repository().await;
        let (_, first_user) = repo.add_product(&widget()).await.unwrap();
        let (other_product_id, _) = repo.add_product(&widget()).await.unwrap();

        let affected = repo.delete_products_by_user(first_user.id).await.unwrap();
        assert_eq!(affected, Some(1));
        let remaining: Vec<CatalogueRow> = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, other_product_id);
    }

    #[tokio::test]
    async fn delete_products_by_unknown_user_is_none() {
        let (repo, _dir) = test_repository().await;
        assert_eq!(repo.delete_products_by_user(4242).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_product_replaces_fields_and_reports_misses() {
        let (repo, _dir) = test_repository().await;
        let (product_id, _) = repo.add_product(&widget()).await.unwrap();

        let affected = repo
            .update_product(product_id, "Gadget", 12.5, "2025-06-01")
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let (nom, prix, date): (String, f64, String) =
            sqlx::query_as("SELECT nom, prix, date FROM produits WHERE id = ?")
                .bind(product_id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        assert_eq!((nom.as_str(), prix, date.as_str()), ("Gadget", 12.5, "2025-06-01"));

        assert_eq!(repo.update_product(999, "X", 1.0, "d").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unrouted_user_operations_update_and_delete() {
        let (repo, _dir) = test_repository().await;
        let (_, user) = repo.add_product(&widget()).await.unwrap();

        let affected = repo
            .update_user(user.id, "Durand", "Luc", "luc@ynov.com", "secret1234")
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let (nom, email): (String, String) =
            sqlx::query_as("SELECT nom, email FROM utilisateurs WHERE id = ?")
                .bind(user.id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        assert_eq!(nom, "Durand");
        assert_eq!(email, "luc@ynov.com");

        assert_eq!(repo.delete_user(user.id).await.unwrap(), 1);
        assert_eq!(count(repo.pool(), "utilisateurs").await, 0);
    }

    #[tokio::test]
    async fn list_joins_products_with_their_stamped_user() {
        let (repo, _dir) = test_repository().await;
        assert!(repo.list().await.unwrap().is_empty());

        let (product_id, user) = repo.add_product(&widget()).await.unwrap();
        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, product_id);
        assert_eq!(rows[0].utilisateur.as_deref(), Some(user.nom.as_str()));
        assert_eq!(rows[0].prenom.as_deref(), Some(user.prenom.as_str()));
        assert_eq!(rows[0].email.as_deref(), Some(user.email.as_str()));
    }

    #[tokio::test]
    async fn list_keeps_products_whose_user_was_deleted() {
        let (repo, _dir) = test_repository().await;
        let (product_id, user) = repo.add_product(&widget()).await.unwrap();
        repo.delete_user(user.id).await.unwrap();

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, product_id);
        assert!(rows[0].utilisateur.is_none());
    }
}
