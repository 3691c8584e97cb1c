//! Repository for the `categories` table.
//!
//! Listing joins the owning user (admins see every owner's categories);
//! get/update/delete are strictly owner-scoped with no admin exemption.

use sqlx::PgPool;
use taskhive_core::types::DbId;

use crate::models::category::{Category, CategoryOwnerRow, CreateCategory, UpdateCategory};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, name, description, color, created_by, created_at, updated_at";

/// Column list for listings joined with the owning user.
const OWNER_COLUMNS: &str = "c.id, c.name, c.description, c.color, c.created_by, \
     u.name AS owner_name, u.username AS owner_username, c.created_at, c.updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// A duplicate (owner, name) pair surfaces as a unique violation on
    /// `uq_categories_owner_name`; callers translate it to a conflict.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, color, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List every category across all owners, sorted by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CategoryOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS} FROM categories c
             LEFT JOIN users u ON u.id = c.created_by
             ORDER BY c.name ASC"
        );
        sqlx::query_as::<_, CategoryOwnerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the given owner's categories, sorted by name ascending.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner: DbId,
    ) -> Result<Vec<CategoryOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS} FROM categories c
             LEFT JOIN users u ON u.id = c.created_by
             WHERE c.created_by = $1
             ORDER BY c.name ASC"
        );
        sqlx::query_as::<_, CategoryOwnerRow>(&query)
            .bind(owner)
            .fetch_all(pool)
            .await
    }

    /// Find a category by id, scoped to its owner.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND created_by = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(pool)
            .await
    }

    /// Update an owned category. Only non-`None` fields are applied; a
    /// rename re-validates uniqueness through the table constraint.
    ///
    /// Returns `None` if no matching owned row exists.
    pub async fn update_for_owner(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                color = COALESCE($5, color),
                updated_at = NOW()
             WHERE id = $1 AND created_by = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned category. Tasks referencing it keep their now
    /// dangling category_id.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_owner(pool: &PgPool, id: DbId, owner: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
