//! Repository for the `entries` table.
//!
//! Every write runs inside a transaction. An early return on error drops the
//! transaction, which rolls it back, so a failed call leaves the table as it
//! was.

use roster_core::entry::{contains_pattern, fold_case, normalize_search};
use roster_core::types::now_millis;

use crate::models::entry::{CreateEntry, Entry, UpdateEntry};
use crate::DbPool;

/// Column list for `entries` queries.
const COLUMNS: &str = "id, name, email, role, created_at, updated_at";

/// Provides data access for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry.
    ///
    /// A duplicate `id` fails with the driver's unique-violation error.
    pub async fn create(pool: &DbPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let created_at = input.created_at.unwrap_or_else(now_millis);

        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO entries \
                 (id, name, email, role, created_at, name_folded, email_folded, role_folded) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(created_at)
            .bind(fold_case(&input.name))
            .bind(fold_case(&input.email))
            .bind(fold_case(&input.role))
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(entry)
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries, newest `created_at` first.
    ///
    /// A non-blank `search` keeps rows whose name, email or role contains it,
    /// case-insensitively. Matching runs against the `*_folded` columns,
    /// which hold [`fold_case`] of each field. Rows sharing a `created_at`
    /// come back in no particular order.
    pub async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Entry>, sqlx::Error> {
        match normalize_search(search) {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM entries \
                     WHERE name_folded LIKE $1 ESCAPE '\\' \
                        OR email_folded LIKE $1 ESCAPE '\\' \
                        OR role_folded LIKE $1 ESCAPE '\\' \
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Entry>(&query)
                    .bind(contains_pattern(term))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM entries ORDER BY created_at DESC");
                sqlx::query_as::<_, Entry>(&query).fetch_all(pool).await
            }
        }
    }

    /// Replace the mutable fields of an entry and stamp `updated_at`.
    ///
    /// `updated_at` never falls behind `created_at`, even when the client
    /// supplied a `createdAt` in the future. Returns `None` if no entry has
    /// this ID.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateEntry,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE entries SET \
                 name = $2, \
                 email = $3, \
                 role = $4, \
                 updated_at = CASE WHEN created_at > $5 THEN created_at ELSE $5 END, \
                 name_folded = $6, \
                 email_folded = $7, \
                 role_folded = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(now_millis())
            .bind(fold_case(&input.name))
            .bind(fold_case(&input.email))
            .bind(fold_case(&input.role))
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(entry)
    }

    /// Delete an entry by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every entry. Returns the number of rows removed.
    pub async fn delete_all(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM entries").execute(&mut *tx).await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
