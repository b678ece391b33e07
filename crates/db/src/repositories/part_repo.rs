//! Repository for the `parts` table.

use catalog_core::part_code::{generate_code, manufacturer_token, next_sequence};
use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::part::{CreatePart, Part};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "\
    id, internal_part_code, oe_part_number, manufacturer_part_number, description, \
    part_type, system, last_known_price, last_known_supplier, purchase_url, notes, \
    image_url, oe_description, availability, alternatives, created_at, updated_at";

/// Advisory lock key serializing part creation. Must not be reused elsewhere.
const PART_CODE_LOCK_KEY: i64 = 0x5041_5254_434f_4445; // "PARTCODE"

/// Provides CRUD operations for parts.
pub struct PartRepo;

impl PartRepo {
    /// Insert a new part with a freshly generated internal part code.
    ///
    /// The whole operation runs in one transaction holding an advisory lock,
    /// so concurrent creates observe distinct counts. The sequence starts at
    /// `count + 1` and is bumped past any code already taken (which happens
    /// once parts have been deleted).
    pub async fn create(pool: &PgPool, input: &CreatePart) -> Result<Part, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(PART_CODE_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM parts")
            .fetch_one(&mut *tx)
            .await?;

        let code = Self::next_free_code(&mut tx, input, next_sequence(count)).await?;

        let query = format!(
            "INSERT INTO parts (id, internal_part_code, oe_part_number, manufacturer_part_number, \
                description, part_type, system, last_known_price, last_known_supplier, \
                purchase_url, notes, image_url, oe_description, availability, alternatives) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {COLUMNS}"
        );
        let part = sqlx::query_as::<_, Part>(&query)
            .bind(DbId::new_v4())
            .bind(&code)
            .bind(&input.oe_part_number)
            .bind(&input.manufacturer_part_number)
            .bind(&input.description)
            .bind(&input.part_type)
            .bind(&input.system)
            .bind(input.last_known_price)
            .bind(&input.last_known_supplier)
            .bind(&input.purchase_url)
            .bind(&input.notes)
            .bind(&input.image_url)
            .bind(&input.oe_description)
            .bind(input.availability)
            .bind(&input.alternatives)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(part_id = %part.id, code = %part.internal_part_code, "Part created");
        Ok(part)
    }

    /// Generate codes from `sequence` upward until one is unused.
    async fn next_free_code(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreatePart,
        mut sequence: u64,
    ) -> Result<String, sqlx::Error> {
        let manufacturer = manufacturer_token(input.last_known_supplier.as_deref());
        loop {
            let code = generate_code(manufacturer, &input.system, &input.part_type, sequence);
            let (taken,): (bool,) = sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM parts WHERE internal_part_code = $1)",
            )
            .bind(&code)
            .fetch_one(&mut **tx)
            .await?;
            if !taken {
                return Ok(code);
            }
            tracing::debug!(%code, "Part code already taken, bumping sequence");
            sequence += 1;
        }
    }

    /// Find a part by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = $1");
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a part with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM parts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Take a share lock on the part row so it cannot be deleted before the
    /// transaction ends. Returns `false` if the row does not exist.
    pub async fn lock_shared(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM parts WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.is_some())
    }

    /// Find a part by ID and lock its row for the rest of the transaction.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all parts, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts ORDER BY created_at DESC");
        sqlx::query_as::<_, Part>(&query).fetch_all(pool).await
    }

    /// Write every mutable column of `part` back to its row.
    ///
    /// `internal_part_code` is never written.
    pub async fn save(
        tx: &mut Transaction<'_, Postgres>,
        part: &Part,
    ) -> Result<Part, sqlx::Error> {
        let query = format!(
            "UPDATE parts SET
                oe_part_number = $2,
                manufacturer_part_number = $3,
                description = $4,
                part_type = $5,
                system = $6,
                last_known_price = $7,
                last_known_supplier = $8,
                purchase_url = $9,
                notes = $10,
                image_url = $11,
                oe_description = $12,
                availability = $13,
                alternatives = $14,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(part.id)
            .bind(&part.oe_part_number)
            .bind(&part.manufacturer_part_number)
            .bind(&part.description)
            .bind(&part.part_type)
            .bind(&part.system)
            .bind(part.last_known_price)
            .bind(&part.last_known_supplier)
            .bind(&part.purchase_url)
            .bind(&part.notes)
            .bind(&part.image_url)
            .bind(&part.oe_description)
            .bind(part.availability)
            .bind(&part.alternatives)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a part by ID. Stock levels and vehicle links cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
