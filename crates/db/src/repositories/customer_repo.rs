//! Repository for the `customers` table.

use footfall_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, Detection};

/// Column list for `customers` queries.
const COLUMNS: &str =
    "id, tracking_id, gender, age_range, first_seen, last_seen, total_visits, is_staff";

/// Provides CRUD and detection-upsert operations for tracked customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers, most recently seen first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY last_seen DESC");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Find a customer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by the detection service's tracking identifier.
    pub async fn find_by_tracking_id(
        pool: &PgPool,
        tracking_id: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE tracking_id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(tracking_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a customer directly.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (tracking_id, gender, age_range, total_visits, is_staff) \
             VALUES ($1, $2, $3, COALESCE($4, 1), COALESCE($5, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.tracking_id)
            .bind(&input.gender)
            .bind(&input.age_range)
            .bind(input.total_visits)
            .bind(input.is_staff)
            .fetch_one(pool)
            .await
    }

    /// Refresh a customer's `last_seen` to now.
    pub async fn touch_last_seen(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE customers SET last_seen = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    }

    /// Apply one detection from the external tracker.
    ///
    /// An unknown tracking id creates the customer and opens its first
    /// visit; a known id refreshes `last_seen` and opens a new visit
    /// (bumping `total_visits`) only when no visit is currently active.
    /// Runs in a transaction so a customer never appears without its
    /// opening visit.
    ///
    /// Returns the up-to-date customer and whether a visit was opened.
    pub async fn record_detection(
        pool: &PgPool,
        input: &Detection,
    ) -> Result<(Customer, bool), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM customers WHERE tracking_id = $1");
        let existing = sqlx::query_as::<_, Customer>(&select)
            .bind(&input.tracking_id)
            .fetch_optional(&mut *tx)
            .await?;

        let (customer, opened) = match existing {
            None => {
                let insert = format!(
                    "INSERT INTO customers (tracking_id, gender, age_range, is_staff) \
                     VALUES ($1, $2, $3, COALESCE($4, false)) \
                     RETURNING {COLUMNS}"
                );
                let customer = sqlx::query_as::<_, Customer>(&insert)
                    .bind(&input.tracking_id)
                    .bind(&input.gender)
                    .bind(&input.age_range)
                    .bind(input.is_staff)
                    .fetch_one(&mut *tx)
                    .await?;

                sqlx::query("INSERT INTO visits (customer_id) VALUES ($1)")
                    .bind(customer.id)
                    .execute(&mut *tx)
                    .await?;

                (customer, true)
            }
            Some(existing) => {
                let has_active: Option<DbId> = sqlx::query_scalar(
                    "SELECT id FROM visits \
                     WHERE customer_id = $1 AND exit_time IS NULL \
                     LIMIT 1",
                )
                .bind(existing.id)
                .fetch_optional(&mut *tx)
                .await?;

                let opened = has_active.is_none();
                let update = if opened {
                    format!(
                        "UPDATE customers \
                         SET last_seen = now(), total_visits = total_visits + 1 \
                         WHERE id = $1 RETURNING {COLUMNS}"
                    )
                } else {
                    format!(
                        "UPDATE customers SET last_seen = now() \
                         WHERE id = $1 RETURNING {COLUMNS}"
                    )
                };
                let customer = sqlx::query_as::<_, Customer>(&update)
                    .bind(existing.id)
                    .fetch_one(&mut *tx)
                    .await?;

                if opened {
                    sqlx::query("INSERT INTO visits (customer_id) VALUES ($1)")
                        .bind(customer.id)
                        .execute(&mut *tx)
                        .await?;
                }

                (customer, opened)
            }
        };

        tx.commit().await?;

        tracing::debug!(
            tracking_id = %customer.tracking_id,
            customer_id = customer.id,
            visit_opened = opened,
            "Detection recorded"
        );

        Ok((customer, opened))
    }
}
