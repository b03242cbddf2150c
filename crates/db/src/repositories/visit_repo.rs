//! Repository for the `visits` table.

use chrono::Utc;
use footfall_core::types::DbId;
use footfall_core::views::LiveVisitor;
use sqlx::{FromRow, PgPool};

use crate::models::visit::{CloseVisit, CreateVisit, Visit};

/// Column list for `visits` queries.
const COLUMNS: &str = "id, customer_id, entry_time, exit_time, total_dwell_time";

/// Raw row for the live tracking join.
#[derive(Debug, FromRow)]
struct LiveVisitorRow {
    tracking_id: String,
    gender: Option<String>,
    age_range: Option<String>,
    is_staff: bool,
    entry_time: footfall_core::types::Timestamp,
}

/// Provides open/close and listing operations for visits.
pub struct VisitRepo;

impl VisitRepo {
    /// List all currently active visits, most recent entry first.
    pub async fn active(pool: &PgPool) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits \
             WHERE exit_time IS NULL \
             ORDER BY entry_time DESC"
        );
        sqlx::query_as::<_, Visit>(&query).fetch_all(pool).await
    }

    /// Active visits joined with visitor demographics, capped at `limit`.
    pub async fn active_with_customers(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<LiveVisitor>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LiveVisitorRow>(
            "SELECT c.tracking_id, c.gender, c.age_range, c.is_staff, v.entry_time \
             FROM visits v \
             JOIN customers c ON c.id = v.customer_id \
             WHERE v.exit_time IS NULL \
             ORDER BY v.entry_time DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LiveVisitor {
                id: r.tracking_id,
                gender: r.gender,
                age_range: r.age_range,
                is_staff: r.is_staff,
                entry_time: r.entry_time,
            })
            .collect())
    }

    /// List all visits for one customer, newest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits \
             WHERE customer_id = $1 \
             ORDER BY entry_time DESC"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Open a visit. Entry time is the insert time.
    pub async fn create(pool: &PgPool, input: &CreateVisit) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits (customer_id, exit_time, total_dwell_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(input.customer_id)
            .bind(input.exit_time)
            .bind(input.total_dwell_time)
            .fetch_one(pool)
            .await
    }

    /// Close a visit, storing exit time and dwell seconds.
    ///
    /// Exit time defaults to now; dwell defaults to the whole seconds
    /// between entry and exit. The customer's `last_seen` is advanced to
    /// the exit time in the same transaction (never moved backwards).
    ///
    /// Returns `None` when no visit with this id exists.
    pub async fn close(
        pool: &PgPool,
        id: DbId,
        input: &CloseVisit,
    ) -> Result<Option<Visit>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM visits WHERE id = $1");
        let Some(visit) = sqlx::query_as::<_, Visit>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let exit_time = input.exit_time.unwrap_or_else(Utc::now);
        let dwell = input
            .total_dwell_time
            .unwrap_or_else(|| (exit_time - visit.entry_time).num_seconds().max(0) as i32);

        let update = format!(
            "UPDATE visits SET exit_time = $2, total_dwell_time = $3 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let closed = sqlx::query_as::<_, Visit>(&update)
            .bind(id)
            .bind(exit_time)
            .bind(dwell)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE customers SET last_seen = GREATEST(last_seen, $2) WHERE id = $1")
            .bind(closed.customer_id)
            .bind(exit_time)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(visit_id = id, dwell_secs = dwell, "Visit closed");

        Ok(Some(closed))
    }
}
