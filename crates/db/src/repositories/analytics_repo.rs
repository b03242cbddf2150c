//! Read-only analytics aggregation over the raw entity tables.
//!
//! Each view issues independent statements; there is no snapshot isolation
//! across them. Day boundaries use the database clock
//! (`date_trunc('day', now())`).

use footfall_core::traffic;
use footfall_core::views::{Demographics, DistributionBucket, OverviewStats, TrafficSlot};
use sqlx::{FromRow, PgPool};

/// Label used for customers with a null demographic field.
const UNKNOWN_BUCKET: &str = "Unknown";

/// Raw row for the grouped distribution queries.
#[derive(Debug, FromRow)]
struct BucketRow {
    name: String,
    value: i64,
}

/// Computes the dashboard's summary views.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Headline overview numbers.
    pub async fn overview(pool: &PgPool) -> Result<OverviewStats, sqlx::Error> {
        let total_visitors: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT id) FROM customers")
            .fetch_one(pool)
            .await?;

        let current_occupancy: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE exit_time IS NULL")
                .fetch_one(pool)
                .await?;

        let avg_dwell: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(total_dwell_time)::FLOAT8 FROM visits \
             WHERE total_dwell_time IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;

        let total_visits_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM visits \
             WHERE entry_time >= date_trunc('day', now())",
        )
        .fetch_one(pool)
        .await?;

        Ok(OverviewStats {
            total_visitors,
            current_occupancy,
            avg_dwell_time: avg_dwell.map(|a| a.round() as i64).unwrap_or(0),
            total_visits_today,
        })
    }

    /// Customer counts grouped by age range and by gender.
    ///
    /// Null buckets collapse into a single "Unknown" entry per
    /// distribution. Counts are raw; callers compute percentages.
    pub async fn demographics(pool: &PgPool) -> Result<Demographics, sqlx::Error> {
        let age_distribution = Self::distribution(pool, "age_range").await?;
        let gender_distribution = Self::distribution(pool, "gender").await?;

        Ok(Demographics {
            age_distribution,
            gender_distribution,
        })
    }

    /// Today's visit counts projected onto the fixed business-hours
    /// window. Always exactly one slot per display hour.
    pub async fn hourly_traffic(pool: &PgPool) -> Result<Vec<TrafficSlot>, sqlx::Error> {
        let counts: Vec<(i32, i64)> = sqlx::query_as(
            "SELECT EXTRACT(HOUR FROM entry_time)::INT4 AS hour, COUNT(*) AS entries \
             FROM visits \
             WHERE entry_time >= date_trunc('day', now()) \
             GROUP BY 1 \
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await?;

        Ok(traffic::project_window(&counts))
    }

    /// One grouped count over a nullable demographic column.
    async fn distribution(
        pool: &PgPool,
        column: &str,
    ) -> Result<Vec<DistributionBucket>, sqlx::Error> {
        // `column` is one of two compile-time literals, never user input.
        let query = format!(
            "SELECT COALESCE({column}, '{UNKNOWN_BUCKET}') AS name, COUNT(*) AS value \
             FROM customers \
             GROUP BY {column} \
             ORDER BY value DESC, name"
        );
        let rows = sqlx::query_as::<_, BucketRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| DistributionBucket {
                name: r.name,
                value: r.value,
            })
            .collect())
    }
}
