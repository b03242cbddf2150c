//! Transactional insertion units for demo-data seeding.
//!
//! The seeder generates one customer together with their visit and
//! tracking events; those rows must land all-or-nothing so a partially
//! seeded database never shows a customer without their activity.

use footfall_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};

/// A visit to seed alongside its customer. `exit_time` and dwell stay
/// `None` for a still-active visit.
#[derive(Debug)]
pub struct VisitSeed {
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
    pub total_dwell_time: Option<i32>,
}

/// A tracking event to seed alongside its customer.
#[derive(Debug)]
pub struct EventSeed {
    pub zone_id: Option<DbId>,
    pub action: String,
    pub confidence: Option<f64>,
    pub metadata: Option<String>,
}

/// One customer plus all their generated activity.
#[derive(Debug)]
pub struct CustomerActivity {
    pub customer: CreateCustomer,
    pub visit: Option<VisitSeed>,
    pub events: Vec<EventSeed>,
}

/// Insert a customer with their visit and events in one transaction.
pub async fn insert_customer_activity(
    pool: &PgPool,
    activity: &CustomerActivity,
) -> Result<Customer, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let customer = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (tracking_id, gender, age_range, total_visits, is_staff) \
         VALUES ($1, $2, $3, COALESCE($4, 1), COALESCE($5, false)) \
         RETURNING id, tracking_id, gender, age_range, first_seen, last_seen, \
                   total_visits, is_staff",
    )
    .bind(&activity.customer.tracking_id)
    .bind(&activity.customer.gender)
    .bind(&activity.customer.age_range)
    .bind(activity.customer.total_visits)
    .bind(activity.customer.is_staff)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(visit) = &activity.visit {
        sqlx::query(
            "INSERT INTO visits (customer_id, entry_time, exit_time, total_dwell_time) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(customer.id)
        .bind(visit.entry_time)
        .bind(visit.exit_time)
        .bind(visit.total_dwell_time)
        .execute(&mut *tx)
        .await?;
    }

    for event in &activity.events {
        sqlx::query(
            "INSERT INTO tracking_events (customer_id, zone_id, action, confidence, metadata) \
             VALUES ($1, $2, $3, $4::NUMERIC(5,2), $5)",
        )
        .bind(customer.id)
        .bind(event.zone_id)
        .bind(&event.action)
        .bind(event.confidence)
        .bind(&event.metadata)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        customer_id = customer.id,
        events = activity.events.len(),
        "Seeded customer activity"
    );

    Ok(customer)
}
