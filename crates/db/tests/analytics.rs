//! Integration tests for the analytics aggregation queries.

use chrono::Utc;
use footfall_db::models::customer::CreateCustomer;
use footfall_db::models::visit::CreateVisit;
use footfall_db::repositories::{AnalyticsRepo, CustomerRepo, VisitRepo};
use footfall_db::seed::{insert_customer_activity, CustomerActivity, VisitSeed};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn customer(tracking_id: &str, gender: Option<&str>, age_range: Option<&str>) -> CreateCustomer {
    CreateCustomer {
        tracking_id: tracking_id.to_string(),
        gender: gender.map(str::to_string),
        age_range: age_range.map(str::to_string),
        total_visits: None,
        is_staff: None,
    }
}

/// Seed one customer with a single visit entering today at `hour`:00 UTC.
async fn visit_at_hour(pool: &PgPool, tracking_id: &str, hour: u32) {
    let entry_time = Utc::now()
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc();

    insert_customer_activity(
        pool,
        &CustomerActivity {
            customer: customer(tracking_id, Some("Male"), Some("25-34")),
            visit: Some(VisitSeed {
                entry_time,
                exit_time: None,
                total_dwell_time: None,
            }),
            events: Vec::new(),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Overview stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_on_empty_database_is_all_zero(pool: PgPool) {
    let stats = AnalyticsRepo::overview(&pool).await.unwrap();
    assert_eq!(stats.total_visitors, 0);
    assert_eq!(stats.current_occupancy, 0);
    assert_eq!(stats.avg_dwell_time, 0);
    assert_eq!(stats.total_visits_today, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_counts_and_averages(pool: PgPool) {
    let a = CustomerRepo::create(&pool, &customer("T-1", Some("Male"), None))
        .await
        .unwrap();
    let b = CustomerRepo::create(&pool, &customer("T-2", Some("Female"), None))
        .await
        .unwrap();

    // One open visit, two closed ones with dwell 10s and 15s.
    VisitRepo::create(
        &pool,
        &CreateVisit {
            customer_id: a.id,
            exit_time: None,
            total_dwell_time: None,
        },
    )
    .await
    .unwrap();
    for (cust, dwell) in [(a.id, 10), (b.id, 15)] {
        VisitRepo::create(
            &pool,
            &CreateVisit {
                customer_id: cust,
                exit_time: Some(Utc::now()),
                total_dwell_time: Some(dwell),
            },
        )
        .await
        .unwrap();
    }

    let stats = AnalyticsRepo::overview(&pool).await.unwrap();

    // Two distinct customers, three visits entered today.
    assert_eq!(stats.total_visitors, 2);
    assert_eq!(stats.total_visits_today, 3);
    // Exactly the one open visit.
    assert_eq!(stats.current_occupancy, 1);
    // mean(10, 15) = 12.5, rounded to 13.
    assert_eq!(stats.avg_dwell_time, 13);
}

// ---------------------------------------------------------------------------
// Demographics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn demographics_buckets_by_age_and_gender(pool: PgPool) {
    for (id, age) in [("T-1", "18-24"), ("T-2", "25-34"), ("T-3", "55+")] {
        CustomerRepo::create(&pool, &customer(id, Some("Female"), Some(age)))
            .await
            .unwrap();
    }

    let demographics = AnalyticsRepo::demographics(&pool).await.unwrap();

    assert_eq!(demographics.age_distribution.len(), 3);
    assert!(demographics
        .age_distribution
        .iter()
        .all(|bucket| bucket.value == 1));

    assert_eq!(demographics.gender_distribution.len(), 1);
    assert_eq!(demographics.gender_distribution[0].name, "Female");
    assert_eq!(demographics.gender_distribution[0].value, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_gender_collapses_into_one_unknown_bucket(pool: PgPool) {
    CustomerRepo::create(&pool, &customer("T-1", None, None))
        .await
        .unwrap();
    CustomerRepo::create(&pool, &customer("T-2", None, None))
        .await
        .unwrap();
    CustomerRepo::create(&pool, &customer("T-3", Some("Male"), None))
        .await
        .unwrap();

    let demographics = AnalyticsRepo::demographics(&pool).await.unwrap();

    let unknown: Vec<_> = demographics
        .gender_distribution
        .iter()
        .filter(|bucket| bucket.name == "Unknown")
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].value, 2);
}

// ---------------------------------------------------------------------------
// Hourly traffic
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn traffic_always_has_ten_slots(pool: PgPool) {
    let slots = AnalyticsRepo::hourly_traffic(&pool).await.unwrap();

    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0].time, "09:00");
    assert_eq!(slots[9].time, "18:00");
    assert!(slots.iter().all(|s| s.entry == 0 && s.exit == 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn traffic_counts_todays_entries_per_hour(pool: PgPool) {
    for (i, hour) in [10, 10, 10, 10, 10, 14].iter().enumerate() {
        visit_at_hour(&pool, &format!("T-{i}"), *hour).await;
    }

    let slots = AnalyticsRepo::hourly_traffic(&pool).await.unwrap();

    let ten = slots.iter().find(|s| s.time == "10:00").unwrap();
    assert_eq!(ten.visitors, 5);
    assert_eq!(ten.entry, 5);
    // floor(5 * 0.8) = 4
    assert_eq!(ten.exit, 4);

    let fourteen = slots.iter().find(|s| s.time == "14:00").unwrap();
    assert_eq!(fourteen.entry, 1);
    assert_eq!(fourteen.exit, 0);
}
