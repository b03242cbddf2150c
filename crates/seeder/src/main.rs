//! Demo-data seeder.
//!
//! Populates a database with plausible showroom data: five zones, fifty
//! customers with visits and tracking events, a handful of alerts, and a
//! day of per-zone hourly statistics. Each customer's rows are applied in
//! one transaction, so an interrupted run never leaves a customer without
//! their activity.
//!
//! Usage: `DATABASE_URL=postgres://... cargo run --bin footfall-seed`

use anyhow::Context;
use chrono::{Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use footfall_core::kinds::{AlertSeverity, AlertStatus, TrackedAction, ZoneKind};
use footfall_core::types::DbId;
use footfall_db::models::alert::CreateAlert;
use footfall_db::models::customer::CreateCustomer;
use footfall_db::models::zone::CreateZone;
use footfall_db::models::zone_stats::CreateZoneStats;
use footfall_db::repositories::{AlertRepo, ZoneRepo, ZoneStatsRepo};
use footfall_db::seed::{insert_customer_activity, CustomerActivity, EventSeed, VisitSeed};

const CUSTOMER_COUNT: usize = 50;

const GENDERS: &[&str] = &["Male", "Female"];
const AGE_RANGES: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];
const ACTIONS: &[TrackedAction] = &[
    TrackedAction::Walking,
    TrackedAction::Browsing,
    TrackedAction::Standing,
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "footfall_seeder=info,footfall_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = footfall_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    footfall_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Starting database seed");

    // --- Zones ---
    let mut zone_ids = Vec::new();
    for zone in zone_fixtures() {
        let created = ZoneRepo::create(&pool, &zone)
            .await
            .with_context(|| format!("Failed to create zone '{}'", zone.name))?;
        zone_ids.push(created.id);
    }
    tracing::info!(count = zone_ids.len(), "Zones created");

    // --- Customers with visits and events ---
    let run_tag = Utc::now().timestamp_millis();
    for i in 0..CUSTOMER_COUNT {
        let activity = generate_activity(&zone_ids, run_tag, i);
        insert_customer_activity(&pool, &activity)
            .await
            .with_context(|| {
                format!(
                    "Failed to seed customer '{}'",
                    activity.customer.tracking_id
                )
            })?;
    }
    tracing::info!(count = CUSTOMER_COUNT, "Customers seeded with activity");

    // --- Alerts ---
    let alerts = alert_fixtures();
    for alert in &alerts {
        AlertRepo::create(&pool, alert)
            .await
            .with_context(|| format!("Failed to create alert '{}'", alert.title))?;
    }
    tracing::info!(count = alerts.len(), "Alerts created");

    // --- Zone statistics ---
    let stats = generate_zone_stats(&zone_ids);
    let stat_count = stats.len();
    for stat in stats {
        ZoneStatsRepo::create(&pool, &stat)
            .await
            .context("Failed to create zone statistics row")?;
    }
    tracing::info!(count = stat_count, "Zone statistics created");

    tracing::info!("Database seeding complete");
    Ok(())
}

/// The showroom's five zones.
fn zone_fixtures() -> Vec<CreateZone> {
    let specs: &[(&str, ZoneKind, i32)] = &[
        ("Main Entrance", ZoneKind::Entrance, 100),
        ("Apparel Section", ZoneKind::Shopping, 40),
        ("Electronics", ZoneKind::Shopping, 35),
        ("Home Goods", ZoneKind::Shopping, 30),
        ("Checkout", ZoneKind::Checkout, 20),
    ];

    specs
        .iter()
        .map(|(name, kind, capacity)| CreateZone {
            name: (*name).to_string(),
            zone_type: kind.as_str().to_string(),
            capacity: Some(*capacity),
        })
        .collect()
}

/// One randomized customer with their visit and tracking events.
fn generate_activity(zone_ids: &[DbId], run_tag: i64, index: usize) -> CustomerActivity {
    let mut rng = rand::rng();

    let customer = CreateCustomer {
        tracking_id: format!("TRACK-{run_tag}-{index}"),
        gender: Some((*GENDERS.choose(&mut rng).unwrap()).to_string()),
        age_range: Some((*AGE_RANGES.choose(&mut rng).unwrap()).to_string()),
        total_visits: Some(rng.random_range(1..=5)),
        is_staff: Some(rng.random_bool(0.1)),
    };

    // Entry within the last two hours; ~30% of visits are still open.
    let entry_time = Utc::now() - Duration::milliseconds(rng.random_range(1_000..7_200_000));
    let visit = if rng.random_bool(0.3) {
        VisitSeed {
            entry_time,
            exit_time: None,
            total_dwell_time: None,
        }
    } else {
        let dwell_secs = rng.random_range(300..=3600);
        VisitSeed {
            entry_time,
            exit_time: Some(entry_time + Duration::seconds(i64::from(dwell_secs))),
            total_dwell_time: Some(dwell_secs),
        }
    };

    let events = (0..rng.random_range(3..=8))
        .map(|_| EventSeed {
            zone_id: Some(*zone_ids.choose(&mut rng).unwrap()),
            action: ACTIONS.choose(&mut rng).unwrap().as_str().to_string(),
            confidence: Some((rng.random_range(90.0..100.0) * 100.0_f64).round() / 100.0),
            metadata: Some(
                serde_json::json!({
                    "x": rng.random_range(10..=90),
                    "y": rng.random_range(10..=80),
                })
                .to_string(),
            ),
        })
        .collect();

    CustomerActivity {
        customer,
        visit: Some(visit),
        events,
    }
}

/// Three representative alerts, one already resolved.
fn alert_fixtures() -> Vec<CreateAlert> {
    vec![
        CreateAlert {
            alert_type: AlertSeverity::Critical.as_str().to_string(),
            title: "Crowd Density Limit Exceeded".to_string(),
            message: "Zone 'Apparel' has exceeded maximum capacity (45/40 people).".to_string(),
            location: Some("Zone A - Apparel".to_string()),
            status: Some(AlertStatus::Active.as_str().to_string()),
        },
        CreateAlert {
            alert_type: AlertSeverity::Warning.as_str().to_string(),
            title: "Long Queue Detected".to_string(),
            message: "Checkout line waiting time > 5 minutes.".to_string(),
            location: Some("Zone C - Checkout".to_string()),
            status: Some(AlertStatus::Active.as_str().to_string()),
        },
        CreateAlert {
            alert_type: AlertSeverity::Info.as_str().to_string(),
            title: "Staff Entered Restricted Area".to_string(),
            message: "Staff ID #442 detected in Server Room.".to_string(),
            location: Some("Back Office".to_string()),
            status: Some(AlertStatus::Resolved.as_str().to_string()),
        },
    ]
}

/// A day of hourly statistics for every zone.
fn generate_zone_stats(zone_ids: &[DbId]) -> Vec<CreateZoneStats> {
    let mut rng = rand::rng();

    zone_ids
        .iter()
        .flat_map(|&zone_id| {
            (footfall_core::traffic::OPEN_HOUR..=footfall_core::traffic::CLOSE_HOUR).map(
                move |hour| (zone_id, hour),
            )
        })
        .map(|(zone_id, hour)| CreateZoneStats {
            zone_id,
            date: None,
            hour,
            visitor_count: Some(rng.random_range(10..=80)),
            avg_dwell_time: Some(rng.random_range(180..=1200)),
        })
        .collect()
}
