//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Writes are single
//! statements unless a method documents its transaction.

pub mod alert_repo;
pub mod analytics_repo;
pub mod customer_repo;
pub mod tracking_event_repo;
pub mod visit_repo;
pub mod zone_repo;
pub mod zone_stats_repo;

pub use alert_repo::AlertRepo;
pub use analytics_repo::AnalyticsRepo;
pub use customer_repo::CustomerRepo;
pub use tracking_event_repo::TrackingEventRepo;
pub use visit_repo::VisitRepo;
pub use zone_repo::ZoneRepo;
pub use zone_stats_repo::ZoneStatsRepo;
