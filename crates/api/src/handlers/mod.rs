//! HTTP handlers, one module per feature area.
//!
//! Handlers stay thin: extract, call a repository, map errors to
//! [`crate::error::AppError`], serialize. Aggregation logic lives in
//! `footfall-db`/`footfall-core`, not here.

pub mod alerts;
pub mod analytics;
pub mod customers;
pub mod stats;
pub mod tracking;
pub mod visits;
pub mod zones;
