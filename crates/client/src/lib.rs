//! Typed client for the footfall analytics REST API.
//!
//! [`client::FootfallClient`] covers the full endpoint surface with typed
//! requests and responses; [`poll`] adds the dashboard's refresh model on
//! top: fixed-interval re-fetch with last-good-value retention. There is
//! deliberately no retry or backoff logic -- a failed tick is simply
//! superseded by the next one.

pub mod client;
pub mod error;
pub mod poll;
pub mod types;

pub use client::FootfallClient;
pub use error::{ClientError, ClientResult};
