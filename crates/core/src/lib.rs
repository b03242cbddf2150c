//! Shared domain types for the footfall analytics platform.
//!
//! Everything here is plain data and pure logic: the database layer
//! (`footfall-db`), the API server (`footfall-api`), and the polling client
//! (`footfall-client`) all build on these types without dragging in each
//! other's dependencies.

pub mod error;
pub mod kinds;
pub mod traffic;
pub mod types;
pub mod views;
