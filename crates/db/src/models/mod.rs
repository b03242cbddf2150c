//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (entity shape minus
//!   server-generated fields)
//!
//! Wire format is camelCase; column names stay snake_case.

pub mod alert;
pub mod customer;
pub mod tracking_event;
pub mod visit;
pub mod zone;
pub mod zone_stats;
