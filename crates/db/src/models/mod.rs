//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, with an
//!   `apply_to` method that writes only the supplied fields

pub mod location;
pub mod part;
pub mod patch;
pub mod search;
pub mod stock;
pub mod vehicle;
