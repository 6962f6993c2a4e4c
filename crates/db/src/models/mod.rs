//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `user` has no update DTO: the users resource is read-only over HTTP.

pub mod category;
pub mod hex_color;
pub mod host;
pub mod season;
pub mod user;
