//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: extract, validate the payload via `seasons_core`,
//! delegate to the repository, and map missing rows to `NotFound`.

pub mod category;
pub mod hex_color;
pub mod host;
pub mod season;
pub mod user;
