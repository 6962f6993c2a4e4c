//! Shared domain types for the color-seasons backend.
//!
//! Kept deliberately small: primitive type aliases, the domain error
//! enum, and the input validators used by the API handlers.

pub mod error;
pub mod types;
pub mod validate;
