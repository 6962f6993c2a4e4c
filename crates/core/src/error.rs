use crate::types::DbId;

/// Domain error taxonomy: a record is missing, or an input broke a
/// constraint. Anything else is an infrastructure failure surfaced by
/// the layer that hit it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
