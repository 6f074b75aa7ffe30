use thiserror::Error;

/// Domain-level error shared by all store backends.
///
/// Store implementations translate backend failures into these variants so
/// the HTTP layer depends only on this type. The `Internal` message is for
/// server-side logging; it must never reach a client verbatim.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with the given id exists.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A backend failure (connection loss, malformed row, etc.).
    #[error("{0}")]
    Internal(String),
}
