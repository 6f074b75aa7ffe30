//! Catalog entry model and request DTOs.
//!
//! - [`Entry`] is the canonical record shape served over HTTP.
//! - [`CreateEntry`] is the create payload; its `id` is only honored by the
//!   in-memory backend (the relational backend assigns ids itself).
//! - [`UpdateEntry`] is the update payload; updates replace every mutable
//!   field, so no field is optional.

use serde::{Deserialize, Serialize};

/// One catalog record.
///
/// Ids are strings on the wire regardless of backend: the relational backend
/// renders its integer primary key as text, the in-memory backend stores
/// whatever the client supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Rating on a 0-10 scale. Not validated or clamped.
    pub rating: f64,
}

/// Payload for `POST /entries`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntry {
    /// Client-supplied id. Used verbatim by the in-memory backend (no
    /// uniqueness check), ignored by the relational backend.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub rating: f64,
}

/// Payload for `PUT /entries/{id}`. Every field is overwritten; partial
/// updates are not supported.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEntry {
    pub title: String,
    pub author: String,
    pub rating: f64,
}
