//! Store interface.
//!
//! The router depends only on [`EntryStore`]; each backing technology
//! implements it once. [`memory::MemoryStore`] lives in this module, the
//! PostgreSQL implementation lives in `catalog-db`.

pub mod memory;

use async_trait::async_trait;

use crate::entry::{CreateEntry, Entry, UpdateEntry};
use crate::error::CoreError;

pub use memory::MemoryStore;

/// The five catalog operations plus a reachability probe.
///
/// `create` and `delete` return `Some(snapshot)` when the backend reports the
/// full post-mutation collection (the in-memory backend does, the relational
/// backend does not); the HTTP layer shapes its confirmation body from that.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Check that the backend is reachable. Used by the health route only.
    async fn ping(&self) -> Result<(), CoreError>;

    /// All entries, in store order.
    async fn list(&self) -> Result<Vec<Entry>, CoreError>;

    /// First entry with the given id.
    async fn get(&self, id: &str) -> Result<Entry, CoreError>;

    /// Insert a new entry.
    async fn create(&self, input: CreateEntry) -> Result<Option<Vec<Entry>>, CoreError>;

    /// Replace `title`, `author`, and `rating` of the entry with the given id
    /// and return the updated record.
    async fn update(&self, id: &str, input: UpdateEntry) -> Result<Entry, CoreError>;

    /// Remove the entry with the given id.
    async fn delete(&self, id: &str) -> Result<Option<Vec<Entry>>, CoreError>;
}
