//! In-process store backed by an ordered `Vec`.
//!
//! Lookup, update, and delete scan linearly and take the first id match, so
//! duplicate ids shadow each other in insertion order. Create appends
//! unconditionally with whatever id the client supplied. All access goes
//! through an exclusive lock; the collection itself enforces nothing else.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entry::{CreateEntry, Entry, UpdateEntry};
use crate::error::CoreError;
use crate::store::EntryStore;

/// Entry store holding its records in process memory.
///
/// Contents live exactly as long as the process; a restart starts over from
/// whatever the constructor seeded.
pub struct MemoryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// A store pre-populated with the given records, in order.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// The four fixed records every fresh deployment starts with.
    pub fn seeded() -> Self {
        Self::with_entries(vec![
            seed("1", "Hunter x Hunter", "Yoshihiro Togashi", 9.8),
            seed("2", "Jujutsu Kaisen", "Gege Akutami", 8.9),
            seed("3", "Death Note", "Obata Takeshi", 8.6),
            seed("4", "Dr. Stone", "Riichiro Inagaki", 9.5),
        ])
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed(id: &str, title: &str, author: &str, rating: f64) -> Entry {
    Entry {
        id: id.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        rating,
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Entry",
        id: id.to_owned(),
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Entry>, CoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Entry, CoreError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, input: CreateEntry) -> Result<Option<Vec<Entry>>, CoreError> {
        let mut entries = self.entries.write().await;
        entries.push(Entry {
            // A missing id is stored as the empty string, not rejected.
            id: input.id.unwrap_or_default(),
            title: input.title,
            author: input.author,
            rating: input.rating,
        });
        Ok(Some(entries.clone()))
    }

    async fn update(&self, id: &str, input: UpdateEntry) -> Result<Entry, CoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| not_found(id))?;

        entry.title = input.title;
        entry.author = input.author;
        entry.rating = input.rating;

        Ok(entry.clone())
    }

    async fn delete(&self, id: &str) -> Result<Option<Vec<Entry>>, CoreError> {
        let mut entries = self.entries.write().await;
        let index = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| not_found(id))?;

        // Vec::remove splices the element out, keeping the rest in order.
        entries.remove(index);

        Ok(Some(entries.clone()))
    }
}
