//! PostgreSQL-backed entry store.
//!
//! Schema setup is idempotent and runs at startup: create the table when
//! absent, then insert the seed rows when the table is empty. All queries
//! use bind parameters. Update and delete are single conditional statements;
//! a zero-row outcome is reported as not-found.

use async_trait::async_trait;
use sqlx::FromRow;

use catalog_core::entry::{CreateEntry, Entry, UpdateEntry};
use catalog_core::error::CoreError;
use catalog_core::store::EntryStore;

use crate::DbPool;

/// Column list for `entries` queries.
const ENTRY_COLUMNS: &str = "id, title, author, rating";

const CREATE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS entries (\
        id     SERIAL PRIMARY KEY,\
        title  TEXT NOT NULL,\
        author TEXT NOT NULL,\
        rating DOUBLE PRECISION NOT NULL\
    )";

const SEED_ENTRIES: &str = "\
    INSERT INTO entries (title, author, rating) VALUES \
        ('Hunter x Hunter', 'Yoshihiro Togashi', 9.8), \
        ('Jujutsu Kaisen', 'Gege Akutami', 8.9), \
        ('Death Note', 'Obata Takeshi', 8.6), \
        ('Dr. Stone', 'Riichiro Inagaki', 9.5)";

/// Create the `entries` table when it does not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    Ok(())
}

/// Insert the four fixed seed rows when the table holds no entries.
pub async fn seed_if_empty(pool: &DbPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        sqlx::query(SEED_ENTRIES).execute(pool).await?;
        tracing::info!("Seeded empty entries table with initial records");
    }

    Ok(())
}

/// A row from the `entries` table.
#[derive(Debug, Clone, FromRow)]
struct EntryRow {
    id: i32,
    title: String,
    author: String,
    rating: f64,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Entry {
            // Integer primary key, but ids are strings on the wire.
            id: row.id.to_string(),
            title: row.title,
            author: row.author,
            rating: row.rating,
        }
    }
}

/// Entry store backed by the `entries` table.
pub struct PgEntryStore {
    pool: DbPool,
}

impl PgEntryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Entry",
        id: id.to_owned(),
    }
}

/// Path ids address an integer primary key; anything unparseable cannot
/// match a row and is reported as not-found rather than a backend error.
fn parse_id(id: &str) -> Result<i32, CoreError> {
    id.parse().map_err(|_| not_found(id))
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }

    async fn list(&self) -> Result<Vec<Entry>, CoreError> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY id");
        let rows = sqlx::query_as::<_, EntryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(Entry::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Entry, CoreError> {
        let key = parse_id(id)?;

        let query = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = $1");
        let row = sqlx::query_as::<_, EntryRow>(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(Entry::from).ok_or_else(|| not_found(id))
    }

    async fn create(&self, input: CreateEntry) -> Result<Option<Vec<Entry>>, CoreError> {
        // The server assigns the id; a client-supplied one is ignored.
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO entries (title, author, rating) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        tracing::debug!(id, "Entry row inserted");

        Ok(None)
    }

    async fn update(&self, id: &str, input: UpdateEntry) -> Result<Entry, CoreError> {
        let key = parse_id(id)?;

        let query = format!(
            "UPDATE entries SET title = $2, author = $3, rating = $4 \
             WHERE id = $1 RETURNING {ENTRY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, EntryRow>(&query)
            .bind(key)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.rating)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(Entry::from).ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<Option<Vec<Entry>>, CoreError> {
        let key = parse_id(id)?;

        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(None)
    }
}
