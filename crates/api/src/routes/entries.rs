//! Route definitions for the entry catalog, mounted at `/entries`.
//!
//! ```text
//! GET    /       -> list_entries
//! POST   /       -> create_entry
//! GET    /{id}   -> get_entry
//! PUT    /{id}   -> update_entry
//! DELETE /{id}   -> delete_entry
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
}
