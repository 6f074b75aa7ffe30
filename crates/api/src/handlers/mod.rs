//! Request handlers.
//!
//! Handlers delegate to the configured [`EntryStore`] and map errors via
//! [`AppError`](crate::error::AppError).
//!
//! [`EntryStore`]: catalog_core::store::EntryStore

pub mod entries;
