pub mod memory;
pub mod sqlite;

use crate::error::StoreError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The persistence contract shared by the in-memory and sqlite variants.
///
/// "Not found" is a value here, never an error: [`get_by_id`] yields
/// `None`, [`delete_by_id`] and [`update_by_id`] yield a `0` row count.
/// `StoreError` is reserved for I/O failures.
///
/// [`get_by_id`]: BookmarkStore::get_by_id
/// [`delete_by_id`]: BookmarkStore::delete_by_id
/// [`update_by_id`]: BookmarkStore::update_by_id
#[async_trait]
pub trait BookmarkStore: Send + Sync + 'static {
    /// Returns every bookmark in insertion order.
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// Returns the bookmark with the given id, or `None`.
    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError>;

    /// Assigns a fresh id, persists the record, and returns it as stored.
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Overwrites only the fields supplied in `patch`, leaving the rest
    /// untouched. Returns the number of rows affected (0 or 1).
    async fn update_by_id(&self, id: &str, patch: BookmarkPatch) -> Result<u64, StoreError>;

    /// Removes the bookmark if present. Returns the number of rows
    /// affected (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;
}
