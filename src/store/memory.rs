use crate::error::StoreError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use crate::store::BookmarkStore;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of the store, backed by a plain `Vec` so that
/// listing preserves insertion order. Each call is individually atomic
/// behind the lock; there is no isolation across calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.bookmarks.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let bookmarks = self.bookmarks.read().await;
        Ok(bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            url: new.url,
            description: new.description,
            rating: new.rating,
        };
        self.bookmarks.write().await.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update_by_id(&self, id: &str, patch: BookmarkPatch) -> Result<u64, StoreError> {
        let mut bookmarks = self.bookmarks.write().await;
        let Some(bookmark) = bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(0);
        };

        if let Some(title) = patch.title {
            bookmark.title = title;
        }
        if let Some(url) = patch.url {
            bookmark.url = url;
        }
        if let Some(description) = patch.description {
            bookmark.description = Some(description);
        }
        if let Some(rating) = patch.rating {
            bookmark.rating = rating;
        }

        Ok(1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let mut bookmarks = self.bookmarks.write().await;
        match bookmarks.iter().position(|b| b.id == id) {
            Some(index) => {
                bookmarks.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
