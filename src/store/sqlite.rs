use crate::db::Database;
use crate::error::StoreError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use crate::store::BookmarkStore;
use async_trait::async_trait;

/// Store backed by the local sqlite database. Rows carry an integer
/// primary key which is rendered to a string at the boundary, so callers
/// see the same opaque ids as with the in-memory store.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// An id that does not parse as an integer cannot match any row, so it
// takes the same path as an absent one.
fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}

fn row_to_bookmark(row: &libsql::Row) -> Result<Bookmark, StoreError> {
    let id: i64 = row.get(0)?;
    Ok(Bookmark {
        id: id.to_string(),
        title: row.get(1)?,
        url: row.get(2)?,
        description: row.get(3)?,
        rating: row.get(4)?,
    })
}

#[async_trait]
impl BookmarkStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let query = r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            ORDER BY id
        "#;

        let mut rows = self.db.connection().query(query, ()).await?;

        let mut bookmarks = Vec::new();
        while let Some(row) = rows.next().await? {
            bookmarks.push(row_to_bookmark(&row)?);
        }
        Ok(bookmarks)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let query = r#"
            SELECT id, title, url, description, rating
            FROM bookmarks WHERE id = ?
        "#;

        let mut rows = self
            .db
            .connection()
            .query(query, libsql::params![id])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_bookmark(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let query = r#"
            INSERT INTO bookmarks (title, url, description, rating)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, url, description, rating
        "#;

        let mut rows = self
            .db
            .connection()
            .query(
                query,
                libsql::params![new.title, new.url, new.description, new.rating],
            )
            .await?;

        match rows.next().await? {
            Some(row) => row_to_bookmark(&row),
            None => Err(StoreError::NoRowReturned),
        }
    }

    async fn update_by_id(&self, id: &str, patch: BookmarkPatch) -> Result<u64, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };
        if patch.is_empty() {
            return Ok(0);
        }

        let mut updates = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(title) = patch.title {
            updates.push("title = ?");
            params.push(title.into());
        }
        if let Some(url) = patch.url {
            updates.push("url = ?");
            params.push(url.into());
        }
        if let Some(description) = patch.description {
            updates.push("description = ?");
            params.push(description.into());
        }
        if let Some(rating) = patch.rating {
            updates.push("rating = ?");
            params.push(rating.into());
        }
        params.push(id.into());

        let query = format!("UPDATE bookmarks SET {} WHERE id = ?", updates.join(", "));

        let affected = self.db.connection().execute(&query, params).await?;
        Ok(affected)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };

        let affected = self
            .db
            .connection()
            .execute("DELETE FROM bookmarks WHERE id = ?", libsql::params![id])
            .await?;
        Ok(affected)
    }
}
