use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A stored bookmark. The id is opaque to callers: the in-memory store
/// hands out UUID strings, the sqlite store renders its integer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i32,
}

/// A validated record ready for insertion. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i32,
}

/// A validated partial update. Absent fields are left untouched by the
/// store; the validator guarantees at least one field is present.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }
}

/// The untrusted request body, before validation. Every field is optional
/// and `rating` stays a raw JSON value so that out-of-shape payloads
/// (`"rating": "3"`, `"rating": 3.5`) get the documented validation
/// message instead of a deserialization rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookmarkDraft {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<JsonValue>,
}
