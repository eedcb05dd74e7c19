//! HTTP handlers for the bookmarks API.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::validate;
use crate::error::ApiError;
use crate::handler::AppState;
use crate::model::{Bookmark, BookmarkDraft};
use crate::sanitize;

/// The wire form of a bookmark. Title and description pass through the
/// HTML escaper on the way out; the stored record is never touched.
#[derive(Debug, Serialize)]
pub struct BookmarkPayload {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rating: i32,
}

impl BookmarkPayload {
    fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            title: sanitize::escape_html(&bookmark.title),
            url: bookmark.url.clone(),
            description: bookmark.description.as_deref().map(sanitize::escape_html),
            rating: bookmark.rating,
        }
    }
}

// Routes that carry an id resolve it before anything else, so an unknown
// id answers 404 even when the body would also have failed validation.
async fn resolve_bookmark(state: &AppState, id: &str) -> Result<Bookmark, ApiError> {
    match state.store.get_by_id(id).await? {
        Some(bookmark) => Ok(bookmark),
        None => {
            tracing::error!(%id, "bookmark not found");
            Err(ApiError::NotFound)
        }
    }
}

pub async fn list_bookmarks(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bookmarks = state.store.list_all().await?;
    let payload: Vec<BookmarkPayload> =
        bookmarks.iter().map(BookmarkPayload::from_bookmark).collect();

    Ok(Json(payload).into_response())
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    Json(draft): Json<BookmarkDraft>,
) -> Result<Response, ApiError> {
    let record = validate::new_bookmark(draft)?;
    let bookmark = state.store.insert(record).await?;
    tracing::info!(id = %bookmark.id, "bookmark created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/bookmarks/{}", bookmark.id))],
        Json(BookmarkPayload::from_bookmark(&bookmark)),
    )
        .into_response())
}

pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let bookmark = resolve_bookmark(&state, &id).await?;

    Ok(Json(BookmarkPayload::from_bookmark(&bookmark)).into_response())
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<BookmarkDraft>,
) -> Result<Response, ApiError> {
    resolve_bookmark(&state, &id).await?;

    let patch = validate::bookmark_patch(draft)?;
    state.store.update_by_id(&id, patch).await?;
    tracing::info!(%id, "bookmark updated");

    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    resolve_bookmark(&state, &id).await?;

    state.store.delete_by_id(&id).await?;
    tracing::info!(%id, "bookmark deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
