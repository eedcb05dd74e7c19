//! Turns untrusted request bodies into validated records.
//!
//! Rules run in a fixed order and the first failure wins, so a body with
//! several problems always reports the same one.

use crate::error::ValidationError;
use crate::model::{BookmarkDraft, BookmarkPatch, NewBookmark};
use serde_json::Value as JsonValue;

const RATING_MESSAGE: &str = "'rating' must be a number between 0 and 5";
const URL_MESSAGE: &str = "'url' must be a valid URL";

/// Checks a draft against the create rules and produces the record to
/// insert. An empty title or url counts as missing.
pub fn new_bookmark(draft: BookmarkDraft) -> Result<NewBookmark, ValidationError> {
    let title = draft
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ValidationError::required("title"))?;
    let url = draft
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ValidationError::required("url"))?;
    let rating = draft
        .rating
        .ok_or_else(|| ValidationError::required("rating"))?;
    let rating = parse_rating(&rating)?;

    if !is_web_url(&url) {
        return Err(ValidationError::new("url", URL_MESSAGE));
    }

    Ok(NewBookmark {
        title,
        url,
        description: draft.description,
        rating,
    })
}

/// Checks a draft against the update rules. Presence is structural: a
/// field counts as supplied when its key carried a value, so `rating: 0`
/// is a real update while `rating: null` is not.
pub fn bookmark_patch(draft: BookmarkDraft) -> Result<BookmarkPatch, ValidationError> {
    if draft.title.is_none()
        && draft.url.is_none()
        && draft.description.is_none()
        && draft.rating.is_none()
    {
        return Err(ValidationError::new(
            "body",
            "body must contain title, url, or rating",
        ));
    }

    let rating = draft.rating.as_ref().map(parse_rating).transpose()?;

    if let Some(url) = &draft.url {
        if !is_web_url(url) {
            return Err(ValidationError::new("url", URL_MESSAGE));
        }
    }

    Ok(BookmarkPatch {
        title: draft.title,
        url: draft.url,
        description: draft.description,
        rating,
    })
}

// `as_i64` is the integer gate: floats and strings fall through to the
// error arm along with out-of-range values.
fn parse_rating(value: &JsonValue) -> Result<i32, ValidationError> {
    match value.as_i64() {
        Some(n) if (0..=5).contains(&n) => Ok(n as i32),
        _ => Err(ValidationError::new("rating", RATING_MESSAGE)),
    }
}

/// A bookmarkable URL: an http or https scheme, a non-empty host, no
/// whitespace anywhere.
fn is_web_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty()
}
