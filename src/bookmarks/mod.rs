//! Bookmarks Module
//!
//! A self-contained module for saving and rating links to revisit later.
//! Bodies are validated on the way in, text fields are HTML-escaped on the
//! way out, and records live behind a swappable store backend.
//!
//! # Features
//!
//! - CRUD operations for bookmarks over JSON
//! - Ready-to-use HTTP handlers and routes
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use bokmerke::bookmarks;
//!
//! // Get the migrations to run
//! for (name, sql) in bookmarks::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .nest("/bookmarks", bookmarks::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;
mod validate;

// Re-export the routes function
pub use routes::routes;

// ============================================================================
// Migrations
// ============================================================================

/// Returns the migrations for the bookmarks module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
