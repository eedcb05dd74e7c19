use axum::{Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::auth;
use crate::bookmarks;
use crate::handler::{self, AppState};

/// Assembles the application router. Bookmark routes sit behind the
/// bearer-token check; the healthcheck stays open for probes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handler::healthcheck))
        .nest(
            "/bookmarks",
            bookmarks::routes().layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_bearer_token,
            )),
        )
        .layer(cors)
        .with_state(state)
}
