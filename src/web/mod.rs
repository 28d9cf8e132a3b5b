pub mod error;
pub mod handlers;
pub mod templates;

use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use error::WebError;
pub use handlers::AppState;
pub use templates::Renderer;

/// Builds the full route table over the shared state.
pub fn router(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/blogs/:page", get(handlers::all_posts))
        .route("/category/:name/:page", get(handlers::posts_in_category))
        .route("/blog/:id", get(handlers::single_post))
        .route("/tags/:name/:page", get(handlers::posts_with_tag))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::fallback)
        .with_state(state)
}
