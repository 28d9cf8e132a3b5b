use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;

use crate::services::{BlogService, QueryError};
use crate::web::error::WebError;
use crate::web::templates::Renderer;

/// Everything a handler needs, built once in `main`.
pub struct AppState {
    service: BlogService,
    renderer: Renderer,
    /// The fixed 404 page, rendered ahead of time.
    not_found_page: String,
}

impl AppState {
    pub fn new(service: BlogService, renderer: Renderer) -> Result<Self> {
        let not_found_page = renderer.render("error.html", &tera::Context::new())?;
        Ok(Self {
            service,
            renderer,
            not_found_page,
        })
    }

    fn page(&self, template: &str, context: &tera::Context) -> Result<Html<String>, WebError> {
        self.renderer
            .render(template, context)
            .map(Html)
            .map_err(WebError::Internal)
    }

    fn not_found(&self) -> WebError {
        WebError::NotFound(self.not_found_page.clone())
    }

    fn failure(&self, err: QueryError) -> WebError {
        match err {
            QueryError::NotFound => self.not_found(),
            QueryError::Internal(err) => WebError::Internal(err),
        }
    }
}

/// `GET /`: two random featured posts plus the recent ones.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let view = state.service.home().map_err(|e| state.failure(e))?;

    let mut context = tera::Context::new();
    context.insert("featured", &view.featured);
    context.insert("blogs", &view.recent);
    state.page("index.html", &context)
}

/// `GET /about`
pub async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    state.page("about.html", &tera::Context::new())
}

/// `GET /blogs/{page}`: all posts, ten per page.
pub async fn all_posts(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Html<String>, WebError> {
    let page = parse_page(&state, &page)?;
    let view = state
        .service
        .index_page(page)
        .map_err(|e| state.failure(e))?;

    let mut context = tera::Context::new();
    context.insert("blogs", &view.posts);
    context.insert("categories", &view.categories);
    context.insert("tags", &view.tags);
    state.page("blog.html", &context)
}

/// `GET /category/{name}/{page}`: posts in one category, four per page.
pub async fn posts_in_category(
    State(state): State<Arc<AppState>>,
    Path((name, page)): Path<(String, String)>,
) -> Result<Html<String>, WebError> {
    let page = parse_page(&state, &page)?;
    let view = state
        .service
        .category_page(&name, page)
        .map_err(|e| state.failure(e))?;

    let mut context = tera::Context::new();
    context.insert("category", &view.category);
    context.insert("blogs", &view.posts);
    state.page("category.html", &context)
}

/// `GET /blog/{id}`: a single post.
pub async fn single_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id: i64 = id.parse().map_err(|_| state.not_found())?;
    let view = state.service.post(id).map_err(|e| state.failure(e))?;

    let mut context = tera::Context::new();
    context.insert("blog", &view.post);
    context.insert("total_entries", &view.total_posts);
    state.page("single-post.html", &context)
}

/// `GET /tags/{name}/{page}`: posts carrying one tag, eight per page.
/// An unknown tag renders an empty result list, not a 404.
pub async fn posts_with_tag(
    State(state): State<Arc<AppState>>,
    Path((name, page)): Path<(String, String)>,
) -> Result<Html<String>, WebError> {
    let page = parse_page(&state, &page)?;
    let view = state
        .service
        .tag_page(&name, page)
        .map_err(|e| state.failure(e))?;

    let mut context = tera::Context::new();
    context.insert("tag", &name);
    context.insert("blogs", &view.posts);
    state.page("search.html", &context)
}

/// Any unmatched route gets the fixed error page.
pub async fn fallback(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(state.not_found_page.clone()))
}

/// Page segments are parsed by hand so `/blogs/abc` is a plain 404,
/// the same as any other unresolved route. Zero is never a valid page.
fn parse_page(state: &AppState, raw: &str) -> Result<usize, WebError> {
    match raw.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(state.not_found()),
    }
}
