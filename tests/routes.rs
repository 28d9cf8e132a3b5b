use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use quill::web::{self, AppState, Renderer};
use quill::{
    BlogService, CategoryRepository, Database, NewPost, PostId, PostRepository, TagRepository,
};

fn post(i: i64) -> NewPost {
    NewPost {
        title: format!("Road to post {i}"),
        subtitle: None,
        category_id: None,
        date_posted: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
        read_time: 5,
        thumbnail: format!("img/{i}.png"),
        body: format!("Body {i}"),
    }
}

/// Builds a router over a scratch database seeded with three posts,
/// one category and one tag.
fn app() -> (TempDir, Router, Vec<PostId>) {
    let dir = TempDir::new().unwrap();
    let db = Database::new(&dir.path().join("blog.db")).unwrap();

    let posts = db.post_repository();
    let categories = db.category_repository();
    let tags = db.tag_repository();

    let systems = categories.create_category("Systems").unwrap();
    let rust = tags.create_tag("rust").unwrap();

    let mut ids = Vec::new();
    for i in 0..3 {
        let mut p = post(i);
        p.category_id = Some(systems);
        let id = posts.create_post(&p).unwrap();
        posts.tag_post(id, rust).unwrap();
        ids.push(id);
    }

    let service = BlogService::new(posts, categories, tags);
    let renderer = Renderer::new("templates/**/*.html").unwrap();
    let state = Arc::new(AppState::new(service, renderer).unwrap());
    let router = web::router(state, "static".into());

    (dir, router, ids)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn home_and_about_respond() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured"));

    let (status, _) = get(&router, "/about").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn blog_index_lists_posts_and_sidebar() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/blogs/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Road to post 2"));
    assert!(body.contains("Systems"));
    assert!(body.contains("rust"));
}

#[tokio::test]
async fn blog_index_past_the_end_is_404() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/blogs/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

#[tokio::test]
async fn non_integer_page_is_404_not_a_fault() {
    let (_dir, router, _) = app();

    let (status, _) = get(&router, "/blogs/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&router, "/blogs/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn single_post_found_and_missing() {
    let (_dir, router, ids) = app();

    let (status, body) = get(&router, &format!("/blog/{}", ids[0])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Road to post 0"));
    assert!(body.contains("Body 0"));

    let (status, _) = get(&router, "/blog/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&router, "/blog/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_route_filters_and_404s_unknown_names() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/category/Systems/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Road to post 0"));

    let (status, _) = get(&router, "/category/Gardening/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_tag_is_an_empty_200_page() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/tags/python/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No posts carry this tag"));

    let (status, body) = get(&router, "/tags/rust/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Road to post 1"));
}

#[tokio::test]
async fn unmatched_routes_get_the_error_page() {
    let (_dir, router, _) = app();

    let (status, body) = get(&router, "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}
