use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::LOCATION},
};
use gusweb::application::{chrome::ChromeService, page::PageService};
use gusweb::config::SiteSettings;
use gusweb::infra::http::{HttpState, REQUEST_ID_HEADER, build_router};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn page_service() -> PageService {
    PageService::new(ChromeService::new(SiteSettings::default())).expect("valid catalogue")
}

fn router() -> Router {
    build_router(HttpState {
        pages: Arc::new(page_service()),
    })
}

async fn get(path: &str) -> axum::response::Response {
    router()
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("router response")
}

async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.expect("collect body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn about_page_is_served_with_and_without_extension() {
    let expected = page_service()
        .render("about")
        .expect("render")
        .expect("about page");

    for path in ["/about", "/about.html"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        assert_eq!(body_to_string(response.into_body()).await, expected);
    }
}

#[tokio::test]
async fn root_redirects_to_about_page() {
    let response = get("/").await;
    assert!(response.status().is_redirection());
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/about.html")
    );
}

#[tokio::test]
async fn unknown_pages_render_framed_not_found() {
    for path in ["/download.html", "/Bad%20Slug", "/nested/path"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");

        let body = body_to_string(response.into_body()).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Page Not Found"));
        assert!(body.contains(r#"href="mailto:webmaster@gusdb.org""#));
    }
}
