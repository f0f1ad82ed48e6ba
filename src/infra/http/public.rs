use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::application::{error::ErrorReport, page::PageService, site::output_file_name};

use super::middleware::{log_responses, set_request_context};

const HOME_SLUG: &str = "about";

#[derive(Clone)]
pub struct HttpState {
    pub pages: Arc<PageService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{page}", get(page))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index() -> Redirect {
    Redirect::to(&format!("/{}", output_file_name(HOME_SLUG)))
}

async fn page(State(state): State<HttpState>, Path(page): Path<String>, uri: Uri) -> Response {
    let slug = page.strip_suffix(".html").unwrap_or(&page);

    match state.pages.render(slug) {
        Ok(Some(document)) => Html(document).into_response(),
        Ok(None) => not_found_response(&state.pages, uri.path()),
        Err(err) => err.into_response(),
    }
}

async fn fallback(State(state): State<HttpState>, uri: Uri) -> Response {
    not_found_response(&state.pages, uri.path())
}

fn not_found_response(pages: &PageService, path: &str) -> Response {
    let mut response = match pages.render_not_found(path) {
        Ok(document) => (StatusCode::NOT_FOUND, Html(document)).into_response(),
        Err(err) => return err.into_response(),
    };
    ErrorReport::from_message(
        "infra::http::public::not_found_response",
        StatusCode::NOT_FOUND,
        format!("no page at `{path}`"),
    )
    .attach(&mut response);
    response
}
