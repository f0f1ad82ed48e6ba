use axum::http::StatusCode;
use tracing::debug;

use crate::application::chrome::ChromeService;
use crate::application::error::HttpError;
use crate::domain::error::DomainError;
use crate::domain::pages::{self, Slug};
use crate::presentation::views::{
    ErrorBodyTemplate, ErrorPageView, PageBodyTemplate, PageFrame, PageMetaView, PageView,
    render_template,
};

const SOURCE: &str = "application::page::PageService";

/// Renders catalogue pages into complete documents.
#[derive(Clone, Debug)]
pub struct PageService {
    chrome: ChromeService,
}

impl PageService {
    pub fn new(chrome: ChromeService) -> Result<Self, DomainError> {
        pages::validate_catalogue(pages::all())?;
        Ok(Self { chrome })
    }

    /// Slugs of every page in the catalogue, in catalogue order.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> {
        pages::all().iter().map(|page| page.slug)
    }

    /// Look up a page by slug; malformed and unknown slugs both yield `None`.
    pub fn page_view(&self, slug: &str) -> Option<PageView> {
        let slug = match Slug::new(slug) {
            Ok(slug) => slug,
            Err(err) => {
                debug!(slug, error = %err, "rejected page slug");
                return None;
            }
        };

        pages::find(&slug).map(PageView::from)
    }

    pub fn render_body(&self, view: &PageView) -> Result<String, HttpError> {
        render_template(
            &PageBodyTemplate { page: view.clone() },
            "application::page::PageService::render_body",
        )
        .map_err(HttpError::from)
    }

    /// Render the full document (header, body, footer) for `slug`.
    pub fn render(&self, slug: &str) -> Result<Option<String>, HttpError> {
        let Some(view) = self.page_view(slug) else {
            return Ok(None);
        };

        let frame = self.frame(PageMetaView {
            title: view.title.clone(),
            path: view.path(),
        });
        let body = self.render_body(&view)?;
        let document = frame.wrap(&body).map_err(HttpError::from)?;

        debug!(slug = %view.slug, bytes = document.len(), "rendered page");
        Ok(Some(document))
    }

    /// Render the "not found" document inside the shared frame.
    pub fn render_not_found(&self, path: &str) -> Result<String, HttpError> {
        let view = ErrorPageView::not_found();
        let frame = self.frame(PageMetaView {
            title: view.title.clone(),
            path: path.to_string(),
        });
        let body = render_template(
            &ErrorBodyTemplate { view },
            "application::page::PageService::render_not_found",
        )?;
        frame.wrap(&body).map_err(HttpError::from)
    }

    pub fn frame(&self, meta: PageMetaView) -> PageFrame {
        PageFrame::new(self.chrome.load(), meta)
    }

    /// Render `slug`, treating an unknown page as an error.
    pub fn render_required(&self, slug: &str) -> Result<String, HttpError> {
        self.render(slug)?.ok_or_else(|| {
            HttpError::new(
                SOURCE,
                StatusCode::NOT_FOUND,
                "Resource not found",
                format!("no page with slug `{slug}`"),
            )
        })
    }
}
