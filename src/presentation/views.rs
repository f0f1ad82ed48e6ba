use askama::{Error as AskamaError, Template};
use axum::http::StatusCode;
use thiserror::Error;

use crate::application::error::HttpError;
use crate::domain::pages::{Block, Inline, Link, ListEntry, ListStyle, Page, Section};

const ENTRY_SEPARATOR: &str = " -- ";
const ROSTER_SEPARATOR: &str = ": ";

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err))
}

#[derive(Clone, Debug)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
    pub is_current: bool,
}

#[derive(Clone, Debug)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone, Debug)]
pub struct FooterView {
    pub copy: String,
    pub contact_email: String,
}

impl FooterView {
    pub fn contact_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[derive(Clone, Debug)]
pub struct PageMetaView {
    pub title: String,
    pub path: String,
}

/// Site-wide data shared by every page's header and footer.
#[derive(Clone, Debug)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
}

#[derive(Template)]
#[template(path = "partials/header.html")]
pub struct HeaderTemplate {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub meta: PageMetaView,
}

#[derive(Template)]
#[template(path = "partials/footer.html")]
pub struct FooterTemplate {
    pub footer: FooterView,
}

/// The shared frame every page body is rendered into.
///
/// A document is always the header, then the body, then the footer, with
/// nothing in between.
pub struct PageFrame {
    header: HeaderTemplate,
    footer: FooterTemplate,
}

impl PageFrame {
    pub fn new(chrome: LayoutChrome, meta: PageMetaView) -> Self {
        let LayoutChrome {
            brand,
            mut navigation,
            footer,
        } = chrome;

        for entry in &mut navigation.entries {
            entry.is_current = entry.href == meta.path;
        }

        Self {
            header: HeaderTemplate {
                brand,
                navigation,
                meta,
            },
            footer: FooterTemplate { footer },
        }
    }

    pub fn header(&self) -> Result<String, TemplateRenderError> {
        render_template(&self.header, "presentation::views::PageFrame::header")
    }

    pub fn footer(&self) -> Result<String, TemplateRenderError> {
        render_template(&self.footer, "presentation::views::PageFrame::footer")
    }

    pub fn wrap(&self, body: &str) -> Result<String, TemplateRenderError> {
        let header = self.header()?;
        let footer = self.footer()?;

        let mut document = String::with_capacity(header.len() + body.len() + footer.len());
        document.push_str(&header);
        document.push_str(body);
        document.push_str(&footer);
        Ok(document)
    }
}

#[derive(Clone, Debug)]
pub struct InlineView {
    pub text: String,
    pub href: Option<String>,
}

impl From<Link> for InlineView {
    fn from(link: Link) -> Self {
        Self {
            text: link.label.to_string(),
            href: link.href.map(str::to_string),
        }
    }
}

impl From<&Inline> for InlineView {
    fn from(inline: &Inline) -> Self {
        match inline {
            Inline::Text(text) => Self {
                text: (*text).to_string(),
                href: None,
            },
            Inline::Link(link) => Self::from(*link),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ListItemView {
    pub label: InlineView,
    pub companions: Vec<InlineView>,
    pub separator: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug)]
pub struct ListView {
    pub emphasize: bool,
    pub items: Vec<ListItemView>,
}

#[derive(Clone, Debug)]
pub enum BlockView {
    Paragraph(Vec<InlineView>),
    List(ListView),
}

#[derive(Clone, Debug)]
pub struct SectionView {
    pub id: String,
    pub heading: String,
    pub blocks: Vec<BlockView>,
}

#[derive(Clone, Debug)]
pub struct PageView {
    pub slug: String,
    pub title: String,
    pub sections: Vec<SectionView>,
}

impl PageView {
    pub fn path(&self) -> String {
        format!("/{}.html", self.slug)
    }
}

impl From<&Page> for PageView {
    fn from(page: &Page) -> Self {
        Self {
            slug: page.slug.to_string(),
            title: page.title.to_string(),
            sections: page.sections.iter().map(SectionView::from).collect(),
        }
    }
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.to_string(),
            heading: section.heading.to_string(),
            blocks: section.blocks.iter().map(BlockView::from).collect(),
        }
    }
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        match block {
            Block::Paragraph(inlines) => {
                Self::Paragraph(inlines.iter().map(InlineView::from).collect())
            }
            Block::List { style, entries } => Self::List(ListView {
                emphasize: *style == ListStyle::Emphasized,
                items: entries
                    .iter()
                    .map(|entry| list_item_view(*style, entry))
                    .collect(),
            }),
        }
    }
}

fn list_item_view(style: ListStyle, entry: &ListEntry) -> ListItemView {
    let (separator, detail) = match style {
        ListStyle::Emphasized | ListStyle::Plain => {
            let parts: Vec<&str> = [Some(entry.description), entry.affiliation]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect();
            (ENTRY_SEPARATOR, parts.join(ENTRY_SEPARATOR))
        }
        ListStyle::Roster => (ROSTER_SEPARATOR, entry.description.to_string()),
    };

    ListItemView {
        label: InlineView::from(entry.primary_link()),
        companions: entry.companions.iter().copied().map(InlineView::from).collect(),
        separator: entry.separator.unwrap_or(separator),
        detail,
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageBodyTemplate {
    pub page: PageView,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub action: ErrorAction,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist.".to_string(),
            action: ErrorAction::about(),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn about() -> Self {
        Self {
            href: "/about.html".to_string(),
            label: "About GUS".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorBodyTemplate {
    pub view: ErrorPageView,
}
