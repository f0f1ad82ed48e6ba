//! Static page content for the GUS project website.
//!
//! Every page is defined at compile time in [`data`]; the types here only
//! describe its shape. Rendering concerns (escaping, markup) live in the
//! presentation layer.

mod data;

use std::collections::HashSet;
use std::fmt;

use super::error::DomainError;

pub use data::{ABOUT, PAGES};

/// A hyperlink, or a bare label when `href` is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

impl Link {
    pub const fn to(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href: Some(href),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Link(Link),
}

/// How a list is laid out.
///
/// `Emphasized` lists bold the label and join the parts with ` -- `.
/// `Plain` lists use the same separator without the bold label.
/// `Roster` lists keep the label plain and follow it with `: `.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    Emphasized,
    Plain,
    Roster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub label: &'static str,
    pub href: Option<&'static str>,
    /// Links rendered right after the label, separated by commas.
    pub companions: &'static [Link],
    /// Overrides the separator the list style puts before the detail text.
    pub separator: Option<&'static str>,
    pub description: &'static str,
    pub affiliation: Option<&'static str>,
}

impl ListEntry {
    pub fn primary_link(&self) -> Link {
        Link {
            label: self.label,
            href: self.href,
        }
    }

    /// All hyperlinks carried by the entry, primary first.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        std::iter::once(self.primary_link())
            .chain(self.companions.iter().copied())
            .filter(|link| link.href.is_some())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    List {
        style: ListStyle,
        entries: &'static [ListEntry],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

impl Section {
    pub fn entries(&self) -> impl Iterator<Item = &'static ListEntry> {
        const NONE: &[ListEntry] = &[];
        self.blocks.iter().flat_map(|block| match block {
            Block::List { entries, .. } => *entries,
            Block::Paragraph(_) => NONE,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub sections: &'static [Section],
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Every hyperlink on the page in document order.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for section in self.sections {
            for block in section.blocks {
                match block {
                    Block::Paragraph(inlines) => {
                        links.extend(inlines.iter().filter_map(|inline| match inline {
                            Inline::Link(link) if link.href.is_some() => Some(*link),
                            _ => None,
                        }));
                    }
                    Block::List { entries, .. } => {
                        for entry in entries.iter() {
                            links.extend(entry.links());
                        }
                    }
                }
            }
        }
        links
    }
}

/// A validated page address: lowercase ASCII letters, digits and `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(DomainError::validation("slug must not be empty"));
        }
        if let Some(ch) = raw
            .chars()
            .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-'))
        {
            return Err(DomainError::validation(format!(
                "slug `{raw}` contains invalid character `{ch}`"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn all() -> &'static [Page] {
    &PAGES
}

pub fn find(slug: &Slug) -> Option<&'static Page> {
    all().iter().find(|page| page.slug == slug.as_str())
}

/// Check that every page in `pages` has a well-formed, unique slug.
pub fn validate_catalogue(pages: &[Page]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for page in pages {
        Slug::new(page.slug).map_err(|err| {
            DomainError::invariant(format!("page `{}` has a bad slug: {err}", page.title))
        })?;
        if !seen.insert(page.slug) {
            return Err(DomainError::invariant(format!(
                "duplicate page slug `{}`",
                page.slug
            )));
        }
    }
    Ok(())
}
