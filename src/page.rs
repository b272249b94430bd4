//! Narrow DOM view over a fetched page.
//!
//! Extractors only ever need to enumerate elements by tag, read their
//! flattened text, read an attribute, or walk `<a href>` links. Keeping that
//! surface small means a congress.gov markup change touches one extractor,
//! not the fetch layer.

use scraper::{ElementRef, Html, Selector};

/// A hyperlink as it appears on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Raw `href` attribute, unresolved
    pub href: String,
    /// Visible text, trimmed
    pub text: String,
}

/// A parsed HTML document together with the URL it was fetched from
pub struct Page {
    url: String,
    html: Html,
}

impl Page {
    pub fn parse(url: impl Into<String>, body: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(body),
        }
    }

    /// URL the page was fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Elements matching a CSS selector, in document order.
    /// An unparseable selector matches nothing.
    pub fn elements(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Flattened text of every element matching `css`
    pub fn texts(&self, css: &str) -> Vec<String> {
        self.elements(css).iter().map(element_text).collect()
    }

    /// Every `<a>` carrying an `href`, in document order
    pub fn links(&self) -> Vec<Link> {
        self.elements("a[href]")
            .iter()
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                Some(Link {
                    href: href.to_string(),
                    text: element_text(el).trim().to_string(),
                })
            })
            .collect()
    }

    /// All text nodes of the document joined by `separator`
    pub fn flattened_text(&self, separator: &str) -> String {
        self.html
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Concatenated text of an element and its descendants, untrimmed
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// Outer markup of an element, attributes included
pub fn element_markup(el: &ElementRef<'_>) -> String {
    el.html()
}
