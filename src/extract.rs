//! One extractor per bill field.
//!
//! Each function takes an already fetched [`Page`] and does nothing but
//! scan it, so every rule about congress.gov markup lives here and can be
//! exercised against a saved page.

use crate::error::Result;
use crate::page::{element_markup, element_text, Link, Page};
use crate::types::{BillId, Listing, VoteFormat};
use crate::vocabulary::is_policy_area;
use regex::Regex;
use url::Url;

const NOT_FOUND_HEADING: &str = "page not found";
const DETAIL_HEADING_MARKER: &str = "legDetail";
const SUMMARY_MARKER: &str = "summary";
const FULL_TEXT_LINK_TEXT: &str = "XML/HTML (new window)";
const FULL_TEXT_ELEMENTS: &str = "section, subsection, paragraph, subparagraph";
const TEXT_INDENT_ARTIFACT: &str = "\n\t\t\t";
const MEMBER_HREF: &str = "/member/";
const MEMBER_TITLES: [&str; 2] = ["Sen.", "Rep."];
const HOUSE_VOTE_MARKER: &str = "Roll no";
const SENATE_VOTE_MARKER: &str = "Record Vote";

/// True when any top-level heading announces a missing page
pub fn is_not_found(page: &Page) -> bool {
    page.texts("h1")
        .iter()
        .any(|heading| heading.to_lowercase().contains(NOT_FOUND_HEADING))
}

/// Bill title from the detail heading, e.g. `H.R.183 - Veterans Dog Training
/// Therapy Act113th Congress (2013-2014)` yields `Veterans Dog Training
/// Therapy Act`.
pub fn title(page: &Page, bill: &BillId) -> Result<Option<String>> {
    let congress_re = Regex::new(&format!(
        r"{}\w+ Congress",
        regex::escape(&bill.congress.to_string())
    ))?;
    let label = format!("{} - ", bill.label());

    let headings = page.elements("h1");
    let heading = headings
        .iter()
        .find(|h| element_markup(h).contains(DETAIL_HEADING_MARKER))
        .or_else(|| {
            headings.iter().find(|h| {
                let text = element_text(h);
                text.contains(&label) && congress_re.is_match(&text)
            })
        });

    let Some(heading) = heading else {
        tracing::debug!(url = page.url(), "no bill detail heading");
        return Ok(None);
    };

    let text = element_text(heading);
    let Some(congress) = congress_re.find(&text) else {
        tracing::debug!(url = page.url(), "detail heading has no congress label");
        return Ok(None);
    };

    let Some(start) = text.find(&label).map(|pos| pos + label.len()) else {
        tracing::debug!(url = page.url(), label = %bill.label(), "detail heading has no bill label");
        return Ok(None);
    };

    if start > congress.start() {
        return Ok(None);
    }

    Ok(Some(text[start..congress.start()].trim().to_string()))
}

/// Paragraph following the first paragraph that mentions "summary"
pub fn summary(page: &Page) -> Option<String> {
    let paragraphs = page.texts("p");
    let marker = paragraphs
        .iter()
        .position(|p| p.contains(SUMMARY_MARKER))?;

    match paragraphs.get(marker + 1) {
        Some(text) => Some(text.trim().to_string()),
        None => {
            tracing::debug!(url = page.url(), "summary marker is the last paragraph");
            None
        }
    }
}

/// Subject list items that are controlled-vocabulary policy areas
pub fn policy_areas(page: &Page) -> Listing {
    let items = page.texts("li");
    if items.is_empty() {
        return Listing::no_data();
    }

    let matches = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| is_policy_area(item))
        .map(str::to_string)
        .collect();

    Listing::from_matches(matches)
}

/// Absolute URL of the XML/HTML full-text rendition
pub fn full_text_link(page: &Page, base: &Url) -> Option<String> {
    let link = page
        .links()
        .into_iter()
        .find(|link| link.text == FULL_TEXT_LINK_TEXT)?;

    match base.join(&link.href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!(href = %link.href, error = %e, "unusable full-text link");
            None
        }
    }
}

/// Legislative text of a bill rendition: every section, subsection,
/// paragraph and subparagraph in document order, abutted.
pub fn full_text(page: &Page) -> String {
    page.texts(FULL_TEXT_ELEMENTS)
        .iter()
        .map(|fragment| fragment.replace(TEXT_INDENT_ARTIFACT, ""))
        .collect()
}

/// Whether a link points at a member of Congress
pub fn is_member_link(link: &Link) -> bool {
    link.href.contains(MEMBER_HREF) || MEMBER_TITLES.iter().any(|t| link.text.contains(t))
}

/// First member link on the page
pub fn sponsor(page: &Page) -> Option<String> {
    page.links()
        .into_iter()
        .find(is_member_link)
        .map(|link| link.text)
}

/// Member links on the cosponsors page, minus the sponsor. Repeats are kept.
pub fn cosponsors(page: &Page, sponsor: Option<&str>) -> Listing {
    let members: Vec<String> = page
        .links()
        .into_iter()
        .filter(is_member_link)
        .map(|link| link.text)
        .collect();

    if members.is_empty() {
        return Listing::no_data();
    }

    let cosponsors = members
        .into_iter()
        .filter(|name| Some(name.as_str()) != sponsor)
        .collect();

    Listing::from_matches(cosponsors)
}

/// Which chamber's recorded-vote format the actions page links to
pub fn vote_format(page: &Page) -> Option<VoteFormat> {
    page.links().iter().find_map(|link| {
        if link.text.contains(HOUSE_VOTE_MARKER) {
            Some(VoteFormat::HouseRollCall)
        } else if link.text.contains(SENATE_VOTE_MARKER) {
            Some(VoteFormat::SenateRecordVote)
        } else {
            None
        }
    })
}
