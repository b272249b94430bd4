use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetch;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Help page listing every member alongside their Bioguide identifier
pub const MEMBER_IDS_PATH: &str = "/help/field-values/member-bioguide-ids";

/// Bioguide identifier -> member display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemberDirectory {
    members: BTreeMap<String, String>,
}

impl MemberDirectory {
    /// Scrape the Bioguide ID help page into a directory
    pub fn load<F: Fetch>(fetcher: &F, config: &Config) -> Result<Self> {
        let url = format!("{}{}", config.origin(), MEMBER_IDS_PATH);
        let page = fetcher.fetch(&url)?;
        let directory = Self::from_text(&page.flattened_text(" "))?;

        tracing::info!(members = directory.len(), "loaded member directory");
        Ok(directory)
    }

    /// Build a directory from the page's flattened text
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self {
            members: parse_member_ids(text)?,
        })
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.members.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.members.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.members
    }
}

/// Pair every Bioguide identifier with the name text that precedes it.
///
/// Only the first line holding an identifier is read, from the start of that
/// line through its last identifier. Earlier lines (page header, headings)
/// and later lines are ignored. Whitespace inside each name is collapsed to
/// single spaces.
pub fn parse_member_ids(text: &str) -> Result<BTreeMap<String, String>> {
    // `.` does not match '\n', so the greedy match stops at the line end
    let listing_re = Regex::new(r".*[A-Z][0-9]{6}")?;
    let id_re = Regex::new(r"[A-Z][0-9]{6}")?;

    let mut members = BTreeMap::new();
    let Some(listing) = listing_re.find(text) else {
        return Ok(members);
    };
    let listing = listing.as_str();

    let mut name_start = 0;
    for id in id_re.find_iter(listing) {
        let name = listing[name_start..id.start()]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        members.insert(id.as_str().to_string(), name);
        name_start = id.end();
    }

    Ok(members)
}
