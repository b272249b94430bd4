use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest congressional session whose pages follow the layout we scrape
pub const MIN_CONGRESS: u32 = 93;

/// Chamber of Congress a bill originates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Segment used in congress.gov bill URLs (`house` / `senate`)
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }

    /// Prefix of the printed bill label, e.g. `H.R.` in `H.R.183`
    pub fn label_prefix(&self) -> &'static str {
        match self {
            Chamber::House => "H.R.",
            Chamber::Senate => "S.",
        }
    }
}

impl FromStr for Chamber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "house" => Ok(Chamber::House),
            "senate" => Ok(Chamber::Senate),
            _ => Err(Error::InvalidChamber(s.to_string())),
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_lowercase())
    }
}

/// Validated (chamber, bill number, congress) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId {
    pub chamber: Chamber,
    pub number: u32,
    pub congress: u32,
}

impl BillId {
    /// Validate in order: chamber, congress, bill number.
    pub fn new(chamber: &str, number: u32, congress: u32) -> Result<Self> {
        let chamber = chamber.parse::<Chamber>()?;

        if congress < MIN_CONGRESS {
            return Err(Error::UnsupportedSession(congress));
        }

        if number == 0 {
            return Err(Error::InvalidBillNumber);
        }

        Ok(Self {
            chamber,
            number,
            congress,
        })
    }

    /// Printed label such as `H.R.183` or `S.5`
    pub fn label(&self) -> String {
        format!("{}{}", self.chamber.label_prefix(), self.number)
    }

    /// Canonical bill page under `origin` (no trailing slash)
    pub fn url(&self, origin: &str) -> String {
        format!(
            "{}/bill/{}/{}-bill/{}",
            origin,
            self.congress,
            self.chamber.as_lowercase(),
            self.number
        )
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}th Congress)", self.label(), self.congress)
    }
}

/// Why a list-valued field came back the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// At least one item qualified
    Found,
    /// Candidates were on the page but none qualified
    NoMatches,
    /// The page carried no candidate elements at all
    NoData,
}

/// A list-valued field plus the reason it may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub status: ListStatus,
    pub items: Vec<String>,
}

impl Listing {
    /// `Found` for a non-empty list, `NoMatches` otherwise
    pub fn from_matches(items: Vec<String>) -> Self {
        if items.is_empty() {
            Self::no_matches()
        } else {
            Self {
                status: ListStatus::Found,
                items,
            }
        }
    }

    pub fn no_matches() -> Self {
        Self {
            status: ListStatus::NoMatches,
            items: Vec::new(),
        }
    }

    pub fn no_data() -> Self {
        Self {
            status: ListStatus::NoData,
            items: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == ListStatus::Found
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recorded-vote format referenced from a bill's actions page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteFormat {
    /// House electronic vote ("Roll no.")
    HouseRollCall,
    /// Senate recorded vote ("Record Vote Number")
    SenateRecordVote,
}

/// Everything we know how to pull for one bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    pub url: String,
    pub chamber: Chamber,
    pub number: u32,
    pub congress: u32,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub policy_areas: Listing,
    pub sponsor: Option<String>,
    pub cosponsors: Listing,
    pub full_text_link: Option<String>,
    /// Only populated when explicitly requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
    pub roll_call: Option<VoteFormat>,
}
