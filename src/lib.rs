//! Pull legislative metadata for a bill from congress.gov.
//!
//! A [`BillSnap`] validates a (chamber, bill number, congress) triple, checks
//! the bill exists, and then exposes one accessor per field: title, summary,
//! policy areas, sponsor, cosponsors, full text and its source link. Each
//! accessor performs its own blocking request. [`MemberDirectory`] maps
//! Bioguide identifiers to member names.

pub mod bill;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod members;
pub mod page;
pub mod types;
pub mod vocabulary;

pub use bill::BillSnap;
pub use config::{Config, ConfigBuilder, DEFAULT_BASE_URL, DEFAULT_CONGRESS};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher, StaticFetcher};
pub use members::MemberDirectory;
pub use page::{Link, Page};
pub use types::{BillId, BillRecord, Chamber, ListStatus, Listing, VoteFormat};
pub use vocabulary::POLICY_AREAS;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::bill::BillSnap;
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::fetch::{Fetch, HttpFetcher, StaticFetcher};
    pub use crate::members::MemberDirectory;
    pub use crate::types::{BillId, BillRecord, Chamber, ListStatus, Listing, VoteFormat};
}
