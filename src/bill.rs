use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract;
use crate::fetch::{Fetch, HttpFetcher};
use crate::page::Page;
use crate::types::{BillId, BillRecord, Listing, VoteFormat};
use url::Url;

/// Lookup handle for a single bill on congress.gov.
///
/// Construction validates the bill and confirms it exists with one request.
/// Every accessor afterwards fetches its own page and throws it away; nothing
/// is cached between calls.
pub struct BillSnap<F = HttpFetcher> {
    id: BillId,
    url: String,
    base_url: Url,
    fetcher: F,
}

impl BillSnap<HttpFetcher> {
    /// Look up a bill on the live site with the default configuration.
    ///
    /// ```no_run
    /// let bill = billsnap::BillSnap::new("house", 183, 113)?;
    /// assert_eq!(bill.title()?.as_deref(), Some("Veterans Dog Training Therapy Act"));
    /// # Ok::<(), billsnap::Error>(())
    /// ```
    pub fn new(chamber: &str, number: u32, congress: u32) -> Result<Self> {
        Self::with_config(&Config::default(), chamber, number, congress)
    }

    /// Look up a bill on the live site using `config`. Input is validated
    /// before the HTTP client is built.
    pub fn with_config(config: &Config, chamber: &str, number: u32, congress: u32) -> Result<Self> {
        let id = BillId::new(chamber, number, congress)?;
        let fetcher = HttpFetcher::new(config)?;
        Self::from_id(fetcher, config, id)
    }
}

impl<F: Fetch> BillSnap<F> {
    /// Validate the bill, then confirm it exists through `fetcher`
    pub fn with_fetcher(
        fetcher: F,
        config: &Config,
        chamber: &str,
        number: u32,
        congress: u32,
    ) -> Result<Self> {
        let id = BillId::new(chamber, number, congress)?;
        Self::from_id(fetcher, config, id)
    }

    /// Confirm an already validated bill exists
    pub fn from_id(fetcher: F, config: &Config, id: BillId) -> Result<Self> {
        let bill = Self {
            url: id.url(config.origin()),
            id,
            base_url: config.base_url.clone(),
            fetcher,
        };

        if !bill.exists()? {
            return Err(Error::BillNotFound(bill.url));
        }

        tracing::debug!(bill = %bill.id, url = %bill.url, "bill found");
        Ok(bill)
    }

    pub fn id(&self) -> &BillId {
        &self.id
    }

    /// Canonical bill page every accessor derives its URL from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Canonical page, or one of its tabs (`/summary`, `/text`, ...)
    fn page(&self, tab: &str) -> Result<Page> {
        self.fetcher.fetch(&format!("{}{}", self.url, tab))
    }

    /// Whether congress.gov serves a real page for this bill
    pub fn exists(&self) -> Result<bool> {
        Ok(!extract::is_not_found(&self.page("")?))
    }

    pub fn title(&self) -> Result<Option<String>> {
        extract::title(&self.page("")?, &self.id)
    }

    pub fn summary(&self) -> Result<Option<String>> {
        Ok(extract::summary(&self.page("/summary")?))
    }

    pub fn policy_areas(&self) -> Result<Listing> {
        Ok(extract::policy_areas(&self.page("/subjects")?))
    }

    pub fn full_text_link(&self) -> Result<Option<String>> {
        Ok(extract::full_text_link(&self.page("/text")?, &self.base_url))
    }

    /// Bill text from the XML/HTML rendition. No second request is made when
    /// the bill has no such rendition.
    pub fn full_text(&self) -> Result<Option<String>> {
        match self.full_text_link()? {
            Some(link) => self.full_text_from(&link).map(Some),
            None => Ok(None),
        }
    }

    fn full_text_from(&self, link: &str) -> Result<String> {
        Ok(extract::full_text(&self.fetcher.fetch(link)?))
    }

    pub fn sponsor(&self) -> Result<Option<String>> {
        Ok(extract::sponsor(&self.page("")?))
    }

    /// Cosponsors in page order. Looks the sponsor up again so it can be
    /// left out, which costs a second request.
    pub fn cosponsors(&self) -> Result<Listing> {
        let sponsor = self.sponsor()?;
        self.cosponsors_excluding(sponsor.as_deref())
    }

    fn cosponsors_excluding(&self, sponsor: Option<&str>) -> Result<Listing> {
        Ok(extract::cosponsors(&self.page("/cosponsors")?, sponsor))
    }

    /// Recorded-vote format referenced from the actions tab. Vote tallies are
    /// not retrieved.
    pub fn roll_call(&self) -> Result<Option<VoteFormat>> {
        let format = extract::vote_format(&self.page("/actions")?);
        if let Some(format) = format {
            tracing::debug!(bill = %self.id, ?format, "recorded vote referenced");
        }
        Ok(format)
    }

    /// Run every accessor and gather the results. `with_full_text` adds the
    /// rendition fetch.
    pub fn record(&self, with_full_text: bool) -> Result<BillRecord> {
        let sponsor = self.sponsor()?;
        let cosponsors = self.cosponsors_excluding(sponsor.as_deref())?;
        let full_text_link = self.full_text_link()?;
        let full_text = match (&full_text_link, with_full_text) {
            (Some(link), true) => Some(self.full_text_from(link)?),
            _ => None,
        };

        Ok(BillRecord {
            url: self.url.clone(),
            chamber: self.id.chamber,
            number: self.id.number,
            congress: self.id.congress,
            title: self.title()?,
            summary: self.summary()?,
            policy_areas: self.policy_areas()?,
            sponsor,
            cosponsors,
            full_text_link,
            full_text,
            roll_call: self.roll_call()?,
        })
    }
}
