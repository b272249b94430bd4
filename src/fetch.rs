use crate::config::Config;
use crate::error::{Error, Result};
use crate::page::Page;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fetch a URL and hand back the parsed document.
///
/// Transport failures and non-2xx responses are errors; callers propagate
/// them untouched.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Page>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Page> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher backed by reqwest
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        tracing::debug!(url, "fetching page");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        tracing::debug!(url, bytes = body.len(), "fetched page");

        Ok(Page::parse(url, &body))
    }
}

/// Serves canned pages by exact URL and remembers every URL requested.
/// Unknown URLs answer with a 404 status error.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page body for `url`
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }

    /// Every URL passed to `fetch`, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|log| log.len()).unwrap_or(0)
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(url.to_string());
        }

        match self.pages.get(url) {
            Some(body) => Ok(Page::parse(url, body)),
            None => Err(Error::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
