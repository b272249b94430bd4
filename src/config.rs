use crate::error::{Error, Result};
use crate::types::MIN_CONGRESS;
use std::time::Duration;
use url::Url;

/// Site every lookup is made against unless overridden
pub const DEFAULT_BASE_URL: &str = "https://www.congress.gov";

/// Congressional session used when the caller does not name one
pub const DEFAULT_CONGRESS: u32 = 115;

/// Request timeout applied by the HTTP fetcher
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for bill lookups and the member directory
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
    pub default_congress: u32,
}

impl Config {
    /// Create a configuration pointed at `base_url` with default settings
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("billsnap/{}", env!("CARGO_PKG_VERSION")),
            default_congress: DEFAULT_CONGRESS,
        }
    }

    /// Site origin with any trailing slash removed, used as a URL template prefix.
    /// A validated base URL carries no path, so this is also the root every
    /// root-relative link on the site resolves against.
    pub fn origin(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Config(format!(
                    "Base URL must use http or https, got '{}'",
                    other
                )));
            }
        }

        if self.base_url.host_str().is_none() {
            return Err(Error::Config(format!(
                "Base URL has no host: {}",
                self.base_url
            )));
        }

        if self.base_url.path() != "/"
            || self.base_url.query().is_some()
            || self.base_url.fragment().is_some()
        {
            return Err(Error::Config(format!(
                "Base URL must be a bare origin such as https://www.congress.gov, got {}",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("Timeout must be greater than zero".to_string()));
        }

        if self.default_congress < MIN_CONGRESS {
            return Err(Error::Config(format!(
                "Default congress must be {} or later, got {}",
                MIN_CONGRESS, self.default_congress
            )));
        }

        Ok(())
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the site base URL
    pub fn base_url(mut self, url: Url) -> Self {
        self.config.base_url = url;
        self
    }

    /// Set the site base URL from a string
    pub fn base_url_str(mut self, url: &str) -> Result<Self> {
        self.config.base_url = Url::parse(url)?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the request timeout in whole seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header sent with every request
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the congress used when none is given
    pub fn default_congress(mut self, congress: u32) -> Self {
        self.config.default_congress = congress;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}
