// src/crawl/scope.rs
// =============================================================================
// Decides which discovered links belong to the site being crawled.
//
// Two modes:
// - Substring (default): the link's full URL text contains the seed's host.
//   This is loose: "http://example.com.evil.net/" passes for a seed on
//   example.com, and so does any URL that merely mentions the host in its
//   path or query.
// - Exact: the link's host must equal the seed's host.
// =============================================================================

use super::CrawlError;
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostMatch {
    #[default]
    Substring,
    Exact,
}

#[derive(Debug, Clone)]
pub struct DomainScope {
    host: String,
    mode: HostMatch,
}

impl DomainScope {
    pub fn for_seed(seed: &Url, mode: HostMatch) -> Result<Self, CrawlError> {
        let host = seed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| CrawlError::MissingHost(seed.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            mode,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn allows(&self, url: &Url) -> bool {
        match self.mode {
            HostMatch::Substring => url.as_str().contains(&self.host),
            HostMatch::Exact => url.host_str() == Some(self.host.as_str()),
        }
    }
}
