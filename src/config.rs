// src/config.rs
// =============================================================================
// Runtime settings shared by the crawler and the image fetcher.
//
// Nothing in the crawl or fetch code reads global state: the output folder,
// timeouts and limits all travel inside a Settings value. Tests use this to
// point downloads at a temporary directory.
// =============================================================================

use crate::crawl::HostMatch;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_PAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Where images are written (created on first save)
    pub output_dir: PathBuf,
    /// Per-request timeout for pages and images
    pub timeout: Duration,
    /// How many pages to visit per seed URL
    pub max_pages: usize,
    /// Image downloads in flight per page (1 = strictly one at a time)
    pub concurrency: usize,
    /// How discovered links are matched against the seed's host
    pub host_match: HostMatch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
            concurrency: 1,
            host_match: HostMatch::Substring,
        }
    }
}

impl Settings {
    /// Builds the HTTP client used for every request of a run.
    ///
    /// Only the timeout is customized; headers, cookies and redirects stay at
    /// reqwest's defaults.
    pub fn http_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }
}
