// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a site for images.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-site restriction (doesn't wander off to external sites)
// - Page cap per seed
// - Every image found on a visited page goes through the ImageFetcher
//
// Submodules:
// - queue: The crawl loop (Crawler, CrawlSummary)
// - html: Finding <img> and <a> targets in a page
// - scope: Deciding which links count as "same site"
// =============================================================================

mod html;
mod queue;
mod scope;

use thiserror::Error;

pub use html::{extract_page_links, PageLinks};
pub use queue::{CrawlSummary, Crawler};
pub use scope::{DomainScope, HostMatch};

/// Reasons a seed URL cannot be crawled at all
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("only http and https URLs can be crawled: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}
