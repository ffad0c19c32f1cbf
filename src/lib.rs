// src/lib.rs
// =============================================================================
// Library half of image-fetcher. The binary (src/main.rs) handles prompts,
// flags and printing; everything that touches the network or the output
// folder lives here so it can be tested without a terminal.
//
// Modules:
// - config: Settings shared by the crawler and fetcher
// - fetch: Download one image, skip it if the same bytes are already saved
// - crawl: Breadth-first crawl of one site, feeding images to fetch
// =============================================================================

pub mod config;
pub mod crawl;
pub mod fetch;

pub use config::Settings;
pub use crawl::{CrawlError, CrawlSummary, Crawler, HostMatch};
pub use fetch::{FetchError, FetchOutcome, ImageFetcher, SavedImage, SkipReason};
