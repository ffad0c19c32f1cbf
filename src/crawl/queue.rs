// src/crawl/queue.rs
// =============================================================================
// This module implements site crawling with a breadth-first approach.
//
// How it works:
// 1. Start with the seed URL in a queue
// 2. Take the front URL; skip it if we've already been there
// 3. Fetch the page HTML
// 4. Download every image on the page (via the ImageFetcher)
// 5. Add same-site links to the back of the queue
// 6. Repeat until the queue is empty or we've visited max_pages pages
//
// A page that fails to load still counts as visited. Nothing that goes
// wrong with a single page or image stops the crawl.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - buffer_unordered: Bounded concurrency for the image downloads
// =============================================================================

use super::html::extract_page_links;
use super::scope::DomainScope;
use super::CrawlError;
use crate::config::Settings;
use crate::fetch::{
    content_type_of, is_image_content_type, log_outcome, FetchError, FetchOutcome, ImageFetcher,
    SkipReason,
};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::{info, warn};
use url::Url;

/// What one crawl did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    pub seed: String,
    pub pages_visited: usize,
    /// Distinct image URLs discovered, whether or not they were saved
    pub images_found: usize,
    pub images_saved: usize,
    pub duplicates_skipped: usize,
    pub non_images_skipped: usize,
    pub fetch_failures: usize,
    /// Visited page URLs in visit order
    pub pages: Vec<String>,
}

impl CrawlSummary {
    fn new(seed: &Url) -> Self {
        Self {
            seed: seed.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved(_) => self.images_saved += 1,
            FetchOutcome::Skipped(SkipReason::Duplicate { .. }) => self.duplicates_skipped += 1,
            FetchOutcome::Skipped(SkipReason::NotAnImage { .. }) => self.non_images_skipped += 1,
            FetchOutcome::Failed(_) => self.fetch_failures += 1,
        }
    }
}

// What a visited URL turned out to be
enum Page {
    Html(String),
    Image {
        content_type: Option<String>,
        body: Vec<u8>,
    },
}

pub struct Crawler {
    client: Client,
    fetcher: ImageFetcher,
    settings: Settings,
}

impl Crawler {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let client = settings.http_client()?;
        Ok(Self::with_client(client, settings))
    }

    /// Uses an existing client; the page requests and the image downloads
    /// share its connection pool.
    pub fn with_client(client: Client, settings: Settings) -> Self {
        let fetcher = ImageFetcher::new(client.clone(), settings.output_dir.clone());
        Self {
            client,
            fetcher,
            settings,
        }
    }

    pub fn fetcher(&self) -> &ImageFetcher {
        &self.fetcher
    }

    /// Crawls breadth-first from `start_url`, visiting at most `max_pages`
    /// distinct pages and downloading every image found on them.
    ///
    /// Only an unusable seed URL is an error; failures on individual pages
    /// and images are logged and counted in the summary.
    pub async fn crawl(
        &self,
        start_url: &str,
        max_pages: usize,
    ) -> Result<CrawlSummary, CrawlError> {
        let start = Url::parse(start_url).map_err(|source| CrawlError::InvalidSeed {
            url: start_url.to_string(),
            source,
        })?;
        if !matches!(start.scheme(), "http" | "https") {
            return Err(CrawlError::UnsupportedScheme(start.to_string()));
        }
        let scope = DomainScope::for_seed(&start, self.settings.host_match)?;

        info!(seed = %start, host = scope.host(), max_pages, "starting crawl");

        let mut summary = CrawlSummary::new(&start);
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while visited.len() < max_pages {
            let Some(url) = queue.pop_front() else {
                break;
            };

            // Duplicates may sit in the queue; they are dropped here
            if !visited.insert(url.as_str().to_string()) {
                continue;
            }
            summary.pages_visited += 1;
            summary.pages.push(url.to_string());

            info!(page = %url, visited = visited.len(), max_pages, "crawling");

            let page = match self.fetch_page(&url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(page = %url, error = %e, "failed to fetch page");
                    continue;
                }
            };

            match page {
                Page::Image { content_type, body } => {
                    summary.images_found += 1;
                    let outcome = match self
                        .fetcher
                        .store(&url, content_type.as_deref(), &body)
                        .await
                    {
                        Ok(outcome) => outcome,
                        Err(e) => FetchOutcome::Failed(e),
                    };
                    log_outcome(&url, &outcome);
                    summary.record(&outcome);
                }
                Page::Html(html) => {
                    let found = extract_page_links(&html, &url);
                    summary.images_found += found.images.len();

                    for outcome in self.download_images(found.images).await {
                        summary.record(&outcome);
                    }

                    for link in found.links {
                        if scope.allows(&link) && !visited.contains(link.as_str()) {
                            queue.push_back(link);
                        }
                    }
                }
            }
        }

        info!(
            seed = %summary.seed,
            pages = summary.pages_visited,
            images = summary.images_found,
            saved = summary.images_saved,
            "crawl finished"
        );

        Ok(summary)
    }

    // Downloads all images of one page. Every download finishes before the
    // crawl moves on, so the page order never depends on image timing.
    async fn download_images(&self, images: Vec<Url>) -> Vec<FetchOutcome> {
        let fetcher = &self.fetcher;
        stream::iter(images)
            .map(|image| async move { fetcher.fetch_url(&image).await })
            .buffer_unordered(self.settings.concurrency.max(1))
            .collect()
            .await
    }

    async fn fetch_page(&self, url: &Url) -> Result<Page, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let content_type = content_type_of(response.headers());
        if is_image_content_type(content_type.as_deref()) {
            let body = response.bytes().await?.to_vec();
            return Ok(Page::Image { content_type, body });
        }

        Ok(Page::Html(response.text().await?))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check `visited` when popping instead of when pushing?
//    - The same link can be found on several pages before we visit it
//    - Pushing it twice is harmless; `visited.insert` returns false the
//      second time it is popped, and we just `continue`
//
// 2. What is `let ... else`?
//    - `let Some(url) = queue.pop_front() else { break };`
//    - Binds `url` if the pattern matches, otherwise runs the else block,
//      which must leave the loop or function
//
// 3. Why `self.settings.concurrency.max(1)`?
//    - buffer_unordered(0) means "no limit", which is the opposite of what
//      a concurrency of 0 should mean
// -----------------------------------------------------------------------------
