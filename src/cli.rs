// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag is optional. Running `image-fetcher` with no arguments at all
// falls back to the interactive prompts in prompt.rs, so the tool can still
// be used by someone who just double-clicks it or types its name.
// =============================================================================

use clap::Parser;
use image_fetcher::config::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};
use image_fetcher::{HostMatch, Settings};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "image-fetcher",
    version = "0.1.0",
    about = "Collects images from web pages, crawling same-site links and skipping duplicates",
    long_about = "image-fetcher downloads every image on the pages you give it, follows links \
                  on the same site up to a page limit, and never saves the same file twice. \
                  Run it without URLs to be prompted for them."
)]
pub struct Cli {
    /// Page or image URLs to start from (comma-separated lists are fine)
    ///
    /// Example: image-fetcher https://example.com,https://example.org/photos
    pub urls: Vec<String>,

    /// Pages to visit per site (default: 5)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Folder the images are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Seconds to wait for each page or image
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Images downloaded at once from a single page
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Only follow links whose host is exactly the seed's host
    ///
    /// By default any link whose URL contains the seed's host is followed,
    /// which also lets in look-alike hosts such as example.com.evil.net
    #[arg(long)]
    pub strict_host: bool,

    /// Print crawl summaries as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show debug logging (every skipped non-image response, etc.)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings for this run. `max_pages` comes from the flag, or from the
    /// prompt when the user was asked for it.
    pub fn settings(&self, max_pages: usize) -> Settings {
        Settings {
            output_dir: self.output_dir.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_pages,
            concurrency: self.concurrency.max(1),
            host_match: if self.strict_host {
                HostMatch::Exact
            } else {
                HostMatch::Substring
            },
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `urls` a Vec<String> with no #[arg]?
//    - A Vec field without a flag becomes a positional argument that can
//      appear zero or more times
//
// 2. Why Option<usize> for max_pages?
//    - We need to tell "not given" apart from "given", so we know whether
//      to ask for it at the prompt
// -----------------------------------------------------------------------------
