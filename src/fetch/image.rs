// src/fetch/image.rs
// =============================================================================
// Downloads a single image and saves it to the output directory.
//
// Steps for every URL:
// 1. GET the URL (with the client's timeout)
// 2. Fail on non-2xx status
// 3. Skip anything whose Content-Type does not mention "image"
// 4. Work out the file name (see filename.rs)
// 5. If a file with that name already holds the exact same bytes, skip it
// 6. Otherwise write the bytes (replacing a different file of the same name)
//
// Every call ends in exactly one FetchOutcome. Errors come back as values;
// a single bad image never stops the run.
// =============================================================================

use super::error::FetchError;
use super::filename::derive_filename;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

/// A file that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub bytes: usize,
    /// True when a file with the same name but different content was overwritten
    pub replaced: bool,
}

/// Why nothing was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Content-Type missing or not an image
    NotAnImage { content_type: Option<String> },
    /// The file on disk already has these exact bytes
    Duplicate { path: PathBuf },
}

/// Result of one fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    Saved(SavedImage),
    Skipped(SkipReason),
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved(_))
    }
}

/// Downloads images into one directory
pub struct ImageFetcher {
    client: Client,
    output_dir: PathBuf,
    // Held across the "compare with disk, then write" step so two
    // concurrent downloads that map to the same file name cannot interleave
    write_lock: Mutex<()>,
}

impl ImageFetcher {
    pub fn new(client: Client, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches `url` and saves it if it is a new image.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        match parse_http_url(url) {
            Ok(parsed) => self.fetch_url(&parsed).await,
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    pub async fn fetch_url(&self, url: &Url) -> FetchOutcome {
        let outcome = match self.try_fetch(url).await {
            Ok(outcome) => outcome,
            Err(e) => FetchOutcome::Failed(e),
        };
        log_outcome(url, &outcome);
        outcome
    }

    async fn try_fetch(&self, url: &Url) -> Result<FetchOutcome, FetchError> {
        if !is_http(url) {
            return Err(invalid_scheme(url));
        }

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = content_type_of(response.headers());
        if !is_image_content_type(content_type.as_deref()) {
            return Ok(FetchOutcome::Skipped(SkipReason::NotAnImage { content_type }));
        }

        let body = response.bytes().await?;
        self.store(url, content_type.as_deref(), &body).await
    }

    /// Saves bytes that were already downloaded (e.g. a seed URL that turned
    /// out to be an image). Applies the same naming and duplicate rules as
    /// `fetch`.
    pub async fn store(
        &self,
        url: &Url,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<FetchOutcome, FetchError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| FetchError::io(&self.output_dir, e))?;

        let path = self.output_dir.join(derive_filename(url, content_type));

        let _guard = self.write_lock.lock().await;

        let existing = tokio::fs::read(&path).await;
        let replaced = match existing {
            Ok(existing) if existing == body => {
                return Ok(FetchOutcome::Skipped(SkipReason::Duplicate { path }));
            }
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(FetchError::io(path, e)),
        };

        tokio::fs::write(&path, body)
            .await
            .map_err(|e| FetchError::io(&path, e))?;

        Ok(FetchOutcome::Saved(SavedImage {
            path,
            bytes: body.len(),
            replaced,
        }))
    }
}

/// Parses a user-supplied URL and rejects anything that is not http(s)
pub fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !is_http(&url) {
        return Err(invalid_scheme(&url));
    }
    Ok(url)
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn invalid_scheme(url: &Url) -> FetchError {
    FetchError::InvalidUrl {
        url: url.to_string(),
        reason: format!("unsupported scheme '{}'", url.scheme()),
    }
}

pub(crate) fn content_type_of(headers: &reqwest::header::HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Plain substring check, so "image/png" and "Image/PNG" style variants
/// both pass once lowercased
pub(crate) fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.to_ascii_lowercase().contains("image"))
        .unwrap_or(false)
}

pub(crate) fn log_outcome(url: &Url, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Saved(saved) if saved.replaced => warn!(
            url = %url,
            path = %saved.path.display(),
            "replaced existing file with different content"
        ),
        FetchOutcome::Saved(saved) => info!(
            url = %url,
            path = %saved.path.display(),
            bytes = saved.bytes,
            "saved image"
        ),
        FetchOutcome::Skipped(SkipReason::Duplicate { path }) => {
            info!(url = %url, path = %path.display(), "skipped duplicate image")
        }
        FetchOutcome::Skipped(SkipReason::NotAnImage { content_type }) => debug!(
            url = %url,
            content_type = content_type.as_deref().unwrap_or("<none>"),
            "skipped non-image response"
        ),
        FetchOutcome::Failed(e) => warn!(url = %url, error = %e, "image fetch failed"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return FetchOutcome instead of Result?
//    - A skip is not an error, and an error is not fatal
//    - One enum with three variants says exactly that, and `match` makes
//      the caller handle all three
//
// 2. What is tokio::sync::Mutex<()>?
//    - A lock that protects no data, only a section of code
//    - Holding `_guard` means no other download can be between
//      "read the old file" and "write the new one" at the same time
//    - The guard is released when it goes out of scope
//
// 3. Why compare bytes instead of hashes?
//    - We already have both files in memory; comparing them is exact and
//      needs no extra crate
// -----------------------------------------------------------------------------
