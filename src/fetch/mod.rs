// src/fetch/mod.rs
// =============================================================================
// This module downloads images and stores them on disk.
//
// Submodules:
// - image: The ImageFetcher (GET, content-type gate, duplicate check, write)
// - filename: How a URL becomes a file name
// - error: What can go wrong
// =============================================================================

mod error;
mod filename;
mod image;

pub use error::FetchError;
pub use image::{parse_http_url, FetchOutcome, ImageFetcher, SavedImage, SkipReason};

pub(crate) use image::{content_type_of, is_image_content_type, log_outcome};
