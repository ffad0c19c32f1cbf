// src/fetch/filename.rs
// =============================================================================
// Works out the name an image is saved under.
//
// Rules:
// 1. If the URL path ends in a file name, use it ("/a/b/cat.jpg" -> "cat.jpg")
// 2. Otherwise make one up from an MD5 of the URL:
//    "downloaded_<first 10 hex chars>.<ext>"
//    where <ext> comes from the Content-Type subtype ("image/png" -> "png")
//    and falls back to "jpg"
//
// The hash only depends on the URL, so the same URL always maps to the
// same file. That is what makes the duplicate check work across runs.
// =============================================================================

use md5::{Digest, Md5};
use url::Url;

const HASH_PREFIX_LEN: usize = 10;
const DEFAULT_EXTENSION: &str = "jpg";

/// Computes the on-disk file name for an image URL.
pub fn derive_filename(url: &Url, content_type: Option<&str>) -> String {
    if let Some(name) = path_basename(url) {
        return name.to_string();
    }

    let digest = hex::encode(Md5::digest(url.as_str().as_bytes()));
    format!(
        "downloaded_{}.{}",
        &digest[..HASH_PREFIX_LEN],
        extension_for(content_type)
    )
}

// Last path segment, if it is non-empty
// Query strings and fragments are not part of path(), so they never leak
// into the file name
fn path_basename(url: &Url) -> Option<&str> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
}

/// File extension for a Content-Type value.
///
/// "image/jpeg" -> "jpeg", "image/svg+xml; charset=utf-8" -> "svg",
/// missing or malformed -> "jpg"
///
/// The header comes from the server, so anything other than plain ASCII
/// letters and digits (a `/`, `..`, spaces) is rejected and "jpg" used instead.
pub fn extension_for(content_type: Option<&str>) -> &str {
    content_type
        .and_then(|value| value.split(';').next())
        .and_then(|mime| mime.split_once('/'))
        .map(|(_, subtype)| subtype.split('+').next().unwrap_or(subtype).trim())
        .filter(|subtype| is_safe_extension(subtype))
        .unwrap_or(DEFAULT_EXTENSION)
}

fn is_safe_extension(subtype: &str) -> bool {
    !subtype.is_empty() && subtype.bytes().all(|b| b.is_ascii_alphanumeric())
}
