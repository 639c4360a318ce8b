// Chunk: docs/chunks/launch_core - file:// URI decoding
//! Conversion of `file://` URIs into filesystem paths.
//!
//! File managers hand over locations as URIs (`file:///home/me/My%20Notes`),
//! both on the command line and in drag-and-drop payloads. Decoding failure is
//! never fatal: callers get `None` and move on to their fallback.

use std::path::PathBuf;

use url::Url;

/// The only URI scheme that is decoded.
pub const FILE_SCHEME: &str = "file://";

/// Resolves a command-line or drop value to a path.
///
/// Values starting with `file://` are decoded; anything else is taken as a
/// plain path and returned unchanged.
pub fn resolve_path(value: &str) -> Option<PathBuf> {
    if value.starts_with(FILE_SCHEME) {
        file_uri_to_path(value)
    } else {
        Some(PathBuf::from(value))
    }
}

/// Decodes a `file://` URI (percent-decoding included).
///
/// Returns `None` for malformed URIs, other schemes, and URIs naming a remote
/// host. An empty host and `localhost` are accepted.
pub fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    let url = match Url::parse(uri) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("cannot parse URI {:?}: {}", uri, e);
            return None;
        }
    };
    if url.scheme() != "file" {
        return None;
    }
    match url.to_file_path() {
        Ok(path) => Some(path),
        Err(()) => {
            log::debug!("URI {:?} does not name a local path", uri);
            None
        }
    }
}
