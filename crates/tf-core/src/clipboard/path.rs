use std::path::{Path, PathBuf};

use url::Url;

const FILE_SCHEME: &str = "file://";

/// Turn a clipboard file reference into an absolute local path.
///
/// `file://` URIs are parsed and percent-decoded. Relative paths are joined
/// onto `cwd` when one is given.
pub fn resolve_clipboard_path(raw: &str, cwd: Option<&Path>) -> PathBuf {
    let trimmed = raw.trim();
    let path = if starts_with_file_scheme(trimmed) {
        decode_file_uri(trimmed)
    } else {
        PathBuf::from(trimmed)
    };

    if path.is_absolute() {
        return path;
    }
    match cwd {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn starts_with_file_scheme(value: &str) -> bool {
    value
        .get(..FILE_SCHEME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(FILE_SCHEME))
}

fn decode_file_uri(uri: &str) -> PathBuf {
    if let Ok(url) = Url::parse(uri) {
        if let Ok(path) = url.to_file_path() {
            return path;
        }
    }
    // Not a well-formed file URI, keep whatever follows the scheme.
    PathBuf::from(&uri[FILE_SCHEME.len()..])
}
