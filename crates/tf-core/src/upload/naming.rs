//! File naming rules for uploads.
//!
//! The upload service is picky about names, and clipboard temp files often
//! arrive without an extension (`Image (1920×1080)`), so names go through
//! extension inference and then sanitization.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static MULTIPLICATION_SIGNS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[×✕✖]").expect("multiplication sign pattern"));
static BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\[\]{}]").expect("bracket pattern"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("unsafe char pattern"));
static UNDERSCORE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("underscore pattern"));

const FALLBACK_STEM: &str = "upload";

/// Image formats recognised from their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => ".png",
            ImageKind::Jpeg => ".jpg",
        }
    }

    /// Whether `name` already carries an extension for this format.
    pub fn matches_name(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        match self {
            ImageKind::Png => lower.ends_with(".png"),
            ImageKind::Jpeg => lower.ends_with(".jpg") || lower.ends_with(".jpeg"),
        }
    }
}

/// Detect PNG (`89 50 4E 47`) or JPEG (`FF D8 FF`) content.
pub fn sniff_image_kind(bytes: &[u8]) -> Option<ImageKind> {
    match bytes {
        [0x89, 0x50, 0x4E, 0x47, ..] => Some(ImageKind::Png),
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageKind::Jpeg),
        _ => None,
    }
}

/// Names the OS gives to images pasted from the clipboard, e.g. `Image (1920×1080)`.
pub fn is_clipboard_placeholder(name: &str) -> bool {
    name.starts_with("Image") && name.contains('(')
}

fn has_extension(name: &str) -> bool {
    Path::new(name).extension().is_some()
}

/// Make `name` safe for the upload service.
///
/// Multiplication signs become `x`, brackets are dropped, whitespace runs
/// become one underscore, anything outside `[A-Za-z0-9._-]` is removed, and
/// underscores are collapsed and trimmed.
pub fn sanitize_file_name(name: &str) -> String {
    let original_starts_with_dot = name.starts_with('.');

    let name = MULTIPLICATION_SIGNS.replace_all(name, "x");
    let name = BRACKETS.replace_all(&name, "");
    let name = WHITESPACE_RUNS.replace_all(&name, "_");
    let name = UNSAFE_CHARS.replace_all(&name, "");
    let name = UNDERSCORE_RUNS.replace_all(&name, "_");
    let name = name.trim_matches('_');

    if name.chars().all(|c| c == '.') {
        return FALLBACK_STEM.to_string();
    }
    // Everything before the extension was stripped, e.g. "图片.png".
    if name.starts_with('.') && !original_starts_with_dot {
        return format!("{FALLBACK_STEM}{name}");
    }
    name.to_string()
}

/// Final upload name for a file taken from the clipboard.
///
/// Extensionless files and clipboard placeholders get an extension inferred
/// from their content (`.png` when nothing matches and there was none).
pub fn upload_file_name(original: &str, bytes: &[u8]) -> String {
    let has_ext = has_extension(original);
    let mut name = original.to_string();

    if !has_ext || is_clipboard_placeholder(original) {
        match sniff_image_kind(bytes) {
            Some(kind) => {
                if !kind.matches_name(&name) {
                    name.push_str(kind.extension());
                }
            }
            None if !has_ext => name.push_str(ImageKind::Png.extension()),
            None => {}
        }
    }

    sanitize_file_name(&name)
}

/// Name for an uploaded text snippet.
pub fn snippet_file_name(unix_ms: i64) -> String {
    format!("snippet_{unix_ms}.txt")
}
