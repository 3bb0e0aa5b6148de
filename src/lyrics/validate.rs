//! Acceptance gate for provider responses

/// Substrings that mark a provider's "no lyrics" or error page. Compared
/// against the lowercased body, so entries are lowercase.
const FAILURE_MARKERS: &[&str] = &["暂无歌词", "无歌词", "未找到", "error", "not found"];

/// Bodies must be longer than this many characters after trimming.
const MIN_CHARS: usize = 10;

/// Whether a candidate lyric body is acceptable to hand back to the caller.
///
/// The marker scan covers the whole body, so a genuine lyric that happens to
/// contain "error" is rejected too.
pub fn is_valid(doc: Option<&str>) -> bool {
    let Some(doc) = doc else {
        return false;
    };
    if doc.is_empty() {
        return false;
    }

    let lowered = doc.to_lowercase();
    if FAILURE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return false;
    }

    doc.trim().chars().count() > MIN_CHARS
}
