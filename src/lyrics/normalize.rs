//! Title normalization
//!
//! Turns a scraped video title like `【MV】孤勇者 - 官方高清版_Bilibili` into the
//! bare song name used as the lookup key.

use once_cell::sync::Lazy;
use regex::Regex;

/// Decoration patterns, applied in order. Each pass runs on the output of the
/// previous one, so a bracketed annotation is gone before token removal runs.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Bracketed annotations: 【MV】, [Official], (Live), （完整版）
        Regex::new(r"【.*?】").unwrap(),
        Regex::new(r"\[.*?\]").unwrap(),
        Regex::new(r"\(.*?\)").unwrap(),
        Regex::new(r"（.*?）").unwrap(),
        // Trailing qualifiers: everything from the first separator on
        Regex::new(r"\|.*").unwrap(),
        Regex::new(r"-.*").unwrap(),
        Regex::new(r"_.*").unwrap(),
        // Platform branding
        Regex::new(r"(?i)bilibili").unwrap(),
        // Quality/version keywords and whatever follows them
        Regex::new(r"高清.*").unwrap(),
        Regex::new(r"官方.*").unwrap(),
        Regex::new(r"MV.*").unwrap(),
        Regex::new(r"音源.*").unwrap(),
        Regex::new(r"完整版.*").unwrap(),
        Regex::new(r"Full.*").unwrap(),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip decorations from a raw title.
///
/// Never returns an empty string for a non-empty input: when stripping would
/// leave nothing, `raw` comes back unchanged.
pub fn normalize(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for pattern in TITLE_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    let cleaned = WHITESPACE.replace_all(&cleaned, " ").trim().to_string();

    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned
    }
}
