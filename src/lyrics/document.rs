//! Lyric documents and their timed-line reading
//!
//! A document body is either provider text (plain or LRC-like) or one of the
//! synthesized documents. Lines look like:
//! [00:12.34] Hello world
//! [00:15.00][01:02.50] Repeated chorus

use std::fmt;

/// Where a document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Returned by the named source.
    Source(String),
    /// Synthesized because no source produced an acceptable lyric.
    Fallback,
}

/// The result of one lookup. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricDocument {
    body: String,
    origin: Origin,
}

/// One display line with its (cosmetic) start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    /// Milliseconds from start; 0 for untimed lines
    pub time_ms: u64,
    pub text: String,
}

impl LyricDocument {
    pub fn from_source(name: impl Into<String>, body: String) -> Self {
        Self {
            body,
            origin: Origin::Source(name.into()),
        }
    }

    pub fn fallback(body: String) -> Self {
        Self {
            body,
            origin: Origin::Fallback,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Split the body into display lines ordered by timestamp.
    ///
    /// Metadata tags such as `[ti:Title]` are dropped. Lines without a
    /// timestamp keep their position at time 0; a line carrying several
    /// timestamps appears once per timestamp.
    pub fn timed_lines(&self) -> Vec<TimedLine> {
        let mut lines = Vec::new();

        for raw in self.body.lines() {
            let line = raw.trim();
            if line.is_empty() || is_metadata_tag(line) {
                continue;
            }

            let (stamps, text) = split_timestamps(line);
            if stamps.is_empty() {
                lines.push(TimedLine {
                    time_ms: 0,
                    text: line.to_string(),
                });
            } else {
                lines.extend(stamps.into_iter().map(|time_ms| TimedLine {
                    time_ms,
                    text: text.to_string(),
                }));
            }
        }

        // stable: untimed header lines stay ahead of [00:00.00]
        lines.sort_by_key(|l| l.time_ms);
        lines
    }
}

impl fmt::Display for LyricDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl From<LyricDocument> for String {
    fn from(doc: LyricDocument) -> Self {
        doc.body
    }
}

impl TimedLine {
    /// `mm:ss.cc` rendering of the start time.
    pub fn stamp(&self) -> String {
        let centis = self.time_ms / 10;
        format!(
            "{:02}:{:02}.{:02}",
            centis / 6000,
            (centis / 100) % 60,
            centis % 100
        )
    }
}

/// `[ar:Artist]`-style tag: short alphabetic key before the colon.
fn is_metadata_tag(line: &str) -> bool {
    let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
        return false;
    };
    match inner.split_once(':') {
        Some((key, _)) => {
            !key.is_empty() && key.len() <= 3 && key.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Peel leading `[mm:ss.cc]` groups off a line.
fn split_timestamps(line: &str) -> (Vec<u64>, &str) {
    let mut stamps = Vec::new();
    let mut rest = line;

    while let Some(after) = rest.strip_prefix('[') {
        let Some(end) = after.find(']') else {
            break;
        };
        let Some(ms) = parse_timestamp(&after[..end]) else {
            break;
        };
        stamps.push(ms);
        rest = &after[end + 1..];
    }

    (stamps, rest.trim())
}

/// `mm:ss`, `mm:ss.cc`, `mm:ss.mmm` or `mm:ss:cc` to milliseconds.
fn parse_timestamp(s: &str) -> Option<u64> {
    let parts: Vec<&str> = s.split([':', '.']).collect();
    let (min, sec, frac) = match parts.as_slice() {
        [min, sec] => (*min, *sec, None),
        [min, sec, frac] => (*min, *sec, Some(*frac)),
        _ => return None,
    };

    let min: u64 = min.parse().ok()?;
    let sec: u64 = sec.parse().ok()?;
    let frac_ms = match frac {
        None => 0,
        Some(f) => match f.len() {
            1 => f.parse::<u64>().ok()? * 100,
            2 => f.parse::<u64>().ok()? * 10,
            3 => f.parse::<u64>().ok()?,
            _ => return None,
        },
    };

    // out-of-range stamps make the line untimed
    min.checked_mul(60_000)?
        .checked_add(sec.checked_mul(1000)?)?
        .checked_add(frac_ms)
}
