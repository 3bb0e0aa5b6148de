//! Lyric sources
//!
//! Each source turns a [`Query`] into optional raw lyric text. The chain tries
//! them in configured order.

pub mod geci;
pub mod lyrics_ovh;
pub mod placeholder;

pub use geci::GeciSource;
pub use lyrics_ovh::LyricsOvhSource;
pub use placeholder::PlaceholderSource;

use crate::lyrics::error::SourceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup key handed to every source. Built once per lookup from the
/// normalized title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub song_name: String,
    pub artist: Option<String>,
}

impl Query {
    pub fn new(song_name: impl Into<String>, artist: Option<&str>) -> Self {
        Self {
            song_name: song_name.into(),
            artist: artist
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        }
    }
}

pub trait LyricSource: Send + Sync {
    /// Identifier used in logs and in [`Origin::Source`](crate::lyrics::Origin).
    fn name(&self) -> &str;

    /// `Ok(None)` means the source answered but has nothing for this query.
    fn fetch(&self, query: &Query) -> Result<Option<String>, SourceError>;
}

/// Built-in sources, as named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    LyricsOvh,
    Geci,
    Placeholder,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LyricsOvh => "lyrics_ovh",
            Self::Geci => "geci",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_drops_blank_artist() {
        assert_eq!(Query::new("晴天", Some("  ")).artist, None);
        assert_eq!(Query::new("晴天", None).artist, None);
        assert_eq!(
            Query::new("晴天", Some(" 周杰伦 ")).artist.as_deref(),
            Some("周杰伦")
        );
    }

    #[test]
    fn test_kind_names_match_serde() {
        for kind in [SourceKind::LyricsOvh, SourceKind::Geci, SourceKind::Placeholder] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
