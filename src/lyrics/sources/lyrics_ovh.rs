//! lyrics.ovh client
//!
//! Lookup by artist and title: `GET /v1/{artist}/{title}` answers
//! `{"lyrics": "..."}`.

use super::{LyricSource, Query};
use crate::lyrics::error::SourceError;
use crate::lyrics::http::HttpClient;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LyricsOvhResponse {
    lyrics: Option<String>,
}

pub struct LyricsOvhSource {
    http: Arc<dyn HttpClient>,
    base_url: String,
    default_artist: String,
}

impl LyricsOvhSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.lyrics.ovh";
    pub const DEFAULT_ARTIST: &'static str = "Various Artists";

    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL, Self::DEFAULT_ARTIST)
    }

    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: &str, default_artist: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_artist: default_artist.to_string(),
        }
    }

    fn url(&self, query: &Query) -> String {
        let artist = query.artist.as_deref().unwrap_or(&self.default_artist);
        format!(
            "{}/v1/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(&query.song_name)
        )
    }
}

impl LyricSource for LyricsOvhSource {
    fn name(&self) -> &str {
        "lyrics_ovh"
    }

    fn fetch(&self, query: &Query) -> Result<Option<String>, SourceError> {
        let response = self.http.get(&self.url(query))?;

        if !response.is_success() {
            tracing::debug!(status = response.status, "lyrics.ovh has no entry");
            return Ok(None);
        }

        let parsed: LyricsOvhResponse = serde_json::from_str(&response.body)?;
        Ok(parsed.lyrics)
    }
}
